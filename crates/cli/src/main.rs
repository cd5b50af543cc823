//! deoxys: encrypt and decrypt integers from the command line

use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::Parser;
use eyre::Result;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use deoxys_cli::runner::{self, Args};

fn init_tracing(verbose: u8) -> Result<()> {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                let _ = err.print();
                return ExitCode::SUCCESS;
            }
            _ => {
                eprintln!("Error: {}", runner::parse_error_message(&err));
                return ExitCode::FAILURE;
            }
        },
    };

    let result = init_tracing(args.verbose).and_then(|()| runner::run(&args));
    match result {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}
