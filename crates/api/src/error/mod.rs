//! Error handling for the homomorphic encryption ecosystem

pub mod types;

// Re-export the primary error type and result
pub use types::{Error, Result};

impl From<std::array::TryFromSliceError> for Error {
    fn from(_: std::array::TryFromSliceError) -> Self {
        Self::InvalidLength {
            context: "array conversion",
            expected: 0, // Unknown expected size
            actual: 0,   // Unknown actual size
        }
    }
}

// Specialized result types for different operations
pub type KeyResult<T> = Result<T>;
pub type CipherResult<T> = Result<T>;
