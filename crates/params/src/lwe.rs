//! Constants for the Deoxys LWE scheme

/// Ciphertext modulus Q
pub const DEOXYS_Q: u64 = 1 << 60;

/// Plaintext modulus T
pub const DEOXYS_T: u64 = 1 << 16;

/// Lattice dimension N
pub const DEOXYS_N: usize = 1024;

/// Seed used by the command line surface and demonstrations when none is given
pub const FROZEN_SEED: &[u8] = b"AxiomHive_Frozen_Seed_v1.0";

/// Error terms are sampled from `[-NOISE_BOUND, NOISE_BOUND)`
pub const NOISE_BOUND: i64 = 10;

/// The encryption scalar r is sampled from `[0, R_BOUND)`
pub const R_BOUND: u64 = 100;

/// Upper bound (exclusive) on Q so two residues can be added without overflow
pub const MAX_MODULUS: u64 = 1 << 63;

/// Domain-separation labels
pub mod labels {
    /// Secret key bits
    pub const SECRET_KEY: &[u8] = b"sk";
    /// Public vector A
    pub const PUBLIC_A: &[u8] = b"pk_a";
    /// Key generation error term e
    pub const KEY_ERROR: &[u8] = b"error";
    /// Encryption scalar r
    pub const ENC_R: &[u8] = b"r";
    /// Encryption error on u
    pub const ENC_E1: &[u8] = b"e1";
    /// Encryption error on v
    pub const ENC_E2: &[u8] = b"e2";
}

/// Structure containing an LWE parameter set
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LweParameterSet {
    /// Human readable name
    pub name: &'static str,

    /// Ciphertext modulus
    pub q: u64,

    /// Plaintext modulus
    pub t: u64,

    /// Lattice dimension
    pub n: usize,
}

impl LweParameterSet {
    /// Scaling factor Δ = Q div T
    pub const fn delta(&self) -> u64 {
        self.q / self.t
    }

    /// Noise strictly below this magnitude always rounds to the right plaintext
    pub const fn noise_budget(&self) -> u64 {
        self.delta() / 2
    }

    /// Check the structural requirements every parameter set must meet.
    pub const fn validate(&self) -> Result<(), &'static str> {
        if self.n == 0 {
            return Err("lattice dimension must be at least 1");
        }
        if self.t < 2 {
            return Err("plaintext modulus must be at least 2");
        }
        if self.q <= self.t {
            return Err("ciphertext modulus must exceed plaintext modulus");
        }
        if self.q >= MAX_MODULUS {
            return Err("ciphertext modulus must be below 2^63");
        }
        if self.delta() < 2 {
            return Err("scaling factor Q div T must be at least 2");
        }
        Ok(())
    }
}

/// Deoxys-1024 parameters
pub const DEOXYS_1024: LweParameterSet = LweParameterSet {
    name: "Deoxys-LWE-1024",
    q: DEOXYS_Q,
    t: DEOXYS_T,
    n: DEOXYS_N,
};

/// Compile-time view of a parameter set, used to specialize the scheme.
pub trait LweParams: 'static + Send + Sync {
    /// Scheme name reported by the API
    const NAME: &'static str;
    /// Ciphertext modulus
    const Q: u64;
    /// Plaintext modulus
    const T: u64;
    /// Lattice dimension
    const N: usize;
    /// Scaling factor Δ = Q div T
    const DELTA: u64 = Self::Q / Self::T;

    /// The runtime description of this parameter set
    fn parameter_set() -> LweParameterSet {
        LweParameterSet {
            name: Self::NAME,
            q: Self::Q,
            t: Self::T,
            n: Self::N,
        }
    }
}

/// Marker type for [`DEOXYS_1024`]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Deoxys1024Params;

impl LweParams for Deoxys1024Params {
    const NAME: &'static str = DEOXYS_1024.name;
    const Q: u64 = DEOXYS_1024.q;
    const T: u64 = DEOXYS_1024.t;
    const N: usize = DEOXYS_1024.n;
}
