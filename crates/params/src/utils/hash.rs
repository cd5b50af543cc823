//! Constants for hash functions

/// Output size of SHA-256 in bytes
pub const SHA256_OUTPUT_SIZE: usize = 32;

/// Bytes of a digest read as a derived word (big-endian `u64`)
pub const DERIVED_WORD_BYTES: usize = 8;

/// Bytes of a digest read as a message-derived word (big-endian `u32`)
pub const MESSAGE_WORD_BYTES: usize = 4;

/// Width of the counter appended in counter-mode derivation (big-endian `u32`)
pub const COUNTER_BYTES: usize = 4;
