//! Codec error types

use thiserror::Error;

/// Result type for codec operations
pub type Result<T> = std::result::Result<T, Error>;

/// Input that cannot be mapped onto the 16-QAM alphabet
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A symbol payload was not exactly four bits long
    #[error("expected {expected} bits per symbol, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    /// A bit value other than 0 or 1
    #[error("bit {position} has value {value}, expected 0 or 1")]
    InvalidBit { position: usize, value: u8 },

    /// Bit stream cannot be split into whole symbols
    #[error("bit stream of length {len} is not a multiple of 4")]
    UngroupedStream { len: usize },

    /// Symbol index does not fit in four bits
    #[error("symbol index {0} out of range 0..=15")]
    IndexOutOfRange(u32),
}
