//! Demodulator output selection

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Shape of the data returned by [`vec_demod`](super::vec_demod)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DemodOutput {
    /// Concatenated bit stream, four bits per symbol
    Binary,
    /// One symbol index 0..=15 per symbol
    Integer,
    /// Both of the above
    #[default]
    Both,
}

impl DemodOutput {
    /// Parse a mode name
    ///
    /// `"binary"` and `"integer"` select a single output. Every other string,
    /// `"both"` included, selects [`DemodOutput::Both`].
    pub fn from_mode(mode: &str) -> Self {
        match mode {
            "binary" => Self::Binary,
            "integer" => Self::Integer,
            "both" => Self::Both,
            other => {
                tracing::debug!(mode = other, "unrecognized demod output mode, returning both");
                Self::Both
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Binary => "binary",
            Self::Integer => "integer",
            Self::Both => "both",
        }
    }
}

impl FromStr for DemodOutput {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_mode(s))
    }
}

impl fmt::Display for DemodOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of a batch demodulation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Demodulated {
    Binary(Vec<u8>),
    Integer(Vec<u8>),
    Both { bits: Vec<u8>, indices: Vec<u8> },
}

impl Demodulated {
    /// Bit stream, if it was requested
    pub fn bits(&self) -> Option<&[u8]> {
        match self {
            Self::Binary(bits) | Self::Both { bits, .. } => Some(bits.as_slice()),
            Self::Integer(_) => None,
        }
    }

    /// Symbol indices, if they were requested
    pub fn indices(&self) -> Option<&[u8]> {
        match self {
            Self::Integer(indices) | Self::Both { indices, .. } => Some(indices.as_slice()),
            Self::Binary(_) => None,
        }
    }
}
