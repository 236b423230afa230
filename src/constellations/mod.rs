//! Constellation implementations
//!
//! - 16-QAM (4 bits/symbol), Gray coded on a square grid

mod qam16;

pub use qam16::{demodulate, modulate, Qam16};
pub(crate) use qam16::map_quad;
