//! Batch codec over bit and symbol streams

mod output;
mod vector;

pub use output::{DemodOutput, Demodulated};
pub use vector::{bits2symbols, symbols2bits, vec_demod, vec_mod};
