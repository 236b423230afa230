//! 16-QAM symbol codec
//!
//! Maps 4-bit groups to unit-energy Gray-coded 16-QAM points and back with
//! a hard-decision slicer. Batch helpers apply the scalar codec over streams
//! and convert between bit groups and symbol indices 0..=15. No channel,
//! coding, or synchronization lives here.
//!
//! # Example
//!
//! ```
//! use qam16::{vec_demod, vec_mod, DemodOutput, Demodulated};
//!
//! let bits = [1, 0, 0, 0, 0, 1, 1, 1];
//! let symbols = vec_mod(&bits).unwrap();
//! assert_eq!(
//!     vec_demod(&symbols, DemodOutput::Integer),
//!     Demodulated::Integer(vec![8, 7])
//! );
//! ```

pub mod bits;
pub mod constellations;
pub mod error;
pub mod modem;
pub mod traits;
#[cfg(feature = "nif")]
pub mod nif;
mod utils;

// Re-export core types for convenience
pub use bits::{bi2dec, dec2bi, dec2bi4, BitQuad, BITS_PER_SYMBOL};
pub use constellations::{demodulate, modulate, Qam16};
pub use error::{Error, Result};
pub use modem::{bits2symbols, symbols2bits, vec_demod, vec_mod, DemodOutput, Demodulated};
pub use num_complex::Complex64;
pub use traits::Constellation;

#[cfg(feature = "nif")]
rustler::init!("Elixir.Qam16.Native");
