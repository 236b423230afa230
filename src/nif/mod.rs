//! NIF interface for Elixir
//!
//! Exposes the codec to `Qam16.Native`. Symbols cross the boundary as
//! `{re, im}` float tuples, bits and indices as integer lists.

use num_complex::Complex64;
use rustler::{Encoder, Env, NifResult, Term};

use crate::error::Error;
use crate::modem::{DemodOutput, Demodulated};

fn term_error(e: Error) -> rustler::Error {
    rustler::Error::Term(Box::new(e.to_string()))
}

fn to_pair(z: Complex64) -> (f64, f64) {
    (z.re, z.im)
}

fn from_pair((re, im): (f64, f64)) -> Complex64 {
    Complex64::new(re, im)
}

// ============================================================================
// Scalar codec
// ============================================================================

/// Map four bits to a `{re, im}` constellation point
#[rustler::nif]
pub fn modulate(bits: Vec<u8>) -> NifResult<(f64, f64)> {
    crate::modulate(&bits).map(to_pair).map_err(term_error)
}

/// Hard-decision slice of one `{re, im}` sample
#[rustler::nif]
pub fn demodulate(symbol: (f64, f64)) -> Vec<u8> {
    crate::demodulate(from_pair(symbol)).to_vec()
}

// ============================================================================
// Batch codec
// ============================================================================

/// Modulate a bit list whose length is a multiple of 4
#[rustler::nif]
pub fn vec_mod(bits: Vec<u8>) -> NifResult<Vec<(f64, f64)>> {
    let symbols = crate::vec_mod(&bits).map_err(term_error)?;
    Ok(symbols.into_iter().map(to_pair).collect())
}

/// Demodulate a list of `{re, im}` samples
///
/// # Arguments
/// * `symbols` - Received samples
/// * `mode` - `"binary"`, `"integer"`; anything else returns `{bits, indices}`
#[rustler::nif]
pub fn vec_demod<'a>(env: Env<'a>, symbols: Vec<(f64, f64)>, mode: String) -> Term<'a> {
    let symbols: Vec<Complex64> = symbols.into_iter().map(from_pair).collect();

    match crate::vec_demod(&symbols, DemodOutput::from_mode(&mode)) {
        Demodulated::Binary(bits) => bits.encode(env),
        Demodulated::Integer(indices) => indices.encode(env),
        Demodulated::Both { bits, indices } => (bits, indices).encode(env),
    }
}

/// Symbol indices to a bit list, four bits each
#[rustler::nif]
pub fn symbols2bits(indices: Vec<u8>) -> NifResult<Vec<u8>> {
    crate::symbols2bits(&indices).map_err(term_error)
}

/// Bit list to symbol indices
#[rustler::nif]
pub fn bits2symbols(bits: Vec<u8>) -> NifResult<Vec<u8>> {
    crate::bits2symbols(&bits).map_err(term_error)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pair_conversion() {
        let z = Complex64::new(0.25, -0.75);
        assert_eq!(from_pair(to_pair(z)), z);
    }
}
