//! Batch modulation and symbol index conversion
//!
//! Streams are split into consecutive groups of four bits; each group is
//! mapped independently and results keep input order. With the `parallel`
//! feature the per-group map runs on rayon and yields the same output.

use num_complex::Complex64;
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::{debug, trace};

use crate::bits::{bi2dec, check_stream, dec2bi4, quads, BitQuad, BITS_PER_SYMBOL};
use crate::constellations::{demodulate, map_quad};
use crate::error::{Error, Result};

use super::output::{DemodOutput, Demodulated};

/// Modulate a bit stream, one symbol per four bits
///
/// The stream length must be a multiple of four and every value 0 or 1.
/// An empty stream gives an empty symbol stream.
pub fn vec_mod(bits: &[u8]) -> Result<Vec<Complex64>> {
    check_stream(bits).map_err(rejected)?;

    let symbols = modulate_groups(bits);
    trace!(bits = bits.len(), symbols = symbols.len(), "modulated bit stream");
    Ok(symbols)
}

/// Demodulate a symbol stream
///
/// Every symbol is sliced independently. `output` picks whether the
/// concatenated bits, the symbol indices, or both are returned.
pub fn vec_demod(symbols: &[Complex64], output: DemodOutput) -> Demodulated {
    let decided = demodulate_all(symbols);
    trace!(symbols = symbols.len(), %output, "demodulated symbol stream");

    match output {
        DemodOutput::Binary => Demodulated::Binary(flatten(&decided)),
        DemodOutput::Integer => Demodulated::Integer(decided.iter().map(|q| bi2dec(*q)).collect()),
        DemodOutput::Both => Demodulated::Both {
            bits: flatten(&decided),
            indices: decided.iter().map(|q| bi2dec(*q)).collect(),
        },
    }
}

/// Symbol indices → bit stream, always four bits per index
pub fn symbols2bits(indices: &[u8]) -> Result<Vec<u8>> {
    let mut bits = Vec::with_capacity(indices.len() * BITS_PER_SYMBOL);
    for &n in indices {
        let quad = dec2bi4(u32::from(n)).map_err(rejected)?;
        bits.extend_from_slice(&quad);
    }
    Ok(bits)
}

/// Bit stream → symbol indices
pub fn bits2symbols(bits: &[u8]) -> Result<Vec<u8>> {
    check_stream(bits).map_err(rejected)?;
    Ok(quads(bits).map(bi2dec).collect())
}

fn rejected(e: Error) -> Error {
    debug!(error = %e, "rejected batch input");
    e
}

fn flatten(decided: &[BitQuad]) -> Vec<u8> {
    decided.iter().flatten().copied().collect()
}

#[cfg(not(feature = "parallel"))]
fn modulate_groups(bits: &[u8]) -> Vec<Complex64> {
    quads(bits).map(map_quad).collect()
}

#[cfg(feature = "parallel")]
fn modulate_groups(bits: &[u8]) -> Vec<Complex64> {
    bits.par_chunks_exact(BITS_PER_SYMBOL)
        .map(|c| map_quad([c[0], c[1], c[2], c[3]]))
        .collect()
}

#[cfg(not(feature = "parallel"))]
fn demodulate_all(symbols: &[Complex64]) -> Vec<BitQuad> {
    symbols.iter().map(|&s| demodulate(s)).collect()
}

#[cfg(feature = "parallel")]
fn demodulate_all(symbols: &[Complex64]) -> Vec<BitQuad> {
    symbols.par_iter().map(|&s| demodulate(s)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constellations::modulate;

    #[test]
    fn test_vec_mod_matches_scalar() {
        let bits = [1, 0, 1, 0, 0, 1, 1, 1];
        let symbols = vec_mod(&bits).unwrap();
        assert_eq!(symbols.len(), 2);
        assert_eq!(symbols[0], modulate(&bits[..4]).unwrap());
        assert_eq!(symbols[1], modulate(&bits[4..]).unwrap());
    }

    #[test]
    fn test_batch_roundtrip() {
        let bits = [1, 0, 1, 0, 0, 1, 1, 1];
        let symbols = vec_mod(&bits).unwrap();
        assert_eq!(
            vec_demod(&symbols, DemodOutput::Binary),
            Demodulated::Binary(bits.to_vec())
        );
    }

    #[test]
    fn test_vec_mod_empty() {
        assert_eq!(vec_mod(&[]).unwrap(), Vec::<Complex64>::new());
        assert_eq!(
            vec_demod(&[], DemodOutput::Both),
            Demodulated::Both {
                bits: vec![],
                indices: vec![]
            }
        );
    }

    #[test]
    fn test_vec_mod_rejects_partial_group() {
        assert_eq!(
            vec_mod(&[1, 0, 1, 0, 1, 1]),
            Err(Error::UngroupedStream { len: 6 })
        );
        assert_eq!(
            vec_mod(&[1, 0, 1, 0, 1, 1, 5, 0]),
            Err(Error::InvalidBit { position: 6, value: 5 })
        );
    }

    #[test]
    fn test_vec_demod_modes() {
        let symbols = vec_mod(&[1, 0, 0, 0, 0, 1, 1, 1]).unwrap();

        assert_eq!(
            vec_demod(&symbols, DemodOutput::Integer),
            Demodulated::Integer(vec![8, 7])
        );
        assert_eq!(
            vec_demod(&symbols, DemodOutput::Binary),
            Demodulated::Binary(vec![1, 0, 0, 0, 0, 1, 1, 1])
        );
        assert_eq!(
            vec_demod(&symbols, DemodOutput::from_mode("anything else")),
            Demodulated::Both {
                bits: vec![1, 0, 0, 0, 0, 1, 1, 1],
                indices: vec![8, 7],
            }
        );
    }

    #[test]
    fn test_index_conversion() {
        assert_eq!(bits2symbols(&[1, 0, 0, 0]).unwrap(), vec![8]);
        assert_eq!(symbols2bits(&[8]).unwrap(), vec![1, 0, 0, 0]);
    }

    #[test]
    fn test_symbols2bits_pads_small_indices() {
        assert_eq!(
            symbols2bits(&[0, 1, 15]).unwrap(),
            vec![0, 0, 0, 0, 0, 0, 0, 1, 1, 1, 1, 1]
        );
        let all: Vec<u8> = (0..16).collect();
        assert_eq!(bits2symbols(&symbols2bits(&all).unwrap()).unwrap(), all);
    }

    #[test]
    fn test_index_conversion_rejects() {
        assert_eq!(symbols2bits(&[3, 16]), Err(Error::IndexOutOfRange(16)));
        assert_eq!(
            bits2symbols(&[1, 0, 0]),
            Err(Error::UngroupedStream { len: 3 })
        );
    }

    #[test]
    fn test_integer_output_matches_index_conversion() {
        let bits: Vec<u8> = (0..64).map(|k| ((k * 7 + 3) % 5 % 2) as u8).collect();
        let symbols = vec_mod(&bits).unwrap();
        let out = vec_demod(&symbols, DemodOutput::Both);
        assert_eq!(out.bits(), Some(bits.as_slice()));
        assert_eq!(out.indices().unwrap(), bits2symbols(&bits).unwrap().as_slice());
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_parallel_matches_sequential() {
        let bits: Vec<u8> = (0..4096).map(|k| ((k * 31 + 7) % 3 % 2) as u8).collect();
        let sequential: Vec<Complex64> = quads(&bits).map(map_quad).collect();
        let symbols = vec_mod(&bits).unwrap();
        assert_eq!(symbols, sequential);

        let decided: Vec<BitQuad> = symbols.iter().map(|&s| demodulate(s)).collect();
        assert_eq!(demodulate_all(&symbols), decided);
    }
}
