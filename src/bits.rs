//! Bit quadruples and integer symbol indices
//!
//! A 16-QAM symbol carries four bits. These helpers validate raw bit slices
//! and convert between quadruples and the plain binary index 0..=15
//! (bit 0 is the most significant). The binary index is independent of the
//! Gray mapping used on the constellation.

use crate::error::{Error, Result};

/// Bits carried by one 16-QAM symbol
pub const BITS_PER_SYMBOL: usize = 4;

/// One symbol's payload, most significant bit first
pub type BitQuad = [u8; BITS_PER_SYMBOL];

/// Validate a slice as a bit quadruple
pub fn check_quad(bits: &[u8]) -> Result<BitQuad> {
    let quad = BitQuad::try_from(bits).map_err(|_| Error::InvalidLength {
        expected: BITS_PER_SYMBOL,
        actual: bits.len(),
    })?;
    check_bits(&quad)?;
    Ok(quad)
}

/// Validate a bit stream: whole symbols only, every value 0 or 1
pub fn check_stream(bits: &[u8]) -> Result<()> {
    if bits.len() % BITS_PER_SYMBOL != 0 {
        return Err(Error::UngroupedStream { len: bits.len() });
    }
    check_bits(bits)
}

fn check_bits(bits: &[u8]) -> Result<()> {
    match bits.iter().enumerate().find(|(_, b)| **b > 1) {
        Some((position, &value)) => Err(Error::InvalidBit { position, value }),
        None => Ok(()),
    }
}

/// Split a validated stream into quadruples
pub(crate) fn quads(bits: &[u8]) -> impl Iterator<Item = BitQuad> + '_ {
    bits.chunks_exact(BITS_PER_SYMBOL)
        .map(|c| [c[0], c[1], c[2], c[3]])
}

/// Quadruple → integer index (`8*b0 + 4*b1 + 2*b2 + b3`)
///
/// Only the low bit of each element is read.
#[inline]
pub fn bi2dec(code: BitQuad) -> u8 {
    code.iter().fold(0, |acc, &b| (acc << 1) | (b & 1))
}

/// Integer → binary digits, most significant first, without padding
///
/// `0 → [0]`, `5 → [1, 0, 1]`. The width varies with magnitude, so the
/// result cannot be re-grouped into symbols directly; use [`dec2bi4`] for
/// symbol indices.
pub fn dec2bi(n: u32) -> Vec<u8> {
    if n == 0 {
        return vec![0];
    }
    let width = u32::BITS - n.leading_zeros();
    (0..width).rev().map(|k| ((n >> k) & 1) as u8).collect()
}

/// Integer index → exactly four bits, zero padded
pub fn dec2bi4(n: u32) -> Result<BitQuad> {
    if n > 0x0F {
        return Err(Error::IndexOutOfRange(n));
    }
    Ok(nibble(n as u8))
}

/// Low four bits of `n` as a quadruple
#[inline]
pub(crate) fn nibble(n: u8) -> BitQuad {
    [(n >> 3) & 1, (n >> 2) & 1, (n >> 1) & 1, n & 1]
}
