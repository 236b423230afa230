//! Gray-coded square 16-QAM
//!
//! Points sit on the {±1, ±3} grid scaled by 1/√10 for unit average power.
//! Bits b0/b1 pick the half-plane on I/Q, bits b2/b3 pick the inner or outer
//! level inside it. The inner/outer choice is mirrored on the negative side
//! so that neighbouring points always differ in exactly one bit:
//!
//! ```text
//!   level:   -3    -1    +1    +3
//!   b0 b2:   0 1   0 0   1 0   1 1
//! ```

use num_complex::Complex64;

use crate::bits::{bi2dec, check_quad, nibble, BitQuad};
use crate::error::Result;
use crate::traits::Constellation;
use crate::utils::{sign, QAM16_SCALE};

/// Map four bits to a unit-energy constellation point
///
/// Fails if `bits` is not exactly four values of 0 or 1.
pub fn modulate(bits: &[u8]) -> Result<Complex64> {
    Ok(map_quad(check_quad(bits)?))
}

/// Hard-decision demapper
///
/// Exact inverse of [`modulate`] on the 16 constellation points. Any other
/// input is sliced per axis to the nearest level.
pub fn demodulate(symbol: Complex64) -> BitQuad {
    let z = symbol * QAM16_SCALE;
    let (rbq, rbp) = slice_axis(z.re);
    let (ibq, ibp) = slice_axis(z.im);
    [rbq, ibq, rbp, ibp]
}

/// Map a quadruple already known to be valid
pub(crate) fn map_quad(bits: BitQuad) -> Complex64 {
    let b = bits.map(f64::from);

    // half-plane
    let rpq = 4.0 * b[0] - 2.0;
    let ipq = 4.0 * b[1] - 2.0;

    // inner/outer level, mirrored on the negative side for Gray order
    let rp = (2.0 * b[2] - 1.0) * sign(rpq);
    let ip = (2.0 * b[3] - 1.0) * sign(ipq);

    Complex64::new(rpq + rp, ipq + ip) / QAM16_SCALE
}

/// Slice one denormalized axis into (half-plane bit, level bit)
fn slice_axis(level: f64) -> (u8, u8) {
    let half = hard_bit(level);
    let offset = level - (4.0 * f64::from(half) - 2.0);
    (half, hard_bit(sign(level) * offset))
}

#[inline]
fn hard_bit(level: f64) -> u8 {
    if level >= 0.0 {
        1
    } else {
        0
    }
}

/// 16-QAM constellation indexed by binary symbol index
#[derive(Debug, Clone, Copy, Default)]
pub struct Qam16;

impl Qam16 {
    /// All 16 points, entry `k` is the point for symbol index `k`
    pub fn points() -> [Complex64; 16] {
        std::array::from_fn(|k| map_quad(nibble(k as u8)))
    }
}

impl Constellation for Qam16 {
    fn order(&self) -> usize {
        16
    }

    fn symbol_to_iq(&self, sym: u8) -> Complex64 {
        map_quad(nibble(sym & 0x0F))
    }

    fn iq_to_symbol(&self, point: Complex64) -> u8 {
        bi2dec(demodulate(point))
    }
}
