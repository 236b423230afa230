//! Constellation trait - Symbol index ↔ I/Q mapping
//!
//! Defines how integer symbol indices map to complex baseband points.
//! This trait knows nothing about scrambling, framing, or coding.

use num_complex::Complex64;

use crate::utils::mean_energy;

/// Symbol alphabet mapping trait
///
/// Implementations define the geometry of the constellation diagram.
/// Used by both modulator (symbol → I/Q) and demodulator (I/Q → symbol).
pub trait Constellation: Send + Sync {
    /// Number of points in the constellation (16 for 16-QAM)
    fn order(&self) -> usize;

    /// Bits per symbol (log2 of order)
    fn bits_per_symbol(&self) -> usize {
        (self.order() as f64).log2() as usize
    }

    /// Map a symbol index to its constellation point
    ///
    /// # Arguments
    /// * `sym` - Symbol index (0 to order-1); higher bits are masked off
    ///
    /// # Returns
    /// Complex point, normalized to unit average energy
    fn symbol_to_iq(&self, sym: u8) -> Complex64;

    /// Decide the symbol index for a received point (hard decision)
    ///
    /// # Arguments
    /// * `point` - Received complex sample
    ///
    /// # Returns
    /// Symbol index (0 to order-1)
    fn iq_to_symbol(&self, point: Complex64) -> u8;

    /// Mean |z|² over every point of the alphabet
    fn average_energy(&self) -> f64 {
        let points: Vec<Complex64> = (0..self.order())
            .map(|sym| self.symbol_to_iq(sym as u8))
            .collect();
        mean_energy(&points)
    }
}
