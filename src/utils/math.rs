//! Small numeric helpers

use num_complex::Complex64;

/// sqrt(10): RMS amplitude of the raw {±1, ±3} grid
pub const QAM16_SCALE: f64 = 3.162_277_660_168_379_5;

/// Sign of a value, with `sign(0) == 0`
#[inline]
pub fn sign(x: f64) -> f64 {
    if x > 0.0 {
        1.0
    } else if x < 0.0 {
        -1.0
    } else {
        0.0
    }
}

/// Mean energy |z|² over a set of points
pub fn mean_energy(points: &[Complex64]) -> f64 {
    if points.is_empty() {
        return 0.0;
    }
    points.iter().map(|z| z.norm_sqr()).sum::<f64>() / points.len() as f64
}
