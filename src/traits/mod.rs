//! Core codec traits
//!
//! These traits define mathematical behavior, not standards or waveforms.

mod constellation;

pub use constellation::Constellation;
