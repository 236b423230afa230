//! Utility functions for codec arithmetic

mod math;

pub use math::*;
