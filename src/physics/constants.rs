//! Physical constants (SI) used by the conversion layer.

pub const SPEED_OF_LIGHT: f64 = 299_792_458.0; // m/s (exact)
pub const PLANCK: f64 = 6.626_070_15e-34; // J*s (exact)
pub const ELECTRON_VOLT: f64 = 1.602_176_634e-19; // J per eV (exact)
