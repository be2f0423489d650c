//! Logarithmic slider mapping.
//!
//! Sliders in the controls panel move over a linear position range
//! [0, 100] while the physical quantity they control spans many decades,
//! so positions map onto a log10 scale within the active band's range.

/// A positive, log-scaled value range behind a linear [0, 100] slider.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogRange {
    pub min: f64,
    pub max: f64,
}

/// Neutral position reported for a degenerate (min == max) range, where
/// the inverse mapping is undefined. Keeps NaN out of the widget layer.
pub const NEUTRAL_POSITION: f64 = 50.0;

impl LogRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Value at slider position `p` in [0, 100].
    pub fn value_at(&self, position: f64) -> f64 {
        let log_min = self.min.log10();
        let log_max = self.max.log10();
        10f64.powf(log_min + position / 100.0 * (log_max - log_min))
    }

    /// Slider position for `value`, clamped into the range.
    pub fn position_of(&self, value: f64) -> f64 {
        if self.min == self.max {
            return NEUTRAL_POSITION;
        }
        let clamped = value.clamp(self.min, self.max);
        let log_min = self.min.log10();
        let log_max = self.max.log10();
        100.0 * (clamped.log10() - log_min) / (log_max - log_min)
    }
}
