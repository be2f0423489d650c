//! Canonical wave state and tagged updates.
//!
//! The wavelength in meters is the single source of truth. Frequency,
//! spectral band, photon energy and the scientific-notation split
//! (coefficient, exponent) are all projections of it. Controls that can
//! write the state (wavelength slider, frequency slider, scientific
//! input, amplitude slider) submit a tagged [`Update`]; the tag is held
//! for exactly one transition so the widget layer can skip resyncing the
//! control the change came from, which keeps the reciprocal wavelength
//! and frequency sliders from oscillating.

pub mod slider;

use crate::physics::constants::SPEED_OF_LIGHT;
use crate::physics::spectrum::{self, Band};

pub const AMPLITUDE_MIN: f64 = 10.0;
pub const AMPLITUDE_MAX: f64 = 100.0;

/// A state change, tagged with where it originated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Update {
    FromWavelength(f64),
    FromFrequency(f64),
    FromScientific { coefficient: f64, exponent: i32 },
    FromAmplitude(f64),
}

/// Which control wrote the state last. Consumed once per transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Writer {
    Wavelength,
    Frequency,
    Scientific,
    Amplitude,
}

pub struct WaveModel {
    wavelength_m: f64,
    amplitude_pct: f64,
    phase_deg: f64,
    last_writer: Option<Writer>,
}

impl Default for WaveModel {
    fn default() -> Self {
        // 500 nm green light, mid amplitude.
        Self {
            wavelength_m: 5.0e-7,
            amplitude_pct: 50.0,
            phase_deg: 0.0,
            last_writer: None,
        }
    }
}

impl WaveModel {
    pub fn apply(&mut self, update: Update) {
        match update {
            Update::FromWavelength(wl) => {
                self.wavelength_m = wl;
                self.last_writer = Some(Writer::Wavelength);
            }
            Update::FromFrequency(hz) => {
                if hz > 0.0 {
                    self.wavelength_m = SPEED_OF_LIGHT / hz;
                }
                self.last_writer = Some(Writer::Frequency);
            }
            Update::FromScientific {
                coefficient,
                exponent,
            } => {
                self.wavelength_m = coefficient * 10f64.powi(exponent);
                self.last_writer = Some(Writer::Scientific);
            }
            Update::FromAmplitude(pct) => {
                self.amplitude_pct = pct.clamp(AMPLITUDE_MIN, AMPLITUDE_MAX);
                self.last_writer = Some(Writer::Amplitude);
            }
        }
    }

    /// Take the origin tag of the most recent update, if any. Calling a
    /// second time without an intervening update returns `None`.
    pub fn take_last_writer(&mut self) -> Option<Writer> {
        self.last_writer.take()
    }

    pub fn wavelength_m(&self) -> f64 {
        self.wavelength_m
    }

    pub fn amplitude_pct(&self) -> f64 {
        self.amplitude_pct
    }

    pub fn phase_deg(&self) -> f64 {
        self.phase_deg
    }

    pub fn frequency_hz(&self) -> f64 {
        spectrum::frequency_of(self.wavelength_m)
    }

    pub fn photon_energy_ev(&self) -> f64 {
        spectrum::photon_energy_ev(self.frequency_hz())
    }

    pub fn band(&self) -> Band {
        spectrum::classify(self.wavelength_m)
    }

    /// Scientific-notation projection of the wavelength: a coefficient in
    /// [1, 10) and a base-10 exponent. Non-positive wavelengths project
    /// to (0, 0).
    pub fn scientific(&self) -> (f64, i32) {
        if self.wavelength_m <= 0.0 {
            return (0.0, 0);
        }
        let exponent = self.wavelength_m.log10().floor() as i32;
        let coefficient = self.wavelength_m / 10f64.powi(exponent);
        // Round to 4 decimals so the text field stays readable.
        ((coefficient * 1e4).round() / 1e4, exponent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scientific_input_drives_wavelength() {
        let mut model = WaveModel::default();
        model.apply(Update::FromScientific {
            coefficient: 5.0,
            exponent: -7,
        });
        assert!((model.wavelength_m() - 5.0e-7).abs() < 1e-20);
        assert_eq!(model.band(), Band::Visible);
        assert!((model.frequency_hz() - 5.996e14).abs() / 5.996e14 < 1e-3);
        assert!((model.photon_energy_ev() - 2.48).abs() / 2.48 < 0.01);
    }

    #[test]
    fn test_microwave_scenario() {
        let mut model = WaveModel::default();
        model.apply(Update::FromScientific {
            coefficient: 1.0,
            exponent: -2,
        });
        assert_eq!(model.band(), Band::Microwave);
    }

    #[test]
    fn test_zero_wavelength_degrades() {
        let mut model = WaveModel::default();
        model.apply(Update::FromWavelength(0.0));
        assert_eq!(model.band(), Band::Invalid);
        assert_eq!(model.frequency_hz(), 0.0);
        assert_eq!(model.photon_energy_ev(), 0.0);
        assert_eq!(model.scientific(), (0.0, 0));
    }

    #[test]
    fn test_frequency_update_is_reciprocal() {
        let mut model = WaveModel::default();
        let f = model.frequency_hz();
        model.apply(Update::FromFrequency(f));
        // Reciprocal roundtrip stays within floating rounding.
        assert!((model.wavelength_m() - 5.0e-7).abs() / 5.0e-7 < 1e-12);
        // Non-positive frequency keeps the prior wavelength.
        model.apply(Update::FromFrequency(0.0));
        assert!((model.wavelength_m() - 5.0e-7).abs() / 5.0e-7 < 1e-12);
    }

    #[test]
    fn test_writer_tag_consumed_once() {
        let mut model = WaveModel::default();
        model.apply(Update::FromFrequency(1e9));
        assert_eq!(model.take_last_writer(), Some(Writer::Frequency));
        assert_eq!(model.take_last_writer(), None);
    }

    #[test]
    fn test_amplitude_clamped() {
        let mut model = WaveModel::default();
        model.apply(Update::FromAmplitude(3.0));
        assert_eq!(model.amplitude_pct(), AMPLITUDE_MIN);
        model.apply(Update::FromAmplitude(250.0));
        assert_eq!(model.amplitude_pct(), AMPLITUDE_MAX);
    }

    #[test]
    fn test_scientific_projection() {
        let mut model = WaveModel::default();
        model.apply(Update::FromWavelength(6.25e-7));
        let (coeff, exp) = model.scientific();
        assert_eq!(exp, -7);
        assert!((coeff - 6.25).abs() < 1e-9);
    }
}
