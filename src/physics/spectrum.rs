//! Spectral band classification and wavelength/frequency/energy conversion.
//!
//! Band boundaries follow the conventional split of the electromagnetic
//! spectrum from 1e-14 m (gamma) up to 1000 m (radio). The boundary
//! inclusion rules are asymmetric on purpose: every band owns its lower
//! bound except Microwave, which also owns its upper bound (1 m), and
//! Radio, which starts strictly above 1 m. Display panels depend on these
//! exact thresholds.

use eframe::egui::Color32;

use super::constants::SPEED_OF_LIGHT;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Band {
    Gamma,
    XRay,
    Uv,
    Visible,
    Infrared,
    Microwave,
    Radio,
    Invalid,
}

/// Wavelength interval in meters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WavelengthRange {
    pub min: f64,
    pub max: f64,
}

/// Frequency interval in hertz.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrequencyRange {
    pub min: f64,
    pub max: f64,
}

impl Band {
    /// All physical bands in ascending wavelength order (gamma first).
    pub const ALL: [Band; 7] = [
        Band::Gamma,
        Band::XRay,
        Band::Uv,
        Band::Visible,
        Band::Infrared,
        Band::Microwave,
        Band::Radio,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Band::Gamma => "Gamma",
            Band::XRay => "X-ray",
            Band::Uv => "UV",
            Band::Visible => "Visible",
            Band::Infrared => "Infrared",
            Band::Microwave => "Microwave",
            Band::Radio => "Radio",
            Band::Invalid => "Invalid",
        }
    }

    /// Wavelength range in meters. `Invalid` falls back to the full
    /// spectrum span so that dependent sliders always have a usable range.
    pub fn wavelength_range(&self) -> WavelengthRange {
        let (min, max) = match self {
            Band::Gamma => (1e-14, 1e-11),
            Band::XRay => (1e-11, 1e-8),
            Band::Uv => (1e-8, 3.8e-7),
            Band::Visible => (3.8e-7, 7.0e-7),
            Band::Infrared => (7.0e-7, 1e-3),
            Band::Microwave => (1e-3, 1.0),
            Band::Radio => (1.0, 1000.0),
            Band::Invalid => (1e-14, 1000.0),
        };
        WavelengthRange { min, max }
    }

    /// Frequency range derived from the wavelength range. Smaller
    /// wavelengths mean larger frequencies, so min and max swap sides.
    pub fn frequency_range(&self) -> FrequencyRange {
        let wl = self.wavelength_range();
        FrequencyRange {
            min: SPEED_OF_LIGHT / wl.max,
            max: SPEED_OF_LIGHT / wl.min,
        }
    }

    /// Display color for curve stroke and panel accents.
    pub fn color(&self) -> Color32 {
        match self {
            Band::Gamma => Color32::from_rgb(147, 51, 234),
            Band::XRay => Color32::from_rgb(168, 85, 247),
            Band::Uv => Color32::from_rgb(168, 85, 247),
            Band::Visible => Color32::from_rgb(59, 130, 246),
            Band::Infrared => Color32::from_rgb(220, 38, 38),
            Band::Microwave => Color32::from_rgb(153, 27, 27),
            Band::Radio => Color32::from_rgb(127, 29, 29),
            Band::Invalid => Color32::from_rgb(100, 116, 139),
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Band::Gamma => {
                "Highest-energy radiation, produced in nuclear processes. \
                 Used in radiotherapy and sterilization; penetrates almost any material."
            }
            Band::XRay => {
                "Penetrating radiation from electron transitions in heavy atoms. \
                 Medical imaging, security scanning and materials analysis."
            }
            Band::Uv => {
                "Beyond violet light. Sterilization, fluorescence detection and \
                 polymer curing; mostly filtered by the ozone layer."
            }
            Band::Visible => {
                "The only part of the spectrum the human eye perceives, \
                 roughly 380 to 700 nanometers."
            }
            Band::Infrared => {
                "Emitted as heat by every body above absolute zero. Thermal \
                 cameras, remote controls, optical links and astronomy."
            }
            Band::Microwave => {
                "Millimeter-to-meter waves. Ovens, Wi-Fi, radar, satellite \
                 links and radio astronomy."
            }
            Band::Radio => {
                "The longest wavelengths. Broadcasting, mobile networks, \
                 maritime communication and navigation."
            }
            Band::Invalid => "Wavelength outside the known electromagnetic spectrum.",
        }
    }
}

/// Classify a wavelength (meters) into its spectral band.
///
/// Non-positive values and values above the radio cutoff (1000 m) are
/// `Invalid`. See the module docs for the boundary inclusion rules.
pub fn classify(wavelength_m: f64) -> Band {
    if wavelength_m <= 0.0 {
        return Band::Invalid;
    }
    if wavelength_m < Band::Gamma.wavelength_range().max {
        return Band::Gamma;
    }
    if wavelength_m < Band::XRay.wavelength_range().max {
        return Band::XRay;
    }
    if wavelength_m < Band::Uv.wavelength_range().max {
        return Band::Uv;
    }
    if wavelength_m < Band::Visible.wavelength_range().max {
        return Band::Visible;
    }
    if wavelength_m < Band::Infrared.wavelength_range().max {
        return Band::Infrared;
    }
    if wavelength_m <= Band::Microwave.wavelength_range().max {
        return Band::Microwave;
    }
    let radio = Band::Radio.wavelength_range();
    if wavelength_m > radio.min && wavelength_m <= radio.max {
        return Band::Radio;
    }
    Band::Invalid
}

/// Frequency in Hz for a wavelength in meters; 0 for non-positive input.
pub fn frequency_of(wavelength_m: f64) -> f64 {
    if wavelength_m <= 0.0 {
        return 0.0;
    }
    SPEED_OF_LIGHT / wavelength_m
}

/// Photon energy in electron-volts for a frequency in Hz; 0 for
/// non-positive input (formatters render that as "N/A").
pub fn photon_energy_ev(frequency_hz: f64) -> f64 {
    if frequency_hz <= 0.0 {
        return 0.0;
    }
    super::constants::PLANCK * frequency_hz / super::constants::ELECTRON_VOLT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_bands() {
        assert_eq!(classify(5e-13), Band::Gamma);
        assert_eq!(classify(5e-10), Band::XRay);
        assert_eq!(classify(5e-8), Band::Uv);
        assert_eq!(classify(5e-7), Band::Visible);
        assert_eq!(classify(5e-5), Band::Infrared);
        assert_eq!(classify(1e-2), Band::Microwave);
        assert_eq!(classify(50.0), Band::Radio);
    }

    #[test]
    fn test_classify_boundaries() {
        // Lower bounds are inclusive for every band except Radio.
        assert_eq!(classify(1e-11), Band::XRay);
        assert_eq!(classify(3.8e-7), Band::Visible);
        assert_eq!(classify(7.0e-7), Band::Infrared);
        // Microwave owns its upper bound.
        assert_eq!(classify(1.0), Band::Microwave);
        assert_eq!(classify(1000.0), Band::Radio);
        assert_eq!(classify(1001.0), Band::Invalid);
    }

    #[test]
    fn test_classify_invalid() {
        assert_eq!(classify(0.0), Band::Invalid);
        assert_eq!(classify(-1.0), Band::Invalid);
    }

    #[test]
    fn test_frequency_of_green_light() {
        let f = frequency_of(5e-7);
        assert!((f - 5.9958e14).abs() / 5.9958e14 < 1e-3);
        assert_eq!(frequency_of(0.0), 0.0);
        assert_eq!(frequency_of(-5.0), 0.0);
    }

    #[test]
    fn test_photon_energy_roundtrip() {
        let ev = photon_energy_ev(frequency_of(5e-7));
        assert!((ev - 2.48).abs() / 2.48 < 0.01);
        assert_eq!(photon_energy_ev(0.0), 0.0);
    }

    #[test]
    fn test_frequency_range_swaps_endpoints() {
        for band in Band::ALL {
            let wl = band.wavelength_range();
            let fr = band.frequency_range();
            assert_eq!(fr.min, SPEED_OF_LIGHT / wl.max);
            assert_eq!(fr.max, SPEED_OF_LIGHT / wl.min);
            assert!(fr.min < fr.max);
        }
    }

    #[test]
    fn test_bands_are_contiguous() {
        for pair in Band::ALL.windows(2) {
            assert_eq!(
                pair[0].wavelength_range().max,
                pair[1].wavelength_range().min
            );
        }
    }
}
