//! Human-readable formatting of derived quantities.
//!
//! Every formatter returns the sentinel string "N/A" for non-positive
//! input instead of panicking; display panels render the sentinel as-is.

pub const NOT_AVAILABLE: &str = "N/A";

/// Frequency with SI prefixes, Hz up to EHz at 1000x steps.
pub fn frequency(hz: f64) -> String {
    if hz <= 0.0 {
        return NOT_AVAILABLE.to_string();
    }
    if hz >= 1e18 {
        format!("{:.2} EHz", hz / 1e18)
    } else if hz >= 1e15 {
        format!("{:.2} PHz", hz / 1e15)
    } else if hz >= 1e12 {
        format!("{:.2} THz", hz / 1e12)
    } else if hz >= 1e9 {
        format!("{:.2} GHz", hz / 1e9)
    } else if hz >= 1e6 {
        format!("{:.2} MHz", hz / 1e6)
    } else if hz >= 1e3 {
        format!("{:.2} kHz", hz / 1e3)
    } else {
        format!("{:.2} Hz", hz)
    }
}

/// Photon energy in electron-volts with eV/keV/MeV/GeV prefixes.
pub fn energy_ev(ev: f64) -> String {
    if ev <= 0.0 {
        return NOT_AVAILABLE.to_string();
    }
    if ev >= 1e9 {
        format!("{:.2} GeV", ev / 1e9)
    } else if ev >= 1e6 {
        format!("{:.2} MeV", ev / 1e6)
    } else if ev >= 1e3 {
        format!("{:.2} keV", ev / 1e3)
    } else {
        format!("{:.2} eV", ev)
    }
}

/// Oscillation period (1/f) from seconds down to attoseconds, in
/// exponential notation.
pub fn period(hz: f64) -> String {
    if hz <= 0.0 {
        return NOT_AVAILABLE.to_string();
    }
    let period = 1.0 / hz;
    if period < 1e-15 {
        format!("{:.2e} as", period * 1e18)
    } else if period < 1e-12 {
        format!("{:.2e} fs", period * 1e15)
    } else if period < 1e-9 {
        format!("{:.2e} ps", period * 1e12)
    } else if period < 1e-6 {
        format!("{:.2e} ns", period * 1e9)
    } else if period < 1e-3 {
        format!("{:.2e} µs", period * 1e6)
    } else {
        format!("{:.2e} s", period)
    }
}

/// Wavelength in meters, scientific notation.
pub fn wavelength(m: f64) -> String {
    if m <= 0.0 {
        return NOT_AVAILABLE.to_string();
    }
    format!("{:.2e} m", m)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frequency_prefixes() {
        assert_eq!(frequency(42.0), "42.00 Hz");
        assert_eq!(frequency(1.5e3), "1.50 kHz");
        assert_eq!(frequency(2.4e9), "2.40 GHz");
        assert_eq!(frequency(5.9958e14), "599.58 THz");
        assert_eq!(frequency(3.2e18), "3.20 EHz");
    }

    #[test]
    fn test_energy_prefixes() {
        assert_eq!(energy_ev(2.48), "2.48 eV");
        assert_eq!(energy_ev(12_400.0), "12.40 keV");
        assert_eq!(energy_ev(2.0e6), "2.00 MeV");
        assert_eq!(energy_ev(1.3e9), "1.30 GeV");
    }

    #[test]
    fn test_period_units() {
        // 1 GHz -> 1 ns
        assert_eq!(period(1e9), "1.00e0 ns");
        // 1 kHz -> 1 ms, still formatted in seconds notation
        assert_eq!(period(1e3), "1.00e-3 s");
        // 1 PHz -> 1 fs
        assert_eq!(period(1e15), "1.00e0 fs");
    }

    #[test]
    fn test_sentinels_for_nonpositive() {
        assert_eq!(frequency(0.0), NOT_AVAILABLE);
        assert_eq!(frequency(-1.0), NOT_AVAILABLE);
        assert_eq!(energy_ev(0.0), NOT_AVAILABLE);
        assert_eq!(period(0.0), NOT_AVAILABLE);
        assert_eq!(wavelength(0.0), NOT_AVAILABLE);
        assert_eq!(wavelength(-3.0), NOT_AVAILABLE);
    }

    #[test]
    fn test_wavelength_scientific() {
        assert_eq!(wavelength(5.0e-7), "5.00e-7 m");
    }
}
