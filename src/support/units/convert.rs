//! Scalar unit conversions.
//!
//! These make conversions explicit in formulas instead of scattering bare
//! `/ 1000.0` and `+ 273.15` literals through the code.

use crate::support::thermo::constants::{SECONDS_PER_HOUR, ZERO_CELSIUS};

/// Converts a temperature in °C to K.
#[must_use]
pub const fn celsius_to_kelvin(celsius: f64) -> f64 {
    celsius + ZERO_CELSIUS
}

/// Converts a temperature in K to °C.
#[must_use]
pub const fn kelvin_to_celsius(kelvin: f64) -> f64 {
    kelvin - ZERO_CELSIUS
}

/// Converts a kilo-prefixed value to the mega-prefixed equivalent.
#[must_use]
pub const fn kilo_to_mega(value: f64) -> f64 {
    value / 1000.0
}

/// Converts an energy in kJ to MWh.
#[must_use]
pub const fn kj_to_mwh(kilojoules: f64) -> f64 {
    kilo_to_mega(kilojoules / SECONDS_PER_HOUR)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn temperature_round_trip() {
        assert_relative_eq!(celsius_to_kelvin(0.0), 273.15);
        assert_relative_eq!(kelvin_to_celsius(373.15), 100.0, epsilon = 1e-12);
        assert_relative_eq!(
            kelvin_to_celsius(celsius_to_kelvin(-3.0)),
            -3.0,
            epsilon = 1e-12
        );
    }

    #[test]
    fn energy_scaling() {
        assert_relative_eq!(kilo_to_mega(4182.0), 4.182);

        // 1 MWh = 3.6e6 kJ
        assert_relative_eq!(kj_to_mwh(3.6e6), 1.0);
    }
}
