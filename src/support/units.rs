//! Unit helpers built around [`uom`].
//!
//! This crate uses [`uom`] for physical quantities at its API boundaries.
//! This module adds the pieces that [`uom`] doesn't provide:
//!
//! - [`convert`]: scalar conversions (°C ↔ K, kJ → MWh, kilo → mega) used by the
//!   closed-form storage and heat pump formulas.
//! - [`TemperatureDifference`]: subtracting one absolute temperature from another
//!   to get a temperature interval.
//!
//! ```
//! use uom::si::f64::ThermodynamicTemperature;
//! use uom::si::thermodynamic_temperature::degree_celsius;
//! use layered_heat_models::support::units::TemperatureDifference;
//!
//! let level = ThermodynamicTemperature::new::<degree_celsius>(60.0);
//! let reference = ThermodynamicTemperature::new::<degree_celsius>(20.0);
//! let lift = level.minus(reference);
//! // lift is a TemperatureInterval of 40 K, not a ThermodynamicTemperature
//! ```

pub mod convert;
mod temperature_difference;

pub use temperature_difference::TemperatureDifference;
