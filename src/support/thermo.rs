//! Closed-form thermodynamics for storage and heat pump modeling.
//!
//! - [`constants`]: compiled physical constants (water, insulation).
//! - [`cop`]: Carnot and Lorenz efficiency bounds and the corrected,
//!   realistic heat pump COP.

pub mod constants;
pub mod cop;

mod effective_temperature;

pub use effective_temperature::EffectiveTemperature;
