//! Physical constants.
//!
//! Values are plain `f64` in the unit given by each item's doc comment,
//! so they can be used in `const fn` formulas.

/// Absolute zero offset between the Celsius and Kelvin scales, K.
pub const ZERO_CELSIUS: f64 = 273.15;

/// Seconds per hour, used for J → Wh style conversions.
pub const SECONDS_PER_HOUR: f64 = 3600.0;

/// Density of water in a heat storage, kg/m³.
pub const H2O_DENSITY: f64 = 1000.0;

/// Specific heat capacity of water in a heat storage, kJ/(kg·K).
pub const H2O_HEAT_CAPACITY: f64 = 4.182;

/// Thermal conductivity of tank insulation, W/(m·K).
pub const TC_INSULATION: f64 = 0.04;

/// Volumetric heat capacity of storage water, kJ/(m³·K).
pub const H2O_VOLUMETRIC_HEAT_CAPACITY: f64 = H2O_DENSITY * H2O_HEAT_CAPACITY;
