use std::f64::consts::PI;

use thiserror::Error;
use uom::si::{
    f64::{
        HeatTransfer, Length, MassDensity, SpecificHeatCapacity, ThermodynamicTemperature, Time,
    },
    heat_transfer::watt_per_square_meter_kelvin,
    length::meter,
    mass_density::kilogram_per_cubic_meter,
    specific_heat_capacity::joule_per_kilogram_kelvin,
    temperature_interval::kelvin as delta_kelvin,
    time::{hour, second},
};

use crate::support::{
    constraint::{Constraint, StrictlyPositive},
    units::TemperatureDifference,
};

use super::{LossInput, StorageLosses, ThermalLossEstimator};

/// Errors from [`CylindricalLosses`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CylindricalLossesError {
    #[error("invalid diameter: {diameter:?}")]
    Diameter { diameter: Length },

    #[error("invalid u-value: {u_value:?}")]
    UValue { u_value: HeatTransfer },

    #[error("hot temperature {temp_hot:?} is not above cold temperature {temp_cold:?}")]
    TemperatureOrder {
        temp_hot: ThermodynamicTemperature,
        temp_cold: ThermodynamicTemperature,
    },

    #[error("ambient temperature series is empty")]
    EmptyAmbient,

    #[error("ambient temperature in period {period} is not finite")]
    NonFiniteAmbient { period: usize },
}

/// Losses of an upright cylindrical vessel with stratified contents.
///
/// Heat leaves through the lateral surface in proportion to the stored
/// energy, and through the top and bottom lids at the hot and cold band
/// temperatures respectively:
///
/// ```text
/// loss_rate             = 4·U / (d·ρ·c) · Δt
/// fixed_losses_relative = 4·U·(T_c − T_env) / (d·ρ·c·(T_h − T_c)) · Δt
/// fixed_losses_absolute = ¼·U·π·d²·(T_h + T_c − 2·T_env) · Δt
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CylindricalLosses {
    /// Length of one optimization period.
    pub time_increment: Time,

    /// Density of the stored water.
    pub density: MassDensity,

    /// Specific heat capacity of the stored water.
    pub heat_capacity: SpecificHeatCapacity,
}

impl Default for CylindricalLosses {
    fn default() -> Self {
        Self {
            time_increment: Time::new::<hour>(1.0),
            density: MassDensity::new::<kilogram_per_cubic_meter>(971.78),
            heat_capacity: SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(4180.0),
        }
    }
}

impl CylindricalLosses {
    /// Returns the estimator with a different period length.
    #[must_use]
    pub fn with_time_increment(mut self, time_increment: Time) -> Self {
        self.time_increment = time_increment;
        self
    }
}

impl ThermalLossEstimator for CylindricalLosses {
    type Error = CylindricalLossesError;

    fn losses(&self, input: &LossInput) -> Result<StorageLosses, Self::Error> {
        if StrictlyPositive::check(&input.diameter).is_err() {
            return Err(CylindricalLossesError::Diameter {
                diameter: input.diameter,
            });
        }
        if StrictlyPositive::check(&input.u_value).is_err() {
            return Err(CylindricalLossesError::UValue {
                u_value: input.u_value,
            });
        }
        if input.temp_hot <= input.temp_cold {
            return Err(CylindricalLossesError::TemperatureOrder {
                temp_hot: input.temp_hot,
                temp_cold: input.temp_cold,
            });
        }
        if input.temp_ambient.is_empty() {
            return Err(CylindricalLossesError::EmptyAmbient);
        }
        if let Some(period) = input
            .temp_ambient
            .values()
            .iter()
            .position(|t| !t.value.is_finite())
        {
            return Err(CylindricalLossesError::NonFiniteAmbient { period });
        }

        let u = input.u_value.get::<watt_per_square_meter_kelvin>();
        let d = input.diameter.get::<meter>();
        let rho_c = self.density.get::<kilogram_per_cubic_meter>()
            * self.heat_capacity.get::<joule_per_kilogram_kelvin>();
        let dt_seconds = self.time_increment.get::<second>();
        let dt_hours = self.time_increment.get::<hour>();
        let band_lift = input.temp_hot.minus(input.temp_cold).get::<delta_kelvin>();

        let loss_rate = 4.0 * u / (d * rho_c) * dt_seconds;

        let fixed_losses_relative = input.temp_ambient.map(|&t_env| {
            let cold_above_env = input.temp_cold.minus(t_env).get::<delta_kelvin>();
            4.0 * u * cold_above_env / (d * rho_c * band_lift) * dt_seconds
        });

        // W·h → MWh
        let fixed_losses_absolute = input.temp_ambient.map(|&t_env| {
            let lids_above_env = input.temp_hot.minus(t_env).get::<delta_kelvin>()
                + input.temp_cold.minus(t_env).get::<delta_kelvin>();
            0.25 * u * PI * d * d * lids_above_env * dt_hours * 1e-6
        });

        Ok(StorageLosses {
            loss_rate: loss_rate.into(),
            fixed_losses_relative,
            fixed_losses_absolute,
        })
    }
}
