//! Heat losses of a stratified storage vessel.
//!
//! An optimizer storage loses energy in three ways per period:
//!
//! - a share of its current content (`loss_rate`),
//! - a share of its nominal capacity (`fixed_losses_relative`),
//! - an absolute amount (`fixed_losses_absolute`).
//!
//! A [`ThermalLossEstimator`] turns a vessel's insulation, size, and
//! temperatures into those three terms. [`CylindricalLosses`] is the
//! standard estimator for an upright cylinder.

mod cylindrical;

use std::error::Error;

use uom::si::f64::{HeatTransfer, Length, ThermodynamicTemperature};

use crate::support::profile::Profile;

pub use cylindrical::{CylindricalLosses, CylindricalLossesError};

/// Inputs of a loss estimate for one temperature band of a vessel.
#[derive(Debug, Clone, PartialEq)]
pub struct LossInput {
    /// Thermal transmittance of the insulation.
    pub u_value: HeatTransfer,

    /// Inner diameter of the vessel.
    pub diameter: Length,

    /// Temperature of the hot (charged) band.
    pub temp_hot: ThermodynamicTemperature,

    /// Temperature of the cold (discharged) band, usually the reference temperature.
    pub temp_cold: ThermodynamicTemperature,

    /// Temperature around the vessel.
    pub temp_ambient: Profile<ThermodynamicTemperature>,
}

/// Loss parameters of one optimizer storage.
#[derive(Debug, Clone, PartialEq)]
pub struct StorageLosses {
    /// Relative loss of the stored energy per period, dimensionless.
    pub loss_rate: Profile<f64>,

    /// Loss per period relative to the nominal capacity, dimensionless.
    pub fixed_losses_relative: Profile<f64>,

    /// Absolute loss per period, MWh.
    pub fixed_losses_absolute: Profile<f64>,
}

impl StorageLosses {
    /// Returns the losses of an ideal, lossless storage.
    #[must_use]
    pub fn none() -> Self {
        Self {
            loss_rate: Profile::Constant(0.0),
            fixed_losses_relative: Profile::Constant(0.0),
            fixed_losses_absolute: Profile::Constant(0.0),
        }
    }

    /// Returns `true` if every term is exactly zero in every period.
    #[must_use]
    pub fn is_lossless(&self) -> bool {
        [
            &self.loss_rate,
            &self.fixed_losses_relative,
            &self.fixed_losses_absolute,
        ]
        .into_iter()
        .all(|term| match term {
            Profile::Constant(v) => *v == 0.0,
            Profile::Series(vs) => vs.iter().all(|v| *v == 0.0),
        })
    }
}

/// Estimates the loss parameters of a storage vessel.
pub trait ThermalLossEstimator {
    type Error: Error + Send + Sync + 'static;

    /// Returns the loss parameters for the given vessel and temperatures.
    ///
    /// # Errors
    ///
    /// Returns `Self::Error` if the estimate cannot be computed.
    fn losses(&self, input: &LossInput) -> Result<StorageLosses, Self::Error>;
}

impl<T: ThermalLossEstimator + ?Sized> ThermalLossEstimator for &T {
    type Error = T::Error;

    fn losses(&self, input: &LossInput) -> Result<StorageLosses, Self::Error> {
        (**self).losses(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn none_is_lossless() {
        assert!(StorageLosses::none().is_lossless());

        let losses = StorageLosses {
            fixed_losses_absolute: Profile::Series(vec![0.0, 1e-9]),
            ..StorageLosses::none()
        };
        assert!(!losses.is_lossless());
    }
}
