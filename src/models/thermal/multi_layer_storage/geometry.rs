use uom::si::{
    f64::{HeatTransfer, Length, Volume},
    heat_transfer::watt_per_square_meter_kelvin,
    length::meter,
};

use crate::support::{
    constraint::{Constraint, ConstraintError, StrictlyPositive},
    thermo::constants::TC_INSULATION,
};

use super::ConfigurationError;

/// Physical dimensions of an upright cylindrical tank.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TankGeometry {
    diameter: Length,
    volume: Volume,
    insulation_thickness: Length,
}

impl TankGeometry {
    /// Creates a validated tank geometry.
    ///
    /// An insulation thickness of zero or less describes an ideal, lossless tank.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigurationError`] if the diameter or volume is not
    /// finite and strictly positive, or if the insulation thickness is not
    /// finite.
    pub fn new(
        diameter: Length,
        volume: Volume,
        insulation_thickness: Length,
    ) -> Result<Self, ConfigurationError> {
        StrictlyPositive::check(&diameter)
            .and_then(|()| finite(diameter.value))
            .map_err(|reason| ConfigurationError::Diameter { diameter, reason })?;
        StrictlyPositive::check(&volume)
            .and_then(|()| finite(volume.value))
            .map_err(|reason| ConfigurationError::Volume { volume, reason })?;
        if !insulation_thickness.value.is_finite() {
            return Err(ConfigurationError::InsulationThickness);
        }

        Ok(Self {
            diameter,
            volume,
            insulation_thickness,
        })
    }

    #[must_use]
    pub fn diameter(&self) -> Length {
        self.diameter
    }

    #[must_use]
    pub fn volume(&self) -> Volume {
        self.volume
    }

    #[must_use]
    pub fn insulation_thickness(&self) -> Length {
        self.insulation_thickness
    }

    /// Returns the insulation's thermal transmittance, or `None` for a lossless tank.
    #[must_use]
    pub fn u_value(&self) -> Option<HeatTransfer> {
        let thickness = self.insulation_thickness.get::<meter>();
        if thickness <= 0.0 {
            return None;
        }
        let u_value = TC_INSULATION / thickness;
        Some(HeatTransfer::new::<watt_per_square_meter_kelvin>(u_value))
    }
}

/// Rejects infinities that pass a sign check.
fn finite(value: f64) -> Result<(), ConstraintError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConstraintError::Infinite)
    }
}
