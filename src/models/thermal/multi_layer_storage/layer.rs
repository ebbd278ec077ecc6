use uom::si::{
    energy::megawatt_hour,
    f64::{Energy, ThermodynamicTemperature, Volume},
    temperature_interval::kelvin as delta_kelvin,
    thermodynamic_temperature::degree_celsius,
    volume::cubic_meter,
};

use crate::support::{
    thermal_loss::StorageLosses,
    thermo::constants::H2O_VOLUMETRIC_HEAT_CAPACITY,
    units::{TemperatureDifference, convert::kj_to_mwh},
};

/// One optimizer storage representing a temperature band of a tank.
///
/// The storage charges from and discharges to the same bus. Its content is
/// the energy of water heated from the reference temperature to the layer's
/// level.
#[derive(Debug, Clone, PartialEq)]
pub struct StorageLayer<Bus> {
    label: String,
    bus: Bus,
    temperature: ThermodynamicTemperature,
    nominal_capacity: Energy,
    losses: StorageLosses,
}

impl<Bus> StorageLayer<Bus> {
    pub(super) fn new(
        label: String,
        bus: Bus,
        temperature: ThermodynamicTemperature,
        nominal_capacity: Energy,
        losses: StorageLosses,
    ) -> Self {
        Self {
            label,
            bus,
            temperature,
            nominal_capacity,
            losses,
        }
    }

    /// Returns the storage label, unique within a tank.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the bus used for both input and output flows.
    #[must_use]
    pub fn bus(&self) -> &Bus {
        &self.bus
    }

    /// Returns the temperature level of this layer.
    #[must_use]
    pub fn temperature(&self) -> ThermodynamicTemperature {
        self.temperature
    }

    /// Returns the energy stored when the whole tank is at this layer's level.
    #[must_use]
    pub fn nominal_capacity(&self) -> Energy {
        self.nominal_capacity
    }

    #[must_use]
    pub fn losses(&self) -> &StorageLosses {
        &self.losses
    }
}

/// Returns the storage label for a level, e.g. `s_heat_60`.
///
/// Levels are rounded to whole degrees Celsius.
pub(super) fn layer_label(prefix: &str, level: ThermodynamicTemperature) -> String {
    format!("{prefix}_{:.0}", level.get::<degree_celsius>())
}

/// Returns the energy per volume of water heated from `reference` to `level`, MWh/m³.
pub(super) fn volumetric_energy_density(
    level: ThermodynamicTemperature,
    reference: ThermodynamicTemperature,
) -> f64 {
    kj_to_mwh(level.minus(reference).get::<delta_kelvin>() * H2O_VOLUMETRIC_HEAT_CAPACITY)
}

/// Returns the nominal capacity of a layer at `level` in a tank of `volume`.
pub(super) fn nominal_capacity(
    volume: Volume,
    level: ThermodynamicTemperature,
    reference: ThermodynamicTemperature,
) -> Energy {
    Energy::new::<megawatt_hour>(
        volume.get::<cubic_meter>() * volumetric_energy_density(level, reference),
    )
}
