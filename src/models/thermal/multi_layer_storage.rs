//! Stratified hot-water tank split into one storage per temperature level.
//!
//! An optimizer that only knows single-temperature storages cannot represent
//! a tank whose water sits at several temperatures. This module maps such a
//! tank onto one [`StorageLayer`] per level of a heat network, each bound to
//! the bus of its level, and couples the layers through a [`SharedLimit`] so
//! that together they never hold more water than the tank.
//!
//! # Workflow
//!
//! 1. Describe the tank with a [`TankGeometry`] and an ambient temperature.
//! 2. Call [`MultiLayerStorageBuilder::build`] with the level set and the
//!    [`EnergySystem`] to register the layers.
//! 3. Once the optimization model exists, call
//!    [`MultiLayerStorage::add_shared_limit`] on the returned owner.

mod builder;
mod config;
mod error;
mod geometry;
mod heat_layers;
mod layer;
mod shared_limit;
mod system;

#[cfg(test)]
mod test_support;

use tracing::debug;
use uom::si::{
    f64::{ThermodynamicTemperature, Volume},
    volume::cubic_meter,
};

pub use builder::MultiLayerStorageBuilder;
pub use config::MultiLayerStorageConfig;
pub use error::{ConfigurationError, StorageError};
pub use geometry::TankGeometry;
pub use heat_layers::{HeatLayers, LayeredBuses};
pub use layer::StorageLayer;
pub use shared_limit::{SharedLimit, SharedLimitTerm};
pub use system::{EnergySystem, OptimizationModel};

/// The registered layers of one tank.
///
/// Returned by [`MultiLayerStorageBuilder::build`]. The owner keeps the
/// layers alive and adds their volume coupling to an optimization model.
#[derive(Debug, Clone, PartialEq)]
pub struct MultiLayerStorage<Bus> {
    volume: Volume,
    reference_temperature: ThermodynamicTemperature,
    layers: Vec<StorageLayer<Bus>>,
    limit_name: String,
    shared_limit: Option<SharedLimit>,
}

impl<Bus> MultiLayerStorage<Bus> {
    /// Returns the layers in ascending level order.
    #[must_use]
    pub fn layers(&self) -> &[StorageLayer<Bus>] {
        &self.layers
    }

    /// Returns the layer at `level`, if there is one.
    #[must_use]
    pub fn layer(&self, level: ThermodynamicTemperature) -> Option<&StorageLayer<Bus>> {
        self.layers
            .iter()
            .find(|layer| layer.temperature() == level)
    }

    /// Returns the temperature levels in ascending order.
    pub fn temperature_levels(&self) -> impl Iterator<Item = ThermodynamicTemperature> + '_ {
        self.layers.iter().map(StorageLayer::temperature)
    }

    #[must_use]
    pub fn reference_temperature(&self) -> ThermodynamicTemperature {
        self.reference_temperature
    }

    /// Returns the tank volume.
    #[must_use]
    pub fn volume(&self) -> Volume {
        self.volume
    }

    /// Returns the volume coupling of the layers.
    ///
    /// The limit is computed on each call and does not depend on whether it
    /// was added to a model.
    #[must_use]
    pub fn shared_limit(&self) -> SharedLimit {
        SharedLimit::new(
            self.limit_name.clone(),
            &self.layers,
            self.reference_temperature,
            self.volume,
        )
    }

    /// Returns the shared limit once it has been added to a model.
    #[must_use]
    pub fn registered_shared_limit(&self) -> Option<&SharedLimit> {
        self.shared_limit.as_ref()
    }

    /// Adds the volume coupling of the layers to `model`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::SharedLimitAlreadyAdded`] on a second call and
    /// [`StorageError::Registration`] if `model` rejects the constraint.
    /// After a rejection the call may be retried.
    pub fn add_shared_limit<M: OptimizationModel>(
        &mut self,
        model: &mut M,
    ) -> Result<&SharedLimit, StorageError> {
        if self.shared_limit.is_some() {
            return Err(StorageError::SharedLimitAlreadyAdded {
                name: self.limit_name.clone(),
            });
        }

        let limit = self.shared_limit();
        model.add_shared_limit(&limit).map_err(|err| {
            StorageError::registration_failed(format!("shared limit {}", limit.name()), err)
        })?;
        debug!(
            name = limit.name(),
            terms = limit.terms().len(),
            upper_limit_m3 = limit.upper_limit().get::<cubic_meter>(),
            "added shared storage limit"
        );

        Ok(self.shared_limit.insert(limit))
    }
}
