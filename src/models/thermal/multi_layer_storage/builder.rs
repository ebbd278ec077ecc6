use std::{cmp::Ordering, collections::HashSet};

use tracing::debug;
use uom::si::{energy::megawatt_hour, f64::ThermodynamicTemperature};

use crate::support::{
    profile::Profile,
    thermal_loss::{CylindricalLosses, LossInput, StorageLosses, ThermalLossEstimator},
};

use super::{
    ConfigurationError, EnergySystem, HeatLayers, MultiLayerStorage, MultiLayerStorageConfig,
    StorageError, StorageLayer, TankGeometry,
    layer::{layer_label, nominal_capacity},
};

/// Builds the layers of one stratified tank.
///
/// The builder derives one [`StorageLayer`] per temperature level from the
/// tank geometry and registers them with an [`EnergySystem`]. All inputs are
/// validated and all layers are computed before the first registration.
#[derive(Debug, Clone)]
pub struct MultiLayerStorageBuilder<Estimator = CylindricalLosses> {
    geometry: TankGeometry,
    ambient_temperature: Profile<ThermodynamicTemperature>,
    config: MultiLayerStorageConfig,
    loss_estimator: Estimator,
}

impl MultiLayerStorageBuilder {
    /// Creates a builder using [`CylindricalLosses`] and the default naming.
    #[must_use]
    pub fn new(
        geometry: TankGeometry,
        ambient_temperature: impl Into<Profile<ThermodynamicTemperature>>,
    ) -> Self {
        Self {
            geometry,
            ambient_temperature: ambient_temperature.into(),
            config: MultiLayerStorageConfig::default(),
            loss_estimator: CylindricalLosses::default(),
        }
    }
}

impl<Estimator: ThermalLossEstimator> MultiLayerStorageBuilder<Estimator> {
    #[must_use]
    pub fn with_config(mut self, config: MultiLayerStorageConfig) -> Self {
        self.config = config;
        self
    }

    /// Replaces the estimator used for insulated tanks.
    #[must_use]
    pub fn with_loss_estimator<E: ThermalLossEstimator>(
        self,
        loss_estimator: E,
    ) -> MultiLayerStorageBuilder<E> {
        MultiLayerStorageBuilder {
            geometry: self.geometry,
            ambient_temperature: self.ambient_temperature,
            config: self.config,
            loss_estimator,
        }
    }

    /// Computes the layers without registering them.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Configuration`] for an invalid level set and
    /// [`StorageError::LossEstimation`] if the estimator fails.
    pub fn layers<L: HeatLayers>(
        &self,
        heat_layers: &L,
    ) -> Result<Vec<StorageLayer<L::Bus>>, StorageError> {
        if self.ambient_temperature.is_empty() {
            return Err(ConfigurationError::EmptyAmbient.into());
        }
        if let Some(period) = self
            .ambient_temperature
            .values()
            .iter()
            .position(|t| !t.value.is_finite())
        {
            return Err(ConfigurationError::NonFiniteAmbient { period }.into());
        }

        let reference = heat_layers.reference_temperature();
        let levels = heat_layers.temperature_levels();
        let labels = self.labels(levels, reference)?;

        levels
            .iter()
            .zip(labels)
            .map(|(&level, label)| -> Result<_, StorageError> {
                let bus = heat_layers
                    .bus(level)
                    .ok_or(ConfigurationError::MissingBus { level })?;
                let capacity = nominal_capacity(self.geometry.volume(), level, reference);
                let losses = self.losses(&label, level, reference)?;

                Ok(StorageLayer::new(label, bus, level, capacity, losses))
            })
            .collect()
    }

    /// Computes the layers and adds them to `system` in ascending level order.
    ///
    /// Nothing is added if validation or loss estimation fails.
    /// A registration failure is returned as soon as it happens; layers added
    /// before it stay in `system`.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the configuration is invalid, the loss
    /// estimator fails, or `system` rejects a layer.
    pub fn build<L, S>(
        &self,
        heat_layers: &L,
        system: &mut S,
    ) -> Result<MultiLayerStorage<L::Bus>, StorageError>
    where
        L: HeatLayers,
        S: EnergySystem<L::Bus>,
    {
        let layers = self.layers(heat_layers)?;

        for layer in &layers {
            system.add_storage(layer).map_err(|err| {
                StorageError::registration_failed(format!("storage {}", layer.label()), err)
            })?;
            debug!(
                label = layer.label(),
                capacity_mwh = layer.nominal_capacity().get::<megawatt_hour>(),
                lossless = layer.losses().is_lossless(),
                "added storage layer"
            );
        }

        Ok(MultiLayerStorage {
            volume: self.geometry.volume(),
            reference_temperature: heat_layers.reference_temperature(),
            layers,
            limit_name: self.config.limit_name.clone(),
            shared_limit: None,
        })
    }

    /// Validates the level set and returns one label per level.
    fn labels(
        &self,
        levels: &[ThermodynamicTemperature],
        reference: ThermodynamicTemperature,
    ) -> Result<Vec<String>, ConfigurationError> {
        if levels.is_empty() {
            return Err(ConfigurationError::NoTemperatureLevels);
        }
        if !reference.value.is_finite() {
            return Err(ConfigurationError::NonFiniteReference { reference });
        }
        if let Some(&level) = levels.iter().find(|t| !t.value.is_finite()) {
            return Err(ConfigurationError::NonFiniteLevel { level });
        }

        for (index, pair) in levels.windows(2).enumerate() {
            if pair[1].partial_cmp(&pair[0]) != Some(Ordering::Greater) {
                return Err(ConfigurationError::LevelsNotIncreasing {
                    index: index + 1,
                    previous: pair[0],
                    level: pair[1],
                });
            }
        }

        // Levels are ascending, so the lowest one decides.
        if levels[0].partial_cmp(&reference) != Some(Ordering::Greater) {
            return Err(ConfigurationError::LevelNotAboveReference {
                level: levels[0],
                reference,
            });
        }

        let mut seen = HashSet::with_capacity(levels.len());
        levels
            .iter()
            .map(|&level| {
                let label = layer_label(&self.config.label_prefix, level);
                if seen.insert(label.clone()) {
                    Ok(label)
                } else {
                    Err(ConfigurationError::DuplicateLabel { label })
                }
            })
            .collect()
    }

    fn losses(
        &self,
        label: &str,
        level: ThermodynamicTemperature,
        reference: ThermodynamicTemperature,
    ) -> Result<StorageLosses, StorageError> {
        let Some(u_value) = self.geometry.u_value() else {
            return Ok(StorageLosses::none());
        };

        self.loss_estimator
            .losses(&LossInput {
                u_value,
                diameter: self.geometry.diameter(),
                temp_hot: level,
                temp_cold: reference,
                temp_ambient: self.ambient_temperature.clone(),
            })
            .map_err(|err| StorageError::loss_estimation_failed(label, err))
    }
}
