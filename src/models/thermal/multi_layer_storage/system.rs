use std::error::Error;

use super::{SharedLimit, StorageLayer};

/// Energy system graph that storage layers are added to.
pub trait EnergySystem<Bus> {
    type Error: Error + Send + Sync + 'static;

    /// Adds a storage with input and output flows on the layer's bus.
    ///
    /// # Errors
    ///
    /// Returns `Self::Error` if the graph rejects the storage.
    fn add_storage(&mut self, layer: &StorageLayer<Bus>) -> Result<(), Self::Error>;
}

/// Optimization model built from an energy system.
pub trait OptimizationModel {
    type Error: Error + Send + Sync + 'static;

    /// Adds a weighted-sum constraint over storage contents, for every period.
    ///
    /// # Errors
    ///
    /// Returns `Self::Error` if the model rejects the constraint,
    /// e.g. because its name is already taken.
    fn add_shared_limit(&mut self, limit: &SharedLimit) -> Result<(), Self::Error>;
}
