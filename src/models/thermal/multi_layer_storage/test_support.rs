//! In-memory collaborators for storage tests.

use thiserror::Error;

use super::{EnergySystem, OptimizationModel, SharedLimit, StorageLayer};

#[derive(Debug, Error, PartialEq, Eq)]
pub(super) enum RecordingError {
    #[error("component {0} already exists")]
    Duplicate(String),

    #[error("component {0} refused")]
    Refused(String),
}

/// Records every storage it is given, rejecting repeated labels.
#[derive(Debug, Default)]
pub(super) struct RecordingSystem<Bus> {
    pub(super) storages: Vec<StorageLayer<Bus>>,

    /// Label that is refused when added.
    pub(super) refuse: Option<String>,
}

impl<Bus: Clone> EnergySystem<Bus> for RecordingSystem<Bus> {
    type Error = RecordingError;

    fn add_storage(&mut self, layer: &StorageLayer<Bus>) -> Result<(), Self::Error> {
        let label = layer.label().to_owned();
        if self.refuse.as_deref() == Some(layer.label()) {
            return Err(RecordingError::Refused(label));
        }
        if self.storages.iter().any(|s| s.label() == label) {
            return Err(RecordingError::Duplicate(label));
        }
        self.storages.push(layer.clone());
        Ok(())
    }
}

/// Records every shared limit it is given, rejecting repeated names.
#[derive(Debug, Default)]
pub(super) struct RecordingModel {
    pub(super) limits: Vec<SharedLimit>,
}

impl OptimizationModel for RecordingModel {
    type Error = RecordingError;

    fn add_shared_limit(&mut self, limit: &SharedLimit) -> Result<(), Self::Error> {
        if self.limits.iter().any(|l| l.name() == limit.name()) {
            return Err(RecordingError::Duplicate(limit.name().to_owned()));
        }
        self.limits.push(limit.clone());
        Ok(())
    }
}
