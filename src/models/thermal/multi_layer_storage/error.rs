use thiserror::Error;
use uom::si::f64::{Length, ThermodynamicTemperature, Volume};

use crate::support::constraint::ConstraintError;

/// A tank or level set that cannot describe a physical storage.
///
/// These are detected before anything is registered with the energy system,
/// so a rejected tank leaves no partial state behind.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum ConfigurationError {
    #[error("invalid tank diameter {diameter:?}: {reason}")]
    Diameter {
        diameter: Length,
        reason: ConstraintError,
    },

    #[error("invalid tank volume {volume:?}: {reason}")]
    Volume {
        volume: Volume,
        reason: ConstraintError,
    },

    #[error("insulation thickness is not finite")]
    InsulationThickness,

    #[error("ambient temperature series is empty")]
    EmptyAmbient,

    #[error("ambient temperature in period {period} is not finite")]
    NonFiniteAmbient { period: usize },

    #[error("no temperature levels given")]
    NoTemperatureLevels,

    #[error("reference temperature {reference:?} is not finite")]
    NonFiniteReference { reference: ThermodynamicTemperature },

    /// An infinite level would get infinite capacity and a zero volume weight.
    #[error("level {level:?} is not finite")]
    NonFiniteLevel { level: ThermodynamicTemperature },

    /// Levels must be strictly increasing.
    #[error("level {index} ({level:?}) is not above the previous level ({previous:?})")]
    LevelsNotIncreasing {
        index: usize,
        previous: ThermodynamicTemperature,
        level: ThermodynamicTemperature,
    },

    /// A level at or below the reference would have no usable capacity.
    #[error("level {level:?} is not above the reference temperature {reference:?}")]
    LevelNotAboveReference {
        level: ThermodynamicTemperature,
        reference: ThermodynamicTemperature,
    },

    /// Two distinct levels format to the same storage label.
    #[error("duplicate storage label {label}")]
    DuplicateLabel { label: String },

    #[error("no bus for level {level:?}")]
    MissingBus { level: ThermodynamicTemperature },
}

/// Errors from building a multi-layer storage or registering its shared limit.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("invalid storage configuration")]
    Configuration(#[from] ConfigurationError),

    /// The thermal loss estimator failed for a layer.
    #[error("loss estimation failed for {label}")]
    LossEstimation {
        label: String,

        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The energy system or optimization model rejected a registration.
    #[error("registration failed: {context}")]
    Registration {
        context: String,

        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The shared limit of this tank is already part of a model.
    #[error("shared limit {name} was already added")]
    SharedLimitAlreadyAdded { name: String },
}

impl StorageError {
    pub(super) fn loss_estimation_failed(
        label: impl Into<String>,
        err: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::LossEstimation {
            label: label.into(),
            source: Box::new(err),
        }
    }

    pub(super) fn registration_failed(
        context: impl Into<String>,
        err: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Registration {
            context: context.into(),
            source: Box::new(err),
        }
    }
}
