use std::fmt;

use thiserror::Error;
use uom::si::f64::ThermodynamicTemperature;

/// Side of a heat pump a temperature belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stream {
    Source,
    Sink,
}

impl fmt::Display for Stream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Source => f.write_str("source"),
            Self::Sink => f.write_str("sink"),
        }
    }
}

/// Operating points rejected by [`HeatPump`](super::HeatPump).
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[non_exhaustive]
pub enum CopError {
    /// A temperature is at or below absolute zero.
    #[error("{stream} temperature {temperature:?} is not above absolute zero")]
    NonPositiveTemperature {
        stream: Stream,
        temperature: ThermodynamicTemperature,
    },

    /// A glide has equal ends, so its logarithmic mean is undefined.
    #[error("{stream} glide has equal ends: {high:?} == {low:?}")]
    DegenerateGlide {
        stream: Stream,
        high: ThermodynamicTemperature,
        low: ThermodynamicTemperature,
    },

    /// The sink is not warmer than the source.
    #[error("sink {sink_temperature:?} is not above source {source_temperature:?}")]
    InvertedTemperatures {
        source_temperature: ThermodynamicTemperature,
        sink_temperature: ThermodynamicTemperature,
    },

    /// The COP evaluated to NaN or infinity.
    #[error("COP is not finite: {cop}")]
    NotFinite { cop: f64 },
}
