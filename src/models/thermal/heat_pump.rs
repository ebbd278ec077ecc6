//! Heat pump coefficient of performance.
//!
//! [`HeatPump`] is a [`twine_core::Model`] over the corrected Lorenz COP in
//! [`support::thermo::cop`](crate::support::thermo::cop). Unlike the raw
//! formulas, which clamp the temperature lift and keep going, the model
//! rejects operating points where the result would not be physically
//! meaningful.

mod error;

pub use error::{CopError, Stream};

use twine_core::Model;
use uom::si::{f64::ThermodynamicTemperature, thermodynamic_temperature::kelvin};

use crate::support::{
    constraint::{ConstraintResult, StrictlyPositive},
    thermo::{
        EffectiveTemperature,
        cop::{self, DEFAULT_COP_REF, MIN_TEMPERATURE_LIFT},
    },
};

/// Heat pump characterized by its measured COP at B0/W35.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeatPump {
    cop_ref: f64,
}

impl HeatPump {
    /// Creates a heat pump with the given COP at B0/W35.
    ///
    /// # Errors
    ///
    /// Returns an error if `cop_ref` is not strictly positive.
    pub fn new(cop_ref: f64) -> ConstraintResult<Self> {
        Ok(Self {
            cop_ref: StrictlyPositive::new(cop_ref)?.into_inner(),
        })
    }

    /// Returns the COP at B0/W35.
    #[must_use]
    pub fn cop_ref(&self) -> f64 {
        self.cop_ref
    }
}

impl Default for HeatPump {
    fn default() -> Self {
        Self {
            cop_ref: DEFAULT_COP_REF,
        }
    }
}

/// Source and sink streams of a heat pump operating point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeatPumpInput {
    pub source: EffectiveTemperature,
    pub sink: EffectiveTemperature,
}

/// Performance at a heat pump operating point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeatPumpOutput {
    /// Realistic COP.
    pub cop: f64,

    /// Ideal Lorenz COP the realistic COP is scaled from.
    pub lorenz_cop: f64,

    /// Effective source temperature.
    pub source_temperature: ThermodynamicTemperature,

    /// Effective sink temperature.
    pub sink_temperature: ThermodynamicTemperature,
}

impl Model for HeatPump {
    type Input = HeatPumpInput;
    type Output = HeatPumpOutput;
    type Error = CopError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let source_temperature = effective(Stream::Source, input.source)?;
        let sink_temperature = effective(Stream::Sink, input.sink)?;

        let lift = sink_temperature.get::<kelvin>() - source_temperature.get::<kelvin>();
        if lift <= MIN_TEMPERATURE_LIFT {
            return Err(CopError::InvertedTemperatures {
                source_temperature,
                sink_temperature,
            });
        }

        let lorenz_cop = cop::lorenz_cop(source_temperature, sink_temperature);
        let cop = cop::calc_cop(input.source, input.sink, self.cop_ref());
        if !cop.is_finite() {
            return Err(CopError::NotFinite { cop });
        }

        Ok(HeatPumpOutput {
            cop,
            lorenz_cop,
            source_temperature,
            sink_temperature,
        })
    }
}

/// Validates a stream and returns its effective temperature.
fn effective(
    stream: Stream,
    temperature: EffectiveTemperature,
) -> Result<ThermodynamicTemperature, CopError> {
    let check_positive = |t: ThermodynamicTemperature| {
        if t.get::<kelvin>() > 0.0 {
            Ok(())
        } else {
            Err(CopError::NonPositiveTemperature {
                stream,
                temperature: t,
            })
        }
    };

    match temperature {
        EffectiveTemperature::Single(t) => check_positive(t)?,
        EffectiveTemperature::Glide { high, low } => {
            check_positive(high)?;
            check_positive(low)?;
            if high == low {
                return Err(CopError::DegenerateGlide { stream, high, low });
            }
        }
    }

    Ok(temperature.effective())
}
