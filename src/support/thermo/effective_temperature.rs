use uom::si::{f64::ThermodynamicTemperature, thermodynamic_temperature::kelvin};

use super::cop::mean_logarithmic_temperature;

/// Temperature of a heat pump source or sink stream.
///
/// A stream either sits at a single temperature or glides between two.
/// Glides are reduced to their logarithmic mean before entering an
/// efficiency bound.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EffectiveTemperature {
    /// Isothermal stream.
    Single(ThermodynamicTemperature),

    /// Stream gliding between `high` and `low`.
    ///
    /// The ends must differ, otherwise the logarithmic mean is undefined.
    Glide {
        high: ThermodynamicTemperature,
        low: ThermodynamicTemperature,
    },
}

impl EffectiveTemperature {
    /// Returns the single temperature representing this stream.
    ///
    /// For [`Glide`](Self::Glide) this is the logarithmic mean of both ends,
    /// which is not finite if they are equal.
    #[must_use]
    pub fn effective(&self) -> ThermodynamicTemperature {
        match *self {
            Self::Single(t) => t,
            Self::Glide { high, low } => mean_logarithmic_temperature(high, low),
        }
    }

    /// Returns the effective temperature in K.
    #[must_use]
    pub fn kelvin(&self) -> f64 {
        self.effective().get::<kelvin>()
    }
}

impl From<ThermodynamicTemperature> for EffectiveTemperature {
    fn from(t: ThermodynamicTemperature) -> Self {
        Self::Single(t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::thermodynamic_temperature::degree_celsius;

    #[test]
    fn single_is_passed_through() {
        let t = ThermodynamicTemperature::new::<degree_celsius>(35.0);
        assert_eq!(EffectiveTemperature::from(t).effective(), t);
        assert_relative_eq!(
            EffectiveTemperature::from(t).kelvin(),
            308.15,
            epsilon = 1e-12
        );
    }

    #[test]
    fn glide_lies_between_its_ends() {
        let glide = EffectiveTemperature::Glide {
            high: ThermodynamicTemperature::new::<degree_celsius>(35.0),
            low: ThermodynamicTemperature::new::<degree_celsius>(30.0),
        };

        let t = glide.effective().get::<degree_celsius>();
        assert!(t > 30.0 && t < 35.0);

        // Log mean is slightly below the arithmetic mean.
        assert_relative_eq!(t, 32.5, epsilon = 0.01);
        assert!(t < 32.5);
    }
}
