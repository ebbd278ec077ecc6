//! Heat pump efficiency bounds and realistic COP.
//!
//! The realistic COP follows the correction method of Reinholdt et al. (2016):
//! the ideal Lorenz COP at the actual operating point is scaled by the ratio
//! between a measured COP at standard rating conditions (B0/W35, EN 14511)
//! and the Lorenz COP at those same conditions.
//!
//! ```text
//! cpf = COP_ref / COP_lorenz(0/−3 °C, 35/30 °C)
//! COP = cpf · COP_lorenz(T_source, T_sink)
//! ```
//!
//! The efficiency bounds clamp the temperature lift to at least 1 mK, so an
//! inverted or degenerate operating point yields a large but finite value
//! rather than a division blow-up. Such values are not physically meaningful.
//! Use [`HeatPump`](crate::models::thermal::heat_pump::HeatPump) for a
//! validated evaluation.

use uom::si::{
    f64::ThermodynamicTemperature,
    thermodynamic_temperature::{degree_celsius, kelvin},
};

use crate::support::profile::{Profile, ProfileError};

use super::EffectiveTemperature;

/// Lower bound on the temperature lift in efficiency bounds, K.
pub const MIN_TEMPERATURE_LIFT: f64 = 1e-3;

/// Measured COP at B0/W35 used when none is given.
pub const DEFAULT_COP_REF: f64 = 4.6;

/// Cap and calibration COP of [`clipped_carnot_cop`] used when none is given.
pub const DEFAULT_CLIPPED_COP_NORM: f64 = 4.7;

/// Returns the Carnot efficiency bound of a heat pump lifting heat from `t_in` to `t_out`.
///
/// Computes `t_out / max(t_out − t_in, 1 mK)`.
#[must_use]
pub fn carnot_efficiency(t_in: ThermodynamicTemperature, t_out: ThermodynamicTemperature) -> f64 {
    clamped_bound(t_in.get::<kelvin>(), t_out.get::<kelvin>())
}

/// Returns the ideal COP of an infinite number of heat pump processes (Lorenz, 1895).
///
/// Same closed form as [`carnot_efficiency`], but intended for effective
/// temperatures of gliding streams.
#[must_use]
pub fn lorenz_cop(t_in: ThermodynamicTemperature, t_out: ThermodynamicTemperature) -> f64 {
    clamped_bound(t_in.get::<kelvin>(), t_out.get::<kelvin>())
}

fn clamped_bound(t_in: f64, t_out: f64) -> f64 {
    t_out / (t_out - t_in).max(MIN_TEMPERATURE_LIFT)
}

/// Returns the logarithmic mean of a temperature glide.
///
/// Computes `(t_low − t_high) / ln(t_low / t_high)` in K.
/// The result is not finite when `t_high == t_low` or either is not positive.
#[must_use]
pub fn mean_logarithmic_temperature(
    t_high: ThermodynamicTemperature,
    t_low: ThermodynamicTemperature,
) -> ThermodynamicTemperature {
    let high = t_high.get::<kelvin>();
    let low = t_low.get::<kelvin>();
    ThermodynamicTemperature::new::<kelvin>((low - high) / (low / high).ln())
}

/// Source glide of the B0/W35 rating point.
#[must_use]
pub fn reference_source() -> EffectiveTemperature {
    EffectiveTemperature::Glide {
        high: ThermodynamicTemperature::new::<degree_celsius>(0.0),
        low: ThermodynamicTemperature::new::<degree_celsius>(-3.0),
    }
}

/// Sink glide of the B0/W35 rating point.
#[must_use]
pub fn reference_sink() -> EffectiveTemperature {
    EffectiveTemperature::Glide {
        high: ThermodynamicTemperature::new::<degree_celsius>(35.0),
        low: ThermodynamicTemperature::new::<degree_celsius>(30.0),
    }
}

/// Returns the factor scaling the Lorenz COP to a realistic COP.
#[must_use]
pub fn correction_factor(cop_ref: f64) -> f64 {
    cop_ref / lorenz_cop(reference_source().effective(), reference_sink().effective())
}

/// Returns the realistic COP of a heat pump between `source` and `sink`.
///
/// `cop_ref` is the measured COP at B0/W35, typically [`DEFAULT_COP_REF`].
/// Calling this with the rating glides returns exactly `cop_ref`.
///
/// A [`Glide`](EffectiveTemperature::Glide) with equal ends gives a
/// non-finite result, which callers must treat as a configuration error.
#[must_use]
pub fn calc_cop(source: EffectiveTemperature, sink: EffectiveTemperature, cop_ref: f64) -> f64 {
    correction_factor(cop_ref) * lorenz_cop(source.effective(), sink.effective())
}

/// Returns a Carnot-scaled COP capped at `cop_norm`.
///
/// The Carnot efficiency at the operating point is calibrated so that 0 °C to
/// 35 °C gives `cop_norm`, and the result never exceeds `cop_norm`.
/// This is the simpler correction used before glides were modeled.
#[must_use]
pub fn clipped_carnot_cop(
    source: ThermodynamicTemperature,
    sink: ThermodynamicTemperature,
    cop_norm: f64,
) -> f64 {
    let cpf = cop_norm
        / carnot_efficiency(
            ThermodynamicTemperature::new::<degree_celsius>(0.0),
            ThermodynamicTemperature::new::<degree_celsius>(35.0),
        );
    (carnot_efficiency(source, sink) * cpf).min(cop_norm)
}

/// Realistic COP over optimization periods.
///
/// Evaluates [`calc_cop`] for source and sink temperature profiles, e.g. an
/// hourly ground temperature against a fixed flow temperature.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CopCurve {
    pub cop_ref: f64,
}

impl Default for CopCurve {
    fn default() -> Self {
        Self {
            cop_ref: DEFAULT_COP_REF,
        }
    }
}

impl CopCurve {
    /// Returns the COP in every period.
    ///
    /// A constant profile is broadcast against a series.
    ///
    /// # Errors
    ///
    /// Returns [`ProfileError::LengthMismatch`] if both profiles are series of different length.
    pub fn evaluate(
        &self,
        source: &Profile<EffectiveTemperature>,
        sink: &Profile<EffectiveTemperature>,
    ) -> Result<Profile<f64>, ProfileError> {
        source.zip_with(sink, |&source, &sink| calc_cop(source, sink, self.cop_ref))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::{assert_relative_eq, relative_eq};
    use rstest::rstest;

    use crate::support::units::convert::celsius_to_kelvin;

    fn celsius(t: f64) -> ThermodynamicTemperature {
        ThermodynamicTemperature::new::<degree_celsius>(t)
    }

    fn single(t: f64) -> EffectiveTemperature {
        EffectiveTemperature::Single(celsius(t))
    }

    #[test]
    fn carnot_matches_closed_form() {
        assert_relative_eq!(
            carnot_efficiency(celsius(0.0), celsius(35.0)),
            celsius_to_kelvin(35.0) / 35.0,
            epsilon = 1e-9
        );
    }

    #[test]
    fn carnot_clamps_inverted_lift() {
        let inverted = carnot_efficiency(celsius(50.0), celsius(10.0));
        assert!(inverted.is_finite());
        assert_relative_eq!(inverted, celsius_to_kelvin(10.0) / MIN_TEMPERATURE_LIFT);

        let equal = carnot_efficiency(celsius(20.0), celsius(20.0));
        assert_relative_eq!(equal, celsius_to_kelvin(20.0) / MIN_TEMPERATURE_LIFT);
    }

    #[test]
    fn carnot_is_monotonic_in_sink_temperature() {
        let t_in = celsius(10.0);
        let values: Vec<f64> = (0..50)
            .map(|i| carnot_efficiency(t_in, celsius(10.01 + 2.0 * f64::from(i))))
            .collect();

        // Lower lift always gives a higher bound, so the sequence falls as t_out rises.
        assert!(values.windows(2).all(|w| w[1] <= w[0]));
    }

    #[test]
    fn lorenz_equals_carnot_formula() {
        let (t_in, t_out) = (celsius(-5.0), celsius(55.0));
        assert_eq!(lorenz_cop(t_in, t_out), carnot_efficiency(t_in, t_out));
    }

    #[test]
    fn log_mean_of_glide() {
        let t = mean_logarithmic_temperature(celsius(0.0), celsius(-3.0));
        assert_relative_eq!(t.get::<kelvin>(), 271.647_239, epsilon = 1e-6);
    }

    #[test]
    fn log_mean_is_undefined_for_equal_ends() {
        let t = mean_logarithmic_temperature(celsius(40.0), celsius(40.0));
        assert!(!t.get::<kelvin>().is_finite());
    }

    #[test]
    fn reference_glides_reproduce_cop_ref() {
        assert_relative_eq!(
            calc_cop(reference_source(), reference_sink(), DEFAULT_COP_REF),
            DEFAULT_COP_REF,
            epsilon = 1e-12
        );
        assert_relative_eq!(
            calc_cop(reference_source(), reference_sink(), 3.9),
            3.9,
            epsilon = 1e-12
        );
    }

    #[test]
    fn single_temperatures_near_rating_point() {
        let cop = calc_cop(single(0.0), single(35.0), DEFAULT_COP_REF);
        assert_relative_eq!(cop, 4.504_684, epsilon = 1e-5);
        assert!(relative_eq!(cop, DEFAULT_COP_REF, max_relative = 0.03));
    }

    #[test]
    fn higher_sink_temperature_lowers_cop() {
        let cop_50 = calc_cop(single(10.0), single(50.0), DEFAULT_COP_REF);
        let cop_35 = calc_cop(single(10.0), single(35.0), DEFAULT_COP_REF);

        assert!(cop_50.is_finite());
        assert!(cop_50 < cop_35);
        assert_relative_eq!(cop_50, 4.133_466, epsilon = 1e-5);
    }

    #[test]
    fn equal_glide_is_not_finite() {
        let glide = EffectiveTemperature::Glide {
            high: celsius(35.0),
            low: celsius(35.0),
        };
        assert!(!calc_cop(single(0.0), glide, DEFAULT_COP_REF).is_finite());
    }

    #[test]
    fn repeated_calls_are_identical() {
        let a = calc_cop(single(7.0), single(45.0), DEFAULT_COP_REF);
        let b = calc_cop(single(7.0), single(45.0), DEFAULT_COP_REF);
        assert_eq!(a.to_bits(), b.to_bits());
    }

    #[rstest]
    #[case(0.0, 35.0, DEFAULT_CLIPPED_COP_NORM)]
    #[case(10.0, 35.0, DEFAULT_CLIPPED_COP_NORM)]
    #[case(10.0, 50.0, 4.312_687)]
    #[case(10.0, 70.0, 3.053_068)]
    fn clipped_carnot(#[case] source: f64, #[case] sink: f64, #[case] expected: f64) {
        assert_relative_eq!(
            clipped_carnot_cop(celsius(source), celsius(sink), DEFAULT_CLIPPED_COP_NORM),
            expected,
            epsilon = 1e-5
        );
    }

    #[test]
    fn curve_broadcasts_constant_sink() {
        let curve = CopCurve::default();
        let source = Profile::Series(vec![single(0.0), single(5.0), single(10.0)]);
        let sink = Profile::Constant(single(35.0));

        let Profile::Series(cops) = curve.evaluate(&source, &sink).unwrap() else {
            panic!("expected a series");
        };

        assert_eq!(cops.len(), 3);
        assert!(cops.windows(2).all(|w| w[0] < w[1]));
        assert_relative_eq!(
            cops[2],
            calc_cop(single(10.0), single(35.0), DEFAULT_COP_REF)
        );
    }

    #[test]
    fn curve_rejects_unequal_series() {
        let curve = CopCurve::default();
        let source = Profile::Series(vec![single(0.0); 3]);
        let sink = Profile::Series(vec![single(35.0); 2]);

        assert_eq!(
            curve.evaluate(&source, &sink),
            Err(ProfileError::LengthMismatch { left: 3, right: 2 })
        );
    }
}
