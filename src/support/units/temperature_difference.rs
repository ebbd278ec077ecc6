use uom::si::{
    f64::{TemperatureInterval, ThermodynamicTemperature},
    temperature_interval::kelvin as delta_kelvin,
    thermodynamic_temperature::kelvin as abs_kelvin,
};

/// Extension trait for computing temperature differences.
///
/// [`uom`] does not allow subtracting two [`ThermodynamicTemperature`] values
/// into a [`TemperatureInterval`] directly, see
/// [#380](https://github.com/iliekturtles/uom/issues/380).
/// The lift of a storage layer above its reference temperature is such an
/// interval, so this trait provides [`minus`](Self::minus).
pub trait TemperatureDifference {
    /// Returns the temperature difference `self - other`.
    fn minus(self, other: Self) -> TemperatureInterval;
}

impl TemperatureDifference for ThermodynamicTemperature {
    fn minus(self, other: Self) -> TemperatureInterval {
        TemperatureInterval::new::<delta_kelvin>(
            self.get::<abs_kelvin>() - other.get::<abs_kelvin>(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::thermodynamic_temperature::degree_celsius;

    #[test]
    fn layer_lift_above_reference() {
        let level = ThermodynamicTemperature::new::<degree_celsius>(80.0);
        let reference = ThermodynamicTemperature::new::<abs_kelvin>(293.15);

        assert_relative_eq!(
            level.minus(reference).get::<delta_kelvin>(),
            60.0,
            epsilon = 1e-12
        );
        assert_relative_eq!(
            reference.minus(level).get::<delta_kelvin>(),
            -60.0,
            epsilon = 1e-12
        );
    }
}
