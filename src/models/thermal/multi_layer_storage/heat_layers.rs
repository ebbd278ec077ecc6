use uom::si::f64::ThermodynamicTemperature;

/// Discretized temperature levels of a heat network and their buses.
///
/// Each level is a thermal commodity bus in the energy system; a storage
/// layer charges from and discharges to the bus of its level.
pub trait HeatLayers {
    /// Handle of a thermal bus in the energy system.
    type Bus: Clone;

    /// Returns the temperature levels in ascending order.
    fn temperature_levels(&self) -> &[ThermodynamicTemperature];

    /// Returns the temperature of zero stored energy.
    fn reference_temperature(&self) -> ThermodynamicTemperature;

    /// Returns the bus of `level`, if it is one of the levels.
    fn bus(&self, level: ThermodynamicTemperature) -> Option<Self::Bus>;
}

/// A [`HeatLayers`] implementation holding its levels and buses directly.
#[derive(Debug, Clone, PartialEq)]
pub struct LayeredBuses<Bus> {
    reference_temperature: ThermodynamicTemperature,
    levels: Vec<ThermodynamicTemperature>,
    buses: Vec<Bus>,
}

impl<Bus> LayeredBuses<Bus> {
    /// Creates an empty level set over the given reference temperature.
    #[must_use]
    pub fn new(reference_temperature: ThermodynamicTemperature) -> Self {
        Self {
            reference_temperature,
            levels: Vec::new(),
            buses: Vec::new(),
        }
    }

    /// Adds a level with its bus.
    ///
    /// Levels are kept in insertion order and validated when a storage is built.
    #[must_use]
    pub fn with_level(mut self, level: ThermodynamicTemperature, bus: Bus) -> Self {
        self.levels.push(level);
        self.buses.push(bus);
        self
    }
}

impl<Bus: Clone> HeatLayers for LayeredBuses<Bus> {
    type Bus = Bus;

    fn temperature_levels(&self) -> &[ThermodynamicTemperature] {
        &self.levels
    }

    fn reference_temperature(&self) -> ThermodynamicTemperature {
        self.reference_temperature
    }

    fn bus(&self, level: ThermodynamicTemperature) -> Option<Bus> {
        self.levels
            .iter()
            .position(|&t| t == level)
            .map(|i| self.buses[i].clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::thermodynamic_temperature::degree_celsius;

    #[test]
    fn looks_up_bus_by_level() {
        let t = |c| ThermodynamicTemperature::new::<degree_celsius>(c);
        let layers = LayeredBuses::new(t(20.0))
            .with_level(t(40.0), "b_th_40")
            .with_level(t(60.0), "b_th_60");

        assert_eq!(layers.temperature_levels(), &[t(40.0), t(60.0)]);
        assert_eq!(layers.bus(t(60.0)), Some("b_th_60"));
        assert_eq!(layers.bus(t(50.0)), None);
    }
}
