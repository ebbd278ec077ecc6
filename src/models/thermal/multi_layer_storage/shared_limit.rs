use uom::si::{
    energy::megawatt_hour,
    f64::{ThermodynamicTemperature, Volume},
    volume::cubic_meter,
};

use super::{StorageLayer, layer::volumetric_energy_density};

/// Weighted contribution of one layer to a [`SharedLimit`].
#[derive(Debug, Clone, PartialEq)]
pub struct SharedLimitTerm {
    /// Label of the storage whose content is weighted.
    pub label: String,

    /// Volume occupied per stored energy, m³/MWh.
    pub weight: f64,
}

/// Volume coupling of the layers of one tank.
///
/// Every layer is an independent storage to the optimizer, but all of them
/// use the same water. In every period the constraint
///
/// ```text
/// Σᵢ weightᵢ · contentᵢ(t) ≤ volume
/// ```
///
/// must hold, where `weightᵢ` is the inverse of the volumetric energy density
/// of layer `i` above the reference temperature.
#[derive(Debug, Clone, PartialEq)]
pub struct SharedLimit {
    name: String,
    terms: Vec<SharedLimitTerm>,
    upper_limit: Volume,
}

impl SharedLimit {
    pub(super) fn new<Bus>(
        name: String,
        layers: &[StorageLayer<Bus>],
        reference: ThermodynamicTemperature,
        upper_limit: Volume,
    ) -> Self {
        // Weights are in m³/MWh to match capacities in MWh.
        let terms = layers
            .iter()
            .map(|layer| SharedLimitTerm {
                label: layer.label().to_owned(),
                weight: volumetric_energy_density(layer.temperature(), reference).recip(),
            })
            .collect();

        Self {
            name,
            terms,
            upper_limit,
        }
    }

    /// Returns the constraint name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns one term per layer, in ascending level order.
    #[must_use]
    pub fn terms(&self) -> &[SharedLimitTerm] {
        &self.terms
    }

    /// Returns the tank volume bounding the weighted sum.
    #[must_use]
    pub fn upper_limit(&self) -> Volume {
        self.upper_limit
    }

    /// Returns the volume occupied by the given layer contents.
    ///
    /// `contents_mwh` holds one content per term, in MWh.
    ///
    /// Returns `None` if the number of contents differs from the number of terms.
    #[must_use]
    pub fn occupied_volume(&self, contents_mwh: &[f64]) -> Option<Volume> {
        (contents_mwh.len() == self.terms.len()).then(|| {
            Volume::new::<cubic_meter>(
                self.terms
                    .iter()
                    .zip(contents_mwh)
                    .map(|(term, content)| term.weight * content)
                    .sum(),
            )
        })
    }

    /// Returns `true` if the given layer contents fit into the tank.
    ///
    /// A relative tolerance of `1e-9` absorbs rounding in the weighted sum.
    #[must_use]
    pub fn admits(&self, contents_mwh: &[f64]) -> bool {
        self.occupied_volume(contents_mwh)
            .is_some_and(|v| v <= self.upper_limit * (1.0 + 1e-9))
    }

    /// Returns the volume a layer occupies when filled to its nominal capacity.
    #[must_use]
    pub fn volume_at_capacity<Bus>(&self, layer: &StorageLayer<Bus>) -> Option<Volume> {
        self.terms
            .iter()
            .find(|term| term.label == layer.label())
            .map(|term| {
                Volume::new::<cubic_meter>(
                    term.weight * layer.nominal_capacity().get::<megawatt_hour>(),
                )
            })
    }
}
