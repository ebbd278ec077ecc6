/// Naming of the entities a multi-layer storage registers.
///
/// Distinct tanks in one energy system need distinct prefixes and limit names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultiLayerStorageConfig {
    /// Prefix of every layer label; the level in °C is appended.
    pub label_prefix: String,

    /// Name of the shared volume constraint.
    pub limit_name: String,
}

impl Default for MultiLayerStorageConfig {
    fn default() -> Self {
        Self {
            label_prefix: "s_heat".to_owned(),
            limit_name: "storage_limit".to_owned(),
        }
    }
}

impl MultiLayerStorageConfig {
    /// Returns a config with both names derived from a tank name.
    ///
    /// ```
    /// use layered_heat_models::models::thermal::multi_layer_storage::MultiLayerStorageConfig;
    ///
    /// let config = MultiLayerStorageConfig::for_tank("north");
    /// assert_eq!(config.label_prefix, "s_heat_north");
    /// assert_eq!(config.limit_name, "storage_limit_north");
    /// ```
    #[must_use]
    pub fn for_tank(name: &str) -> Self {
        let defaults = Self::default();
        Self {
            label_prefix: format!("{}_{name}", defaults.label_prefix),
            limit_name: format!("{}_{name}", defaults.limit_name),
        }
    }
}
