use std::collections::BTreeMap;
use serde::{Deserialize, Serialize};
use crate::enums::category::Category;
use crate::structs::config::category_config::CategoryConfig;
use crate::structs::config::chart_config::ChartConfig;
use crate::structs::config::source_config::SourceConfig;

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub source: SourceConfig,

    #[serde(default)]
    pub chart: ChartConfig,

    /// Keyed by category config key (`tech_stack`) or slug (`tech-stack`).
    #[serde(default)]
    pub categories: BTreeMap<String, CategoryConfig>,
}

impl Config {
    pub fn category(&self, category: Category) -> Option<&CategoryConfig> {
        self.categories
            .get(category.config_key())
            .or_else(|| self.categories.get(category.slug()))
    }

    /// Table names under `[categories]` that match no category.
    pub fn unknown_categories(&self) -> Vec<String> {
        self.categories
            .keys()
            .filter(|key| key.parse::<Category>().is_err())
            .cloned()
            .collect()
    }

    pub fn endpoint_for(&self, category: Category) -> String {
        self.category(category)
            .and_then(|c| c.endpoint.clone())
            .unwrap_or_else(|| category.default_endpoint())
    }
}
