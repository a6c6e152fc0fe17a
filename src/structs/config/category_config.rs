use std::collections::BTreeMap;
use serde::{Deserialize, Serialize};
use crate::enums::raw_key::RawKey;

/// Per-category overrides. Anything left out falls back to the category's
/// built-in pipeline settings.
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct CategoryConfig {
    #[serde(default)]
    pub endpoint: Option<String>,

    /// Replaces the built-in exclusion set; `[]` clears it.
    #[serde(default)]
    pub exclude_keys: Option<Vec<RawKey>>,

    #[serde(default)]
    pub limit: Option<usize>,

    #[serde(default)]
    pub word_cloud: Option<bool>,

    /// Code -> label entries layered over the built-in label map.
    #[serde(default)]
    pub labels: BTreeMap<String, String>,
}
