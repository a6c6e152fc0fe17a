use serde::{Deserialize, Serialize};
use crate::enums::raw_key::RawKey;

/// Field names accepted for a record's key.
pub const RECORD_KEY_FIELDS: &str = "label/code/representative/category";

/// Field names accepted for a record's count.
pub const RECORD_COUNT_FIELDS: &str = "total/frequency/count";

/// One element of an array-shaped payload, e.g. `{"label": 1, "total": 5}`
/// or `{"representative": "AWS 경험", "frequency": 12}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawRecord {
    #[serde(alias = "code", alias = "representative", alias = "category")]
    pub label: RawKey,

    #[serde(alias = "frequency", alias = "count")]
    pub total: u64,
}
