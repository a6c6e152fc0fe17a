use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordCloudEntry {
    pub text: String,
    pub value: u64,
}

/// Word-cloud entry with its display parameters already applied, for
/// renderers that cannot call back into the size and rotation functions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyledWord {
    pub text: String,
    pub value: u64,
    pub font_size: f64,
    pub rotate: u16,
}
