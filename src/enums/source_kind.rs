use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    #[serde(rename = "http")]
    Http,
    #[serde(rename = "directory")]
    Directory,
}

impl Default for SourceKind {
    fn default() -> Self {
        SourceKind::Http
    }
}
