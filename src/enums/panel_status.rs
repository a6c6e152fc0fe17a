use serde::{Deserialize, Serialize};

/// What the renderer should draw for a category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum PanelStatus {
    /// Fetch not finished yet; render the loading placeholder.
    Loading,
    Ready,
    /// Empty series or a failed run; render the neutral placeholder.
    NoData { reason: Option<String> },
}

impl PanelStatus {
    pub fn is_ready(&self) -> bool {
        matches!(self, PanelStatus::Ready)
    }
}
