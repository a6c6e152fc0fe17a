use serde::{Deserialize, Serialize};

/// Axis the bars grow along.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
pub enum ChartOrientation {
    #[serde(rename = "horizontal")]
    Horizontal,
    #[serde(rename = "vertical")]
    Vertical,
}

impl ChartOrientation {
    /// Chart.js `indexAxis` value for this orientation
    pub fn index_axis(&self) -> &'static str {
        match self {
            ChartOrientation::Horizontal => "y",
            ChartOrientation::Vertical => "x",
        }
    }
}

impl Default for ChartOrientation {
    fn default() -> Self {
        ChartOrientation::Horizontal
    }
}
