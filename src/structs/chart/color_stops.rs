use serde::{Deserialize, Serialize};

/// The two fixed colors of the bar fill ramp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorStops {
    pub color_start: String,
    pub color_end: String,
}

impl ColorStops {
    pub fn new(color_start: &str, color_end: &str) -> Self {
        Self {
            color_start: color_start.to_string(),
            color_end: color_end.to_string(),
        }
    }
}
