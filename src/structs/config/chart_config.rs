use serde::{Deserialize, Serialize};
use crate::enums::chart_orientation::ChartOrientation;
use crate::helpers::config_helper::ConfigHelper;
use crate::structs::chart::color_stops::ColorStops;

/// Fixed visual parameters handed to the bar-chart renderer.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ChartConfig {
    #[serde(default = "ConfigHelper::default_bar_thickness")]
    pub bar_thickness: u32,

    #[serde(default = "ConfigHelper::default_border_radius")]
    pub border_radius: u32,

    #[serde(default)]
    pub orientation: ChartOrientation,

    #[serde(default = "ConfigHelper::default_gradient_start")]
    pub gradient_start: String,

    #[serde(default = "ConfigHelper::default_gradient_end")]
    pub gradient_end: String,
}

impl ChartConfig {
    pub fn color_stops(&self) -> ColorStops {
        ColorStops::new(&self.gradient_start, &self.gradient_end)
    }
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            bar_thickness: ConfigHelper::default_bar_thickness(),
            border_radius: ConfigHelper::default_border_radius(),
            orientation: ChartOrientation::default(),
            gradient_start: ConfigHelper::default_gradient_start(),
            gradient_end: ConfigHelper::default_gradient_end(),
        }
    }
}
