use serde::{Deserialize, Serialize};
use crate::enums::chart_orientation::ChartOrientation;
use crate::structs::chart::linear_gradient::LinearGradient;
use crate::structs::config::chart_config::ChartConfig;
use crate::structs::ranked_series::RankedSeries;

/// Everything the bar-chart renderer needs for one category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarChartData {
    pub labels: Vec<String>,
    pub values: Vec<u64>,
    /// `None` until the target surface reports its height.
    pub fill: Option<LinearGradient>,
    pub bar_thickness: u32,
    pub border_radius: u32,
    pub orientation: ChartOrientation,
    pub index_axis: String,
}

impl BarChartData {
    pub fn new(series: &RankedSeries, fill: Option<LinearGradient>, chart: &ChartConfig) -> Self {
        Self {
            labels: series.labels(),
            values: series.values(),
            fill,
            bar_thickness: chart.bar_thickness,
            border_radius: chart.border_radius,
            orientation: chart.orientation,
            index_axis: chart.orientation.index_axis().to_string(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}
