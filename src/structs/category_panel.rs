use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use crate::enums::category::Category;
use crate::enums::panel_status::PanelStatus;
use crate::structs::chart::bar_chart_data::BarChartData;
use crate::structs::chart::linear_gradient::LinearGradient;
use crate::structs::chart::word_cloud_entry::StyledWord;
use crate::structs::config::chart_config::ChartConfig;
use crate::structs::ranked_series::RankedSeries;

/// The published state of one dashboard card. Replaced as a whole on every
/// publish, never patched in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryPanel {
    pub category: Category,
    pub slug: String,
    pub title: String,
    pub description: String,
    pub status: PanelStatus,
    pub chart: BarChartData,
    pub word_cloud: Option<Vec<StyledWord>>,
    pub surface_height: Option<u32>,
    pub run_id: Option<Uuid>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl CategoryPanel {
    pub fn loading(category: Category, chart: &ChartConfig) -> Self {
        Self {
            category,
            slug: category.slug().to_string(),
            title: category.title().to_string(),
            description: category.description().to_string(),
            status: PanelStatus::Loading,
            chart: BarChartData::new(&RankedSeries::empty(), None, chart),
            word_cloud: None,
            surface_height: None,
            run_id: None,
            updated_at: None,
        }
    }

    /// Panel for a finished run. An empty series renders as the placeholder.
    pub fn from_series(
        category: Category,
        series: &RankedSeries,
        word_cloud: Option<Vec<StyledWord>>,
        fill: Option<LinearGradient>,
        chart: &ChartConfig,
    ) -> Self {
        let status = if series.is_empty() {
            PanelStatus::NoData { reason: None }
        } else {
            PanelStatus::Ready
        };

        Self {
            status,
            chart: BarChartData::new(series, fill, chart),
            word_cloud,
            run_id: Some(Uuid::new_v4()),
            updated_at: Some(Utc::now()),
            ..Self::loading(category, chart)
        }
    }

    pub fn no_data(category: Category, reason: &str, chart: &ChartConfig) -> Self {
        Self {
            status: PanelStatus::NoData { reason: Some(reason.to_string()) },
            run_id: Some(Uuid::new_v4()),
            updated_at: Some(Utc::now()),
            ..Self::loading(category, chart)
        }
    }

    pub fn with_surface(mut self, surface_height: Option<u32>, fill: Option<LinearGradient>) -> Self {
        self.surface_height = surface_height;
        self.chart.fill = fill;
        self
    }
}
