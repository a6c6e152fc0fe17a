use std::sync::Arc;
use dashmap::DashMap;
use futures::future::join_all;
use crate::enums::category::Category;
use crate::errors::{ErrorHandler, RoleboardError, RoleboardResult};
use crate::services::category_pipeline::CategoryPipeline;
use crate::services::gradient_builder::GradientBuilder;
use crate::structs::category_panel::CategoryPanel;
use crate::structs::chart::chart_surface::ChartSurface;
use crate::structs::chart::linear_gradient::LinearGradient;
use crate::structs::config::chart_config::ChartConfig;
use crate::structs::config::config::Config;
use crate::structs::refresh_outcome::RefreshOutcome;
use crate::traits::aggregate_source::AggregateSource;

/// Owns the four category pipelines and the panels they publish.
pub struct Dashboard {
    pipelines: Vec<CategoryPipeline>,
    chart: ChartConfig,
    panels: Arc<DashMap<Category, CategoryPanel>>,
}

impl Dashboard {
    pub fn new(pipelines: Vec<CategoryPipeline>, chart: ChartConfig) -> Self {
        let panels = DashMap::new();
        for pipeline in &pipelines {
            panels.insert(pipeline.category, CategoryPanel::loading(pipeline.category, &chart));
        }

        Self {
            pipelines,
            chart,
            panels: Arc::new(panels),
        }
    }

    pub fn from_config(config: &Config) -> RoleboardResult<Self> {
        let pipelines = Category::ALL
            .iter()
            .map(|category| CategoryPipeline::from_config(*category, config.category(*category)))
            .collect::<RoleboardResult<Vec<_>>>()?;
        Ok(Self::new(pipelines, config.chart.clone()))
    }

    pub fn categories(&self) -> Vec<Category> {
        self.pipelines.iter().map(|p| p.category).collect()
    }

    pub fn pipeline(&self, category: Category) -> Option<&CategoryPipeline> {
        self.pipelines.iter().find(|p| p.category == category)
    }

    /// Runs every category concurrently on the current task. A failing
    /// category publishes a no-data panel and never blocks the others.
    pub async fn refresh(&self, source: &dyn AggregateSource) -> Vec<RefreshOutcome> {
        self.refresh_with(source, |_| {}).await
    }

    /// [`Dashboard::refresh`] calling `on_done` as each category finishes,
    /// in completion order.
    pub async fn refresh_with<F>(&self, source: &dyn AggregateSource, on_done: F) -> Vec<RefreshOutcome>
    where
        F: Fn(&RefreshOutcome) + Sync,
    {
        let on_done = &on_done;
        let runs = self.pipelines.iter().map(|pipeline| async move {
            let outcome = RefreshOutcome {
                category: pipeline.category,
                result: self.refresh_category(pipeline.category, source).await,
            };
            on_done(&outcome);
            outcome
        });

        let outcomes = join_all(runs).await;
        let failed = outcomes.iter().filter(|o| o.result.is_err()).count();
        log::info!("✅ Refreshed {} categories ({} without data)", outcomes.len() - failed, failed);
        outcomes
    }

    /// Fetches and publishes one category; returns the number of ranked entries.
    pub async fn refresh_category(&self, category: Category, source: &dyn AggregateSource) -> RoleboardResult<usize> {
        let pipeline = self.pipeline(category).ok_or_else(|| RoleboardError::UnknownCategory {
            name: category.slug().to_string(),
            available: self.categories().iter().map(|c| c.slug().to_string()).collect(),
        })?;

        match pipeline.run(source).await {
            Ok(aggregated) => {
                let count = aggregated.series.len();
                self.publish_run(category, |chart, fill| {
                    CategoryPanel::from_series(category, &aggregated.series, aggregated.word_cloud, fill, chart)
                });
                Ok(count)
            }
            Err(error) => {
                ErrorHandler::handle_category_error(category.slug(), &error);
                let reason = error.to_string();
                self.publish_run(category, |chart, _| CategoryPanel::no_data(category, &reason, chart));
                Err(error)
            }
        }
    }

    /// Second phase of the gradient protocol: the renderer reports that the
    /// category's surface is mounted (or not). The gradient is rebuilt from
    /// the reported height and the panel republished.
    pub fn surface_ready(&self, category: Category, surface: &ChartSurface) -> RoleboardResult<CategoryPanel> {
        let mut entry = self
            .panels
            .get_mut(&category)
            .ok_or_else(|| RoleboardError::UnknownCategory {
                name: category.slug().to_string(),
                available: self.categories().iter().map(|c| c.slug().to_string()).collect(),
            })?;

        let fill = GradientBuilder::build(surface, &self.chart.color_stops());
        if fill.is_none() {
            log::debug!("🖼️ Surface for {} not mounted yet", category);
        }

        let panel = entry.value().clone().with_surface(surface.height, fill);
        *entry = panel.clone();
        Ok(panel)
    }

    pub fn panel(&self, category: Category) -> Option<CategoryPanel> {
        self.panels.get(&category).map(|p| p.value().clone())
    }

    /// Published panels in page order.
    pub fn panels(&self) -> Vec<CategoryPanel> {
        self.pipelines
            .iter()
            .filter_map(|p| self.panel(p.category))
            .collect()
    }

    pub fn chart_config(&self) -> &ChartConfig {
        &self.chart
    }

    /// Replaces the category's panel while holding its map entry, so a
    /// concurrent surface report is never lost. The gradient is rebuilt from
    /// the last reported surface height.
    fn publish_run<F>(&self, category: Category, build: F)
    where
        F: FnOnce(&ChartConfig, Option<LinearGradient>) -> CategoryPanel,
    {
        let mut entry = self
            .panels
            .entry(category)
            .or_insert_with(|| CategoryPanel::loading(category, &self.chart));

        let surface_height = entry.surface_height;
        let fill = surface_height
            .and_then(|height| GradientBuilder::build(&ChartSurface::mounted(height), &self.chart.color_stops()));

        *entry = build(&self.chart, fill.clone()).with_surface(surface_height, fill);
    }
}
