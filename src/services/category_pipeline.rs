use std::sync::Arc;
use serde_json::Value;
use crate::config::constants::{NO_RESPONSE_CODE, TECH_STACK_LIMIT};
use crate::enums::category::Category;
use crate::errors::RoleboardResult;
use crate::services::ranked_aggregator::RankedAggregator;
use crate::services::word_cloud_mapper::WordCloudMapper;
use crate::structs::aggregate_options::AggregateOptions;
use crate::structs::aggregated_category::AggregatedCategory;
use crate::structs::category_label_map::CategoryLabelMap;
use crate::structs::config::category_config::CategoryConfig;
use crate::traits::aggregate_source::AggregateSource;

/// Fetch -> aggregate -> (word cloud) for one category.
#[derive(Debug, Clone)]
pub struct CategoryPipeline {
    pub category: Category,
    pub options: AggregateOptions,
    pub word_cloud: bool,
}

impl CategoryPipeline {
    pub fn new(category: Category, options: AggregateOptions, word_cloud: bool) -> Self {
        Self {
            category,
            options,
            word_cloud,
        }
    }

    /// Built-in settings: work tasks resolve codes and drop the no-response
    /// code, the tech stack is capped at the top ten and drawn as a word cloud.
    pub fn defaults_for(category: Category) -> Self {
        match category {
            Category::WorkTasks => Self::new(
                category,
                AggregateOptions::new()
                    .label_resolver(Arc::new(CategoryLabelMap::work_tasks().clone()))
                    .exclude_key(NO_RESPONSE_CODE),
                false,
            ),
            Category::PreferredQualifications | Category::CompanySize => {
                Self::new(category, AggregateOptions::new(), false)
            }
            Category::TechStack => Self::new(category, AggregateOptions::new().limit(TECH_STACK_LIMIT), true),
        }
    }

    /// Built-in settings with the category's config overrides applied.
    pub fn from_config(category: Category, config: Option<&CategoryConfig>) -> RoleboardResult<Self> {
        let mut pipeline = Self::defaults_for(category);
        let Some(config) = config else {
            return Ok(pipeline);
        };

        if !config.labels.is_empty() {
            let base = match category {
                Category::WorkTasks => CategoryLabelMap::work_tasks().clone(),
                _ => CategoryLabelMap::default(),
            };
            let labels = base.with_overrides(&config.labels)?;
            pipeline.options = pipeline.options.label_resolver(Arc::new(labels));
        }
        if let Some(keys) = &config.exclude_keys {
            pipeline.options = pipeline.options.exclude_keys(keys.clone());
        }
        if let Some(limit) = config.limit {
            pipeline.options = pipeline.options.limit(limit);
        }
        if let Some(word_cloud) = config.word_cloud {
            pipeline.word_cloud = word_cloud;
        }

        Ok(pipeline)
    }

    /// Synchronous half of a run, on an already fetched payload.
    pub fn process(&self, raw: &Value) -> RoleboardResult<AggregatedCategory> {
        let series = RankedAggregator::aggregate_value(raw, &self.options)
            .map_err(|e| e.for_category(self.category.slug()))?;

        let word_cloud = if self.word_cloud {
            Some(WordCloudMapper::style(&series)?)
        } else {
            None
        };

        log::debug!("📊 {}: {} ranked entries", self.category, series.len());
        Ok(AggregatedCategory { series, word_cloud })
    }

    pub async fn run(&self, source: &dyn AggregateSource) -> RoleboardResult<AggregatedCategory> {
        log::info!("📥 Fetching {} from {}", self.category, source.describe(self.category));
        let raw = source
            .fetch(self.category)
            .await
            .map_err(|e| e.for_category(self.category.slug()))?;
        self.process(&raw)
    }
}
