pub mod category_pipeline;
pub mod dashboard;
pub mod gradient_builder;
pub mod ranked_aggregator;
pub mod sources;
pub mod word_cloud_mapper;
