pub mod category_config;
pub mod chart_config;
pub mod config;
pub mod source_config;
