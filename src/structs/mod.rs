pub mod aggregate_options;
pub mod aggregated_category;
pub mod category_label_map;
pub mod category_panel;
pub mod chart;
pub mod cli;
pub mod config;
pub mod payload;
pub mod ranked_entry;
pub mod ranked_series;
pub mod refresh_outcome;
