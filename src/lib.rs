//! Data pipeline behind the job-role survey dashboard: ranks per-category
//! survey aggregates, styles them as bar charts and word clouds, and serves
//! the resulting panels.

pub mod config;
pub mod enums;
pub mod errors;
pub mod helpers;
pub mod logger;
pub mod services;
pub mod structs;
pub mod traits;
pub mod ui;
pub mod workers;
