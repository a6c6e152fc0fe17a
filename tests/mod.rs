//! Integration tests for the roleboard pipeline, dashboard and API.

mod common;
mod dashboard_refresh;
mod pipeline_scenarios;
