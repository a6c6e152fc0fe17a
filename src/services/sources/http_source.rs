use std::collections::HashMap;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use crate::config::constants::timeout_duration_secs;
use crate::enums::category::Category;
use crate::errors::{RoleboardError, RoleboardResult};
use crate::structs::config::config::Config;
use crate::traits::aggregate_source::AggregateSource;

/// Fetches each category's payload from its named endpoint.
#[derive(Clone)]
pub struct HttpAggregateSource {
    base_url: String,
    endpoints: HashMap<Category, String>,
    client: Client,
}

impl HttpAggregateSource {
    pub fn new(base_url: &str, timeout_secs: u64) -> RoleboardResult<Self> {
        let client = Client::builder()
            .timeout(timeout_duration_secs(timeout_secs))
            .build()
            .map_err(|e| RoleboardError::system_error("building HTTP client", &e.to_string()))?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            endpoints: Category::ALL.iter().map(|c| (*c, c.default_endpoint())).collect(),
            client,
        })
    }

    pub fn from_config(config: &Config) -> RoleboardResult<Self> {
        let mut source = Self::new(&config.source.base_url, config.source.timeout_secs)?;
        for category in Category::ALL {
            source = source.with_endpoint(category, &config.endpoint_for(category));
        }
        Ok(source)
    }

    pub fn with_endpoint(mut self, category: Category, endpoint: &str) -> Self {
        self.endpoints.insert(category, endpoint.to_string());
        self
    }

    pub fn url_for(&self, category: Category) -> String {
        let endpoint = self
            .endpoints
            .get(&category)
            .cloned()
            .unwrap_or_else(|| category.default_endpoint());
        if endpoint.starts_with("http://") || endpoint.starts_with("https://") {
            return endpoint;
        }
        format!("{}/{}", self.base_url, endpoint.trim_start_matches('/'))
    }
}

#[async_trait]
impl AggregateSource for HttpAggregateSource {
    async fn fetch(&self, category: Category) -> RoleboardResult<Value> {
        let url = self.url_for(category);

        let response = self
            .client
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| RoleboardError::from(e).for_category(category.slug()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RoleboardError::fetch_failure(
                category.slug(),
                Some(&url),
                Some(status.as_u16()),
                &format!("unexpected status: {}", body.chars().take(200).collect::<String>()),
            ));
        }

        response.json::<Value>().await.map_err(|e| {
            RoleboardError::fetch_failure(category.slug(), Some(&url), None, &format!("decoding failed: {}", e))
        })
    }

    fn describe(&self, category: Category) -> String {
        self.url_for(category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::SocketAddr;
    use serde_json::json;
    use warp::http::StatusCode;
    use warp::Filter;

    fn spawn_stats_server() -> SocketAddr {
        let unavailable = warp::path!("api" / "tech-stack")
            .map(|| warp::reply::with_status("maintenance", StatusCode::SERVICE_UNAVAILABLE));
        let not_json = warp::path!("api" / "company-size").map(|| "<html>company size</html>");
        let ok = warp::path!("api" / "work-tasks").map(|| warp::reply::json(&json!([{"label": 1, "total": 5}])));

        let (addr, server) = warp::serve(unavailable.or(not_json).or(ok)).bind_ephemeral(([127, 0, 0, 1], 0));
        tokio::spawn(server);
        addr
    }

    #[tokio::test]
    async fn non_success_status_is_fetch_failure() {
        let addr = spawn_stats_server();
        let source = HttpAggregateSource::new(&format!("http://{}", addr), 5).unwrap();

        match source.fetch(Category::TechStack).await {
            Err(RoleboardError::FetchFailure { category, url, status_code, reason }) => {
                assert_eq!(category, "tech-stack");
                assert_eq!(status_code, Some(503));
                assert_eq!(url, Some(format!("http://{}/api/tech-stack", addr)));
                assert!(reason.contains("maintenance"));
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[tokio::test]
    async fn undecodable_body_is_fetch_failure() {
        let addr = spawn_stats_server();
        let source = HttpAggregateSource::new(&format!("http://{}", addr), 5).unwrap();

        match source.fetch(Category::CompanySize).await {
            Err(RoleboardError::FetchFailure { category, status_code, reason, .. }) => {
                assert_eq!(category, "company-size");
                assert_eq!(status_code, None);
                assert!(reason.starts_with("decoding failed"));
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[tokio::test]
    async fn decodes_json_payload() {
        let addr = spawn_stats_server();
        let source = HttpAggregateSource::new(&format!("http://{}", addr), 5).unwrap();

        let value = source.fetch(Category::WorkTasks).await.unwrap();
        assert_eq!(value, json!([{"label": 1, "total": 5}]));
    }

    #[test]
    fn joins_base_url_and_endpoint() {
        let source = HttpAggregateSource::new("http://localhost:8000/", 5).unwrap();
        assert_eq!(source.url_for(Category::TechStack), "http://localhost:8000/api/tech-stack");

        let source = source.with_endpoint(Category::CompanySize, "https://stats.example.com/size");
        assert_eq!(source.url_for(Category::CompanySize), "https://stats.example.com/size");
    }
}
