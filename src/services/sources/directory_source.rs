use std::path::{Path, PathBuf};
use async_trait::async_trait;
use serde_json::Value;
use crate::enums::category::Category;
use crate::errors::{RoleboardError, RoleboardResult};
use crate::traits::aggregate_source::AggregateSource;

/// Reads `<dir>/<slug>.json` snapshots.
#[derive(Debug, Clone)]
pub struct DirectoryAggregateSource {
    dir: PathBuf,
}

impl DirectoryAggregateSource {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    pub fn path_for(&self, category: Category) -> PathBuf {
        self.dir.join(format!("{}.json", category.slug()))
    }
}

#[async_trait]
impl AggregateSource for DirectoryAggregateSource {
    async fn fetch(&self, category: Category) -> RoleboardResult<Value> {
        let path = self.path_for(category);
        let location = path.display().to_string();

        let content = tokio::fs::read_to_string(&path).await.map_err(|e| {
            RoleboardError::fetch_failure(category.slug(), Some(&location), None, &e.to_string())
        })?;

        serde_json::from_str(&content).map_err(|e| {
            RoleboardError::fetch_failure(category.slug(), Some(&location), None, &format!("decoding failed: {}", e))
        })
    }

    fn describe(&self, category: Category) -> String {
        self.path_for(category).display().to_string()
    }
}
