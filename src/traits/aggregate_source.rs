use async_trait::async_trait;
use serde_json::Value;
use crate::enums::category::Category;
use crate::errors::RoleboardResult;

/// Supplies the decoded raw payload for a category.
///
/// Transport and decoding problems surface as `FetchFailure`.
#[async_trait]
pub trait AggregateSource: Send + Sync {
    async fn fetch(&self, category: Category) -> RoleboardResult<Value>;

    /// Where the payload comes from, for log lines.
    fn describe(&self, category: Category) -> String;
}
