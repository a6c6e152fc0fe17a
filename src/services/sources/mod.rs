use std::sync::Arc;
use crate::enums::source_kind::SourceKind;
use crate::errors::RoleboardResult;
use crate::structs::config::config::Config;
use crate::traits::aggregate_source::AggregateSource;

pub mod directory_source;
pub mod http_source;

use directory_source::DirectoryAggregateSource;
use http_source::HttpAggregateSource;

/// Source selected by `[source] kind`.
pub fn from_config(config: &Config) -> RoleboardResult<Arc<dyn AggregateSource>> {
    let source: Arc<dyn AggregateSource> = match config.source.kind {
        SourceKind::Http => Arc::new(HttpAggregateSource::from_config(config)?),
        SourceKind::Directory => Arc::new(DirectoryAggregateSource::new(&config.source.data_dir)),
    };
    Ok(source)
}
