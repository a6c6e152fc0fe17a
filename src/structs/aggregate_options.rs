use std::fmt;
use std::num::NonZeroUsize;
use std::sync::Arc;
use crate::enums::raw_key::RawKey;
use crate::traits::label_resolver::LabelResolver;

/// Per-category aggregation settings. Sorting is always by value,
/// highest first, and is not configurable.
#[derive(Clone, Default)]
pub struct AggregateOptions {
    pub label_resolver: Option<Arc<dyn LabelResolver>>,
    pub exclude_keys: Vec<RawKey>,
    pub limit: Option<NonZeroUsize>,
}

impl AggregateOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn label_resolver(mut self, resolver: Arc<dyn LabelResolver>) -> Self {
        self.label_resolver = Some(resolver);
        self
    }

    pub fn exclude_key(mut self, key: impl Into<RawKey>) -> Self {
        self.exclude_keys.push(key.into());
        self
    }

    pub fn exclude_keys(mut self, keys: Vec<RawKey>) -> Self {
        self.exclude_keys = keys;
        self
    }

    /// `0` leaves the series unbounded.
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = NonZeroUsize::new(limit);
        self
    }

    pub fn is_excluded(&self, key: &RawKey) -> bool {
        self.exclude_keys.iter().any(|excluded| excluded.same_key(key))
    }
}

impl fmt::Debug for AggregateOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AggregateOptions")
            .field("label_resolver", &self.label_resolver.is_some())
            .field("exclude_keys", &self.exclude_keys)
            .field("limit", &self.limit)
            .finish()
    }
}
