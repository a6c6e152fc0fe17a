use crate::enums::raw_key::RawKey;

/// Translates raw category keys to display text.
///
/// `None` means the key has no mapping; the aggregator then shows the
/// fallback "Unknown" label.
pub trait LabelResolver: Send + Sync {
    fn resolve(&self, key: &RawKey) -> Option<String>;
}
