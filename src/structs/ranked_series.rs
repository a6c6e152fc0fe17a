use serde::Serialize;
use crate::structs::ranked_entry::RankedEntry;

/// Entries ordered by value, highest first.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct RankedSeries {
    entries: Vec<RankedEntry>,
}

impl RankedSeries {
    /// Wraps entries that are already ranked. Only the aggregator builds
    /// series from unsorted input.
    pub(crate) fn from_ranked(entries: Vec<RankedEntry>) -> Self {
        Self { entries }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RankedEntry> {
        self.entries.iter()
    }

    pub fn entries(&self) -> &[RankedEntry] {
        &self.entries
    }

    pub fn first(&self) -> Option<&RankedEntry> {
        self.entries.first()
    }

    pub fn labels(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.label.clone()).collect()
    }

    pub fn values(&self) -> Vec<u64> {
        self.entries.iter().map(|e| e.value).collect()
    }
}

impl<'a> IntoIterator for &'a RankedSeries {
    type Item = &'a RankedEntry;
    type IntoIter = std::slice::Iter<'a, RankedEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
