use crate::structs::chart::word_cloud_entry::StyledWord;
use crate::structs::ranked_series::RankedSeries;

/// Output of one successful category pipeline run.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregatedCategory {
    pub series: RankedSeries,
    pub word_cloud: Option<Vec<StyledWord>>,
}
