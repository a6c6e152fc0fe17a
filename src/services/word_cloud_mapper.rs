use crate::errors::{RoleboardError, RoleboardResult};
use crate::structs::chart::word_cloud_entry::{StyledWord, WordCloudEntry};
use crate::structs::ranked_series::RankedSeries;

pub struct WordCloudMapper;

impl WordCloudMapper {
    /// One entry per ranked entry, same order. No sorting or truncation here.
    pub fn to_word_cloud(series: &RankedSeries) -> Vec<WordCloudEntry> {
        series
            .iter()
            .map(|entry| WordCloudEntry {
                text: entry.label.clone(),
                value: entry.value,
            })
            .collect()
    }

    /// `ln(value) * 10 + 10`
    pub fn font_size(value: u64) -> RoleboardResult<f64> {
        if value == 0 {
            return Err(RoleboardError::invalid_weight(value, "font size is undefined for a zero weight"));
        }
        // u64 -> f64 loses precision only far beyond survey counts
        #[allow(clippy::cast_precision_loss)]
        let weight = value as f64;
        Ok(weight.ln() * 10.0 + 10.0)
    }

    /// 0 degrees for even weights, 90 for odd ones.
    pub fn rotation(value: u64) -> u16 {
        if value % 2 == 0 { 0 } else { 90 }
    }

    /// Word cloud with size and rotation applied.
    pub fn style(series: &RankedSeries) -> RoleboardResult<Vec<StyledWord>> {
        Self::to_word_cloud(series)
            .into_iter()
            .map(|entry| {
                Ok(StyledWord {
                    font_size: Self::font_size(entry.value)?,
                    rotate: Self::rotation(entry.value),
                    text: entry.text,
                    value: entry.value,
                })
            })
            .collect()
    }
}
