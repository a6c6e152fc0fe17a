use serde_json::Value;
use crate::config::constants::UNKNOWN_LABEL;
use crate::enums::raw_key::RawKey;
use crate::errors::RoleboardResult;
use crate::structs::aggregate_options::AggregateOptions;
use crate::structs::payload::raw_aggregate_payload::RawAggregatePayload;
use crate::structs::ranked_entry::RankedEntry;
use crate::structs::ranked_series::RankedSeries;

pub struct RankedAggregator;

impl RankedAggregator {
    /// Filter excluded keys, resolve labels, sort by value (highest first,
    /// ties keep payload order) and apply the top-N limit.
    pub fn aggregate(raw: RawAggregatePayload, opts: &AggregateOptions) -> RankedSeries {
        let mut entries: Vec<RankedEntry> = raw
            .into_pairs()
            .into_iter()
            .filter(|(key, _)| !opts.is_excluded(key))
            .map(|(key, count)| RankedEntry::new(Self::resolve_label(&key, opts), count))
            .collect();

        entries.sort_by(|a, b| b.value.cmp(&a.value));

        if let Some(limit) = opts.limit {
            entries.truncate(limit.get());
        }

        RankedSeries::from_ranked(entries)
    }

    /// Shape check plus [`RankedAggregator::aggregate`] on a decoded JSON payload.
    pub fn aggregate_value(raw: &Value, opts: &AggregateOptions) -> RoleboardResult<RankedSeries> {
        let payload = RawAggregatePayload::from_value(raw)?;
        Ok(Self::aggregate(payload, opts))
    }

    fn resolve_label(key: &RawKey, opts: &AggregateOptions) -> String {
        match &opts.label_resolver {
            Some(resolver) => resolver
                .resolve(key)
                .unwrap_or_else(|| UNKNOWN_LABEL.to_string()),
            None => key.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use serde_json::json;
    use crate::structs::category_label_map::CategoryLabelMap;

    fn work_task_options() -> AggregateOptions {
        AggregateOptions::new()
            .label_resolver(Arc::new(CategoryLabelMap::work_tasks().clone()))
            .exclude_key(0)
    }

    #[test]
    fn drops_sentinel_and_resolves_codes() {
        let raw = json!([
            {"label": 1, "total": 5},
            {"label": 0, "total": 99},
            {"label": 2, "total": 8}
        ]);
        let series = RankedAggregator::aggregate_value(&raw, &work_task_options()).unwrap();
        assert_eq!(
            series.entries(),
            &[
                RankedEntry::new("분산 처리 시스템(Hadoop, Spark 등)을 구축하고 최적화해요.", 8),
                RankedEntry::new("ETL/ELT 파이프라인을 설계하고 자동화해요.", 5),
            ]
        );
    }

    #[test]
    fn unmapped_codes_fall_back_to_unknown() {
        let raw = json!([{"label": 77, "total": 3}]);
        let series = RankedAggregator::aggregate_value(&raw, &work_task_options()).unwrap();
        assert_eq!(series.labels(), vec!["Unknown".to_string()]);
    }

    #[test]
    fn text_keys_pass_through_without_resolver() {
        let raw = json!([{"representative": "석사 이상", "frequency": 2}, {"representative": "AWS 경험", "frequency": 9}]);
        let series = RankedAggregator::aggregate_value(&raw, &AggregateOptions::new()).unwrap();
        assert_eq!(series.labels(), vec!["AWS 경험".to_string(), "석사 이상".to_string()]);
    }

    #[test]
    fn ties_keep_payload_order() {
        let raw: Value = serde_json::from_str(r#"{"Airflow": 8, "SQL": 10, "Docker": 8}"#).unwrap();
        let series = RankedAggregator::aggregate_value(&raw, &AggregateOptions::new()).unwrap();
        assert_eq!(series.labels(), vec!["SQL", "Airflow", "Docker"]);
    }

    #[test]
    fn limit_keeps_top_entries() {
        let raw: Value = serde_json::from_str(
            r#"{"SQL":10,"Python":9,"Airflow":8,"Kubernetes":7,"Docker":8,"Go":3,"Java":2,"Scala":1,"Kafka":6,"Redis":4,"Hive":2}"#,
        )
        .unwrap();
        let series = RankedAggregator::aggregate_value(&raw, &AggregateOptions::new().limit(10)).unwrap();
        assert_eq!(series.len(), 10);
        assert_eq!(series.first().map(|e| e.label.as_str()), Some("SQL"));
        assert!(!series.labels().contains(&"Scala".to_string()));
    }

    #[test]
    fn empty_payload_gives_empty_series() {
        let series = RankedAggregator::aggregate_value(&json!([]), &work_task_options()).unwrap();
        assert!(series.is_empty());
    }

    #[test]
    fn malformed_payload_is_an_error() {
        assert!(RankedAggregator::aggregate_value(&json!(42), &AggregateOptions::new()).is_err());
    }

    #[test]
    fn array_of_pairs_is_malformed() {
        let result = RankedAggregator::aggregate_value(&json!([["SQL", 3], ["Go", 9]]), &AggregateOptions::new());
        assert!(matches!(result, Err(crate::errors::RoleboardError::MalformedPayload { .. })));
    }
}
