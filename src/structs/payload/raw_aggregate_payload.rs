use serde::Deserialize;
use serde_json::Value;
use crate::enums::raw_key::RawKey;
use crate::errors::{RoleboardError, RoleboardResult};
use crate::structs::payload::raw_record::{RawRecord, RECORD_COUNT_FIELDS, RECORD_KEY_FIELDS};

/// A decoded aggregate payload in one of the recognized shapes.
#[derive(Debug, Clone, PartialEq)]
pub enum RawAggregatePayload {
    /// Ordered sequence of labeled counts.
    Records(Vec<RawRecord>),
    /// `{category: count}` object, in document order.
    Counts(Vec<(String, u64)>),
}

impl RawAggregatePayload {
    /// Recognizes the payload shape. Errors carry the placeholder category
    /// `unknown`; callers re-tag them with [`RoleboardError::for_category`].
    pub fn from_value(value: &Value) -> RoleboardResult<Self> {
        match value {
            Value::Array(items) => {
                let records = items
                    .iter()
                    .enumerate()
                    .map(|(index, item)| {
                        if !item.is_object() {
                            return Err(RoleboardError::malformed_payload(
                                "unknown",
                                &format!("record {}: expected an object, got {}", index, json_kind(item)),
                            ));
                        }
                        RawRecord::deserialize(item).map_err(|e| {
                            RoleboardError::malformed_payload(
                                "unknown",
                                &format!("record {}: {} (expected one of {} and one of {})", index, e, RECORD_KEY_FIELDS, RECORD_COUNT_FIELDS),
                            )
                        })
                    })
                    .collect::<RoleboardResult<Vec<_>>>()?;
                Ok(Self::Records(records))
            }
            Value::Object(map) => {
                let counts = map
                    .iter()
                    .map(|(key, count)| {
                        count
                            .as_u64()
                            .map(|n| (key.clone(), n))
                            .ok_or_else(|| {
                                RoleboardError::malformed_payload(
                                    "unknown",
                                    &format!("count for '{}' is not a non-negative integer: {}", key, count),
                                )
                            })
                    })
                    .collect::<RoleboardResult<Vec<_>>>()?;
                Ok(Self::Counts(counts))
            }
            other => Err(RoleboardError::malformed_payload(
                "unknown",
                &format!("expected an array or an object, got {}", json_kind(other)),
            )),
        }
    }

    /// Normalizes both shapes to `(key, count)` pairs in payload order.
    pub fn into_pairs(self) -> Vec<(RawKey, u64)> {
        match self {
            Self::Records(records) => records.into_iter().map(|r| (r.label, r.total)).collect(),
            Self::Counts(counts) => counts.into_iter().map(|(k, n)| (RawKey::Text(k), n)).collect(),
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn recognizes_code_records() {
        let payload = RawAggregatePayload::from_value(&json!([{"label": 1, "total": 5}])).unwrap();
        assert_eq!(payload.into_pairs(), vec![(RawKey::Code(1), 5)]);
    }

    #[test]
    fn recognizes_representative_records() {
        let payload = RawAggregatePayload::from_value(&json!([
            {"representative": "클라우드 환경 경험", "frequency": 12}
        ]))
        .unwrap();
        assert_eq!(payload.into_pairs(), vec![(RawKey::from("클라우드 환경 경험"), 12)]);
    }

    #[test]
    fn map_keeps_document_order() {
        let value: Value = serde_json::from_str(r#"{"스타트업": 3, "대기업": 7, "중견기업": 5}"#).unwrap();
        let keys: Vec<String> = RawAggregatePayload::from_value(&value)
            .unwrap()
            .into_pairs()
            .into_iter()
            .map(|(k, _)| k.to_string())
            .collect();
        assert_eq!(keys, vec!["스타트업", "대기업", "중견기업"]);
    }

    #[test]
    fn rejects_unrecognized_shapes() {
        assert!(RawAggregatePayload::from_value(&json!("SQL")).is_err());
        assert!(RawAggregatePayload::from_value(&json!(null)).is_err());
        assert!(RawAggregatePayload::from_value(&json!([{"label": 1}])).is_err());
        assert!(RawAggregatePayload::from_value(&json!({"SQL": -1})).is_err());
        assert!(RawAggregatePayload::from_value(&json!({"SQL": 2.5})).is_err());
        assert!(RawAggregatePayload::from_value(&json!([["SQL", 3]])).is_err());
        assert!(RawAggregatePayload::from_value(&json!([{"label": "SQL", "total": 3}, 7])).is_err());
    }

    #[test]
    fn tuple_records_are_not_records() {
        match RawAggregatePayload::from_value(&json!([["SQL", 3], ["Go", 9]])) {
            Err(RoleboardError::MalformedPayload { reason, .. }) => assert!(reason.contains("expected an object")),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn conflicting_aliases_name_the_accepted_fields() {
        match RawAggregatePayload::from_value(&json!([{"label": 1, "representative": "AWS", "total": 2}])) {
            Err(RoleboardError::MalformedPayload { reason, .. }) => {
                assert!(reason.contains("record 0"));
                assert!(reason.contains("representative"));
                assert!(reason.contains("frequency"));
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn empty_shapes_are_valid() {
        assert_eq!(RawAggregatePayload::from_value(&json!([])).unwrap(), RawAggregatePayload::Records(vec![]));
        assert_eq!(RawAggregatePayload::from_value(&json!({})).unwrap(), RawAggregatePayload::Counts(vec![]));
    }
}
