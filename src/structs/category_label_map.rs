use std::collections::BTreeMap;
use once_cell::sync::Lazy;
use crate::enums::raw_key::RawKey;
use crate::errors::{RoleboardError, RoleboardResult};
use crate::traits::label_resolver::LabelResolver;

static WORK_TASK_LABELS: Lazy<CategoryLabelMap> = Lazy::new(|| {
    CategoryLabelMap::from_pairs([
        (1, "ETL/ELT 파이프라인을 설계하고 자동화해요."),
        (2, "분산 처리 시스템(Hadoop, Spark 등)을 구축하고 최적화해요."),
        (3, "데이터 웨어하우스와 데이터 레이크를 설계하고 운영해요."),
        (4, "실시간 스트리밍 파이프라인(Kafka 등)을 구축해요."),
        (5, "데이터 품질을 검증하고 모니터링해요."),
        (6, "클라우드 기반 데이터 인프라를 구축하고 관리해요."),
        (7, "데이터 모델링과 스키마를 설계해요."),
        (8, "분석가와 협업해 데이터 마트와 지표를 제공해요."),
    ])
});

/// Immutable code -> display text table.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CategoryLabelMap {
    labels: BTreeMap<i64, String>,
}

impl CategoryLabelMap {
    pub fn from_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (i64, S)>,
        S: Into<String>,
    {
        Self {
            labels: pairs.into_iter().map(|(code, label)| (code, label.into())).collect(),
        }
    }

    /// Built-in labels for the work-task survey answers.
    pub fn work_tasks() -> &'static CategoryLabelMap {
        &WORK_TASK_LABELS
    }

    /// Copy of this map with config-supplied entries layered on top.
    /// Keys come from TOML table keys, so they arrive as strings.
    pub fn with_overrides(&self, overrides: &BTreeMap<String, String>) -> RoleboardResult<Self> {
        let mut labels = self.labels.clone();
        for (key, label) in overrides {
            let code = key.trim().parse::<i64>().map_err(|_| {
                RoleboardError::validation_error(
                    "labels",
                    key,
                    "label keys must be integer codes",
                    Some("Quote the code as a table key, e.g. \"3\" = \"...\""),
                )
            })?;
            labels.insert(code, label.clone());
        }
        Ok(Self { labels })
    }

    pub fn get(&self, code: i64) -> Option<&str> {
        self.labels.get(&code).map(String::as_str)
    }
}

impl LabelResolver for CategoryLabelMap {
    fn resolve(&self, key: &RawKey) -> Option<String> {
        key.as_code().and_then(|code| self.get(code)).map(str::to_string)
    }
}
