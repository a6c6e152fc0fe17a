use serde_json::json;
use roleboard::enums::category::Category;
use roleboard::errors::RoleboardError;
use roleboard::services::category_pipeline::CategoryPipeline;
use roleboard::services::word_cloud_mapper::WordCloudMapper;
use roleboard::structs::ranked_entry::RankedEntry;
use crate::common;

#[test]
fn work_tasks_drop_no_response_and_resolve_labels() {
    let result = CategoryPipeline::defaults_for(Category::WorkTasks)
        .process(&common::work_tasks_payload())
        .unwrap();

    assert_eq!(
        result.series.entries(),
        &[
            RankedEntry::new("분산 처리 시스템(Hadoop, Spark 등)을 구축하고 최적화해요.", 8),
            RankedEntry::new("ETL/ELT 파이프라인을 설계하고 자동화해요.", 5),
        ]
    );
    assert!(result.word_cloud.is_none());
}

#[test]
fn tech_stack_keeps_top_ten() {
    let result = CategoryPipeline::defaults_for(Category::TechStack)
        .process(&common::tech_stack_payload())
        .unwrap();

    assert_eq!(result.series.len(), 10);
    assert_eq!(result.series.first().map(|e| e.label.as_str()), Some("SQL"));
    // Scala (1) is the only entry below the cut
    assert!(!result.series.labels().contains(&"Scala".to_string()));
    assert_eq!(result.series.values(), vec![10, 9, 8, 8, 7, 6, 4, 3, 2, 2]);
    // Airflow precedes Docker in the payload and they tie at 8
    assert_eq!(result.series.labels()[2..4], ["Airflow".to_string(), "Docker".to_string()]);
}

#[test]
fn empty_payloads_give_empty_series() {
    for category in Category::ALL {
        let pipeline = CategoryPipeline::defaults_for(category);
        assert!(pipeline.process(&json!([])).unwrap().series.is_empty());
        assert!(pipeline.process(&json!({})).unwrap().series.is_empty());
    }
}

#[test]
fn tech_stack_word_cloud_matches_series() {
    let result = CategoryPipeline::defaults_for(Category::TechStack)
        .process(&json!({"SQL": 10}))
        .unwrap();

    let words = result.word_cloud.unwrap();
    assert_eq!(words.len(), 1);
    assert_eq!(words[0].text, "SQL");
    assert!((words[0].font_size - 33.03).abs() < 0.01);
    assert_eq!(words[0].rotate, 0);
}

#[test]
fn word_cloud_for_sql_ten() {
    let size = WordCloudMapper::font_size(10).unwrap();
    assert!((size - (10f64.ln() * 10.0 + 10.0)).abs() < f64::EPSILON);
    assert_eq!(WordCloudMapper::rotation(10), 0);
}

#[test]
fn malformed_payload_names_the_category() {
    let err = CategoryPipeline::defaults_for(Category::PreferredQualifications)
        .process(&json!([{"representative": "AWS 경험"}]))
        .unwrap_err();

    match err {
        RoleboardError::MalformedPayload { category, .. } => assert_eq!(category, "preferred-qualifications"),
        other => panic!("unexpected error: {other:?}"),
    }
}
