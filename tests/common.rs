use async_trait::async_trait;
use mockall::mock;
use serde_json::{json, Value};
use roleboard::enums::category::Category;
use roleboard::errors::RoleboardResult;
use roleboard::traits::aggregate_source::AggregateSource;

mock! {
    pub Source {}

    #[async_trait]
    impl AggregateSource for Source {
        async fn fetch(&self, category: Category) -> RoleboardResult<Value>;
        fn describe(&self, category: Category) -> String;
    }
}

pub fn work_tasks_payload() -> Value {
    json!([
        {"label": 1, "total": 5},
        {"label": 0, "total": 99},
        {"label": 2, "total": 8}
    ])
}

pub fn preferred_qualifications_payload() -> Value {
    json!([
        {"representative": "클라우드 환경 경험", "frequency": 12},
        {"representative": "석사 이상", "frequency": 4}
    ])
}

pub fn company_size_payload() -> Value {
    json!({"스타트업": 14, "중견기업": 9, "대기업": 21})
}

pub fn tech_stack_payload() -> Value {
    serde_json::from_str(
        r#"{"SQL":10,"Python":9,"Airflow":8,"Kubernetes":7,"Docker":8,"Go":3,"Java":2,"Scala":1,"Kafka":6,"Redis":4,"Hive":2}"#,
    )
    .unwrap()
}

pub fn payload_for(category: Category) -> Value {
    match category {
        Category::WorkTasks => work_tasks_payload(),
        Category::PreferredQualifications => preferred_qualifications_payload(),
        Category::CompanySize => company_size_payload(),
        Category::TechStack => tech_stack_payload(),
    }
}

/// Mock that serves the fixture payload of every category.
pub fn healthy_source() -> MockSource {
    let mut source = MockSource::new();
    source.expect_describe().returning(|c| format!("mock://{}", c.slug()));
    source.expect_fetch().returning(|c| Ok(payload_for(c)));
    source
}
