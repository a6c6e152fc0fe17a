use std::sync::atomic::{AtomicUsize, Ordering};
use serde_json::json;
use roleboard::enums::category::Category;
use roleboard::enums::panel_status::PanelStatus;
use roleboard::errors::RoleboardError;
use roleboard::services::dashboard::Dashboard;
use roleboard::structs::chart::chart_surface::ChartSurface;
use roleboard::structs::config::config::Config;
use crate::common::{self, MockSource};

fn dashboard() -> Dashboard {
    Dashboard::from_config(&Config::default()).unwrap()
}

#[test]
fn panels_start_loading_in_page_order() {
    let dashboard = dashboard();
    let panels = dashboard.panels();

    assert_eq!(panels.iter().map(|p| p.category).collect::<Vec<_>>(), Category::ALL.to_vec());
    assert!(panels.iter().all(|p| p.status == PanelStatus::Loading));
    assert!(panels.iter().all(|p| p.chart.fill.is_none()));
}

#[tokio::test]
async fn refresh_publishes_every_category() {
    let dashboard = dashboard();
    let outcomes = dashboard.refresh(&common::healthy_source()).await;

    assert_eq!(outcomes.len(), 4);
    assert!(outcomes.iter().all(|o| o.is_success()));

    let work_tasks = dashboard.panel(Category::WorkTasks).unwrap();
    assert_eq!(work_tasks.status, PanelStatus::Ready);
    assert_eq!(work_tasks.chart.values, vec![8, 5]);
    assert!(work_tasks.run_id.is_some());

    let company_size = dashboard.panel(Category::CompanySize).unwrap();
    assert_eq!(company_size.chart.labels, vec!["대기업", "스타트업", "중견기업"]);

    let tech_stack = dashboard.panel(Category::TechStack).unwrap();
    assert_eq!(tech_stack.chart.labels.len(), 10);
    assert_eq!(tech_stack.word_cloud.as_ref().map(Vec::len), Some(10));
}

#[tokio::test]
async fn failing_categories_do_not_block_the_rest() {
    let mut source = MockSource::new();
    source.expect_describe().returning(|c| c.slug().to_string());
    source.expect_fetch().returning(|category| match category {
        Category::TechStack => Err(RoleboardError::fetch_failure("unknown", None, Some(503), "service unavailable")),
        Category::CompanySize => Ok(json!("not a payload")),
        other => Ok(common::payload_for(other)),
    });

    let dashboard = dashboard();
    let outcomes = dashboard.refresh(&source).await;

    let failed: Vec<Category> = outcomes.iter().filter(|o| !o.is_success()).map(|o| o.category).collect();
    assert_eq!(failed.len(), 2);
    assert!(failed.contains(&Category::TechStack));
    assert!(failed.contains(&Category::CompanySize));

    assert!(dashboard.panel(Category::WorkTasks).unwrap().status.is_ready());
    assert!(dashboard.panel(Category::PreferredQualifications).unwrap().status.is_ready());

    let tech_stack = dashboard.panel(Category::TechStack).unwrap();
    match &tech_stack.status {
        PanelStatus::NoData { reason: Some(reason) } => assert!(reason.contains("tech-stack")),
        other => panic!("unexpected status: {other:?}"),
    }
    assert!(tech_stack.chart.labels.is_empty());

    let outcome = outcomes.iter().find(|o| o.category == Category::CompanySize).unwrap();
    assert!(matches!(outcome.result, Err(RoleboardError::MalformedPayload { .. })));
}

#[tokio::test]
async fn empty_payload_renders_placeholder() {
    let mut source = MockSource::new();
    source.expect_describe().returning(|c| c.slug().to_string());
    source.expect_fetch().returning(|_| Ok(json!([])));

    let dashboard = dashboard();
    let outcomes = dashboard.refresh(&source).await;

    assert!(outcomes.iter().all(|o| matches!(o.result, Ok(0))));
    for panel in dashboard.panels() {
        assert_eq!(panel.status, PanelStatus::NoData { reason: None });
        assert!(panel.chart.labels.is_empty());
        assert!(panel.chart.values.is_empty());
    }
}

#[tokio::test]
async fn gradient_survives_refetch() {
    let dashboard = dashboard();

    let loading = dashboard
        .surface_ready(Category::CompanySize, &ChartSurface::mounted(240))
        .unwrap();
    assert_eq!(loading.status, PanelStatus::Loading);
    assert_eq!(loading.chart.fill.as_ref().map(|g| g.y1), Some(240.0));

    dashboard.refresh(&common::healthy_source()).await;
    dashboard.refresh(&common::healthy_source()).await;

    let panel = dashboard.panel(Category::CompanySize).unwrap();
    assert!(panel.status.is_ready());
    assert_eq!(panel.surface_height, Some(240));
    let fill = panel.chart.fill.unwrap();
    assert_eq!(fill.extent(), 240.0);
    assert_eq!(fill.stops.len(), 2);

    // categories without a surface report stay unfilled
    assert!(dashboard.panel(Category::WorkTasks).unwrap().chart.fill.is_none());
}

#[tokio::test]
async fn unmounted_surface_clears_fill() {
    let dashboard = dashboard();
    dashboard.refresh(&common::healthy_source()).await;
    dashboard.surface_ready(Category::TechStack, &ChartSurface::mounted(300)).unwrap();

    let panel = dashboard.surface_ready(Category::TechStack, &ChartSurface::unmounted()).unwrap();
    assert!(panel.chart.fill.is_none());
    assert_eq!(panel.surface_height, None);
    assert!(panel.status.is_ready());
}

#[tokio::test]
async fn refresh_with_reports_each_category() {
    let dashboard = dashboard();
    let seen = AtomicUsize::new(0);

    dashboard
        .refresh_with(&common::healthy_source(), |_| {
            seen.fetch_add(1, Ordering::Relaxed);
        })
        .await;

    assert_eq!(seen.load(Ordering::Relaxed), 4);
}
