use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use serde::Serialize;
use serde_json::json;
use tokio::sync::oneshot;
use warp::http::StatusCode;
use warp::Filter;
use crate::config::constants::{sleep_duration_millis, DASHBOARD_HEADLINE, DASHBOARD_SUBHEADLINE, SHUTDOWN_GRACE_PERIOD_MS};
use crate::enums::category::Category;
use crate::errors::{RoleboardError, RoleboardResult};
use crate::services::dashboard::Dashboard;
use crate::structs::chart::chart_surface::ChartSurface;
use crate::traits::aggregate_source::AggregateSource;

type JsonReply = warp::reply::WithStatus<warp::reply::Json>;

/// JSON API in front of a [`Dashboard`] for the web renderer.
pub struct DashboardServer {
    dashboard: Arc<Dashboard>,
    source: Arc<dyn AggregateSource>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl DashboardServer {
    pub fn new(dashboard: Arc<Dashboard>, source: Arc<dyn AggregateSource>) -> Self {
        Self {
            dashboard,
            source,
            shutdown_tx: None,
        }
    }

    /// Binds on localhost, starts serving and kicks off the first refresh of
    /// every category. Port 0 picks a free port.
    pub async fn start(&mut self, port: u16) -> RoleboardResult<SocketAddr> {
        let (shutdown_tx, shutdown_rx) = oneshot::channel();

        let addr: SocketAddr = ([127, 0, 0, 1], port).into();
        let (bound, server) = warp::serve(self.routes())
            .try_bind_with_graceful_shutdown(addr, async {
                shutdown_rx.await.ok();
            })
            .map_err(|e| RoleboardError::system_error("binding dashboard server", &e.to_string()))?;

        tokio::spawn(server);
        self.shutdown_tx = Some(shutdown_tx);
        log::info!("🌐 Dashboard API listening on http://{}", bound);

        let dashboard = Arc::clone(&self.dashboard);
        let source = Arc::clone(&self.source);
        tokio::spawn(async move {
            dashboard.refresh(source.as_ref()).await;
        });

        Ok(bound)
    }

    pub async fn shutdown(&mut self) -> RoleboardResult<()> {
        log::info!("🛑 Shutting down dashboard server...");

        if let Some(shutdown_tx) = self.shutdown_tx.take() {
            shutdown_tx.send(()).map_err(|_|
                RoleboardError::system_error("shutdown", "Failed to send shutdown signal")
            )?;
        }

        tokio::time::sleep(sleep_duration_millis(SHUTDOWN_GRACE_PERIOD_MS)).await;
        log::info!("✅ Dashboard server shutdown complete");
        Ok(())
    }

    pub fn routes(&self) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
        let dashboard = Arc::clone(&self.dashboard);
        let dashboard_filter = warp::any().map(move || Arc::clone(&dashboard));
        let source = Arc::clone(&self.source);
        let source_filter = warp::any().map(move || Arc::clone(&source));

        let health = warp::path!("healthz")
            .and(warp::get())
            .and_then(health_handler);

        let get_dashboard = warp::path!("api" / "dashboard")
            .and(warp::get())
            .and(dashboard_filter.clone())
            .and_then(dashboard_handler);

        let get_category = warp::path!("api" / "categories" / String)
            .and(warp::get())
            .and(dashboard_filter.clone())
            .and_then(category_handler);

        let surface_ready = warp::path!("api" / "categories" / String / "surface")
            .and(warp::post())
            .and(warp::body::json())
            .and(dashboard_filter.clone())
            .and_then(surface_handler);

        let refresh = warp::path!("api" / "refresh")
            .and(warp::post())
            .and(dashboard_filter)
            .and(source_filter)
            .and_then(refresh_handler);

        health
            .or(get_dashboard)
            .unify()
            .or(get_category)
            .unify()
            .or(surface_ready)
            .unify()
            .or(refresh)
            .unify()
            .with(warp::cors()
                .allow_origin("http://127.0.0.1")
                .allow_origin("http://localhost")
                .allow_headers(vec!["content-type"])
                .allow_methods(vec!["GET", "POST"]))
    }
}

fn reply<T: Serialize>(body: &T, status: StatusCode) -> JsonReply {
    warp::reply::with_status(warp::reply::json(body), status)
}

fn error_reply(error: &RoleboardError) -> JsonReply {
    let status = match error {
        RoleboardError::UnknownCategory { .. } => StatusCode::NOT_FOUND,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };
    reply(&json!({ "error": error.to_string() }), status)
}

async fn health_handler() -> Result<JsonReply, Infallible> {
    Ok(reply(&json!({ "status": "ok" }), StatusCode::OK))
}

async fn dashboard_handler(dashboard: Arc<Dashboard>) -> Result<JsonReply, Infallible> {
    Ok(reply(
        &json!({
            "headline": DASHBOARD_HEADLINE,
            "subheadline": DASHBOARD_SUBHEADLINE,
            "panels": dashboard.panels(),
        }),
        StatusCode::OK,
    ))
}

async fn category_handler(slug: String, dashboard: Arc<Dashboard>) -> Result<JsonReply, Infallible> {
    let panel = slug
        .parse::<Category>()
        .and_then(|category| {
            dashboard.panel(category).ok_or_else(|| RoleboardError::UnknownCategory {
                name: slug.clone(),
                available: Category::available_slugs(),
            })
        });

    Ok(match panel {
        Ok(panel) => reply(&panel, StatusCode::OK),
        Err(e) => error_reply(&e),
    })
}

async fn surface_handler(slug: String, surface: ChartSurface, dashboard: Arc<Dashboard>) -> Result<JsonReply, Infallible> {
    let panel = slug
        .parse::<Category>()
        .and_then(|category| dashboard.surface_ready(category, &surface));

    Ok(match panel {
        Ok(panel) => reply(&panel, StatusCode::OK),
        Err(e) => error_reply(&e),
    })
}

async fn refresh_handler(dashboard: Arc<Dashboard>, source: Arc<dyn AggregateSource>) -> Result<JsonReply, Infallible> {
    let outcomes = dashboard.refresh(source.as_ref()).await;
    let summary: Vec<_> = outcomes
        .iter()
        .map(|outcome| match &outcome.result {
            Ok(entries) => json!({ "category": outcome.category.slug(), "ok": true, "entries": entries }),
            Err(e) => json!({ "category": outcome.category.slug(), "ok": false, "error": e.to_string() }),
        })
        .collect();

    Ok(reply(&json!({ "outcomes": summary }), StatusCode::OK))
}
