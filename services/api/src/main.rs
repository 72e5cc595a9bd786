mod error;
mod issue;
mod jira;
mod markup;
mod tasks;

use axum::{
    extract::State,
    http::{header, HeaderValue, Method},
    routing::get,
    Json, Router,
};
use std::net::SocketAddr;
use tasklens_common::types::ServiceInfo;
use tasklens_config::{init_tracing, AppConfig};
use tasklens_issues::Site;
use tower_http::cors::CorsLayer;

use crate::jira::client::JiraClient;

#[derive(Clone)]
pub struct AppState {
    pub jira: JiraClient,
    pub site: Site,
    pub filter_id: String,
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

async fn info(State(state): State<AppState>) -> Json<ServiceInfo> {
    Json(ServiceInfo::new("tasklens-api").with_upstream(state.site.domain()))
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE])
}

fn build_router(state: AppState, cors_origins: &[String]) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/info", get(info))
        .merge(tasks::router())
        .merge(issue::router())
        .merge(markup::router())
        .layer(cors_layer(cors_origins))
        .with_state(state)
}

#[tokio::main]
async fn main() {
    let config = AppConfig::from_env().expect("failed to load config");
    init_tracing(&config.log_level);

    tracing::info!(
        service = "tasklens-api",
        jira = %config.jira.domain,
        filter_id = %config.jira.filter_id,
        "starting"
    );

    let state = AppState {
        jira: JiraClient::new(&config.jira).expect("failed to create jira client"),
        site: Site::new(&config.jira.domain, &config.jira.sprint_field),
        filter_id: config.jira.filter_id.clone(),
    };

    let app = build_router(state, &config.cors_origins);
    let addr: SocketAddr = config.bind_addr().parse().expect("invalid bind address");

    tracing::info!(%addr, "listening");
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("failed to bind");
    axum::serve(listener, app).await.expect("server error");
}
