pub mod handlers;

use axum::routing::get;
use axum::Router;

use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/api/jira-issue/{id}", get(handlers::get_issue))
}
