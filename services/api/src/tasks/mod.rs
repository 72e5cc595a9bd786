pub mod handlers;
pub mod requests;
pub mod responses;

use axum::routing::get;
use axum::Router;

use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/api/jira-tasks", get(handlers::list_tasks))
}
