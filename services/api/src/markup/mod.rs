pub mod handlers;

use axum::routing::post;
use axum::Router;

use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/api/markup/render", post(handlers::render_markup))
}
