use axum::Json;
use serde::{Deserialize, Serialize};
use tasklens_markup::{compact_text, render_with_trace, RuleStep};

#[derive(Debug, Deserialize)]
pub struct RenderRequest {
    #[serde(default)]
    pub text: String,
    /// Collapse blank lines and repeated spaces before rendering.
    #[serde(default)]
    pub compact: bool,
    #[serde(default)]
    pub trace: bool,
}

#[derive(Debug, Serialize)]
pub struct RenderResponse {
    pub html: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub steps: Option<Vec<RuleStep>>,
}

pub async fn render_markup(Json(req): Json<RenderRequest>) -> Json<RenderResponse> {
    let text = if req.compact {
        compact_text(&req.text)
    } else {
        req.text
    };

    let rendered = render_with_trace(&text);
    tracing::trace!(steps = ?rendered.steps, "rendered markup");

    Json(RenderResponse {
        html: rendered.html,
        steps: req.trace.then_some(rendered.steps),
    })
}
