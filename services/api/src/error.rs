use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tasklens_common::error::TasklensError;

use crate::jira::client::JiraClientError;

const UNEXPECTED_FORMAT: &str = "Unexpected Jira response format";

pub enum ApiError {
    /// A Jira call failed; `context` is the message shown for transport and
    /// parse failures.
    Jira {
        context: &'static str,
        source: JiraClientError,
    },
    Common(TasklensError),
}

impl ApiError {
    pub fn jira(context: &'static str) -> impl FnOnce(JiraClientError) -> Self {
        move |source| Self::Jira { context, source }
    }
}

impl From<TasklensError> for ApiError {
    fn from(err: TasklensError) -> Self {
        Self::Common(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::Jira { context, source } => match source {
                JiraClientError::Upstream {
                    status,
                    message,
                    body,
                } => {
                    tracing::warn!(%status, error = %message, "jira rejected request");
                    (
                        status,
                        serde_json::json!({
                            "error": message,
                            "status": status.as_u16(),
                            "jira": body,
                        }),
                    )
                }
                JiraClientError::UnexpectedFormat(details) => {
                    tracing::error!(error = %details, "unexpected jira response");
                    (
                        StatusCode::BAD_GATEWAY,
                        serde_json::json!({ "error": UNEXPECTED_FORMAT, "details": details }),
                    )
                }
                other => {
                    tracing::error!(error = %other, "{context}");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        serde_json::json!({ "error": context, "details": other.to_string() }),
                    )
                }
            },
            ApiError::Common(err) => {
                let (status, message) = match &err {
                    TasklensError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
                    other => (StatusCode::INTERNAL_SERVER_ERROR, other.to_string()),
                };
                (status, serde_json::json!({ "error": message }))
            }
        };

        (status, Json(body)).into_response()
    }
}
