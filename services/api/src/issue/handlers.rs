use axum::extract::{Path, State};
use axum::Json;
use tasklens_common::error::TasklensError;
use tasklens_issues::{normalize_detail, IssueDetail};

use crate::error::ApiError;
use crate::AppState;

const DETAIL_FAILED: &str = "Failed to fetch Jira issue";

/// Issue keys (`ABC-12`) and numeric ids only; anything else would change the
/// upstream path.
fn validate_issue_id(id: &str) -> Result<(), TasklensError> {
    let valid = !id.is_empty()
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if !valid {
        return Err(TasklensError::Validation(format!("invalid issue id: {id}")));
    }
    Ok(())
}

pub async fn get_issue(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<IssueDetail>, ApiError> {
    validate_issue_id(&id)?;

    let raw = state
        .jira
        .fetch_issue(&id)
        .await
        .map_err(ApiError::jira(DETAIL_FAILED))?;

    let detail = normalize_detail(&raw);
    tracing::debug!(key = %detail.key, changes = detail.changelog.len(), "fetched jira issue");
    Ok(Json(detail))
}
