use axum::extract::{Query, State};
use axum::Json;
use chrono::Utc;
use tasklens_issues::{normalize, sort_tasks, NormalizedTask};

use crate::error::ApiError;
use crate::tasks::requests::TaskListQuery;
use crate::tasks::responses::{TaskListResponse, TaskView};
use crate::AppState;

const LIST_FAILED: &str = "Failed to fetch from Jira";

/// Resolve the configured filter, run its JQL, and return the normalized,
/// sorted task list.
pub async fn list_tasks(
    State(state): State<AppState>,
    Query(query): Query<TaskListQuery>,
) -> Result<Json<TaskListResponse>, ApiError> {
    let (sort, order) = query.sort_spec()?;

    let filter = state
        .jira
        .fetch_filter(&state.filter_id)
        .await
        .map_err(ApiError::jira(LIST_FAILED))?;

    let page = state
        .jira
        .search_issues(&filter.jql, state.site.sprint_field())
        .await
        .map_err(ApiError::jira(LIST_FAILED))?;

    let mut tasks: Vec<NormalizedTask> = page
        .issues
        .iter()
        .map(|issue| normalize(issue, &state.site))
        .collect();
    sort_tasks(&mut tasks, sort, order);

    tracing::info!(
        filter_id = %state.filter_id,
        filter = filter.name.as_deref().unwrap_or("-"),
        count = tasks.len(),
        total = page.total,
        %sort,
        %order,
        "listed jira tasks"
    );

    let now = Utc::now();
    let issues: Vec<TaskView> = tasks.into_iter().map(|t| TaskView::new(t, now)).collect();
    let count = issues.len();

    Ok(Json(TaskListResponse {
        issues,
        total: page.total,
        count,
        sort,
        order,
    }))
}
