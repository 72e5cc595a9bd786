use chrono::{DateTime, Utc};
use serde::Serialize;
use tasklens_issues::display::{age_bucket, sprint_summary, status_category, AgeBucket, StatusCategory};
use tasklens_issues::{NormalizedTask, SortKey, SortOrder};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskView {
    #[serde(flatten)]
    pub task: NormalizedTask,
    pub age: AgeBucket,
    pub status_category: StatusCategory,
    pub sprint_label: Option<String>,
}

impl TaskView {
    pub fn new(task: NormalizedTask, now: DateTime<Utc>) -> Self {
        Self {
            age: age_bucket(&task.updated, now),
            status_category: status_category(&task.status),
            sprint_label: sprint_summary(&task.sprint),
            task,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TaskListResponse {
    pub issues: Vec<TaskView>,
    pub total: usize,
    pub count: usize,
    pub sort: SortKey,
    pub order: SortOrder,
}
