use serde::{Deserialize, Serialize};
use serde_json::Value;
use tasklens_issues::RawIssue;

const UNKNOWN_JIRA_ERROR: &str = "Unknown Jira error";

/// A saved filter (`/rest/api/3/filter/{id}`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JiraFilter {
    #[serde(default)]
    pub name: Option<String>,
    pub jql: String,
}

/// Body of `/rest/api/3/search`. `issues` stays optional so a missing list
/// can be reported instead of failing deserialization.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    #[serde(default)]
    pub issues: Option<Vec<RawIssue>>,
    #[serde(default)]
    pub total: Option<u64>,
}

/// Flatten a Jira error body into one message: `errorMessages` joined with
/// `", "`, else the `error` string, else a generic fallback.
pub fn upstream_error_message(body: &Value) -> String {
    if let Some(messages) = body.get("errorMessages").and_then(Value::as_array) {
        let joined: Vec<&str> = messages.iter().filter_map(Value::as_str).collect();
        if !joined.is_empty() {
            return joined.join(", ");
        }
    }
    body.get("error")
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| UNKNOWN_JIRA_ERROR.to_string())
}
