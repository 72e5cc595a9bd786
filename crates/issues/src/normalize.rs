use serde_json::Value;
use tasklens_markup::render;

use crate::extract::description_text;
use crate::models::{
    ChangeItem, ChangelogEntry, IssueDetail, NormalizedTask, RawFields, RawHistory, RawIssue,
};

const UNKNOWN_AUTHOR: &str = "Unknown";

/// The Jira site issues are normalized against.
#[derive(Debug, Clone)]
pub struct Site {
    domain: String,
    sprint_field: String,
}

impl Site {
    pub fn new(domain: &str, sprint_field: &str) -> Self {
        Self {
            domain: domain.trim_end_matches('/').to_string(),
            sprint_field: sprint_field.to_string(),
        }
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }

    pub fn sprint_field(&self) -> &str {
        &self.sprint_field
    }

    pub fn browse_url(&self, key: &str) -> String {
        format!("{}/browse/{}", self.domain, key)
    }
}

/// Sprint names from the configured custom field, in upstream order.
///
/// A missing, null or non-array field yields no sprints; entries without a
/// string `name` are skipped.
pub fn sprint_names(fields: &RawFields, sprint_field: &str) -> Vec<String> {
    match fields.custom.get(sprint_field) {
        Some(Value::Array(sprints)) => sprints
            .iter()
            .filter_map(|s| s.get("name").and_then(Value::as_str))
            .map(str::to_string)
            .collect(),
        _ => Vec::new(),
    }
}

pub fn normalize(raw: &RawIssue, site: &Site) -> NormalizedTask {
    let f = &raw.fields;
    NormalizedTask {
        id: raw.key.clone(),
        task: f.summary.clone().unwrap_or_default(),
        status: f.status.as_ref().map(|s| s.name.clone()).unwrap_or_default(),
        created: f.created.clone().unwrap_or_default(),
        updated: f.updated.clone().unwrap_or_default(),
        sprint: sprint_names(f, site.sprint_field()),
        url: site.browse_url(&raw.key),
    }
}

fn changelog_entry(history: &RawHistory) -> ChangelogEntry {
    ChangelogEntry {
        author: history
            .author
            .as_ref()
            .and_then(|a| a.display_name.clone())
            .unwrap_or_else(|| UNKNOWN_AUTHOR.to_string()),
        created: history.created.clone(),
        items: history
            .items
            .iter()
            .map(|item| ChangeItem {
                field: item.field.clone(),
                from_string: item.from_string.clone(),
                to_string: item.to_string.clone(),
            })
            .collect(),
    }
}

/// Detail view of an issue fetched with `expand=changelog`.
pub fn normalize_detail(raw: &RawIssue) -> IssueDetail {
    let f = &raw.fields;
    let summary = f.summary.clone().unwrap_or_default();
    let description = description_text(f.description.as_ref());
    let changelog = raw
        .changelog
        .as_ref()
        .map(|log| log.histories.iter().map(changelog_entry).collect())
        .unwrap_or_default();

    IssueDetail {
        key: raw.key.clone(),
        summary_html: render(&summary),
        summary,
        updated: f.updated.clone().unwrap_or_default(),
        description_html: render(&description),
        description,
        changelog,
    }
}
