use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// An issue as returned by Jira Cloud (`/rest/api/3/search`, `/rest/api/3/issue/{key}`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawIssue {
    pub key: String,
    #[serde(default)]
    pub fields: RawFields,
    #[serde(default)]
    pub changelog: Option<RawChangelog>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawFields {
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub status: Option<RawStatus>,
    #[serde(default)]
    pub created: Option<String>,
    #[serde(default)]
    pub updated: Option<String>,
    /// A plain string (wiki markup) or an ADF document.
    #[serde(default)]
    pub description: Option<Value>,
    /// Everything else, including `customfield_*` entries such as the sprint field.
    #[serde(flatten)]
    pub custom: Map<String, Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawStatus {
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawChangelog {
    #[serde(default)]
    pub histories: Vec<RawHistory>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawHistory {
    #[serde(default)]
    pub author: Option<RawAuthor>,
    #[serde(default)]
    pub created: String,
    #[serde(default)]
    pub items: Vec<RawChangeItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawAuthor {
    #[serde(default)]
    pub display_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawChangeItem {
    pub field: String,
    #[serde(default)]
    pub from_string: Option<String>,
    #[serde(default)]
    pub to_string: Option<String>,
}

/// One row of the task table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedTask {
    pub id: String,
    pub task: String,
    pub status: String,
    pub created: String,
    pub updated: String,
    pub sprint: Vec<String>,
    pub url: String,
}

/// One Jira history event; `items` keep upstream order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangelogEntry {
    pub author: String,
    pub created: String,
    pub items: Vec<ChangeItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeItem {
    pub field: String,
    pub from_string: Option<String>,
    pub to_string: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueDetail {
    pub key: String,
    pub summary: String,
    pub summary_html: String,
    pub updated: String,
    pub description: String,
    pub description_html: String,
    pub changelog: Vec<ChangelogEntry>,
}
