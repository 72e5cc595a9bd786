use serde::Deserialize;
use tasklens_common::error::TasklensResult;
use tasklens_issues::{SortKey, SortOrder};

#[derive(Debug, Default, Deserialize)]
pub struct TaskListQuery {
    pub sort: Option<String>,
    pub order: Option<String>,
}

impl TaskListQuery {
    /// Column and direction to sort by; defaults to most recently updated first.
    pub fn sort_spec(&self) -> TasklensResult<(SortKey, SortOrder)> {
        let key = match self.sort.as_deref() {
            Some(raw) => raw.parse()?,
            None => SortKey::default(),
        };
        let order = match self.order.as_deref() {
            Some(raw) => raw.parse()?,
            None => SortOrder::default(),
        };
        Ok((key, order))
    }
}
