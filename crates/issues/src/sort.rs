use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use tasklens_common::error::TasklensError;

use crate::models::NormalizedTask;
use crate::time::parse_timestamp;

static DIGITS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+").expect("digit pattern is valid"));

/// Table column a task list can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    Id,
    Task,
    Status,
    Created,
    #[default]
    Updated,
    Sprint,
    Url,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Task => "task",
            Self::Status => "status",
            Self::Created => "created",
            Self::Updated => "updated",
            Self::Sprint => "sprint",
            Self::Url => "url",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = TasklensError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "id" => Ok(Self::Id),
            "task" => Ok(Self::Task),
            "status" => Ok(Self::Status),
            "created" => Ok(Self::Created),
            "updated" => Ok(Self::Updated),
            "sprint" => Ok(Self::Sprint),
            "url" => Ok(Self::Url),
            other => Err(TasklensError::Validation(format!(
                "unknown sort column: {other}"
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = TasklensError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            other => Err(TasklensError::Validation(format!(
                "unknown sort order: {other} (expected asc or desc)"
            ))),
        }
    }
}

/// Number after the last `-` of an issue key; 0 when it is not numeric.
fn key_number(key: &str) -> u64 {
    key.rsplit('-')
        .next()
        .and_then(|suffix| suffix.parse().ok())
        .unwrap_or(0)
}

/// First run of digits in the first sprint name; 0 without one.
fn sprint_number(sprints: &[String]) -> u64 {
    sprints
        .first()
        .and_then(|name| DIGITS.find(name))
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(0)
}

fn compare_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Compare two tasks on one column. Unparseable timestamps sort before any
/// valid one. There is no secondary key.
pub fn compare(a: &NormalizedTask, b: &NormalizedTask, key: SortKey, order: SortOrder) -> Ordering {
    let ordering = match key {
        SortKey::Id => key_number(&a.id).cmp(&key_number(&b.id)),
        SortKey::Created => parse_timestamp(&a.created).cmp(&parse_timestamp(&b.created)),
        SortKey::Updated => parse_timestamp(&a.updated).cmp(&parse_timestamp(&b.updated)),
        SortKey::Sprint => sprint_number(&a.sprint).cmp(&sprint_number(&b.sprint)),
        SortKey::Task => compare_text(&a.task, &b.task),
        SortKey::Status => compare_text(&a.status, &b.status),
        SortKey::Url => compare_text(&a.url, &b.url),
    };

    match order {
        SortOrder::Asc => ordering,
        SortOrder::Desc => ordering.reverse(),
    }
}

/// Stable in-place sort; equal tasks keep their input order, so sorting an
/// already sorted slice again with the same key and order is a no-op.
pub fn sort_tasks(tasks: &mut [NormalizedTask], key: SortKey, order: SortOrder) {
    tasks.sort_by(|a, b| compare(a, b, key, order));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(id: &str) -> NormalizedTask {
        NormalizedTask {
            id: id.to_string(),
            task: String::new(),
            status: String::new(),
            created: String::new(),
            updated: String::new(),
            sprint: Vec::new(),
            url: String::new(),
        }
    }

    fn ids(tasks: &[NormalizedTask]) -> Vec<&str> {
        tasks.iter().map(|t| t.id.as_str()).collect()
    }

    #[test]
    fn id_sorts_numerically() {
        let mut tasks = vec![task("ABC-2"), task("ABC-10"), task("ABC-1")];
        sort_tasks(&mut tasks, SortKey::Id, SortOrder::Asc);
        assert_eq!(ids(&tasks), vec!["ABC-1", "ABC-2", "ABC-10"]);

        sort_tasks(&mut tasks, SortKey::Id, SortOrder::Desc);
        assert_eq!(ids(&tasks), vec!["ABC-10", "ABC-2", "ABC-1"]);
    }

    #[test]
    fn id_uses_suffix_after_last_hyphen() {
        assert_eq!(key_number("MY-PROJ-77"), 77);
        assert_eq!(key_number("ABC-x"), 0);
        assert_eq!(key_number("NOHYPHEN"), 0);
    }

    #[test]
    fn sorting_twice_is_idempotent() {
        let mut tasks = vec![task("A-3"), task("B-3"), task("A-1"), task("C-2"), task("B-1")];
        sort_tasks(&mut tasks, SortKey::Id, SortOrder::Asc);
        let once = tasks.clone();
        sort_tasks(&mut tasks, SortKey::Id, SortOrder::Asc);
        assert_eq!(tasks, once);
        // Ties keep input order.
        assert_eq!(ids(&once), vec!["A-1", "B-1", "C-2", "A-3", "B-3"]);
    }

    #[test]
    fn dates_compare_chronologically() {
        let mut a = task("A-1");
        a.updated = "2024-03-01T10:00:00.000+0000".to_string();
        let mut b = task("A-2");
        // Earlier instant despite the later wall-clock hour.
        b.updated = "2024-03-01T11:00:00.000+0300".to_string();
        assert_eq!(compare(&a, &b, SortKey::Updated, SortOrder::Asc), Ordering::Greater);
        assert_eq!(compare(&a, &b, SortKey::Updated, SortOrder::Desc), Ordering::Less);
    }

    #[test]
    fn unparseable_dates_sort_first() {
        let mut a = task("A-1");
        a.created = "not a date".to_string();
        let mut b = task("A-2");
        b.created = "2020-01-01T00:00:00.000+0000".to_string();
        assert_eq!(compare(&a, &b, SortKey::Created, SortOrder::Asc), Ordering::Less);
    }

    #[test]
    fn sprint_uses_first_number_of_first_sprint() {
        let mut a = task("A-1");
        a.sprint = vec!["Sprint 12".to_string(), "Sprint 3".to_string()];
        let mut b = task("A-2");
        b.sprint = vec!["Sprint 9".to_string()];
        let none = task("A-3");

        assert_eq!(compare(&a, &b, SortKey::Sprint, SortOrder::Asc), Ordering::Greater);
        assert_eq!(compare(&none, &b, SortKey::Sprint, SortOrder::Asc), Ordering::Less);
        assert_eq!(sprint_number(&["Backlog".to_string()]), 0);
        assert_eq!(sprint_number(&["Q3 Sprint 14".to_string()]), 3);
        assert_eq!(sprint_number(&["Sprint ٣ 7".to_string()]), 7);
    }

    #[test]
    fn text_columns_ignore_case_first() {
        let mut a = task("A-1");
        a.status = "done".to_string();
        let mut b = task("A-2");
        b.status = "In Progress".to_string();
        assert_eq!(compare(&a, &b, SortKey::Status, SortOrder::Asc), Ordering::Less);

        let mut upper = task("A-3");
        upper.task = "Alpha".to_string();
        let mut lower = task("A-4");
        lower.task = "alpha".to_string();
        assert_eq!(compare(&upper, &lower, SortKey::Task, SortOrder::Asc), Ordering::Less);
    }

    #[test]
    fn parse_keys_and_orders() {
        assert_eq!("sprint".parse::<SortKey>().unwrap(), SortKey::Sprint);
        assert_eq!("asc".parse::<SortOrder>().unwrap(), SortOrder::Asc);
        assert!("log".parse::<SortKey>().is_err());
        assert!("up".parse::<SortOrder>().is_err());
        assert_eq!(SortKey::default(), SortKey::Updated);
        assert_eq!(SortOrder::default(), SortOrder::Desc);
    }
}
