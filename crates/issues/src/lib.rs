pub mod display;
pub mod extract;
pub mod models;
pub mod normalize;
pub mod sort;
pub mod time;

pub use extract::{description_text, extract_plain_text};
pub use models::{ChangeItem, ChangelogEntry, IssueDetail, NormalizedTask, RawIssue};
pub use normalize::{normalize, normalize_detail, Site};
pub use sort::{compare, sort_tasks, SortKey, SortOrder};
