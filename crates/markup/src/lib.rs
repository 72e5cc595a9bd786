//! Jira wiki markup to HTML.
//!
//! Conversion is a fixed, ordered list of [`rules::Rule`]s, each a plain
//! text rewrite over the whole string. See [`engine`] for the order and the
//! contract each stage hands to the next.

pub mod compact;
pub mod engine;
pub mod rules;
pub mod trace;

pub use compact::compact_text;
pub use engine::{render, render_with_trace, Rendered};
pub use trace::RuleStep;
