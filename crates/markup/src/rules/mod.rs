pub mod emphasis;
pub mod heading;
pub mod horizontal_rule;
pub mod line_break;
pub mod link;
pub mod list;
pub mod panel;

/// Marker the line-break rule emits; heading and list detection split on it.
pub const BREAK: &str = "<br />";

pub trait Rule {
    fn name(&self) -> &'static str;
    fn apply(&self, input: &str) -> String;
}
