use super::{Rule, BREAK};

/// Replaces every newline with [`BREAK`]. Runs after the inline rules and
/// before heading/list detection.
pub struct LineBreakRule;

impl Rule for LineBreakRule {
    fn name(&self) -> &'static str {
        "line_break"
    }

    fn apply(&self, input: &str) -> String {
        input.replace("\r\n", "\n").replace('\n', BREAK)
    }
}
