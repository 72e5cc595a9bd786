use std::sync::LazyLock;

use regex::Regex;

use super::Rule;

static PANEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{panel(:[^}]*)?\}").expect("panel pattern is valid"));

/// `{panel:...}` opens a `<div>`; a bare `{panel}` closes the open panel, or
/// opens one if none is open. Panel attributes are dropped. Unbalanced
/// markers are emitted as-is, never repaired.
pub struct PanelRule;

impl Rule for PanelRule {
    fn name(&self) -> &'static str {
        "panel"
    }

    fn apply(&self, input: &str) -> String {
        let mut open = false;
        PANEL
            .replace_all(input, |caps: &regex::Captures<'_>| {
                if caps.get(1).is_none() && open {
                    open = false;
                    "</div>"
                } else {
                    open = true;
                    "<div>"
                }
            })
            .into_owned()
    }
}
