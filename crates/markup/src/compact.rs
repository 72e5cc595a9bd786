use std::sync::LazyLock;

use regex::Regex;

static BLANK_RUNS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([\r\n]+\s*){2,}").expect("blank-run pattern is valid"));
static SPACE_RUNS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r" +").expect("space-run pattern is valid"));

/// Collapse runs of blank lines into a single newline and runs of spaces into
/// one space, then trim.
pub fn compact_text(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    let cleaned = BLANK_RUNS.replace_all(text, "\n");
    let cleaned = SPACE_RUNS.replace_all(&cleaned, " ");
    cleaned.trim().to_string()
}
