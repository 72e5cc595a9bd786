//! Inline emphasis. Each delimiter pairs non-greedily with the next one on
//! the same line; nesting of the same delimiter is not supported.

use std::sync::LazyLock;

use regex::Regex;

use super::Rule;

static BOLD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*(.*?)\*").expect("bold pattern is valid"));
static ITALIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"_(.*?)_").expect("italic pattern is valid"));
static MONOSPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{(.*?)\}\}").expect("monospace pattern is valid"));

pub struct BoldRule;

impl Rule for BoldRule {
    fn name(&self) -> &'static str {
        "bold"
    }

    fn apply(&self, input: &str) -> String {
        BOLD.replace_all(input, "<strong>$1</strong>").into_owned()
    }
}

pub struct ItalicRule;

impl Rule for ItalicRule {
    fn name(&self) -> &'static str {
        "italic"
    }

    fn apply(&self, input: &str) -> String {
        ITALIC.replace_all(input, "<em>$1</em>").into_owned()
    }
}

pub struct MonospaceRule;

impl Rule for MonospaceRule {
    fn name(&self) -> &'static str {
        "monospace"
    }

    fn apply(&self, input: &str) -> String {
        MONOSPACE.replace_all(input, "<code>$1</code>").into_owned()
    }
}
