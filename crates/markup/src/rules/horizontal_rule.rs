use std::sync::LazyLock;

use regex::Regex;

use super::Rule;

static HYPHEN_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"-{4,}").expect("rule pattern is valid"));

pub struct HorizontalRuleRule;

impl Rule for HorizontalRuleRule {
    fn name(&self) -> &'static str {
        "horizontal_rule"
    }

    fn apply(&self, input: &str) -> String {
        HYPHEN_RUN.replace_all(input, "<hr />").into_owned()
    }
}
