use std::sync::LazyLock;

use regex::Regex;

use super::Rule;

static LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[(.+?)\|(.+?)\]").expect("link pattern is valid"));

/// `[label|url]` becomes an anchor that opens in a new tab without handing
/// the opener to the target page.
pub struct LinkRule;

impl Rule for LinkRule {
    fn name(&self) -> &'static str {
        "link"
    }

    fn apply(&self, input: &str) -> String {
        LINK.replace_all(input, |caps: &regex::Captures<'_>| {
            format!(
                "<a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">{}</a>",
                caps[2].replace('"', "&quot;"),
                &caps[1]
            )
        })
        .into_owned()
    }
}
