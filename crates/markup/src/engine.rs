use crate::rules::emphasis::{BoldRule, ItalicRule, MonospaceRule};
use crate::rules::heading::HeadingRule;
use crate::rules::horizontal_rule::HorizontalRuleRule;
use crate::rules::line_break::LineBreakRule;
use crate::rules::link::LinkRule;
use crate::rules::list::ListRule;
use crate::rules::panel::PanelRule;
use crate::rules::Rule;
use crate::trace::RuleStep;

#[derive(Debug, Clone)]
pub struct Rendered {
    pub html: String,
    pub steps: Vec<RuleStep>,
}

/// The conversion pipeline, in application order.
///
/// Rules 1-6 see raw text, so emphasis and links never span a newline.
/// [`LineBreakRule`] then replaces every newline with `<br />`; from that
/// point the text is a sequence of `<br />`-delimited segments, which is the
/// only shape [`HeadingRule`] and [`ListRule`] understand.
fn pipeline() -> Vec<Box<dyn Rule>> {
    vec![
        Box::new(PanelRule),
        Box::new(HorizontalRuleRule),
        Box::new(BoldRule),
        Box::new(ItalicRule),
        Box::new(MonospaceRule),
        Box::new(LinkRule),
        Box::new(LineBreakRule),
        Box::new(HeadingRule),
        Box::new(ListRule),
    ]
}

/// Convert Jira wiki markup to an HTML fragment.
///
/// Never fails: anything the rules do not recognise passes through as-is.
/// Literal text is not HTML-escaped.
pub fn render(markup: &str) -> String {
    if markup.is_empty() {
        return String::new();
    }
    pipeline()
        .iter()
        .fold(markup.to_string(), |text, rule| rule.apply(&text))
}

/// Same as [`render`], also reporting which rules touched the text.
pub fn render_with_trace(markup: &str) -> Rendered {
    let mut html = markup.to_string();
    let mut steps = Vec::new();

    if !markup.is_empty() {
        for rule in pipeline() {
            let next = rule.apply(&html);
            steps.push(RuleStep {
                rule: rule.name().to_string(),
                changed: next != html,
            });
            html = next;
        }
    }

    Rendered { html, steps }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_renders_empty() {
        assert_eq!(render(""), "");
    }

    #[test]
    fn plain_text_passes_through() {
        assert_eq!(render("nothing to see"), "nothing to see");
    }

    #[test]
    fn bold_is_wrapped() {
        let html = render("*bold*");
        assert!(html.contains("<strong>bold</strong>"), "got: {html}");
    }

    #[test]
    fn heading_at_start_of_input() {
        assert_eq!(render("h1. Title"), "<h1>Title</h1>");
    }

    #[test]
    fn heading_after_newline() {
        assert_eq!(
            render("intro\nh3. Details\nbody"),
            "intro<br /><h3>Details</h3><br />body"
        );
    }

    #[test]
    fn unordered_list_after_line_break() {
        assert_eq!(
            render("Steps\n* one\n* two\ndone"),
            "Steps<ul><li>one</li><li>two</li></ul><br />done"
        );
    }

    #[test]
    fn ordered_list_after_line_break() {
        assert_eq!(
            render("Steps\n# first\n# second"),
            "Steps<ol><li>first</li><li>second</li></ol>"
        );
    }

    #[test]
    fn emphasis_does_not_span_lines() {
        assert_eq!(render("a*b\nc*d"), "a*b<br />c*d");
    }

    #[test]
    fn panel_with_rule_and_link() {
        let html = render("{panel:bgColor=#eae6ff}\nSee [docs|https://x.io]\n----\n{panel}");
        assert_eq!(
            html,
            "<div><br />See <a href=\"https://x.io\" target=\"_blank\" rel=\"noopener noreferrer\">docs</a><br /><hr /><br /></div>"
        );
    }

    #[test]
    fn overlapping_emphasis_is_not_escaped() {
        // The underscore pair inside the bold span still becomes italics.
        assert_eq!(
            render("*snake_case_name*"),
            "<strong>snake<em>case</em>name</strong>"
        );
    }

    #[test]
    fn unmatched_tokens_pass_through() {
        assert_eq!(render("a * b [not a link] {{open"), "a * b [not a link] {{open");
    }

    #[test]
    fn trace_reports_every_rule_in_order() {
        let rendered = render_with_trace("h2. *Hi*");
        assert_eq!(rendered.html, "<h2><strong>Hi</strong></h2>");
        let names: Vec<&str> = rendered.steps.iter().map(|s| s.rule.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "panel",
                "horizontal_rule",
                "bold",
                "italic",
                "monospace",
                "link",
                "line_break",
                "heading",
                "list"
            ]
        );
        let changed: Vec<&str> = rendered
            .steps
            .iter()
            .filter(|s| s.changed)
            .map(|s| s.rule.as_str())
            .collect();
        assert_eq!(changed, vec!["bold", "heading"]);
    }

    #[test]
    fn trace_of_empty_input_has_no_steps() {
        let rendered = render_with_trace("");
        assert!(rendered.html.is_empty());
        assert!(rendered.steps.is_empty());
    }
}
