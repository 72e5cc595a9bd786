use super::{Rule, BREAK};

/// `hN. text` at the start of a segment becomes `<hN>text</hN>`.
///
/// Input must already be [`BREAK`]-delimited; a raw newline is not a segment
/// boundary here.
pub struct HeadingRule;

fn heading(segment: &str) -> Option<String> {
    let bytes = segment.as_bytes();
    if bytes.len() < 4 || bytes[0] != b'h' || &bytes[2..4] != b". " {
        return None;
    }
    let level = bytes[1];
    if !(b'1'..=b'6').contains(&level) {
        return None;
    }
    let level = level as char;
    Some(format!("<h{level}>{}</h{level}>", &segment[4..]))
}

impl Rule for HeadingRule {
    fn name(&self) -> &'static str {
        "heading"
    }

    fn apply(&self, input: &str) -> String {
        input
            .split(BREAK)
            .map(|segment| heading(segment).unwrap_or_else(|| segment.to_string()))
            .collect::<Vec<_>>()
            .join(BREAK)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_level() {
        for level in 1..=6 {
            let out = HeadingRule.apply(&format!("h{level}. Title"));
            assert_eq!(out, format!("<h{level}>Title</h{level}>"));
        }
    }

    #[test]
    fn level_seven_is_text() {
        assert_eq!(HeadingRule.apply("h7. Nope"), "h7. Nope");
    }

    #[test]
    fn only_at_segment_start() {
        assert_eq!(HeadingRule.apply("see h1. inline"), "see h1. inline");
        assert_eq!(
            HeadingRule.apply("lead<br />h2. Next<br />tail"),
            "lead<br /><h2>Next</h2><br />tail"
        );
    }

    #[test]
    fn raw_newline_is_not_a_boundary() {
        assert_eq!(HeadingRule.apply("lead\nh2. Next"), "lead\nh2. Next");
    }

    #[test]
    fn empty_heading_text() {
        assert_eq!(HeadingRule.apply("h1. "), "<h1></h1>");
    }
}
