use super::{Rule, BREAK};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ListKind {
    Unordered,
    Ordered,
}

impl ListKind {
    fn of(segment: &str) -> Option<(Self, &str)> {
        if let Some(item) = segment.strip_prefix("* ") {
            Some((Self::Unordered, item))
        } else if let Some(item) = segment.strip_prefix("# ") {
            Some((Self::Ordered, item))
        } else {
            None
        }
    }

    fn open(self) -> &'static str {
        match self {
            Self::Unordered => "<ul>",
            Self::Ordered => "<ol>",
        }
    }

    fn close(self) -> &'static str {
        match self {
            Self::Unordered => "</ul>",
            Self::Ordered => "</ol>",
        }
    }
}

/// Groups consecutive `* ` / `# ` segments into `<ul>` / `<ol>` lists.
///
/// Operates on [`BREAK`]-delimited segments. The marker in front of the first
/// item and between items is absorbed by the list; the one after the last
/// item is kept.
pub struct ListRule;

impl Rule for ListRule {
    fn name(&self) -> &'static str {
        "list"
    }

    fn apply(&self, input: &str) -> String {
        let mut out = String::with_capacity(input.len());
        let mut current: Option<ListKind> = None;

        for (idx, segment) in input.split(BREAK).enumerate() {
            match ListKind::of(segment) {
                Some((kind, item)) => {
                    if current != Some(kind) {
                        if let Some(prev) = current {
                            out.push_str(prev.close());
                        }
                        out.push_str(kind.open());
                        current = Some(kind);
                    }
                    out.push_str("<li>");
                    out.push_str(item);
                    out.push_str("</li>");
                }
                None => {
                    if let Some(prev) = current.take() {
                        out.push_str(prev.close());
                    }
                    if idx > 0 {
                        out.push_str(BREAK);
                    }
                    out.push_str(segment);
                }
            }
        }

        if let Some(prev) = current {
            out.push_str(prev.close());
        }
        out
    }
}
