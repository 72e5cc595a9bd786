use serde::Serialize;

/// Outcome of one rule during a traced render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleStep {
    pub rule: String,
    pub changed: bool,
}
