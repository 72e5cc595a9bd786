use serde_json::Value;

/// Flatten an Atlassian Document Format body into plain text.
///
/// The `text` of each block's inline children is concatenated without a
/// separator and blocks are joined with `\n`. Marks and non-text nodes are
/// dropped. A missing document or block list yields an empty string.
pub fn extract_plain_text(doc: &Value) -> String {
    let Some(blocks) = doc.get("content").and_then(Value::as_array) else {
        return String::new();
    };

    blocks
        .iter()
        .map(|block| match block.get("content").and_then(Value::as_array) {
            Some(inlines) => inlines
                .iter()
                .map(|inline| inline.get("text").and_then(Value::as_str).unwrap_or(""))
                .collect::<String>(),
            None => String::new(),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Description as plain text: strings pass through, ADF documents are
/// flattened, anything else is empty.
pub fn description_text(description: Option<&Value>) -> String {
    match description {
        Some(Value::String(text)) => text.clone(),
        Some(doc @ Value::Object(_)) => extract_plain_text(doc),
        _ => String::new(),
    }
}
