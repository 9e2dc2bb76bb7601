//! Variable substitution engine for templates

use super::types::{ClientRecord, TemplatePattern};
use crate::metrics::TEMPLATES_RENDERED_TOTAL;

/// Render a pattern against a client record.
///
/// Only the variables the pattern declares are substituted, and every
/// occurrence of each one is replaced. Unknown variables and empty client
/// fields render as an empty string.
pub fn render(pattern: &TemplatePattern, client: &ClientRecord) -> String {
    let mut result = pattern.text.clone();

    for variable in &pattern.variables {
        let placeholder = format!("{{{}}}", variable);
        let replacement = client.value_for(variable).unwrap_or_default();
        result = result.replace(&placeholder, replacement);
    }

    TEMPLATES_RENDERED_TOTAL.inc();
    result
}

/// Collect the `{identifier}` placeholders in `text`.
///
/// Names come back in order of first appearance, without duplicates. An
/// identifier is one or more ASCII alphanumerics or underscores; anything
/// else between braces is ordinary text.
pub fn extract_placeholders(text: &str) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    let mut rest = text;

    while let Some(open) = rest.find('{') {
        let after = &rest[open + 1..];
        match after.find(|c: char| !(c.is_ascii_alphanumeric() || c == '_')) {
            Some(end) if end > 0 && after[end..].starts_with('}') => {
                let name = &after[..end];
                if !names.iter().any(|n| n == name) {
                    names.push(name.to_string());
                }
                rest = &after[end + 1..];
            }
            _ => rest = after,
        }
    }

    names
}
