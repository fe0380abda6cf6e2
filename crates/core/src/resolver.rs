use std::collections::HashMap;

/// Extract the property name from a version expression of the form
/// `${name}`.
///
/// The `${`…`}` frame must span the whole string and the inner text is taken
/// verbatim, so partial or embedded references (`1.${x}`, `v${x}`) are never
/// substituted piecewise.
#[must_use]
pub fn property_name(raw: &str) -> Option<&str> {
    raw.strip_prefix("${").and_then(|rest| rest.strip_suffix('}'))
}

/// Resolve a raw version expression against one document's property table.
///
/// A literal version passes through unchanged. A `${name}` reference resolves
/// to the property's literal value, or `None` when the document does not
/// define it — property scoping is per-document, parent chains are never
/// walked. Resolution is single-pass: a property value that itself contains
/// `${...}` is returned unexpanded.
#[must_use]
pub fn resolve_version(
    raw: Option<&str>,
    properties: &HashMap<String, String>,
) -> Option<String> {
    let raw = raw?;
    match property_name(raw) {
        Some(name) => properties.get(name).cloned(),
        None => Some(raw.to_string()),
    }
}
