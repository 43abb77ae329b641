//! Validation helpers for configuration values.

use miette::SourceSpan;

/// Spans of every quoted occurrence of `value` in the source, in order.
///
/// The span covers the value without its quotes.
pub(crate) fn find_value_spans(src: &str, value: &str) -> Vec<SourceSpan> {
    let mut spans: Vec<(usize, usize)> = ['"', '\'']
        .into_iter()
        .flat_map(|quote| {
            let pattern = format!("{quote}{value}{quote}");
            src.match_indices(&pattern)
                .map(|(pos, _)| (pos + 1, value.len()))
                .collect::<Vec<_>>()
        })
        .collect();
    spans.sort_unstable();
    spans.into_iter().map(SourceSpan::from).collect()
}

/// First quoted occurrence of `value` in the source.
pub(crate) fn find_value_span(src: &str, value: &str) -> Option<SourceSpan> {
    find_value_spans(src, value).into_iter().next()
}

/// Check a Go package name. Returns the reason if invalid.
pub(crate) fn validate_go_package(name: &str) -> Option<&'static str> {
    let mut chars = name.chars();
    match chars.next() {
        None => return Some("package name cannot be empty"),
        Some(c) if !c.is_ascii_lowercase() => {
            return Some("package name must start with a lowercase letter");
        }
        _ => {}
    }
    if !chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_') {
        return Some("use only lowercase letters, digits and underscores");
    }
    None
}

/// Check a dotted Protocol Buffers package name. Returns the reason if invalid.
pub(crate) fn validate_proto_package(name: &str) -> Option<&'static str> {
    if name.is_empty() {
        return Some("package name cannot be empty");
    }
    for segment in name.split('.') {
        let mut chars = segment.chars();
        match chars.next() {
            None => return Some("package segments cannot be empty"),
            Some(c) if !(c.is_ascii_alphabetic() || c == '_') => {
                return Some("each segment must start with a letter or underscore");
            }
            _ => {}
        }
        if !chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
            return Some("use only letters, digits and underscores in each segment");
        }
    }
    None
}

/// Check the suffix appended to reserved field names. Returns the reason if
/// invalid.
pub(crate) fn validate_reserved_suffix(suffix: &str) -> Option<&'static str> {
    if suffix.is_empty() {
        return Some("reserved_suffix cannot be empty");
    }
    if !suffix.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Some("reserved_suffix may only contain letters, digits and underscores");
    }
    None
}
