//! Whole-buffer normalization of streamed generation output.

/// Opening fence marker the model wraps documents in.
const OPENING_FENCE: &str = "```html";

/// Bare fence marker, used by the model as a closing delimiter.
const FENCE: &str = "```";

/// Canonical document-type declaration.
const DOCTYPE: &str = "<!DOCTYPE html>";

/// Derive a presentation-ready document from the raw accumulated text.
///
/// Pure and deterministic: the same input always yields the same output, and
/// applying it to its own output changes nothing. It is meant to be re-run
/// over the entire buffer after every chunk, which is what keeps fences that
/// straddle a chunk boundary from leaking through.
///
/// Rules, in order:
/// 1. strip every `` ```html `` opening marker and every `` ``` `` closing
///    marker, wherever they appear (the model may restate the document and
///    fence it more than once);
/// 2. trim surrounding whitespace;
/// 3. if the result is non-empty, contains no document-type declaration, and
///    does not begin with an `<html` open tag, prepend the canonical
///    declaration and a newline.
pub fn normalize(raw: &str) -> String {
    let stripped = strip_marker(raw, OPENING_FENCE);
    let stripped = strip_marker(&stripped, FENCE);
    let trimmed = stripped.trim();

    if trimmed.is_empty() {
        return String::new();
    }

    let lower = trimmed.to_lowercase();
    if lower.contains("<!doctype html>") || lower.starts_with("<html") {
        trimmed.to_string()
    } else {
        format!("{}\n{}", DOCTYPE, trimmed)
    }
}

/// Remove every occurrence of `marker`, plus one directly following newline.
fn strip_marker(text: &str, marker: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(idx) = rest.find(marker) {
        out.push_str(&rest[..idx]);
        rest = &rest[idx + marker.len()..];
        if let Some(after_newline) = rest.strip_prefix('\n') {
            rest = after_newline;
        }
    }

    out.push_str(rest);
    out
}
