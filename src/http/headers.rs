//! Header block and body decoding.

use std::collections::HashMap;

use crate::http::parser::ParseError;
use crate::http::uri::split_pairs;

/// A request body decoded according to its `content-type`.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    /// `application/json`
    Json(serde_json::Value),
    /// `application/x-www-form-urlencoded`; keys without `=` map to `None`
    Form(HashMap<String, Option<String>>),
    /// any `text/*` type, verbatim
    Text(String),
}

/// Parses the header block of a raw request.
///
/// The request line is skipped and parsing stops at the first empty line.
/// Field names are trimmed and lower-cased, values are trimmed. A line with no
/// `:` is kept as an empty field name, and a repeated field keeps its last value.
pub fn parse_headers(raw: &str) -> HashMap<String, String> {
    let mut headers = HashMap::new();

    for line in raw.split("\r\n").skip(1) {
        if line.is_empty() {
            break;
        }

        let (field, value) = line.split_once(':').unwrap_or(("", line));

        headers.insert(
            field.trim().to_ascii_lowercase(),
            value.trim().to_string(),
        );
    }

    headers
}

/// Returns the body of a raw request: every line after the header separator,
/// joined back together without the CRLFs between them.
///
/// A request without a separator line has an empty body.
pub fn raw_body(raw: &str) -> String {
    let mut lines = raw.split("\r\n");
    if !lines.by_ref().any(|line| line.is_empty()) {
        return String::new();
    }
    lines.collect()
}

/// Decodes the body by `content-type`.
///
/// Returns `Ok(None)` when the header is missing or names a type outside the
/// JSON, form, and `text/*` families. Malformed JSON is an error.
pub fn parse_payload(
    headers: &HashMap<String, String>,
    raw: &str,
) -> Result<Option<Payload>, ParseError> {
    let Some(content_type) = headers.get("content-type") else {
        return Ok(None);
    };

    let media_type = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    let body = raw_body(raw);

    let payload = match media_type.as_str() {
        "application/json" => Some(Payload::Json(serde_json::from_str(&body)?)),
        "application/x-www-form-urlencoded" => Some(Payload::Form(split_pairs(&body))),
        t if t.starts_with("text/") => Some(Payload::Text(body)),
        _ => None,
    };

    Ok(payload)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn body_lines_are_joined() {
        let raw = "POST / HTTP/1.1\r\nA: b\r\n\r\nline one\r\nline two";
        assert_eq!(raw_body(raw), "line oneline two");
    }

    #[test]
    fn missing_separator_means_empty_body() {
        assert_eq!(raw_body("POST / HTTP/1.1\r\nA: b"), "");
    }
}
