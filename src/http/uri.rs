//! Request-target normalization.
//!
//! A raw URI goes through three steps, always in this order:
//!
//! 1. percent-decoding
//! 2. removal of every literal space
//! 3. dot-segment removal (RFC 3986 §5.2.4)
//!
//! The query string is split off afterwards by [`extract_query`].

use std::collections::HashMap;

use percent_encoding::percent_decode_str;

/// Query-string mapping. A key without `=` maps to `None`.
pub type QueryMap = HashMap<String, Option<String>>;

/// Normalizes a raw request target.
///
/// # Example
///
/// ```
/// # use tessera::http::uri::normalize;
/// assert_eq!(normalize("/a/b/c/./../../g"), "/a/g");
/// assert_eq!(normalize("/my%20file/./x"), "/myfile/x");
/// ```
pub fn normalize(raw: &str) -> String {
    let decoded = percent_decode_str(raw).decode_utf8_lossy();
    remove_dot_segments(&strip_whitespace(&decoded))
}

/// Removes every space character.
pub fn strip_whitespace(input: &str) -> String {
    input.chars().filter(|c| *c != ' ').collect()
}

/// Iterative "remove_dot_segments".
///
/// `input` is consumed through a cursor; emitted segments are kept in order so
/// that a `..` only ever drops the most recently emitted one.
pub fn remove_dot_segments(input: &str) -> String {
    let mut output: Vec<&str> = Vec::new();
    let mut pos = 0;

    while pos < input.len() {
        let rest = &input[pos..];

        // A: leading relative prefixes
        if rest.starts_with("../") {
            pos += 3;
        } else if rest.starts_with("./") {
            pos += 2;
        }
        // B: "/./" and a trailing "/." become "/"
        else if rest.starts_with("/./") {
            pos += 2;
        } else if rest == "/." {
            output.push("/");
            pos += 2;
        }
        // C: "/../" and a trailing "/.." become "/" and drop one output segment
        else if rest.starts_with("/../") {
            pos += 3;
            output.pop();
        } else if rest == "/.." {
            output.pop();
            output.push("/");
            pos += 3;
        }
        // D: nothing but dots left
        else if rest == "." || rest == ".." {
            pos += rest.len();
        }
        // E: move the next segment (with its leading '/') to the output
        else {
            let end = rest
                .bytes()
                .skip(1)
                .position(|b| b == b'/')
                .map(|i| i + 1)
                .unwrap_or(rest.len());
            output.push(&rest[..end]);
            pos += end;
        }
    }

    output.concat()
}

/// Splits the query string off a normalized path.
///
/// Only the final `/`-delimited segment is inspected. When it contains `?`,
/// the path is cut at the first `?` and the rest of that segment is split on
/// `&` and then `=`. Returns the path untouched and `None` otherwise.
pub fn extract_query(path: &str) -> (String, Option<QueryMap>) {
    let last_segment = match path.rfind('/') {
        Some(idx) => &path[idx + 1..],
        None => path,
    };

    let Some(q) = last_segment.find('?') else {
        return (path.to_string(), None);
    };

    let query_free = match path.find('?') {
        Some(idx) => &path[..idx],
        None => path,
    };

    let query = split_pairs(&last_segment[q + 1..]);
    (query_free.to_string(), Some(query))
}

/// Splits `a=1&b=2&c` into `{a: Some("1"), b: Some("2"), c: None}`.
///
/// Later keys overwrite earlier ones. Only the text between the first and
/// second `=` of a pair is kept as its value.
pub fn split_pairs(input: &str) -> HashMap<String, Option<String>> {
    input
        .split('&')
        .map(|pair| {
            let mut parts = pair.split('=');
            let key = parts.next().unwrap_or_default().to_string();
            let value = parts.next().map(str::to_string);
            (key, value)
        })
        .collect()
}
