use crate::http::headers::{parse_headers, parse_payload};
use crate::http::request::{Method, Request};
use crate::http::uri::{extract_query, normalize};

#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("malformed request line")]
    MalformedRequestLine,
    #[error("unrecognized method `{0}`")]
    InvalidMethod(String),
    #[error("invalid JSON body: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

/// Parses one complete request held in `buf`.
///
/// The buffer is assumed to contain the whole message; nothing is carried
/// over between calls.
pub fn parse_http_request(buf: &[u8]) -> Result<Request, ParseError> {
    let data = String::from_utf8_lossy(buf);

    // Request line
    let request_line = data.split("\r\n").next().unwrap_or_default();
    let mut parts = request_line.split(' ');

    let method_str = parts.next().ok_or(ParseError::MalformedRequestLine)?;
    let method = Method::from_str(method_str)
        .ok_or_else(|| ParseError::InvalidMethod(method_str.to_string()))?;

    let uri = parts
        .next()
        .filter(|s| !s.is_empty())
        .ok_or(ParseError::MalformedRequestLine)?;
    let version = parts
        .next()
        .filter(|s| !s.is_empty())
        .ok_or(ParseError::MalformedRequestLine)?;

    let (mut path, query) = extract_query(&normalize(uri));
    if !path.starts_with('/') {
        path.insert(0, '/');
    }

    let headers = parse_headers(&data);

    let payload = if method.is_read_only() {
        None
    } else {
        parse_payload(&headers, &data)?
    };

    Ok(Request {
        method,
        path,
        version: version.to_string(),
        headers,
        payload,
        query,
        path_variables: None,
    })
}
