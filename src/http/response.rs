/// Implementation name sent in the mandatory `Server` header.
pub const SERVER_NAME: &str = "tessera";

/// Protocol token used in status lines unless a caller overrides it.
pub const DEFAULT_VERSION: &str = "HTTP/1.1";

/// HTTP status codes the server can emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 100 Continue
    Continue,
    /// 101 Switching Protocols
    SwitchingProtocols,
    /// 103 Early Hints
    EarlyHints,
    /// 200 Ok
    Ok,
    /// 201 Created
    Created,
    /// 202 Accepted
    Accepted,
    /// 204 No Content
    NoContent,
    /// 301 Moved Permanently
    MovedPermanently,
    /// 302 Found
    Found,
    /// 303 See Other
    SeeOther,
    /// 400 Bad Request
    BadRequest,
    /// 401 Unauthorized
    Unauthorized,
    /// 403 Forbidden
    Forbidden,
    /// 404 Not Found
    NotFound,
    /// 418 I'm a teapot
    ImATeapot,
}

impl StatusCode {
    /// Returns the numeric HTTP status code.
    ///
    /// # Example
    ///
    /// ```
    /// # use tessera::http::response::StatusCode;
    /// assert_eq!(StatusCode::Ok.as_u16(), 200);
    /// assert_eq!(StatusCode::ImATeapot.as_u16(), 418);
    /// ```
    pub fn as_u16(&self) -> u16 {
        match self {
            StatusCode::Continue => 100,
            StatusCode::SwitchingProtocols => 101,
            StatusCode::EarlyHints => 103,
            StatusCode::Ok => 200,
            StatusCode::Created => 201,
            StatusCode::Accepted => 202,
            StatusCode::NoContent => 204,
            StatusCode::MovedPermanently => 301,
            StatusCode::Found => 302,
            StatusCode::SeeOther => 303,
            StatusCode::BadRequest => 400,
            StatusCode::Unauthorized => 401,
            StatusCode::Forbidden => 403,
            StatusCode::NotFound => 404,
            StatusCode::ImATeapot => 418,
        }
    }

    /// Returns the reason phrase written after the code.
    ///
    /// # Example
    ///
    /// ```
    /// # use tessera::http::response::StatusCode;
    /// assert_eq!(StatusCode::Ok.reason_phrase(), "Ok");
    /// assert_eq!(StatusCode::NotFound.reason_phrase(), "Not Found");
    /// ```
    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Continue => "Continue",
            StatusCode::SwitchingProtocols => "Switching Protocols",
            StatusCode::EarlyHints => "Early Hints",
            StatusCode::Ok => "Ok",
            StatusCode::Created => "Created",
            StatusCode::Accepted => "Accepted",
            StatusCode::NoContent => "No Content",
            StatusCode::MovedPermanently => "Moved Permanently",
            StatusCode::Found => "Found",
            StatusCode::SeeOther => "See Other",
            StatusCode::BadRequest => "Bad Request",
            StatusCode::Unauthorized => "Unauthorized",
            StatusCode::Forbidden => "Forbidden",
            StatusCode::NotFound => "Not Found",
            StatusCode::ImATeapot => "I'm a teapot",
        }
    }
}

/// A response body. Text is appended as UTF-8, bytes are appended raw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Body {
    Text(String),
    Bytes(Vec<u8>),
}

impl Body {
    pub fn len(&self) -> usize {
        match self {
            Body::Text(s) => s.len(),
            Body::Bytes(b) => b.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Body::Text(s) => s.as_bytes(),
            Body::Bytes(b) => b,
        }
    }
}

impl From<String> for Body {
    fn from(s: String) -> Self {
        Body::Text(s)
    }
}

impl From<&str> for Body {
    fn from(s: &str) -> Self {
        Body::Text(s.to_string())
    }
}

impl From<Vec<u8>> for Body {
    fn from(b: Vec<u8>) -> Self {
        Body::Bytes(b)
    }
}

/// Serializes a response with the default protocol version.
pub fn compose(status: StatusCode, headers: &[(String, String)], body: Option<&Body>) -> Vec<u8> {
    compose_with_version(DEFAULT_VERSION, status, headers, body)
}

/// Serializes a response.
///
/// Header lines are written as `\r\n<field>:<value>` after an injected
/// `Server` header. The body is attached only when `headers` contains a field
/// spelled exactly `Content-Type`; without it the body is dropped.
pub fn compose_with_version(
    version: &str,
    status: StatusCode,
    headers: &[(String, String)],
    body: Option<&Body>,
) -> Vec<u8> {
    let mut head = format!("{} {} {}", version, status.as_u16(), status.reason_phrase());

    head.push_str("\r\nServer:");
    head.push_str(SERVER_NAME);
    for (field, value) in headers {
        head.push_str("\r\n");
        head.push_str(field);
        head.push(':');
        head.push_str(value);
    }
    head.push_str("\r\n\r\n");

    let mut buf = head.into_bytes();

    let has_content_type = headers.iter().any(|(field, _)| field == "Content-Type");
    if let Some(body) = body.filter(|_| has_content_type) {
        buf.extend_from_slice(body.as_bytes());
    }

    buf
}

/// Represents a complete HTTP response ready to be composed.
#[derive(Debug, Clone)]
pub struct Response {
    pub status: StatusCode,
    /// Header pairs in the order they are written
    pub headers: Vec<(String, String)>,
    pub body: Option<Body>,
}

/// Builder for constructing HTTP responses in a fluent style.
///
/// # Example
///
/// ```
/// # use tessera::http::response::{ResponseBuilder, StatusCode};
/// let response = ResponseBuilder::new(StatusCode::Ok)
///     .content("application/json", "{}")
///     .build();
/// assert!(response.to_bytes().ends_with(b"\r\n\r\n{}"));
/// ```
pub struct ResponseBuilder {
    status: StatusCode,
    headers: Vec<(String, String)>,
    body: Option<Body>,
}

impl ResponseBuilder {
    pub fn new(status: StatusCode) -> Self {
        Self {
            status,
            headers: Vec::new(),
            body: None,
        }
    }

    /// Appends a header. Fields are written in insertion order.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((key.into(), value.into()));
        self
    }

    /// Sets the body without touching the headers.
    pub fn body(mut self, body: impl Into<Body>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Sets the body along with matching `Content-Length` and `Content-Type` headers.
    pub fn content(self, content_type: &str, body: impl Into<Body>) -> Self {
        let body = body.into();
        self.header("Content-Length", body.len().to_string())
            .header("Content-Type", content_type)
            .body(body)
    }

    pub fn build(self) -> Response {
        Response {
            status: self.status,
            headers: self.headers,
            body: self.body,
        }
    }
}

impl Response {
    /// Creates a 404 Not Found response with no headers and no body.
    pub fn not_found() -> Self {
        ResponseBuilder::new(StatusCode::NotFound).build()
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        compose(self.status, &self.headers, self.body.as_ref())
    }
}
