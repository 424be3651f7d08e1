use std::collections::HashMap;

use crate::http::headers::Payload;
use crate::http::uri::QueryMap;

/// HTTP request methods.
///
/// The nine methods the parser accepts. Any other token fails parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    /// GET - Retrieve a resource
    GET,
    /// HEAD - Like GET but without the response body
    HEAD,
    /// DELETE - Delete a resource
    DELETE,
    /// CONNECT - Establish a tunnel
    CONNECT,
    /// OPTIONS - Describe communication options
    OPTIONS,
    /// TRACE - Loop-back test
    TRACE,
    /// PATCH - Partial modification of a resource
    PATCH,
    /// POST - Create or submit data
    POST,
    /// PUT - Replace a resource
    PUT,
}

/// Represents a parsed HTTP request from a client.
///
/// Everything except `path_variables` is fixed once the parser returns;
/// `path_variables` is attached by the router when a `{name}` route matches.
#[derive(Debug, Clone)]
pub struct Request {
    /// The HTTP method (GET, POST, etc.)
    pub method: Method,
    /// Normalized, query-free path (e.g., "/index.html")
    pub path: String,
    /// Protocol token from the request line (typically "HTTP/1.1")
    pub version: String,
    /// Request headers, keyed by lower-cased field name
    pub headers: HashMap<String, String>,
    /// Decoded body; always `None` for read-only methods
    pub payload: Option<Payload>,
    /// Query string of the last path segment, if it had one
    pub query: Option<QueryMap>,
    /// Values bound to the matched route's `{name}` segments
    pub path_variables: Option<HashMap<String, String>>,
}

/// Builder for constructing Request objects.
#[derive(Default)]
pub struct RequestBuilder {
    method: Option<Method>,
    path: Option<String>,
    version: Option<String>,
    headers: HashMap<String, String>,
    payload: Option<Payload>,
    query: Option<QueryMap>,
}

impl Method {
    /// Parses an HTTP method from a string, ignoring ASCII case.
    ///
    /// # Example
    ///
    /// ```
    /// # use tessera::http::request::Method;
    /// assert_eq!(Method::from_str("GET"), Some(Method::GET));
    /// assert_eq!(Method::from_str("patch"), Some(Method::PATCH));
    /// assert_eq!(Method::from_str("BREW"), None);
    /// ```
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_ascii_uppercase().as_str() {
            "GET" => Some(Method::GET),
            "HEAD" => Some(Method::HEAD),
            "DELETE" => Some(Method::DELETE),
            "CONNECT" => Some(Method::CONNECT),
            "OPTIONS" => Some(Method::OPTIONS),
            "TRACE" => Some(Method::TRACE),
            "PATCH" => Some(Method::PATCH),
            "POST" => Some(Method::POST),
            "PUT" => Some(Method::PUT),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Method::GET => "GET",
            Method::HEAD => "HEAD",
            Method::DELETE => "DELETE",
            Method::CONNECT => "CONNECT",
            Method::OPTIONS => "OPTIONS",
            Method::TRACE => "TRACE",
            Method::PATCH => "PATCH",
            Method::POST => "POST",
            Method::PUT => "PUT",
        }
    }

    /// Methods whose body is never decoded.
    pub fn is_read_only(&self) -> bool {
        matches!(
            self,
            Method::GET | Method::HEAD | Method::CONNECT | Method::OPTIONS | Method::TRACE
        )
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl RequestBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn method(mut self, method: Method) -> Self {
        self.method = Some(method);
        self
    }

    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Adds a header; the name is lower-cased and the value trimmed.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(
            key.into().trim().to_ascii_lowercase(),
            value.into().trim().to_string(),
        );
        self
    }

    pub fn payload(mut self, payload: Payload) -> Self {
        self.payload = Some(payload);
        self
    }

    pub fn query(mut self, query: QueryMap) -> Self {
        self.query = Some(query);
        self
    }

    pub fn build(self) -> Result<Request, &'static str> {
        Ok(Request {
            method: self.method.ok_or("method missing")?,
            path: self.path.ok_or("path missing")?,
            version: self.version.unwrap_or_else(|| "HTTP/1.1".to_string()),
            headers: self.headers,
            payload: self.payload,
            query: self.query,
            path_variables: None,
        })
    }
}

impl Request {
    /// Retrieves a header value by name, ignoring case.
    ///
    /// # Arguments
    ///
    /// * `key` - Header name to look up
    ///
    /// # Returns
    ///
    /// `Some(&str)` with the header value if present, `None` otherwise.
    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers
            .get(&key.to_ascii_lowercase())
            .map(|v| v.as_str())
    }

    /// Value of a bound `{name}` path segment.
    pub fn path_variable(&self, name: &str) -> Option<&str> {
        self.path_variables
            .as_ref()?
            .get(name)
            .map(|v| v.as_str())
    }

    /// Value of a query-string key. Keys present without `=` yield `None`.
    pub fn query_value(&self, key: &str) -> Option<&str> {
        self.query.as_ref()?.get(key)?.as_deref()
    }

    /// Consumes the request and attaches the bindings of a variable-path match.
    pub fn with_path_variables(mut self, variables: HashMap<String, String>) -> Self {
        self.path_variables = Some(variables);
        self
    }
}
