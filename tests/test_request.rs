use std::collections::HashMap;

use tessera::http::headers::Payload;
use tessera::http::request::{Method, Request, RequestBuilder};

fn request_with_headers(headers: HashMap<String, String>) -> Request {
    Request {
        method: Method::GET,
        path: "/".to_string(),
        version: "HTTP/1.1".to_string(),
        headers,
        payload: None,
        query: None,
        path_variables: None,
    }
}

#[test]
fn test_request_header_retrieval_is_case_insensitive() {
    let mut headers = HashMap::new();
    headers.insert("host".to_string(), "example.com".to_string());
    headers.insert("content-type".to_string(), "application/json".to_string());

    let req = request_with_headers(headers);

    assert_eq!(req.header("Host"), Some("example.com"));
    assert_eq!(req.header("CONTENT-TYPE"), Some("application/json"));
    assert_eq!(req.header("Missing"), None);
}

#[test]
fn test_request_builder_normalizes_headers() {
    let req = RequestBuilder::new()
        .method(Method::POST)
        .path("/api")
        .header("  X-Custom ", "  value ")
        .build()
        .unwrap();

    assert_eq!(req.version, "HTTP/1.1");
    assert_eq!(req.headers.get("x-custom").unwrap(), "value");
}

#[test]
fn test_request_builder_requires_method_and_path() {
    assert!(RequestBuilder::new().path("/").build().is_err());
    assert!(RequestBuilder::new().method(Method::GET).build().is_err());
}

#[test]
fn test_request_builder_payload_and_query() {
    let mut query = HashMap::new();
    query.insert("page".to_string(), Some("3".to_string()));
    query.insert("all".to_string(), None);

    let req = RequestBuilder::new()
        .method(Method::PUT)
        .path("/notes")
        .payload(Payload::Text("hello".to_string()))
        .query(query)
        .build()
        .unwrap();

    assert_eq!(req.payload, Some(Payload::Text("hello".to_string())));
    assert_eq!(req.query_value("page"), Some("3"));
    assert_eq!(req.query_value("all"), None);
    assert_eq!(req.query_value("missing"), None);
}

#[test]
fn test_request_path_variables_attached_once() {
    let req = request_with_headers(HashMap::new());
    assert_eq!(req.path_variable("id"), None);

    let mut vars = HashMap::new();
    vars.insert("id".to_string(), "42".to_string());
    let req = req.with_path_variables(vars);

    assert_eq!(req.path_variable("id"), Some("42"));
    assert_eq!(req.path_variable("other"), None);
}

#[test]
fn test_request_method_equality() {
    assert_eq!(Method::GET, Method::GET);
    assert_ne!(Method::GET, Method::POST);
}

#[test]
fn test_request_method_from_string() {
    assert_eq!(Method::from_str("GET"), Some(Method::GET));
    assert_eq!(Method::from_str("post"), Some(Method::POST));
    assert_eq!(Method::from_str("Trace"), Some(Method::TRACE));
    assert_eq!(Method::from_str("INVALID"), None);
    assert_eq!(Method::from_str(""), None);
}

#[test]
fn test_request_method_read_only() {
    for m in [Method::GET, Method::HEAD, Method::CONNECT, Method::OPTIONS, Method::TRACE] {
        assert!(m.is_read_only(), "{} should be read-only", m);
    }
    for m in [Method::POST, Method::PUT, Method::DELETE, Method::PATCH] {
        assert!(!m.is_read_only(), "{} should carry a body", m);
    }
}

#[test]
fn test_request_method_display() {
    assert_eq!(Method::OPTIONS.to_string(), "OPTIONS");
    assert_eq!(Method::DELETE.as_str(), "DELETE");
}
