use tessera::http::headers::Payload;
use tessera::http::parser::{ParseError, parse_http_request};
use tessera::http::request::Method;

#[test]
fn test_parse_simple_get_request() {
    let req = b"GET / HTTP/1.1\r\nHost: example.com\r\n\r\n";
    let parsed = parse_http_request(req).unwrap();

    assert_eq!(parsed.method, Method::GET);
    assert_eq!(parsed.path, "/");
    assert_eq!(parsed.version, "HTTP/1.1");
    assert_eq!(parsed.headers.get("host").unwrap(), "example.com");
    assert!(parsed.payload.is_none());
    assert!(parsed.query.is_none());
    assert!(parsed.path_variables.is_none());
}

#[test]
fn test_parse_post_json_body() {
    let req = b"POST /api HTTP/1.1\r\nContent-Type: application/json\r\n\r\n{\"a\":1}";
    let parsed = parse_http_request(req).unwrap();

    assert_eq!(parsed.method, Method::POST);
    assert_eq!(
        parsed.payload,
        Some(Payload::Json(serde_json::json!({ "a": 1 })))
    );
}

#[test]
fn test_parse_invalid_json_body_is_error() {
    let req = b"POST /api HTTP/1.1\r\nContent-Type: application/json\r\n\r\n{\"a\":";
    let result = parse_http_request(req);

    assert!(matches!(result, Err(ParseError::InvalidJson(_))));
}

#[test]
fn test_parse_json_body_spread_over_lines() {
    let req = b"PUT /api HTTP/1.1\r\nContent-Type: application/json\r\n\r\n{\"a\":\r\n[1,2]}";
    let parsed = parse_http_request(req).unwrap();

    assert_eq!(
        parsed.payload,
        Some(Payload::Json(serde_json::json!({ "a": [1, 2] })))
    );
}

#[test]
fn test_parse_form_body() {
    let req = b"POST /form HTTP/1.1\r\nContent-Type: application/x-www-form-urlencoded\r\n\r\nname=ana&age=30&flag";
    let parsed = parse_http_request(req).unwrap();

    let Some(Payload::Form(form)) = parsed.payload else {
        panic!("expected form payload");
    };
    assert_eq!(form.get("name").unwrap().as_deref(), Some("ana"));
    assert_eq!(form.get("age").unwrap().as_deref(), Some("30"));
    assert_eq!(form.get("flag").unwrap(), &None);
}

#[test]
fn test_parse_text_body_joins_lines() {
    let req = b"PATCH /note HTTP/1.1\r\nContent-Type: text/plain\r\n\r\nfirst\r\nsecond";
    let parsed = parse_http_request(req).unwrap();

    assert_eq!(parsed.payload, Some(Payload::Text("firstsecond".to_string())));
}

#[test]
fn test_parse_content_type_with_parameters() {
    let req = b"POST /note HTTP/1.1\r\nContent-Type: text/html; charset=utf-8\r\n\r\n<p>hi</p>";
    let parsed = parse_http_request(req).unwrap();

    assert_eq!(parsed.payload, Some(Payload::Text("<p>hi</p>".to_string())));
}

#[test]
fn test_parse_unknown_content_type_has_no_payload() {
    let req = b"POST /upload HTTP/1.1\r\nContent-Type: application/octet-stream\r\n\r\n\x00\x01";
    let parsed = parse_http_request(req).unwrap();

    assert!(parsed.payload.is_none());
}

#[test]
fn test_parse_missing_content_type_has_no_payload() {
    let req = b"POST /api HTTP/1.1\r\nContent-Length: 5\r\n\r\nhello";
    let parsed = parse_http_request(req).unwrap();

    assert!(parsed.payload.is_none());
}

#[test]
fn test_parse_read_only_method_ignores_body() {
    let req = b"GET /api HTTP/1.1\r\nContent-Type: application/json\r\n\r\nnot json";
    let parsed = parse_http_request(req).unwrap();

    assert!(parsed.payload.is_none());
}

#[test]
fn test_parse_request_with_path_and_query_string() {
    let req = b"GET /search?q=rust&page=2 HTTP/1.1\r\nHost: example.com\r\n\r\n";
    let parsed = parse_http_request(req).unwrap();

    assert_eq!(parsed.path, "/search");
    assert_eq!(parsed.query_value("q"), Some("rust"));
    assert_eq!(parsed.query_value("page"), Some("2"));
}

#[test]
fn test_parse_normalizes_path() {
    let req = b"GET /a/b/../c/./d%20e HTTP/1.1\r\n\r\n";
    let parsed = parse_http_request(req).unwrap();

    assert_eq!(parsed.path, "/a/c/de");
}

#[test]
fn test_parse_invalid_http_method() {
    let req = b"INVALID / HTTP/1.1\r\n\r\n";
    let result = parse_http_request(req);

    assert!(matches!(result, Err(ParseError::InvalidMethod(m)) if m == "INVALID"));
}

#[test]
fn test_parse_missing_version() {
    let result = parse_http_request(b"GET /\r\n\r\n");

    assert!(matches!(result, Err(ParseError::MalformedRequestLine)));
}

#[test]
fn test_parse_missing_target() {
    let result = parse_http_request(b"GET\r\n\r\n");

    assert!(matches!(result, Err(ParseError::MalformedRequestLine)));
}

#[test]
fn test_parse_malformed_header_is_tolerated() {
    let req = b"GET / HTTP/1.1\r\nBrokenHeader\r\nHost: a\r\n\r\n";
    let parsed = parse_http_request(req).unwrap();

    assert_eq!(parsed.headers.get("").unwrap(), "BrokenHeader");
    assert_eq!(parsed.header("host"), Some("a"));
}

#[test]
fn test_parse_various_http_methods() {
    let methods = vec![
        ("GET", Method::GET),
        ("HEAD", Method::HEAD),
        ("DELETE", Method::DELETE),
        ("CONNECT", Method::CONNECT),
        ("OPTIONS", Method::OPTIONS),
        ("TRACE", Method::TRACE),
        ("PATCH", Method::PATCH),
        ("POST", Method::POST),
        ("PUT", Method::PUT),
        ("get", Method::GET),
        ("Post", Method::POST),
    ];

    for (method_str, expected_method) in methods {
        let req = format!("{} / HTTP/1.1\r\n\r\n", method_str);
        let parsed = parse_http_request(req.as_bytes()).unwrap();
        assert_eq!(parsed.method, expected_method);
    }
}

#[test]
fn test_parse_header_names_lowercased_and_values_trimmed() {
    let req = b"GET / HTTP/1.1\r\nContent-Type:   application/json  \r\nX-Dup: one\r\nx-dup: two\r\n\r\n";
    let parsed = parse_http_request(req).unwrap();

    assert_eq!(parsed.headers.get("content-type").unwrap(), "application/json");
    assert!(!parsed.headers.contains_key("Content-Type"));
    assert_eq!(parsed.header("X-DUP"), Some("two"));
}

#[test]
fn test_parse_headers_stop_at_blank_line() {
    let req = b"POST / HTTP/1.1\r\nContent-Type: text/plain\r\n\r\nNot-A-Header: x";
    let parsed = parse_http_request(req).unwrap();

    assert!(parsed.header("not-a-header").is_none());
    assert_eq!(parsed.payload, Some(Payload::Text("Not-A-Header: x".to_string())));
}
