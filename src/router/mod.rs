//! Route table and request matching.
//!
//! Routes are registered once, before the server starts, and the [`Router`]
//! never changes afterwards. Three pattern kinds exist:
//!
//! | pattern            | kind     | matches                                   |
//! |--------------------|----------|-------------------------------------------|
//! | `/about`           | exact    | exactly `/about`                          |
//! | `/users/{id}`      | variable | `/users/<one segment>`, binds `id`        |
//! | `/assets/*`        | wildcard | any path starting with `/assets/`         |
//!
//! Matching runs three full passes over the table in that order; the first
//! pass with a hit wins, and within a pass registration order decides.

pub mod handler;

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::http::request::{Method, Request};

pub use handler::{BufferedResponder, Handler, Respond};

/// One `/`-separated piece of a variable-path pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Literal(String),
    Variable(String),
}

/// A compiled route path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoutePattern {
    /// Literal path, compared as a whole.
    Exact(String),
    /// Segments, at least one of them a `{name}` capture.
    Variable(Vec<Segment>),
    /// Text before the first `*`; matches any path it prefixes.
    Wildcard(String),
}

impl RoutePattern {
    /// Classifies a route path. A `*` anywhere makes it a wildcard route.
    pub fn parse(path: &str) -> Self {
        if let Some(idx) = path.find('*') {
            return RoutePattern::Wildcard(path[..idx].to_string());
        }

        let segments: Vec<Segment> = path
            .split('/')
            .map(|s| match s.strip_prefix('{').and_then(|s| s.strip_suffix('}')) {
                Some(name) => Segment::Variable(name.to_string()),
                None => Segment::Literal(s.to_string()),
            })
            .collect();

        if segments.iter().any(|s| matches!(s, Segment::Variable(_))) {
            RoutePattern::Variable(segments)
        } else {
            RoutePattern::Exact(path.to_string())
        }
    }

    /// Binds the pattern's variables against `path`.
    ///
    /// Returns `None` unless the segment counts agree and every literal
    /// segment is equal byte for byte.
    fn bind(segments: &[Segment], path: &str) -> Option<HashMap<String, String>> {
        let parts: Vec<&str> = path.split('/').collect();
        if parts.len() != segments.len() {
            return None;
        }

        let mut variables = HashMap::new();
        for (segment, part) in segments.iter().zip(parts) {
            match segment {
                Segment::Literal(lit) if lit != part => return None,
                Segment::Literal(_) => {}
                Segment::Variable(name) => {
                    variables.insert(name.clone(), part.to_string());
                }
            }
        }

        Some(variables)
    }
}

/// A registered (method, path pattern, handler) triple.
#[derive(Clone)]
pub struct Route {
    pub method: Method,
    /// The path as registered
    pub path: String,
    pub pattern: RoutePattern,
    handler: Arc<dyn Handler>,
}

impl Route {
    /// Creates a route from a function or closure.
    ///
    /// ```
    /// # use tessera::http::request::Method;
    /// # use tessera::http::response::StatusCode;
    /// # use tessera::router::Route;
    /// let route = Route::new(Method::GET, "/ping", |_req, res| {
    ///     res.respond(StatusCode::NoContent, &[], None);
    ///     Ok(())
    /// });
    /// assert_eq!(route.path, "/ping");
    /// ```
    pub fn new<F>(method: Method, path: &str, handler: F) -> Self
    where
        F: Fn(&Request, &mut dyn Respond) -> anyhow::Result<()> + Send + Sync + 'static,
    {
        Self::with_handler(method, path, handler)
    }

    /// Creates a route from any [`Handler`] implementation.
    pub fn with_handler(method: Method, path: &str, handler: impl Handler) -> Self {
        Self {
            method,
            path: path.to_string(),
            pattern: RoutePattern::parse(path),
            handler: Arc::new(handler),
        }
    }

    pub fn handler(&self) -> &dyn Handler {
        self.handler.as_ref()
    }
}

impl fmt::Debug for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Route")
            .field("method", &self.method)
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}

/// The outcome of a successful lookup.
#[derive(Debug)]
pub struct RouteMatch<'a> {
    pub route: &'a Route,
    /// Set only for variable-path routes.
    pub path_variables: Option<HashMap<String, String>>,
}

/// Immutable, ordered route table.
#[derive(Debug, Clone, Default)]
pub struct Router {
    routes: Vec<Route>,
}

impl Router {
    pub fn new(routes: Vec<Route>) -> Self {
        Self { routes }
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Selects the route for a request: exact, then variable-path, then wildcard.
    pub fn find(&self, request: &Request) -> Option<RouteMatch<'_>> {
        self.find_exact(request)
            .or_else(|| self.find_variable(request))
            .or_else(|| self.find_wildcard(request))
    }

    fn candidates(&self, method: Method) -> impl Iterator<Item = &Route> {
        self.routes.iter().filter(move |r| r.method == method)
    }

    fn find_exact(&self, request: &Request) -> Option<RouteMatch<'_>> {
        self.candidates(request.method)
            .find(|r| matches!(&r.pattern, RoutePattern::Exact(p) if *p == request.path))
            .map(|route| RouteMatch {
                route,
                path_variables: None,
            })
    }

    fn find_variable(&self, request: &Request) -> Option<RouteMatch<'_>> {
        self.candidates(request.method).find_map(|route| match &route.pattern {
            RoutePattern::Variable(segments) => {
                RoutePattern::bind(segments, &request.path).map(|vars| RouteMatch {
                    route,
                    path_variables: Some(vars),
                })
            }
            _ => None,
        })
    }

    fn find_wildcard(&self, request: &Request) -> Option<RouteMatch<'_>> {
        self.candidates(request.method)
            .find(|r| match &r.pattern {
                RoutePattern::Wildcard(prefix) => request.path.starts_with(prefix.as_str()),
                _ => false,
            })
            .map(|route| RouteMatch {
                route,
                path_variables: None,
            })
    }
}
