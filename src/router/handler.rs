//! Route handlers and the response capability they are given.
//!
//! A handler never sees the socket. It receives the matched [`Request`] and a
//! `&mut dyn Respond`, and every response it produces goes through
//! [`compose`](crate::http::response::compose), so the `Server` header and
//! the content-type gate always apply.

use crate::http::request::Request;
use crate::http::response::{compose, Body, Response, StatusCode};

/// The single capability handed to handlers: emit a response.
pub trait Respond {
    fn respond(&mut self, status: StatusCode, headers: &[(String, String)], body: Option<&Body>);

    fn send(&mut self, response: &Response) {
        self.respond(response.status, &response.headers, response.body.as_ref());
    }
}

/// Code run for a matched route.
///
/// Implemented for every `Fn(&Request, &mut dyn Respond) -> anyhow::Result<()>`,
/// so plain functions and closures can be registered directly. An `Err` aborts
/// the exchange: the connection is closed and whatever was already emitted is
/// discarded.
pub trait Handler: Send + Sync + 'static {
    fn handle(&self, req: &Request, res: &mut dyn Respond) -> anyhow::Result<()>;
}

impl<F> Handler for F
where
    F: Fn(&Request, &mut dyn Respond) -> anyhow::Result<()> + Send + Sync + 'static,
{
    fn handle(&self, req: &Request, res: &mut dyn Respond) -> anyhow::Result<()> {
        (self)(req, res)
    }
}

/// Collects composed responses in memory.
///
/// The connection hands one of these to the handler and writes the collected
/// bytes once the handler returns.
#[derive(Debug, Default)]
pub struct BufferedResponder {
    buffer: Vec<u8>,
    responses: usize,
}

impl BufferedResponder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of `respond` calls so far.
    pub fn responses(&self) -> usize {
        self.responses
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.buffer
    }
}

impl Respond for BufferedResponder {
    fn respond(&mut self, status: StatusCode, headers: &[(String, String)], body: Option<&Body>) {
        self.buffer.extend(compose(status, headers, body));
        self.responses += 1;
    }
}
