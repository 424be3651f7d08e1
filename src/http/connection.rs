use std::sync::Arc;

use bytes::BytesMut;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};

use crate::http::parser::{parse_http_request, ParseError};
use crate::http::request::Request;
use crate::http::response::Response;
use crate::http::writer::ResponseWriter;
use crate::router::{BufferedResponder, Route, Router};

/// Serves exactly one request/response exchange on a stream.
pub struct Connection<S> {
    stream: S,
    router: Arc<Router>,
    buffer: BytesMut,
    state: ConnectionState,
}

pub enum ConnectionState {
    AwaitingData,
    Parsing,
    Matched(Route, Request),
    Unmatched(Request),
    ParseFailed(ParseError),
    Responded(ResponseWriter),
    Closed,
}

impl<S> Connection<S>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    pub fn new(stream: S, router: Arc<Router>, read_buffer_size: usize) -> Self {
        Self {
            stream,
            router,
            buffer: BytesMut::with_capacity(read_buffer_size),
            state: ConnectionState::AwaitingData,
        }
    }

    /// Drives the state machine to `Closed`.
    ///
    /// An `Err` means nothing was written: the request body could not be
    /// decoded, the handler failed, or the stream broke. The caller logs it and
    /// drops the connection.
    pub async fn run(&mut self) -> anyhow::Result<()> {
        loop {
            match std::mem::replace(&mut self.state, ConnectionState::Closed) {
                ConnectionState::AwaitingData => {
                    let n = self.stream.read_buf(&mut self.buffer).await?;

                    self.state = if n == 0 {
                        // Client closed without sending anything
                        ConnectionState::Closed
                    } else {
                        ConnectionState::Parsing
                    };
                }

                ConnectionState::Parsing => {
                    self.state = match parse_http_request(&self.buffer) {
                        Ok(request) => self.route(request),
                        Err(e @ ParseError::InvalidJson(_)) => {
                            return Err(anyhow::Error::new(e).context("request body rejected"));
                        }
                        Err(e) => ConnectionState::ParseFailed(e),
                    };
                }

                ConnectionState::Matched(route, request) => {
                    tracing::debug!(
                        method = %request.method,
                        path = %request.path,
                        route = %route.path,
                        "Route matched"
                    );

                    let mut responder = BufferedResponder::new();
                    route.handler().handle(&request, &mut responder)?;

                    if responder.responses() == 0 {
                        tracing::warn!(route = %route.path, "Handler produced no response");
                    }

                    self.state =
                        ConnectionState::Responded(ResponseWriter::from_bytes(responder.into_bytes()));
                }

                ConnectionState::Unmatched(request) => {
                    tracing::debug!(method = %request.method, path = %request.path, "No route");
                    self.state = ConnectionState::Responded(ResponseWriter::new(&Response::not_found()));
                }

                ConnectionState::ParseFailed(e) => {
                    tracing::debug!(error = %e, "Unparseable request");
                    self.state = ConnectionState::Responded(ResponseWriter::new(&Response::not_found()));
                }

                ConnectionState::Responded(mut writer) => {
                    writer.write_to_stream(&mut self.stream).await?;
                    self.stream.shutdown().await?;
                    self.state = ConnectionState::Closed;
                }

                ConnectionState::Closed => {
                    break;
                }
            }
        }

        Ok(())
    }

    fn route(&self, request: Request) -> ConnectionState {
        let Some(found) = self.router.find(&request) else {
            return ConnectionState::Unmatched(request);
        };

        let route = found.route.clone();
        let request = match found.path_variables {
            Some(vars) => request.with_path_variables(vars),
            None => request,
        };

        ConnectionState::Matched(route, request)
    }
}
