//! Tessera - a small HTTP/1.1 server written directly over byte streams
//!
//! Core library: request parsing, URI normalization, routing and response
//! composition.

pub mod config;
pub mod files;
pub mod http;
pub mod router;
pub mod routes;
pub mod server;
