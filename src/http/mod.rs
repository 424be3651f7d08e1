//! HTTP protocol implementation.
//!
//! One connection carries exactly one request and one response.
//!
//! # Architecture
//!
//! - **`uri`**: percent-decoding, whitespace stripping, dot-segment removal, query extraction
//! - **`headers`**: header block parsing and content-type driven body decoding
//! - **`parser`**: assembles a [`request::Request`] from the raw bytes of one read
//! - **`request`**: HTTP request representation
//! - **`response`**: status codes and the response composer
//! - **`writer`**: writes composed bytes to the client
//! - **`connection`**: the per-connection state machine
//! - **`mime`**: MIME type detection based on file extensions
//!
//! # Connection State Machine
//!
//! ```text
//!        ┌──────────────┐
//!        │ AwaitingData │ ← single read; EOF → Closed
//!        └──────┬───────┘
//!               ▼
//!        ┌──────────────┐
//!        │   Parsing    │ ← bad JSON body → error, closed without a response
//!        └──────┬───────┘
//!     ┌─────────┼──────────────┐
//!     ▼         ▼              ▼
//!  Matched   Unmatched    ParseFailed
//!  (handler)  (404)         (404)
//!     └─────────┼──────────────┘
//!               ▼
//!        ┌──────────────┐
//!        │  Responded   │ ← write, then shut down the write half
//!        └──────┬───────┘
//!               ▼
//!            Closed
//! ```
//!
//! Requests split across several reads are not reassembled; whatever the
//! first read returns is parsed as the whole message.

pub mod connection;
pub mod headers;
pub mod mime;
pub mod parser;
pub mod request;
pub mod response;
pub mod uri;
pub mod writer;
