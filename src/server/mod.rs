//! Socket setup: binding and the accept loop.

pub mod listener;
