//! # Middleware Stack
//!
//! Tower middleware for the API layer:
//! - [`tracing_layer`]: request/response tracing with `TraceLayer`.
//! - [`cors`]: permissive CORS for the browser client.

pub mod cors;
pub mod tracing_layer;
