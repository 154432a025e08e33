//! # CORS
//!
//! The web client may be served from another origin during development,
//! so any origin, method and header is allowed. Credentials are never
//! used: the password check issues nothing to send back.

use tower_http::cors::{Any, CorsLayer};

/// Build the CORS layer.
pub fn layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}
