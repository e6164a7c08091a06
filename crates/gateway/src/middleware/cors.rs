//! Cross-origin layer built from the configured origin patterns.

use axum::http::{
    header::{AUTHORIZATION, CONTENT_TYPE},
    request::Parts,
    HeaderValue, Method,
};
use tower_http::cors::{AllowOrigin, CorsLayer};

use common::CorsConfig;

/// Build the CORS layer. Origins may contain a single `*` wildcard.
pub fn cors_layer(config: &CorsConfig) -> CorsLayer {
    let config = config.clone();
    let allow_origin = AllowOrigin::predicate(move |origin: &HeaderValue, _: &Parts| {
        origin
            .to_str()
            .map(|origin| config.is_allowed(origin))
            .unwrap_or(false)
    });

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([AUTHORIZATION, CONTENT_TYPE])
        .allow_credentials(true)
}
