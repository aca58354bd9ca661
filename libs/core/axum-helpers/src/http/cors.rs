use axum::http::{HeaderValue, Method};
use std::io;
use std::time::Duration;
use tower_http::cors::CorsLayer;

/// Creates a CORS layer for a single allowed origin.
///
/// The storefront is served from one configured origin and sends cookies,
/// so credentials are allowed and the origin is never a wildcard.
pub fn create_cors_layer(allowed_origin: HeaderValue) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(allowed_origin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::PATCH,
            Method::OPTIONS,
        ])
        .allow_headers([
            axum::http::header::CONTENT_TYPE,
            axum::http::header::ACCEPT,
            axum::http::header::COOKIE,
        ])
        .allow_credentials(true)
        .max_age(Duration::from_secs(3600))
}

/// Builds the CORS layer from the `CORS_ALLOWED_ORIGIN` environment variable.
///
/// The variable is required and must hold exactly one origin, e.g.
/// `CORS_ALLOWED_ORIGIN=http://localhost:5173`. Startup fails without it.
pub fn cors_layer_from_env() -> io::Result<CorsLayer> {
    let origin = std::env::var("CORS_ALLOWED_ORIGIN").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "CORS_ALLOWED_ORIGIN environment variable is required. Example: CORS_ALLOWED_ORIGIN=http://localhost:5173",
        )
    })?;

    let origin = origin.trim().parse::<HeaderValue>().map_err(|e| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("Invalid CORS_ALLOWED_ORIGIN value: {}", e),
        )
    })?;

    tracing::info!("CORS configured with allowed origin: {:?}", origin);
    Ok(create_cors_layer(origin))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cors_layer_from_env_missing() {
        temp_env::with_var_unset("CORS_ALLOWED_ORIGIN", || {
            assert!(cors_layer_from_env().is_err());
        });
    }

    #[test]
    fn test_cors_layer_from_env_valid() {
        temp_env::with_var("CORS_ALLOWED_ORIGIN", Some("http://localhost:5173"), || {
            assert!(cors_layer_from_env().is_ok());
        });
    }

    #[test]
    fn test_cors_layer_from_env_invalid_value() {
        temp_env::with_var("CORS_ALLOWED_ORIGIN", Some("not a header\nvalue"), || {
            assert!(cors_layer_from_env().is_err());
        });
    }
}
