//! HTTP middleware module.
//!
//! CORS configuration and security headers shared by the services.

pub mod cors;
pub mod security;

pub use cors::{cors_layer_from_env, create_cors_layer};
pub use security::security_headers;
