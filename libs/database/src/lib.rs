//! MongoDB connectivity for the bookstore services.
//!
//! The document store is treated as an opaque collaborator: this crate only
//! knows how to build a configured client, retry the initial connection, and
//! answer health probes. Entity access lives in the domain crates.

pub mod mongodb;
pub mod retry;

pub use retry::{retry, retry_with_backoff, RetryConfig};
