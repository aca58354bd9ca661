//! Accounts Domain
//!
//! Admin, seller, and buyer accounts over MongoDB: login, signup, admin
//! listings, and deletion. The three roles share one document shape and
//! differ only in their backing collection and the sentinel strings the
//! legacy storefront expects from login failures.
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints (/alogin, /signup, /users, ...)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + MongoDB implementation)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Entities, DTOs
//! └─────────────┘
//! ```

pub mod error;
pub mod handlers;
pub mod models;
pub mod mongodb;
pub mod repository;

// Re-export commonly used types
pub use error::{AccountError, AccountResult};
pub use handlers::ApiDoc;
pub use models::{Account, AccountSummary, Credentials, LoginResponse, Role, Signup};
pub use mongodb::MongoAccountRepository;
pub use repository::AccountRepository;
