use thiserror::Error;

#[derive(Debug, Error)]
pub enum WishlistError {
    #[error("Database error: {0}")]
    Database(String),
}

impl From<mongodb::error::Error> for WishlistError {
    fn from(err: mongodb::error::Error) -> Self {
        WishlistError::Database(err.to_string())
    }
}

pub type WishlistResult<T> = Result<T, WishlistError>;
