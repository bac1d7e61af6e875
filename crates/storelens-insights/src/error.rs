use storelens_db::DbError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum InsightsError {
    #[error("invalid or unreachable storefront: {url}")]
    UnreachableStore { url: String },

    #[error("database error: {0}")]
    Db(#[from] DbError),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("text-generation API error: {0}")]
    Generation(String),
}
