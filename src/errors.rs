use thiserror::Error;

/// Errors that can occur outside of reference normalization.
///
/// Normalization itself is total and never produces one of these; they come
/// from configuration handling and passage lookup.
#[derive(Error, Debug)]
pub enum BibleRefsError {
    #[error("config error: {message}")]
    Config { message: String },

    #[error("bible data error: {message} (path: {path})")]
    Bible { message: String, path: String },

    #[error("invalid reference: {reference}")]
    InvalidReference { reference: String },

    #[error("passage not found: {reference}")]
    PassageNotFound { reference: String },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias for results using `BibleRefsError`.
pub type Result<T> = std::result::Result<T, BibleRefsError>;
