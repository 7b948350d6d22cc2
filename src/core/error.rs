use thiserror::Error;

use crate::download::error::DownloadError;

/// Centralized error types for the application
///
/// Only two cases matter at the HTTP boundary: client-input failures
/// (`Validation`, `Url`) and delegate-tool failures (`Download`).
/// `Io` covers local filesystem plumbing around the downloaded files.
#[derive(Error, Debug)]
pub enum AppError {
    /// Download/yt-dlp errors
    #[error("Download error: {0}")]
    Download(#[from] DownloadError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// URL parsing errors
    #[error("URL parsing error: {0}")]
    Url(#[from] url::ParseError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),
}

/// Type alias for Result with AppError
pub type AppResult<T> = Result<T, AppError>;
