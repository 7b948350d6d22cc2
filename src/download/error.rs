use std::fmt;

/// Structured error type for download operations.
///
/// Categorized variants instead of a single stringly error; the
/// subcategory doubles as the structured code surfaced to API clients.
#[derive(Debug)]
pub enum DownloadError {
    /// yt-dlp specific failures (bad exit code, unusable output)
    YtDlp(String),
    /// FFmpeg post-processing failures (MP3 extraction)
    Ffmpeg(String),
    /// Expected file not found after processing
    FileNotFound(String),
    /// Download or processing timed out
    Timeout(String),
    /// Process execution failure (spawn, binary missing)
    Process(String),
    /// Catch-all for uncategorized errors
    Other(String),
}

impl fmt::Display for DownloadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DownloadError::YtDlp(msg) => write!(f, "{}", msg),
            DownloadError::Ffmpeg(msg) => write!(f, "{}", msg),
            DownloadError::FileNotFound(msg) => write!(f, "{}", msg),
            DownloadError::Timeout(msg) => write!(f, "{}", msg),
            DownloadError::Process(msg) => write!(f, "{}", msg),
            DownloadError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for DownloadError {}

impl DownloadError {
    /// Returns subcategory for API error codes and logs
    pub fn subcategory(&self) -> &'static str {
        match self {
            DownloadError::YtDlp(_) => "ytdlp",
            DownloadError::Ffmpeg(_) => "ffmpeg",
            DownloadError::FileNotFound(_) => "file_not_found",
            DownloadError::Timeout(_) => "timeout",
            DownloadError::Process(_) => "process",
            DownloadError::Other(_) => "other",
        }
    }

    /// Returns the inner message
    pub fn message(&self) -> &str {
        match self {
            DownloadError::YtDlp(msg)
            | DownloadError::Ffmpeg(msg)
            | DownloadError::FileNotFound(msg)
            | DownloadError::Timeout(msg)
            | DownloadError::Process(msg)
            | DownloadError::Other(msg) => msg,
        }
    }
}

/// Plain strings become `DownloadError::Other`
impl From<String> for DownloadError {
    fn from(s: String) -> Self {
        DownloadError::Other(s)
    }
}

impl From<&str> for DownloadError {
    fn from(s: &str) -> Self {
        DownloadError::Other(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_download_error_display() {
        let err = DownloadError::YtDlp("yt-dlp failed".into());
        assert_eq!(err.to_string(), "yt-dlp failed");
    }

    #[test]
    fn test_download_error_subcategory() {
        assert_eq!(DownloadError::YtDlp("".into()).subcategory(), "ytdlp");
        assert_eq!(DownloadError::Ffmpeg("".into()).subcategory(), "ffmpeg");
        assert_eq!(DownloadError::FileNotFound("".into()).subcategory(), "file_not_found");
        assert_eq!(DownloadError::Timeout("".into()).subcategory(), "timeout");
        assert_eq!(DownloadError::Process("".into()).subcategory(), "process");
        assert_eq!(DownloadError::Other("".into()).subcategory(), "other");
    }

    #[test]
    fn test_from_string() {
        let err: DownloadError = "test error".to_string().into();
        assert!(matches!(err, DownloadError::Other(_)));
        assert_eq!(err.message(), "test error");
    }
}
