use once_cell::sync::Lazy;
use std::env;
use std::time::Duration;

/// Configuration constants for the service
/// Cached yt-dlp binary path
/// Read once at startup from YTDL_BIN environment variable or defaults to "yt-dlp"
pub static YTDL_BIN: Lazy<String> = Lazy::new(|| env::var("YTDL_BIN").unwrap_or_else(|_| "yt-dlp".to_string()));

/// Download folder path
/// Read from DOWNLOAD_FOLDER environment variable, defaults to "downloads"
/// relative to the working directory. Supports tilde (~) expansion.
pub static DOWNLOAD_FOLDER: Lazy<String> = Lazy::new(|| {
    let raw = env::var("DOWNLOAD_FOLDER").unwrap_or_else(|_| "downloads".to_string());
    shellexpand::tilde(&raw).to_string()
});

/// Address the HTTP server binds to
/// Read from BIND_ADDR environment variable
pub static BIND_ADDR: Lazy<String> =
    Lazy::new(|| env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:8080".to_string()));

/// Download configuration
pub mod download {
    use super::Duration;

    /// Timeout for yt-dlp commands (in seconds)
    pub const YTDLP_TIMEOUT_SECS: u64 = 240; // 4 minutes, to avoid timeouts on slow extractions

    /// Target bitrate handed to the ffmpeg MP3 extraction step
    pub const MP3_AUDIO_QUALITY: &str = "192K";

    /// Container extensions probed when the reported output path is missing
    pub const ALTERNATE_EXTENSIONS: [&str; 3] = ["mp4", "webm", "mkv"];

    /// yt-dlp command timeout duration
    pub fn ytdlp_timeout() -> Duration {
        Duration::from_secs(YTDLP_TIMEOUT_SECS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ytdlp_timeout_matches_constant() {
        assert_eq!(
            download::ytdlp_timeout(),
            Duration::from_secs(download::YTDLP_TIMEOUT_SECS)
        );
    }

    #[test]
    fn alternate_extensions_cover_common_containers() {
        assert!(download::ALTERNATE_EXTENSIONS.contains(&"mp4"));
        assert!(download::ALTERNATE_EXTENSIONS.contains(&"webm"));
        assert!(download::ALTERNATE_EXTENSIONS.contains(&"mkv"));
    }
}
