//! Download management: yt-dlp invocation, metadata mapping, fetching.

pub mod error;
pub mod fetch;
pub mod metadata;
pub mod ytdlp;

pub use error::DownloadError;
pub use fetch::{download_audio, download_media};
pub use metadata::{fetch_video_metadata, FormatOption, VideoMetadata};
