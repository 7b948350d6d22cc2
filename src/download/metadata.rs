//! Metadata lookup via yt-dlp's JSON dump mode.
//!
//! Runs yt-dlp with `--dump-json` (nothing is fetched) and maps the
//! raw document into the wire shapes returned by `/info`:
//!
//! - Format entries without a `format_id` are dropped — they cannot
//!   be replayed against `/download`.
//! - The quality label falls back `format_note` -> `resolution` ->
//!   `"unknown"`.

use serde::{Deserialize, Serialize};
use url::Url;

use super::error::DownloadError;
use super::ytdlp::run_ytdlp;

/// One downloadable stream variant as enumerated by yt-dlp.
///
/// `format_id` is an opaque token, only meaningful when replayed
/// against the same URL.
#[derive(Debug, Clone, Serialize)]
pub struct FormatOption {
    pub format_id: String,
    pub ext: Option<String>,
    pub format_note: String,
    pub filesize: Option<u64>,
    pub url: Option<String>,
}

/// Per-video metadata returned by `/info`. Ephemeral, never persisted.
#[derive(Debug, Clone, Serialize)]
pub struct VideoMetadata {
    pub title: Option<String>,
    pub thumbnail: Option<String>,
    pub duration: Option<f64>,
    pub uploader: Option<String>,
    pub formats: Vec<FormatOption>,
}

/// Raw yt-dlp JSON document, only the fields we map.
#[derive(Debug, Deserialize)]
struct RawInfo {
    title: Option<String>,
    thumbnail: Option<String>,
    duration: Option<f64>,
    uploader: Option<String>,
    #[serde(default)]
    formats: Vec<RawFormat>,
}

#[derive(Debug, Deserialize)]
struct RawFormat {
    format_id: Option<String>,
    ext: Option<String>,
    format_note: Option<String>,
    resolution: Option<String>,
    // filesize comes back as a float for some extractors
    filesize: Option<f64>,
    url: Option<String>,
}

/// Fetches available formats and descriptive metadata without
/// downloading any media.
///
/// # Arguments
///
/// * `url` - Source URL handed to yt-dlp
pub async fn fetch_video_metadata(url: &Url) -> Result<VideoMetadata, DownloadError> {
    log::debug!("Fetching metadata for URL: {}", url);

    let output = run_ytdlp(&["--dump-json", "--no-playlist", "--no-warnings", url.as_str()]).await?;

    let raw: RawInfo = serde_json::from_slice(&output.stdout)
        .map_err(|e| DownloadError::YtDlp(format!("Failed to parse yt-dlp metadata: {}", e)))?;

    let metadata = map_metadata(raw);
    log::info!(
        "Got metadata: title={:?}, {} format(s)",
        metadata.title,
        metadata.formats.len()
    );

    Ok(metadata)
}

fn map_metadata(raw: RawInfo) -> VideoMetadata {
    let formats = raw.formats.into_iter().filter_map(map_format).collect();

    VideoMetadata {
        title: raw.title,
        thumbnail: raw.thumbnail,
        duration: raw.duration,
        uploader: raw.uploader,
        formats,
    }
}

fn map_format(raw: RawFormat) -> Option<FormatOption> {
    let format_id = raw.format_id?;
    let format_note = quality_label(raw.format_note.as_deref(), raw.resolution.as_deref());

    Some(FormatOption {
        format_id,
        ext: raw.ext,
        format_note,
        filesize: raw.filesize.map(|v| v as u64),
        url: raw.url,
    })
}

fn quality_label(note: Option<&str>, resolution: Option<&str>) -> String {
    if let Some(note) = note {
        if !note.trim().is_empty() {
            return note.to_string();
        }
    }
    match resolution {
        Some(res) if !res.trim().is_empty() => res.to_string(),
        _ => "unknown".to_string(),
    }
}
