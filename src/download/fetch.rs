//! Media and audio fetching into the download folder.
//!
//! Both paths hand yt-dlp an output template carrying a per-request
//! random suffix and ask it to report the final on-disk path via
//! `--print after_move:filepath`. For plain media downloads the tool
//! may still normalize the container, so a fixed list of alternate
//! extensions is probed before giving up.

use std::path::{Path, PathBuf};

use url::Url;

use super::error::DownloadError;
use super::ytdlp::{printed_path, run_ytdlp};
use crate::core::config;
use crate::core::utils::short_id;

/// Downloads the stream named by `format_id` and returns its on-disk path.
///
/// # Arguments
///
/// * `dir` - Download folder (must exist)
/// * `url` - Source URL
/// * `format_id` - Format token previously enumerated by `/info`
pub async fn download_media(dir: &Path, url: &Url, format_id: &str) -> Result<PathBuf, DownloadError> {
    let template = output_template(dir, &short_id());
    log::info!("Downloading format {} from {}", format_id, url);

    let output = run_ytdlp(&[
        "-f",
        format_id,
        "-o",
        &template,
        "--no-playlist",
        "--no-warnings",
        "--print",
        "after_move:filepath",
        url.as_str(),
    ])
    .await?;

    let reported = reported_path(&output.stdout)?;
    resolve_media_file(reported)
}

/// Downloads best-available audio and extracts it to MP3 via the
/// ffmpeg post-processing step.
///
/// The reported path already points at the transcoded `.mp3`, since
/// `after_move:filepath` is evaluated after post-processing.
pub async fn download_audio(dir: &Path, url: &Url) -> Result<PathBuf, DownloadError> {
    let template = output_template(dir, &short_id());
    log::info!("Downloading best audio as MP3 from {}", url);

    let output = run_ytdlp(&[
        "-f",
        "bestaudio/best",
        "--extract-audio",
        "--audio-format",
        "mp3",
        "--audio-quality",
        config::download::MP3_AUDIO_QUALITY,
        "-o",
        &template,
        "--no-playlist",
        "--no-warnings",
        "--print",
        "after_move:filepath",
        url.as_str(),
    ])
    .await?;

    let path = reported_path(&output.stdout)?;
    if !path.exists() {
        return Err(DownloadError::FileNotFound(format!(
            "MP3 file not found at {}",
            path.display()
        )));
    }

    Ok(path)
}

/// Locates the file a media download produced.
///
/// The reported path is normally exact; when the container was
/// normalized away from it the alternate extensions are probed.
pub fn resolve_media_file(reported: PathBuf) -> Result<PathBuf, DownloadError> {
    if reported.exists() {
        return Ok(reported);
    }

    log::warn!("File not found at reported path: {}", reported.display());

    for ext in config::download::ALTERNATE_EXTENSIONS {
        let candidate = reported.with_extension(ext);
        if candidate.exists() {
            log::info!("Found downloaded file at {}", candidate.display());
            return Ok(candidate);
        }
    }

    Err(DownloadError::FileNotFound(format!(
        "Downloaded file not found at {}",
        reported.display()
    )))
}

/// Output template handed to yt-dlp. The title placeholder is expanded
/// (and sanitized) by the tool itself; the suffix is ours.
fn output_template(dir: &Path, suffix: &str) -> String {
    format!("{}/%(title)s_{}.%(ext)s", dir.display(), suffix)
}

fn reported_path(stdout: &[u8]) -> Result<PathBuf, DownloadError> {
    printed_path(stdout)
        .map(PathBuf::from)
        .ok_or_else(|| DownloadError::YtDlp("yt-dlp did not report an output path".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;

    #[test]
    fn template_embeds_dir_suffix_and_placeholders() {
        let template = output_template(Path::new("downloads"), "1a2b3c4d");
        assert_eq!(template, "downloads/%(title)s_1a2b3c4d.%(ext)s");
    }

    #[test]
    fn templates_for_concurrent_requests_differ() {
        let dir = Path::new("downloads");
        let first = output_template(dir, &short_id());
        let second = output_template(dir, &short_id());
        assert_ne!(first, second);
    }

    #[test]
    fn resolve_returns_exact_path_when_present() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Video_1a2b3c4d.mp4");
        fs::write(&path, b"data").unwrap();

        assert_eq!(resolve_media_file(path.clone()).unwrap(), path);
    }

    #[test]
    fn resolve_probes_alternate_extensions() {
        let dir = tempfile::tempdir().unwrap();
        let on_disk = dir.path().join("Video_1a2b3c4d.webm");
        fs::write(&on_disk, b"data").unwrap();

        let reported = dir.path().join("Video_1a2b3c4d.mp4");
        assert_eq!(resolve_media_file(reported).unwrap(), on_disk);
    }

    #[test]
    fn resolve_fails_with_file_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let reported = dir.path().join("Video_1a2b3c4d.mp4");

        let err = resolve_media_file(reported).unwrap_err();
        assert_eq!(err.subcategory(), "file_not_found");
        assert!(!err.message().is_empty());
    }

    #[test]
    fn reported_path_requires_output() {
        let err = reported_path(b"").unwrap_err();
        assert_eq!(err.subcategory(), "ytdlp");
    }
}
