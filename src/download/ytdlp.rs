//! yt-dlp child-process plumbing.
//!
//! Every external invocation goes through [`run_ytdlp`], which applies
//! the configured timeout and classifies the three delegate failure
//! modes: spawn failure, timeout, and non-zero exit.

use std::io::ErrorKind;
use std::process::Output;

use tokio::process::Command as TokioCommand;
use tokio::time::timeout;

use super::error::DownloadError;
use crate::core::config;

/// Runs yt-dlp with the given arguments under the configured timeout.
///
/// # Arguments
///
/// * `args` - Arguments passed verbatim to the yt-dlp binary
///
/// # Returns
///
/// The captured process output on a zero exit status.
pub async fn run_ytdlp(args: &[&str]) -> Result<Output, DownloadError> {
    let ytdl_bin = &*config::YTDL_BIN;
    log::debug!("yt-dlp command: {} {}", ytdl_bin, args.join(" "));

    let output = timeout(
        config::download::ytdlp_timeout(),
        TokioCommand::new(ytdl_bin).args(args).output(),
    )
    .await
    .map_err(|_| {
        log::error!(
            "yt-dlp command timed out after {} seconds",
            config::download::YTDLP_TIMEOUT_SECS
        );
        DownloadError::Timeout(format!(
            "yt-dlp timed out after {} seconds",
            config::download::YTDLP_TIMEOUT_SECS
        ))
    })?
    .map_err(|e| {
        log::error!("Failed to execute {}: {}", ytdl_bin, e);
        if e.kind() == ErrorKind::NotFound {
            DownloadError::Process(format!("'{}' is not installed or not on PATH", ytdl_bin))
        } else {
            DownloadError::Process(format!("Failed to execute {}: {}", ytdl_bin, e))
        }
    })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        let detail = stderr_tail(&stderr);
        log::error!("yt-dlp exited with {}: {}", output.status, detail);
        if is_postprocessing_error(&stderr) {
            return Err(DownloadError::Ffmpeg(detail));
        }
        return Err(DownloadError::YtDlp(detail));
    }

    Ok(output)
}

/// Last non-empty stderr line. yt-dlp prints its `ERROR:` summary
/// there, which is what the client should see as the detail.
pub fn stderr_tail(stderr: &str) -> String {
    stderr
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .next_back()
        .unwrap_or("yt-dlp failed without diagnostics")
        .to_string()
}

/// Path reported via `--print after_move:filepath` (last stdout line).
pub fn printed_path(stdout: &[u8]) -> Option<String> {
    String::from_utf8_lossy(stdout)
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .next_back()
        .map(ToString::to_string)
}

fn is_postprocessing_error(stderr: &str) -> bool {
    let lower = stderr.to_ascii_lowercase();
    lower.contains("postprocess") || lower.contains("ffmpeg")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn stderr_tail_picks_last_meaningful_line() {
        let stderr = "WARNING: something\n\nERROR: Unsupported URL: https://example.com\n";
        assert_eq!(stderr_tail(stderr), "ERROR: Unsupported URL: https://example.com");
    }

    #[test]
    fn stderr_tail_handles_empty_output() {
        assert_eq!(stderr_tail(""), "yt-dlp failed without diagnostics");
        assert_eq!(stderr_tail("\n  \n"), "yt-dlp failed without diagnostics");
    }

    #[test]
    fn printed_path_reads_last_stdout_line() {
        let stdout = b"[download] Destination: downloads/a.webm\ndownloads/Title_1a2b3c4d.mp3\n";
        assert_eq!(
            printed_path(stdout).as_deref(),
            Some("downloads/Title_1a2b3c4d.mp3")
        );
    }

    #[test]
    fn printed_path_empty_stdout_is_none() {
        assert_eq!(printed_path(b""), None);
    }

    #[test]
    fn postprocessing_errors_are_detected() {
        assert!(is_postprocessing_error(
            "ERROR: Postprocessing: audio conversion failed"
        ));
        assert!(is_postprocessing_error("ERROR: ffmpeg not found"));
        assert!(!is_postprocessing_error("ERROR: Unsupported URL"));
    }
}
