//! Request handlers.
//!
//! Each handler is one linear sequence: validate input, delegate to
//! yt-dlp, resolve the output path, stream or fail. No state is shared
//! between requests beyond the download folder path.

use std::path::PathBuf;

use axum::body::Body;
use axum::extract::{Query, State};
use axum::http::header::{CONTENT_DISPOSITION, CONTENT_LENGTH, CONTENT_TYPE};
use axum::http::{HeaderMap, HeaderValue};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;
use serde_json::json;
use tokio_util::io::ReaderStream;
use url::Url;

use super::error::ApiError;
use super::AppState;
use crate::core::error::{AppError, AppResult};
use crate::core::utils::build_content_disposition;
use crate::download::{download_audio, download_media, fetch_video_metadata, VideoMetadata};

#[derive(Debug, Deserialize)]
pub struct InfoRequest {
    #[serde(default)]
    url: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct DownloadQuery {
    url: String,
    format_id: String,
}

#[derive(Debug, Deserialize)]
pub struct AudioQuery {
    url: String,
}

/// GET / - liveness message.
pub async fn root() -> Json<serde_json::Value> {
    Json(json!({ "message": "Video download API is running" }))
}

/// POST /info - metadata lookup without fetching media.
pub async fn info(Json(payload): Json<InfoRequest>) -> Result<Json<VideoMetadata>, ApiError> {
    let url = parse_url(payload.url.as_deref())?;
    let metadata = fetch_video_metadata(&url).await?;
    Ok(Json(metadata))
}

/// GET /download - fetch one selected format and stream it back.
pub async fn download(
    State(state): State<AppState>,
    Query(query): Query<DownloadQuery>,
) -> Result<Response, ApiError> {
    let url = parse_url(Some(&query.url))?;
    let path = download_media(&state.download_dir, &url, &query.format_id).await?;
    file_response(path, "application/octet-stream").await
}

/// GET /download-mp3 - best available audio, transcoded to MP3.
pub async fn download_mp3(
    State(state): State<AppState>,
    Query(query): Query<AudioQuery>,
) -> Result<Response, ApiError> {
    let url = parse_url(Some(&query.url))?;
    let path = download_audio(&state.download_dir, &url).await?;
    file_response(path, "audio/mpeg").await
}

/// Requires a present, non-empty, parseable URL.
fn parse_url(raw: Option<&str>) -> AppResult<Url> {
    let raw = raw
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .ok_or_else(|| AppError::Validation("URL is required".to_string()))?;

    Ok(Url::parse(raw)?)
}

/// Streams a downloaded file back with attachment headers.
async fn file_response(path: PathBuf, content_type: &'static str) -> Result<Response, ApiError> {
    let filename = path
        .file_name()
        .and_then(|name| name.to_str())
        .map(ToString::to_string)
        .unwrap_or_else(|| "download.bin".to_string());

    let metadata = tokio::fs::metadata(&path)
        .await
        .map_err(|e| ApiError::internal("io", format!("Failed to stat downloaded file: {}", e)))?;
    let file = tokio::fs::File::open(&path)
        .await
        .map_err(|e| ApiError::internal("io", format!("Failed to open downloaded file: {}", e)))?;

    let body = Body::from_stream(ReaderStream::new(file));

    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static(content_type));
    headers.insert(
        CONTENT_LENGTH,
        HeaderValue::from_str(&metadata.len().to_string())
            .map_err(|e| ApiError::internal("io", format!("Invalid content length: {}", e)))?,
    );
    headers.insert(
        CONTENT_DISPOSITION,
        HeaderValue::from_str(&build_content_disposition(&filename))
            .map_err(|e| ApiError::internal("io", format!("Invalid content disposition: {}", e)))?,
    );

    log::info!("Streaming {} ({} bytes)", filename, metadata.len());

    Ok((headers, body).into_response())
}
