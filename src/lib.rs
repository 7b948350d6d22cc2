//! Vidport - HTTP API for video metadata lookup and server-side downloads
//!
//! A thin orchestration layer over yt-dlp (stream extraction) and ffmpeg
//! (MP3 transcoding, driven through yt-dlp's post-processing step).
//! Clients query available formats for a URL, then ask the server to
//! fetch a selected format or a best-audio MP3 and stream the file back.
//!
//! # Module Structure
//!
//! - `core`: configuration, errors, logging, and small utilities
//! - `download`: yt-dlp invocation, metadata mapping, and file fetching
//! - `server`: axum routes and request handlers

pub mod cli;
pub mod core;
pub mod download;
pub mod server;

// Re-export commonly used types for convenience
pub use core::{config, AppError, AppResult};
pub use download::{download_audio, download_media, fetch_video_metadata};
pub use server::{build_router, run_server, AppState};
