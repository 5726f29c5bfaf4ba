//! Tubecaps Core Library
//!
//! Fetches YouTube caption tracks, parses the timed-text documents into
//! [`Caption`] sequences and finds the caption active at a playback time.

pub mod config;
pub mod error;
pub mod fetcher;
pub mod format;
pub mod http;
pub mod metadata;
pub mod select;
pub mod service;
pub mod timedtext;
pub mod types;

// Re-export commonly used items at crate root
pub use config::{ACCEPT_LANGUAGE, ClientConfig, TimingPrecision};
pub use error::{Result, TubecapsError};
pub use fetcher::TranscriptFetcher;
pub use format::{
    CaptionRenderer, PlainTextRenderer, format_srt, format_timestamp,
    format_transcript_with_timestamps,
};
pub use http::{HttpFetch, ReqwestFetcher};
pub use metadata::extract_metadata;
pub use select::select_subtitle;
pub use service::{TranscriptService, parse_video_id};
pub use timedtext::parse_timed_text;
pub use types::{Caption, CaptionTrack, TranscriptsMeta, TranslationLanguage};
