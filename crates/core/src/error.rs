use thiserror::Error;

#[derive(Error, Debug)]
pub enum TubecapsError {
    #[error("Invalid video id or URL: {0}")]
    InvalidVideoId(String),

    #[error("Extraction failed: {0}")]
    Extraction(String),

    #[error("Invalid caption metadata: {0}")]
    Validation(String),

    #[error("No transcript found for language: {language}")]
    LanguageNotFound { language: String },

    #[error("No caption track found")]
    NoCaptionTrack,

    #[error("Timed-text parse error: {0}")]
    Parse(String),

    #[error("Request to {url} failed with status {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, TubecapsError>;
