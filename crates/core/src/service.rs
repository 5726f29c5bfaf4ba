use std::sync::Arc;

use crate::{
    config::{ACCEPT_LANGUAGE, ClientConfig},
    error::{Result, TubecapsError},
    fetcher::TranscriptFetcher,
    http::{HttpFetch, ReqwestFetcher},
    metadata::extract_metadata,
    types::{Caption, TranscriptsMeta},
};

const ID_MARKERS: [&str; 4] = ["youtu.be/", "/embed/", "/shorts/", "/live/"];

/// Video id from a bare id or a watch/short/embed URL.
pub fn parse_video_id(input: &str) -> Option<String> {
    let input = input.trim();
    let is_id_char = |c: char| c.is_ascii_alphanumeric() || c == '-' || c == '_';

    let from_url = input
        .split_once("?v=")
        .or_else(|| input.split_once("&v="))
        .or_else(|| ID_MARKERS.iter().find_map(|m| input.split_once(m)))
        .map(|(_, after)| after);

    let candidate = from_url.unwrap_or(input);
    let id: String = candidate.chars().take_while(|c| is_id_char(*c)).collect();

    // A bare id must be nothing but id characters.
    let complete = from_url.is_some() || id.len() == input.len();
    (!id.is_empty() && complete).then_some(id)
}

/// Metadata lookup plus caption download for one video at a time.
#[derive(Clone)]
pub struct TranscriptService {
    http: Arc<dyn HttpFetch>,
    fetcher: TranscriptFetcher,
}

impl TranscriptService {
    pub fn new(http: Arc<dyn HttpFetch>, config: ClientConfig) -> Self {
        Self {
            fetcher: TranscriptFetcher::new(Arc::clone(&http), config),
            http,
        }
    }

    /// Service backed by reqwest, using the user agent from `config`.
    pub fn with_reqwest(config: ClientConfig) -> Result<Self> {
        let http = ReqwestFetcher::with_options(config.user_agent.as_deref(), None)?;
        Ok(Self::new(Arc::new(http), config))
    }

    pub fn config(&self) -> &ClientConfig {
        self.fetcher.config()
    }

    pub fn fetcher(&self) -> &TranscriptFetcher {
        &self.fetcher
    }

    pub async fn fetch_metadata(&self, video: &str) -> Result<TranscriptsMeta> {
        let video_id =
            parse_video_id(video).ok_or_else(|| TubecapsError::InvalidVideoId(video.to_string()))?;

        let url = self.config().watch_url_for(&video_id);
        let markup = self.http.get_text(&url, ACCEPT_LANGUAGE).await?;

        extract_metadata(&markup)
    }

    /// Captions for `video` in `language`, or the default language for `None`.
    pub async fn get_subtitles_for_video(
        &self,
        video: &str,
        language: Option<&str>,
    ) -> Result<Vec<Caption>> {
        let meta = self.fetch_metadata(video).await?;
        let captions = self
            .fetcher
            .fetch_transcript_for_language(&meta, language)
            .await?;

        tracing::info!(
            %video,
            language = language.unwrap_or(self.config().default_language.as_str()),
            count = captions.len(),
            "fetched captions"
        );
        Ok(captions)
    }

    pub async fn get_available_languages(&self, video: &str) -> Result<Vec<String>> {
        Ok(self.fetch_metadata(video).await?.language_codes())
    }
}
