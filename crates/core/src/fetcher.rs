use std::sync::Arc;

use crate::{
    config::{ACCEPT_LANGUAGE, ClientConfig},
    error::{Result, TubecapsError},
    http::HttpFetch,
    timedtext::parse_timed_text,
    types::{Caption, TranscriptsMeta},
};

/// Downloads caption tracks and turns them into [`Caption`] sequences.
#[derive(Clone)]
pub struct TranscriptFetcher {
    http: Arc<dyn HttpFetch>,
    config: ClientConfig,
}

impl TranscriptFetcher {
    pub fn new(http: Arc<dyn HttpFetch>, config: ClientConfig) -> Self {
        Self { http, config }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Fetch one caption track.
    ///
    /// `Ok` with an empty vector means the track exists but carries no usable
    /// cues. A body that is not a timed-text document is a `Parse` error.
    pub async fn fetch_transcript(&self, url: &str) -> Result<Vec<Caption>> {
        let body = self.http.get_text(url, ACCEPT_LANGUAGE).await?;

        parse_timed_text(&body, self.config.timing).inspect_err(|e| {
            tracing::warn!(%url, error = %e, "could not parse caption track");
        })
    }

    /// `None` selects the configured default language.
    pub async fn fetch_transcript_for_language(
        &self,
        meta: &TranscriptsMeta,
        language: Option<&str>,
    ) -> Result<Vec<Caption>> {
        let language = language.unwrap_or(self.config.default_language.as_str());
        let url = self.resolve_track_url(meta, language)?;
        self.fetch_transcript(&url).await
    }

    /// URL of the first caption track, translated into `language` when it is
    /// not the default.
    pub fn resolve_track_url(&self, meta: &TranscriptsMeta, language: &str) -> Result<String> {
        if !meta.has_language(language) {
            return Err(TubecapsError::LanguageNotFound {
                language: language.to_string(),
            });
        }

        let track = meta
            .caption_tracks
            .first()
            .ok_or(TubecapsError::NoCaptionTrack)?;

        Ok(self.config.track_url_for(&track.base_url, language))
    }
}
