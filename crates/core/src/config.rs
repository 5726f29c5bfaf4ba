//! Client configuration

use serde::{Deserialize, Serialize};

/// Sent on every request. Upstream negotiates the page language from this
/// header, independently of the caption language being requested.
pub const ACCEPT_LANGUAGE: &str = "en-us";

pub const DEFAULT_WATCH_URL: &str = "https://www.youtube.com/watch?v=";
pub const DEFAULT_LANGUAGE: &str = "en";

const ENV_WATCH_URL: &str = "TUBECAPS_WATCH_URL";
const ENV_DEFAULT_LANGUAGE: &str = "TUBECAPS_DEFAULT_LANGUAGE";
const ENV_USER_AGENT: &str = "TUBECAPS_USER_AGENT";
const ENV_TIMING: &str = "TUBECAPS_TIMING";

/// How cue `start`/`dur` attributes are turned into seconds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimingPrecision {
    #[default]
    Fractional,
    /// Truncate to whole seconds, matching older consumers of this data.
    WholeSeconds,
}

impl TimingPrecision {
    pub fn apply(self, seconds: f64) -> f64 {
        match self {
            TimingPrecision::Fractional => seconds,
            TimingPrecision::WholeSeconds => seconds.trunc(),
        }
    }

    fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "fractional" => Some(TimingPrecision::Fractional),
            "whole" | "whole_seconds" => Some(TimingPrecision::WholeSeconds),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Prefix the video id is appended to when fetching the watch page
    pub watch_url: String,

    /// Caption language that is served without a `tlang` override
    pub default_language: String,

    /// User agent for the reqwest-backed fetcher
    pub user_agent: Option<String>,

    pub timing: TimingPrecision,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            watch_url: DEFAULT_WATCH_URL.to_string(),
            default_language: DEFAULT_LANGUAGE.to_string(),
            user_agent: None,
            timing: TimingPrecision::default(),
        }
    }
}

impl ClientConfig {
    /// Defaults, overridden by any `TUBECAPS_*` variables that are set.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(url) = lookup(ENV_WATCH_URL) {
            config.watch_url = url;
        }
        if let Some(lang) = lookup(ENV_DEFAULT_LANGUAGE) {
            config.default_language = lang;
        }
        if let Some(agent) = lookup(ENV_USER_AGENT) {
            config.user_agent = Some(agent);
        }
        if let Some(timing) = lookup(ENV_TIMING) {
            match TimingPrecision::from_name(&timing) {
                Some(precision) => config.timing = precision,
                None => tracing::warn!(value = %timing, "ignoring unknown {}", ENV_TIMING),
            }
        }

        config
    }

    pub fn watch_url_for(&self, video_id: &str) -> String {
        format!("{}{}", self.watch_url, video_id)
    }

    /// Track URL with the translation override appended for non-default languages.
    pub fn track_url_for(&self, base_url: &str, language: &str) -> String {
        if language == self.default_language {
            return base_url.to_string();
        }
        let separator = if base_url.contains('?') { '&' } else { '?' };
        format!("{}{}tlang={}", base_url, separator, language)
    }
}
