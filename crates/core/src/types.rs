use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaptionTrack {
    pub base_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language_code: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationLanguage {
    pub language_code: String,
}

/// Caption tracks and translation targets a video offers.
///
/// Produced once per metadata fetch and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranscriptsMeta {
    pub caption_tracks: Vec<CaptionTrack>,
    pub translation_languages: Vec<TranslationLanguage>,
}

impl TranscriptsMeta {
    pub fn has_language(&self, language: &str) -> bool {
        self.translation_languages
            .iter()
            .any(|lang| lang.language_code == language)
    }

    pub fn language_codes(&self) -> Vec<String> {
        self.translation_languages
            .iter()
            .map(|lang| lang.language_code.clone())
            .collect()
    }
}

/// One timed cue. `start` and `duration` are in seconds and never negative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Caption {
    pub text: String,
    pub start: f64,
    pub duration: f64,
}

impl Caption {
    pub fn end(&self) -> f64 {
        self.start + self.duration
    }
}
