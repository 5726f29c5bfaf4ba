//! Caption metadata embedded in a watch page.
//!
//! The page carries the player configuration as inline JSON. The caption
//! block is cut out between the `"captions":` key and the `,"videoDetails"`
//! key that follows it. This depends on upstream markup layout and breaks
//! when that layout changes; keep all knowledge of it in this module.

use serde_json::Value;

use crate::{
    error::{Result, TubecapsError},
    types::TranscriptsMeta,
};

const CAPTIONS_KEY: &str = "\"captions\":";
const VIDEO_DETAILS_KEY: &str = ",\"videoDetails\"";
const RENDERER_KEY: &str = "playerCaptionsTracklistRenderer";

pub fn extract_metadata(markup: &str) -> Result<TranscriptsMeta> {
    let Some((_, after)) = markup.split_once(CAPTIONS_KEY) else {
        return Err(TubecapsError::Extraction("captions not found".to_string()));
    };

    let fragment = after
        .split(VIDEO_DETAILS_KEY)
        .next()
        .unwrap_or_default()
        .replace('\n', "");

    let captions: Value = serde_json::from_str(&fragment)
        .map_err(|e| TubecapsError::Extraction(format!("malformed captions JSON: {e}")))?;

    let renderer = captions
        .get(RENDERER_KEY)
        .ok_or_else(|| TubecapsError::Extraction(format!("{RENDERER_KEY} not found")))?;

    for field in ["captionTracks", "translationLanguages"] {
        if renderer.get(field).is_none() {
            return Err(TubecapsError::Validation(format!("missing {field}")));
        }
    }

    serde_json::from_value(renderer.clone())
        .map_err(|e| TubecapsError::Validation(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{CaptionTrack, TranslationLanguage};

    #[test]
    fn test_extracts_renderer() {
        let markup = r#"<script>var ytInitialPlayerResponse = {"captions":{"playerCaptionsTracklistRenderer":{"captionTracks":[{"baseUrl":"u"}],"translationLanguages":[{"languageCode":"en"}]}},"videoDetails":{}};</script>"#;

        let meta = extract_metadata(markup).unwrap();
        assert_eq!(
            meta,
            TranscriptsMeta {
                caption_tracks: vec![CaptionTrack {
                    base_url: "u".to_string(),
                    language_code: None,
                }],
                translation_languages: vec![TranslationLanguage {
                    language_code: "en".to_string(),
                }],
            }
        );
    }

    #[test]
    fn test_ignores_extra_fields_and_newlines() {
        let markup = "\"captions\":{\"playerCaptionsTracklistRenderer\":{\n\"captionTracks\":[{\"baseUrl\":\"https://x/timedtext?v=1\",\"languageCode\":\"en\",\"kind\":\"asr\"}],\n\"translationLanguages\":[{\"languageCode\":\"de\",\"languageName\":{\"simpleText\":\"German\"}}],\"defaultAudioTrackIndex\":0}},\"videoDetails\":{\"videoId\":\"1\"}";

        let meta = extract_metadata(markup).unwrap();
        assert_eq!(meta.caption_tracks[0].language_code.as_deref(), Some("en"));
        assert_eq!(meta.language_codes(), vec!["de".to_string()]);
    }

    #[test]
    fn test_trailing_delimiter_needs_closing_quote() {
        let markup = r#""captions":{"playerCaptionsTracklistRenderer":{"captionTracks":[],"translationLanguages":[]},"videoDetailsHint":1},"videoDetails":{}"#;

        let meta = extract_metadata(markup).unwrap();
        assert!(meta.caption_tracks.is_empty());
        assert!(meta.translation_languages.is_empty());
    }

    #[test]
    fn test_missing_captions_key() {
        let err = extract_metadata("<html><body>no player here</body></html>").unwrap_err();
        assert!(matches!(err, TubecapsError::Extraction(ref msg) if msg == "captions not found"));
    }

    #[test]
    fn test_malformed_json() {
        let err = extract_metadata(r#""captions":{"playerCaptionsTracklistRenderer":{,"videoDetails":{}"#)
            .unwrap_err();
        assert!(matches!(err, TubecapsError::Extraction(_)));
    }

    #[test]
    fn test_missing_renderer() {
        let err = extract_metadata(r#""captions":{"other":{}},"videoDetails":{}"#).unwrap_err();
        assert!(matches!(err, TubecapsError::Extraction(_)));
    }

    #[test]
    fn test_missing_translation_languages() {
        let markup = r#""captions":{"playerCaptionsTracklistRenderer":{"captionTracks":[]}},"videoDetails":{}"#;
        let err = extract_metadata(markup).unwrap_err();
        assert!(matches!(err, TubecapsError::Validation(ref msg) if msg.contains("translationLanguages")));
    }

    #[test]
    fn test_wrong_field_shape() {
        let markup = r#""captions":{"playerCaptionsTracklistRenderer":{"captionTracks":"none","translationLanguages":[]}},"videoDetails":{}"#;
        let err = extract_metadata(markup).unwrap_err();
        assert!(matches!(err, TubecapsError::Validation(_)));
    }
}
