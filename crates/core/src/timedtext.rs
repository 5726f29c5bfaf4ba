//! Timed-text XML parsing.
//!
//! A caption track is delivered as
//! `<transcript><text start="1.2" dur="3.4">Hello</text>...</transcript>`.
//! Every direct element child of the root is a cue candidate.

use std::sync::LazyLock;

use regex::Regex;
use roxmltree::{Document, Node};

use crate::{
    config::TimingPrecision,
    error::{Result, TubecapsError},
    types::Caption,
};

static MARKUP_TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").unwrap());

/// Parse a timed-text document into captions in document order.
///
/// Cues without text, `start` or `dur` are skipped. An empty vector means the
/// document parsed but held no usable cues; a document that cannot be parsed
/// is an error.
pub fn parse_timed_text(xml: &str, timing: TimingPrecision) -> Result<Vec<Caption>> {
    if xml.trim().is_empty() {
        return Err(no_root());
    }

    let document = Document::parse(xml).map_err(|e| match e {
        roxmltree::Error::NoRootNode => no_root(),
        other => TubecapsError::Parse(other.to_string()),
    })?;

    let captions: Vec<Caption> = document
        .root_element()
        .children()
        .filter(Node::is_element)
        .filter_map(|cue| parse_cue(cue, timing))
        .collect();

    tracing::debug!(count = captions.len(), "parsed timed-text cues");
    Ok(captions)
}

fn no_root() -> TubecapsError {
    TubecapsError::Parse("no root node found".to_string())
}

fn parse_cue(cue: Node, timing: TimingPrecision) -> Option<Caption> {
    let raw: String = cue
        .descendants()
        .filter(Node::is_text)
        .filter_map(|node| node.text())
        .collect();

    let (Some(start), Some(dur)) = (cue.attribute("start"), cue.attribute("dur")) else {
        tracing::debug!(tag = cue.tag_name().name(), "skipping cue without start/dur");
        return None;
    };
    let text = clean_text(&raw);
    if text.is_empty() {
        tracing::debug!(start, "skipping cue without text");
        return None;
    }

    let (Some(start), Some(duration)) = (parse_seconds(start), parse_seconds(dur)) else {
        tracing::debug!(start, dur, "skipping cue with invalid timing");
        return None;
    };

    Some(Caption {
        text,
        start: timing.apply(start),
        duration: timing.apply(duration),
    })
}

fn parse_seconds(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite() && *value >= 0.0)
}

/// Drops the first markup tag in the cue text and decodes HTML entities the
/// XML layer left behind (upstream double-escapes apostrophes and the like).
fn clean_text(raw: &str) -> String {
    let stripped = MARKUP_TAG.replace(raw, "");
    html_escape::decode_html_entities(&stripped).into_owned()
}
