use crate::types::Caption;

/// Turns captions into whatever a display layer consumes.
pub trait CaptionRenderer {
    type Output;

    fn render(&self, caption: &Caption) -> Self::Output;
}

/// Renders `[MM:SS] text` lines.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTextRenderer;

impl CaptionRenderer for PlainTextRenderer {
    type Output = String;

    fn render(&self, caption: &Caption) -> String {
        format!("[{}] {}", format_timestamp(caption.start), caption.text.trim())
    }
}

/// Format seconds as MM:SS timestamp
pub fn format_timestamp(seconds: f64) -> String {
    let mins = (seconds / 60.0) as u32;
    let secs = (seconds % 60.0) as u32;
    format!("{:02}:{:02}", mins, secs)
}

/// Format captions with timestamps, one per line
pub fn format_transcript_with_timestamps(captions: &[Caption]) -> String {
    captions
        .iter()
        .map(|caption| PlainTextRenderer.render(caption))
        .collect::<Vec<_>>()
        .join("\n")
}

fn format_srt_timestamp(seconds: f64) -> String {
    let total_ms = (seconds * 1000.0).round() as u64;
    let ms = total_ms % 1000;
    let s = total_ms / 1000;
    format!("{:02}:{:02}:{:02},{:03}", s / 3600, (s / 60) % 60, s % 60, ms)
}

/// SubRip export of a caption sequence
pub fn format_srt(captions: &[Caption]) -> String {
    let mut output = String::new();
    for (index, caption) in captions.iter().enumerate() {
        output.push_str(&format!("{}\n", index + 1));
        output.push_str(&format!(
            "{} --> {}\n",
            format_srt_timestamp(caption.start),
            format_srt_timestamp(caption.end())
        ));
        output.push_str(&format!("{}\n\n", caption.text));
    }
    output
}
