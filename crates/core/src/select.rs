use crate::types::Caption;

/// The caption on screen at `current_time` (seconds).
///
/// Picks the caption with the latest `start` strictly before `current_time`;
/// on equal starts the later one in the slice wins. `duration` is ignored, so
/// a caption stays active until the next one starts. `captions` must be
/// sorted by ascending `start`, which is how timed-text documents arrive.
pub fn select_subtitle(captions: &[Caption], current_time: f64) -> Option<&Caption> {
    let after = captions.partition_point(|caption| caption.start < current_time);
    after.checked_sub(1).map(|index| &captions[index])
}
