//! `MM:SS` rendering for elapsed and total track time.

/// Format whole seconds as `MM:SS`.
///
/// There is no hour component: at 6000 seconds and above the minutes simply
/// grow past two digits (`100:00`).
pub fn format_mmss(secs: u64) -> String {
    format!("{:02}:{:02}", secs / 60, secs % 60)
}
