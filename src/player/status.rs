use crate::timefmt::format_mmss;

/// Where elapsed time and progress are displayed.
pub trait StatusSink {
    fn set_status_text(&mut self, text: &str);
    /// Current progress in seconds.
    fn set_progress_value(&mut self, secs: u64);
    fn set_progress_range(&mut self, min_secs: u64, max_secs: u64);
}

/// Status bar text while a track is loaded.
pub fn status_line(elapsed_secs: u64, duration_secs: u64) -> String {
    format!(
        "Time Elapsed: {} of {}",
        format_mmss(elapsed_secs),
        format_mmss(duration_secs)
    )
}
