use std::path::{Path, PathBuf};

/// A playlist entry: a display title and where the audio lives.
///
/// Tracks are immutable once added; the title doubles as a unique lookup key
/// for the display layer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Track {
    pub title: String,
    pub location: PathBuf,
}

impl Track {
    pub fn new(title: impl Into<String>, location: impl Into<PathBuf>) -> Self {
        Self {
            title: title.into(),
            location: location.into(),
        }
    }

    /// Title derived from the file name without its extension.
    pub fn title_from_location(location: &Path) -> String {
        location
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| "UNKNOWN".to_string())
    }
}
