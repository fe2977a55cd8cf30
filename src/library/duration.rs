use std::path::Path;

use lofty::prelude::*;

use crate::error::{PlayerError, Result};

/// Resolves a track's total playable length in whole seconds.
pub trait DurationProbe {
    fn duration_secs(&self, location: &Path) -> Result<u64>;
}

/// Reads the length from the file's audio properties via `lofty`.
///
/// Missing files, unsupported formats and zero-length files are all reported
/// as `UnreadableTrack`; a zero duration would make the progress range empty.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoftyProbe;

impl DurationProbe for LoftyProbe {
    fn duration_secs(&self, location: &Path) -> Result<u64> {
        let tagged = lofty::read_from_path(location).map_err(|e| PlayerError::UnreadableTrack {
            path: location.to_path_buf(),
            reason: e.to_string(),
        })?;

        let secs = tagged.properties().duration().as_secs();
        if secs == 0 {
            return Err(PlayerError::UnreadableTrack {
                path: location.to_path_buf(),
                reason: "no playable length".to_string(),
            });
        }
        Ok(secs)
    }
}
