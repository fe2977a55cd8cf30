use std::path::PathBuf;

use log::{debug, info};

use crate::config;
use crate::library::{AddOutcome, collect_tracks};
use crate::player::Controller;

use super::surface::Surface;

/// Fill the playlist from command-line paths and select the first row.
///
/// Returns the number of tracks added.
pub fn load_playlist(
    controller: &mut Controller,
    surface: &Surface,
    args: &[PathBuf],
    settings: &config::Settings,
) -> usize {
    let mut added = 0;
    let mut duplicates = 0;
    for location in collect_tracks(args, &settings.library) {
        match controller.add_track(&location) {
            AddOutcome::Added(position) => {
                debug!("playlist[{position}] = {:?}", location);
                added += 1;
            }
            AddOutcome::DuplicateIgnored => duplicates += 1,
        }
    }
    info!(
        "playlist: {added} tracks added, {duplicates} duplicates ignored, {} total",
        controller.playlist().len()
    );

    surface.move_selection(0);
    if added == 0 {
        surface.set_message("playlist is empty: pass audio files or directories as arguments");
    }
    added
}
