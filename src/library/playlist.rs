//! The ordered, duplicate-free playlist store.
//!
//! `Playlist` owns the one authoritative track order. An attached
//! `PlaylistView` receives every structural change at the same position, so
//! the display stays index-aligned with the store.

use std::path::Path;

use log::debug;

use crate::error::{PlayerError, Result};

use super::model::Track;

/// An external ordered list display (a list widget, a terminal list, ...).
///
/// Positions are always the store's positions.
pub trait PlaylistView {
    fn insert(&mut self, position: usize, title: &str);
    fn remove(&mut self, position: usize);
    fn clear(&mut self);
    /// The row the user currently has selected, if any.
    fn selected_index(&self) -> Option<usize>;
    fn select(&mut self, index: usize);
    /// Mark `index` as the active (now playing) row.
    fn activate(&mut self, index: usize);
}

/// Result of `Playlist::add`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum AddOutcome {
    /// The track was appended at this position.
    Added(usize),
    /// The location was already in the playlist; nothing changed.
    DuplicateIgnored,
}

#[derive(Default)]
pub struct Playlist {
    tracks: Vec<Track>,
    view: Option<Box<dyn PlaylistView>>,
}

impl Playlist {
    /// A playlist with no attached display.
    pub fn new() -> Self {
        Self::default()
    }

    /// A playlist mirrored into `view`. The view is cleared first so both
    /// start empty.
    pub fn with_view(mut view: Box<dyn PlaylistView>) -> Self {
        view.clear();
        Self {
            tracks: Vec::new(),
            view: Some(view),
        }
    }

    /// Append `location`, deriving its title from the file stem.
    ///
    /// Adding a location that is already present is a silent no-op. When a
    /// different location yields a title that is already taken, a ` (n)`
    /// suffix keeps titles unique.
    pub fn add(&mut self, location: impl AsRef<Path>) -> AddOutcome {
        let location = location.as_ref();
        if self.contains_location(location) {
            debug!("playlist: ignoring duplicate {:?}", location);
            return AddOutcome::DuplicateIgnored;
        }

        let title = self.unique_title(Track::title_from_location(location));
        let position = self.tracks.len();
        if let Some(view) = self.view.as_mut() {
            view.insert(position, &title);
        }
        self.tracks.push(Track::new(title, location));
        AddOutcome::Added(position)
    }

    /// Remove and return the track at `index`.
    pub fn remove_at(&mut self, index: usize) -> Result<Track> {
        self.check_index(index)?;
        if let Some(view) = self.view.as_mut() {
            view.remove(index);
        }
        Ok(self.tracks.remove(index))
    }

    pub fn clear(&mut self) {
        self.tracks.clear();
        if let Some(view) = self.view.as_mut() {
            view.clear();
        }
    }

    pub fn resolve(&self, index: usize) -> Result<&Track> {
        self.check_index(index)?;
        Ok(&self.tracks[index])
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    pub fn contains_location(&self, location: &Path) -> bool {
        self.tracks.iter().any(|t| t.location == location)
    }

    /// Look a track up by its display title.
    pub fn position_of_title(&self, title: &str) -> Option<usize> {
        self.tracks.iter().position(|t| t.title == title)
    }

    /// Selection as reported by the attached view.
    pub fn selected_index(&self) -> Option<usize> {
        self.view.as_ref().and_then(|v| v.selected_index())
    }

    /// Select and activate `index` in the attached view.
    pub fn highlight(&mut self, index: usize) {
        if let Some(view) = self.view.as_mut() {
            view.select(index);
            view.activate(index);
        }
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index < self.tracks.len() {
            Ok(())
        } else {
            Err(PlayerError::IndexOutOfRange {
                index,
                len: self.tracks.len(),
            })
        }
    }

    fn unique_title(&self, base: String) -> String {
        if self.position_of_title(&base).is_none() {
            return base;
        }
        (2..)
            .map(|n| format!("{base} ({n})"))
            .find(|candidate| self.position_of_title(candidate).is_none())
            .unwrap_or(base)
    }
}
