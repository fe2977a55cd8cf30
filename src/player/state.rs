//! Playback state types: `PlaybackState` and the per-track `Session`.

use super::scheduler::TaskHandle;

/// The playback state of the controller.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum PlaybackState {
    #[default]
    Stopped,
    Playing,
    Paused,
}

/// Transient state that exists only while a track is loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    /// Position of the active track in the playlist.
    pub index: usize,
    /// Logical play/pause flag; distinct from the engine's busy flag.
    pub is_playing: bool,
    /// Elapsed seconds at the last load or manual seek.
    pub seek_offset_secs: u64,
    pub duration_secs: u64,
    /// Pending synchronization tick, if any.
    pub sync_task: Option<TaskHandle>,
    /// Pending end-of-track check, if any.
    pub monitor_task: Option<TaskHandle>,
}

impl Session {
    pub fn new(index: usize, duration_secs: u64) -> Self {
        Self {
            index,
            is_playing: true,
            seek_offset_secs: 0,
            duration_secs,
            sync_task: None,
            monitor_task: None,
        }
    }

    pub fn state(&self) -> PlaybackState {
        if self.is_playing {
            PlaybackState::Playing
        } else {
            PlaybackState::Paused
        }
    }
}
