//! Error types shared by the playlist, duration probing and playback control.

use std::path::PathBuf;

use thiserror::Error;

/// Failures reported by a playback engine.
#[derive(Debug, Error)]
pub enum EngineError {
    /// `play` was requested before any track was loaded.
    #[error("no track loaded")]
    NothingLoaded,

    #[error("failed to open {path:?}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to decode {path:?}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: rodio::decoder::DecoderError,
    },

    /// The audio output device could not be opened.
    #[error("audio output unavailable: {0}")]
    Output(#[from] rodio::StreamError),
}

/// Errors surfaced by playlist and playback operations.
#[derive(Debug, Error)]
pub enum PlayerError {
    /// A playlist position outside `0..len` was used.
    #[error("playlist index {index} out of range (len {len})")]
    IndexOutOfRange { index: usize, len: usize },

    /// The track's length could not be determined.
    #[error("unreadable track {path:?}: {reason}")]
    UnreadableTrack { path: PathBuf, reason: String },

    /// `play_selected` was called while the playlist view had no selection.
    #[error("no track selected")]
    NothingSelected,

    #[error(transparent)]
    Engine(#[from] EngineError),
}

pub type Result<T> = std::result::Result<T, PlayerError>;
