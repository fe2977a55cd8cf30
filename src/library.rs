//! Library module: the playlist store, its display projection and track probing.
//!
//! The playlist (`library::playlist`) is the single authoritative order of
//! tracks. Displays mirror it through the `PlaylistView` trait, track lengths
//! come from a `DurationProbe`, and `scan` expands command-line paths.

mod duration;
mod model;
mod playlist;
mod scan;

pub use duration::{DurationProbe, LoftyProbe};
pub use model::Track;
pub use playlist::{AddOutcome, Playlist, PlaylistView};
pub use scan::collect_tracks;
