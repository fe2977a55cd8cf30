use std::path::Path;

use crate::error::EngineError;

/// The audio output service the playback controller commands.
///
/// Commands are fire-and-forget apart from `load`/`play`, which may fail on
/// unreadable input. The engine itself cannot tell "paused" from "finished":
/// both report `is_busy() == false`.
pub trait PlaybackEngine {
    /// Make `location` the current track without starting it.
    fn load(&mut self, location: &Path) -> Result<(), EngineError>;
    /// Start the loaded track from `start_secs`. The reported position restarts at zero.
    fn play(&mut self, start_secs: u64) -> Result<(), EngineError>;
    fn pause(&mut self);
    fn unpause(&mut self);
    fn stop(&mut self);
    /// Volume in `[0.0, 1.0]`.
    fn set_volume(&mut self, volume: f32);
    /// Milliseconds played since the last `play`.
    fn position_millis(&self) -> u64;
    /// Whether audio is currently being produced.
    fn is_busy(&self) -> bool;
}
