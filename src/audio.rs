//! Audio module: the playback engine boundary and volume handling.
//!
//! The controller only talks to a `PlaybackEngine`. `RodioEngine` is the real
//! output; tests substitute a scripted engine.

mod engine;
mod rodio_engine;
mod volume;

pub use engine::PlaybackEngine;
pub use rodio_engine::RodioEngine;
pub use volume::Volume;

#[cfg(test)]
mod tests;
