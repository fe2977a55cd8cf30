//! Player module: the playback state machine and its supporting pieces.
//!
//! `Controller` (in `player::controller`) drives a `PlaybackEngine`, keeps a
//! `Session` for the loaded track and reports progress to a `StatusSink`.
//! Periodic work runs through the cooperative `Scheduler`.

mod controller;
mod scheduler;
mod state;
mod status;

pub use controller::Controller;
pub use scheduler::{Scheduler, Task, TaskHandle};
pub use state::{PlaybackState, Session};
pub use status::{StatusSink, status_line};
