//! The playback state machine.
//!
//! `Controller` owns the playlist, the engine and the session of the loaded
//! track. Two self-rescheduling tasks keep it in step with the engine: the
//! sync tick (while playing) pushes elapsed time to the status sink, and the
//! end-of-track monitor (while a track is loaded) advances when the engine
//! goes idle without the user having paused.

use std::path::Path;
use std::time::Duration;

use log::{debug, info, warn};

use crate::audio::{PlaybackEngine, Volume};
use crate::config::PlaybackSettings;
use crate::error::{EngineError, PlayerError, Result};
use crate::library::{AddOutcome, DurationProbe, Playlist, Track};

use super::scheduler::{Scheduler, Task, TaskHandle};
use super::state::{PlaybackState, Session};
use super::status::{StatusSink, status_line};

pub struct Controller {
    engine: Box<dyn PlaybackEngine>,
    probe: Box<dyn DurationProbe>,
    status: Box<dyn StatusSink>,
    playlist: Playlist,
    scheduler: Scheduler,
    session: Option<Session>,
    /// Index of the most recently played track; survives `stop`.
    last_index: Option<usize>,
    volume: Volume,
    sync_interval: Duration,
    monitor_interval: Duration,
}

impl Controller {
    pub fn new(
        engine: Box<dyn PlaybackEngine>,
        probe: Box<dyn DurationProbe>,
        status: Box<dyn StatusSink>,
        playlist: Playlist,
        settings: &PlaybackSettings,
    ) -> Self {
        let mut controller = Self {
            engine,
            probe,
            status,
            playlist,
            scheduler: Scheduler::new(),
            session: None,
            last_index: None,
            volume: Volume::new(settings.initial_volume),
            sync_interval: Duration::from_millis(settings.sync_interval_ms.max(1)),
            monitor_interval: Duration::from_millis(settings.monitor_interval_ms.max(1)),
        };
        controller.engine.set_volume(controller.volume.level());
        controller
    }

    pub fn state(&self) -> PlaybackState {
        self.session
            .as_ref()
            .map_or(PlaybackState::Stopped, Session::state)
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn current_index(&self) -> Option<usize> {
        self.session.as_ref().map(|s| s.index)
    }

    pub fn playlist(&self) -> &Playlist {
        &self.playlist
    }

    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }

    pub fn volume(&self) -> Volume {
        self.volume
    }

    /// Elapsed seconds of the loaded track: engine position plus the seek offset.
    pub fn elapsed_secs(&self) -> Option<u64> {
        self.session
            .as_ref()
            .map(|s| self.engine.position_millis() / 1000 + s.seek_offset_secs)
    }

    pub fn add_track(&mut self, location: impl AsRef<Path>) -> AddOutcome {
        self.playlist.add(location)
    }

    /// Remove a playlist entry, keeping the session's index consistent.
    ///
    /// Removing the active track, or emptying the playlist, stops playback.
    pub fn remove_at(&mut self, index: usize) -> Result<Track> {
        let removed = self.playlist.remove_at(index)?;

        if self.current_index() == Some(index) || self.playlist.is_empty() {
            info!("removed the active track {:?}; stopping", removed.title);
            self.stop();
        } else if let Some(session) = self.session.as_mut() {
            if session.index > index {
                session.index -= 1;
            }
        }

        self.last_index = match self.last_index {
            Some(i) if i == index => None,
            Some(i) if i > index => Some(i - 1),
            other => other,
        };
        Ok(removed)
    }

    pub fn clear_playlist(&mut self) {
        self.stop();
        self.playlist.clear();
        self.last_index = None;
    }

    /// Load and start the track at `index` from the beginning.
    ///
    /// The duration is resolved first: an unreadable track fails before the
    /// engine or the current session are touched.
    pub fn play(&mut self, index: usize) -> Result<()> {
        let track = self.playlist.resolve(index)?.clone();
        let duration_secs = self.probe.duration_secs(&track.location)?;

        self.cancel_tasks();
        if let Err(e) = self.start_engine(&track.location) {
            warn!("failed to start {:?}: {}", track.location, e);
            self.stop();
            return Err(e.into());
        }

        info!("playing {:?} ({}s)", track.title, duration_secs);
        self.session = Some(Session::new(index, duration_secs));
        self.last_index = Some(index);
        self.playlist.highlight(index);
        self.status.set_progress_range(0, duration_secs);
        self.sync_now();
        self.arm_monitor();
        Ok(())
    }

    /// Play whatever row the playlist view has selected.
    pub fn play_selected(&mut self) -> Result<()> {
        let index = self
            .playlist
            .selected_index()
            .ok_or(PlayerError::NothingSelected)?;
        self.play(index)
    }

    /// Pause when playing, resume when paused. No-op when stopped.
    pub fn toggle_pause(&mut self) {
        let Some(session) = self.session.as_mut() else {
            debug!("pause: nothing loaded");
            return;
        };

        if session.is_playing {
            self.engine.pause();
            session.is_playing = false;
            if let Some(h) = session.sync_task.take() {
                self.scheduler.cancel(h);
            }
            debug!("paused");
        } else {
            self.engine.unpause();
            session.is_playing = true;
            debug!("resumed");
            self.sync_now();
        }
    }

    /// Stop the engine and tear the session down. Safe to call when stopped.
    pub fn stop(&mut self) {
        self.cancel_tasks();
        self.engine.stop();
        if let Some(session) = self.session.take() {
            debug!("stopped track {}", session.index);
            self.last_index = Some(session.index);
        }
        self.status.set_status_text("");
        self.status.set_progress_value(0);
    }

    /// Restart the loaded track at `target_secs`, clamped to its duration.
    ///
    /// A paused track stays paused. No-op when nothing is loaded.
    pub fn seek(&mut self, target_secs: u64) -> Result<()> {
        let Some(session) = self.session.as_ref() else {
            return Ok(());
        };
        let target = target_secs.min(session.duration_secs);
        let was_playing = session.is_playing;

        if let Err(e) = self.engine.play(target) {
            warn!("seek to {}s failed: {}", target, e);
            self.stop();
            return Err(e.into());
        }
        if !was_playing {
            self.engine.pause();
        }
        if let Some(session) = self.session.as_mut() {
            session.seek_offset_secs = target;
        }
        debug!("seeked to {}s", target);
        self.refresh_progress();
        Ok(())
    }

    /// Seek relative to the current elapsed time.
    pub fn seek_by(&mut self, delta_secs: i64) -> Result<()> {
        match self.elapsed_secs() {
            Some(elapsed) => self.seek(elapsed.saturating_add_signed(delta_secs)),
            None => Ok(()),
        }
    }

    /// Seek requested from the progress display (a slider position in seconds).
    pub fn on_seek_requested(&mut self, position: f64) -> Result<()> {
        // NaN and negatives mean the start; `as` saturates huge values and +inf,
        // which `seek` then clamps to the track length.
        let secs = if position > 0.0 {
            position.round() as u64
        } else {
            0
        };
        self.seek(secs)
    }

    /// Play the following track, wrapping to the first. No-op on an empty playlist.
    pub fn next(&mut self) -> Result<()> {
        let len = self.playlist.len();
        if len == 0 {
            debug!("next: playlist is empty");
            return Ok(());
        }
        let target = match self.current_or_last() {
            Some(i) if i + 1 < len => i + 1,
            _ => 0,
        };
        self.play(target)
    }

    /// Play the preceding track, wrapping to the last. No-op on an empty playlist.
    pub fn previous(&mut self) -> Result<()> {
        let len = self.playlist.len();
        if len == 0 {
            debug!("previous: playlist is empty");
            return Ok(());
        }
        let target = match self.current_or_last() {
            Some(0) | None => len - 1,
            Some(i) => (i - 1).min(len - 1),
        };
        self.play(target)
    }

    /// Set the output volume; out-of-range input is clamped.
    pub fn set_volume(&mut self, level: f32) {
        self.volume = Volume::new(level);
        self.engine.set_volume(self.volume.level());
    }

    pub fn nudge_volume(&mut self, delta: f32) {
        self.set_volume(self.volume.nudged(delta).level());
    }

    /// Advance the clock to `now` and run every task that is due.
    pub fn poll(&mut self, now: Duration) -> Result<()> {
        self.scheduler.advance_to(now);
        while let Some((handle, task)) = self.scheduler.pop_due() {
            match task {
                Task::SyncTick => self.on_sync_tick(handle),
                Task::EndOfTrackMonitor => self.on_monitor(handle)?,
            }
        }
        Ok(())
    }

    fn on_sync_tick(&mut self, handle: TaskHandle) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        if session.sync_task != Some(handle) {
            return;
        }
        session.sync_task = None;
        if session.is_playing {
            self.sync_now();
        }
    }

    fn on_monitor(&mut self, handle: TaskHandle) -> Result<()> {
        let Some(session) = self.session.as_mut() else {
            return Ok(());
        };
        if session.monitor_task != Some(handle) {
            return Ok(());
        }
        session.monitor_task = None;

        // An idle engine only means "finished" if the user did not pause.
        let finished = session.is_playing && !self.engine.is_busy();
        if !finished {
            self.arm_monitor();
            return Ok(());
        }

        info!("track {} finished; advancing", session.index);
        if let Err(e) = self.next() {
            warn!("auto-advance failed: {}", e);
            self.stop();
            return Err(e);
        }
        Ok(())
    }

    fn start_engine(&mut self, location: &Path) -> std::result::Result<(), EngineError> {
        self.engine.load(location)?;
        self.engine.play(0)
    }

    fn current_or_last(&self) -> Option<usize> {
        self.current_index().or(self.last_index)
    }

    /// Push the current progress, then re-arm the sync tick.
    fn sync_now(&mut self) {
        self.refresh_progress();
        self.arm_sync_tick();
    }

    fn refresh_progress(&mut self) {
        let Some(elapsed) = self.elapsed_secs() else {
            return;
        };
        let duration = self.session.as_ref().map_or(0, |s| s.duration_secs);
        self.status.set_status_text(&status_line(elapsed, duration));
        self.status.set_progress_value(elapsed);
    }

    fn arm_sync_tick(&mut self) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        if let Some(h) = session.sync_task.take() {
            self.scheduler.cancel(h);
        }
        session.sync_task = Some(self.scheduler.schedule(self.sync_interval, Task::SyncTick));
    }

    fn arm_monitor(&mut self) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        if let Some(h) = session.monitor_task.take() {
            self.scheduler.cancel(h);
        }
        session.monitor_task = Some(
            self.scheduler
                .schedule(self.monitor_interval, Task::EndOfTrackMonitor),
        );
    }

    fn cancel_tasks(&mut self) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        for h in [session.sync_task.take(), session.monitor_task.take()]
            .into_iter()
            .flatten()
        {
            self.scheduler.cancel(h);
        }
    }
}
