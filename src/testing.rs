//! Test doubles for the engine, duration probe, status sink and playlist view.
//!
//! Each double is a cheap `Rc` handle: hand one clone to the code under test
//! and keep another to inspect what happened.

use std::cell::RefCell;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use crate::audio::PlaybackEngine;
use crate::error::{EngineError, PlayerError, Result};
use crate::library::{DurationProbe, PlaylistView};
use crate::player::StatusSink;

#[derive(Debug, Clone, PartialEq)]
pub enum EngineCmd {
    Load(PathBuf),
    Play(u64),
    Pause,
    Unpause,
    Stop,
    SetVolume(f32),
}

#[derive(Debug, Default)]
struct EngineState {
    commands: Vec<EngineCmd>,
    loaded: Option<PathBuf>,
    position_millis: u64,
    busy: bool,
    fail_load: bool,
}

/// An engine whose position and busy flag are set by the test.
#[derive(Clone, Default)]
pub struct ScriptedEngine(Rc<RefCell<EngineState>>);

impl ScriptedEngine {
    pub fn commands(&self) -> Vec<EngineCmd> {
        self.0.borrow().commands.clone()
    }

    pub fn loaded(&self) -> Option<PathBuf> {
        self.0.borrow().loaded.clone()
    }

    pub fn set_position_millis(&self, millis: u64) {
        self.0.borrow_mut().position_millis = millis;
    }

    pub fn set_busy(&self, busy: bool) {
        self.0.borrow_mut().busy = busy;
    }

    pub fn fail_next_load(&self) {
        self.0.borrow_mut().fail_load = true;
    }
}

impl PlaybackEngine for ScriptedEngine {
    fn load(&mut self, location: &Path) -> std::result::Result<(), EngineError> {
        let mut s = self.0.borrow_mut();
        s.commands.push(EngineCmd::Load(location.to_path_buf()));
        if s.fail_load {
            s.fail_load = false;
            return Err(EngineError::NothingLoaded);
        }
        s.loaded = Some(location.to_path_buf());
        Ok(())
    }

    fn play(&mut self, start_secs: u64) -> std::result::Result<(), EngineError> {
        let mut s = self.0.borrow_mut();
        s.commands.push(EngineCmd::Play(start_secs));
        if s.loaded.is_none() {
            return Err(EngineError::NothingLoaded);
        }
        s.position_millis = 0;
        s.busy = true;
        Ok(())
    }

    fn pause(&mut self) {
        let mut s = self.0.borrow_mut();
        s.commands.push(EngineCmd::Pause);
        s.busy = false;
    }

    fn unpause(&mut self) {
        let mut s = self.0.borrow_mut();
        s.commands.push(EngineCmd::Unpause);
        s.busy = true;
    }

    fn stop(&mut self) {
        let mut s = self.0.borrow_mut();
        s.commands.push(EngineCmd::Stop);
        s.busy = false;
        s.position_millis = 0;
    }

    fn set_volume(&mut self, volume: f32) {
        self.0.borrow_mut().commands.push(EngineCmd::SetVolume(volume));
    }

    fn position_millis(&self) -> u64 {
        self.0.borrow().position_millis
    }

    fn is_busy(&self) -> bool {
        self.0.borrow().busy
    }
}

/// Durations by location; unknown locations are unreadable.
#[derive(Clone, Default)]
pub struct FixedProbe(HashMap<PathBuf, u64>);

impl FixedProbe {
    pub fn with(mut self, location: &str, secs: u64) -> Self {
        self.0.insert(PathBuf::from(location), secs);
        self
    }
}

impl DurationProbe for FixedProbe {
    fn duration_secs(&self, location: &Path) -> Result<u64> {
        self.0
            .get(location)
            .copied()
            .ok_or_else(|| PlayerError::UnreadableTrack {
                path: location.to_path_buf(),
                reason: "not in fixture".to_string(),
            })
    }
}

#[derive(Debug, Default)]
struct SinkState {
    text: String,
    value: u64,
    range: (u64, u64),
    updates: Vec<String>,
}

/// Records what a status display would show.
#[derive(Clone, Default)]
pub struct RecordingSink(Rc<RefCell<SinkState>>);

impl RecordingSink {
    pub fn text(&self) -> String {
        self.0.borrow().text.clone()
    }

    pub fn value(&self) -> u64 {
        self.0.borrow().value
    }

    pub fn range(&self) -> (u64, u64) {
        self.0.borrow().range
    }

    /// Number of status text updates received so far.
    pub fn update_count(&self) -> usize {
        self.0.borrow().updates.len()
    }
}

impl StatusSink for RecordingSink {
    fn set_status_text(&mut self, text: &str) {
        let mut s = self.0.borrow_mut();
        s.text = text.to_string();
        s.updates.push(text.to_string());
    }

    fn set_progress_value(&mut self, secs: u64) {
        self.0.borrow_mut().value = secs;
    }

    fn set_progress_range(&mut self, min_secs: u64, max_secs: u64) {
        self.0.borrow_mut().range = (min_secs, max_secs);
    }
}

#[derive(Debug, Default)]
struct ViewState {
    rows: Vec<String>,
    selected: Option<usize>,
    active: Option<usize>,
}

/// A list display that records rows, selection and the active row.
#[derive(Clone, Default)]
pub struct RecordingView(Rc<RefCell<ViewState>>);

impl RecordingView {
    pub fn rows(&self) -> Vec<String> {
        self.0.borrow().rows.clone()
    }

    pub fn active(&self) -> Option<usize> {
        self.0.borrow().active
    }

    pub fn click(&self, index: usize) {
        self.0.borrow_mut().selected = Some(index);
    }
}

impl PlaylistView for RecordingView {
    fn insert(&mut self, position: usize, title: &str) {
        self.0.borrow_mut().rows.insert(position, title.to_string());
    }

    fn remove(&mut self, position: usize) {
        self.0.borrow_mut().rows.remove(position);
    }

    fn clear(&mut self) {
        let mut s = self.0.borrow_mut();
        s.rows.clear();
        s.selected = None;
        s.active = None;
    }

    fn selected_index(&self) -> Option<usize> {
        self.0.borrow().selected
    }

    fn select(&mut self, index: usize) {
        self.0.borrow_mut().selected = Some(index);
    }

    fn activate(&mut self, index: usize) {
        self.0.borrow_mut().active = Some(index);
    }
}
