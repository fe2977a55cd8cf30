//! Shared display state for the terminal front-end.
//!
//! The controller writes into a `Surface` through `PlaylistView` and
//! `StatusSink`; the renderer and key handling read and nudge the same state.
//! Everything runs on the event-loop thread, so an `Rc<RefCell<_>>` suffices.

use std::cell::{Ref, RefCell};
use std::rc::Rc;

use crate::library::PlaylistView;
use crate::player::StatusSink;

#[derive(Debug, Default)]
pub struct SurfaceState {
    pub rows: Vec<String>,
    pub selected: Option<usize>,
    /// The now-playing row.
    pub active: Option<usize>,
    pub status_text: String,
    pub progress: u64,
    pub progress_max: u64,
    /// Last error or notice shown to the user.
    pub message: Option<String>,
}

impl SurfaceState {
    /// Progress as a ratio in `[0.0, 1.0]`.
    pub fn progress_ratio(&self) -> f64 {
        if self.progress_max == 0 {
            return 0.0;
        }
        (self.progress as f64 / self.progress_max as f64).clamp(0.0, 1.0)
    }
}

#[derive(Clone, Default)]
pub struct Surface(Rc<RefCell<SurfaceState>>);

impl Surface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> Ref<'_, SurfaceState> {
        self.0.borrow()
    }

    pub fn selected(&self) -> Option<usize> {
        self.0.borrow().selected
    }

    /// Move the selection by `delta` rows, clamped to the list. With no
    /// selection, the first row gets selected.
    pub fn move_selection(&self, delta: isize) {
        let mut s = self.0.borrow_mut();
        if s.rows.is_empty() {
            s.selected = None;
            return;
        }
        let last = s.rows.len() - 1;
        s.selected = Some(match s.selected {
            None => 0,
            Some(i) => i.saturating_add_signed(delta).min(last),
        });
    }

    pub fn set_message(&self, message: impl Into<String>) {
        self.0.borrow_mut().message = Some(message.into());
    }

    pub fn clear_message(&self) {
        self.0.borrow_mut().message = None;
    }
}

impl PlaylistView for Surface {
    fn insert(&mut self, position: usize, title: &str) {
        let mut s = self.0.borrow_mut();
        let position = position.min(s.rows.len());
        s.rows.insert(position, title.to_string());
        if let Some(a) = s.active.as_mut() {
            if *a >= position {
                *a += 1;
            }
        }
    }

    fn remove(&mut self, position: usize) {
        let mut s = self.0.borrow_mut();
        if position >= s.rows.len() {
            return;
        }
        s.rows.remove(position);

        s.active = match s.active {
            Some(a) if a == position => None,
            Some(a) if a > position => Some(a - 1),
            other => other,
        };
        let len = s.rows.len();
        s.selected = match s.selected {
            _ if len == 0 => None,
            Some(i) if i > position => Some(i - 1),
            Some(i) => Some(i.min(len - 1)),
            None => None,
        };
    }

    fn clear(&mut self) {
        let mut s = self.0.borrow_mut();
        s.rows.clear();
        s.selected = None;
        s.active = None;
    }

    fn selected_index(&self) -> Option<usize> {
        self.selected()
    }

    fn select(&mut self, index: usize) {
        let mut s = self.0.borrow_mut();
        if index < s.rows.len() {
            s.selected = Some(index);
        }
    }

    fn activate(&mut self, index: usize) {
        let mut s = self.0.borrow_mut();
        if index < s.rows.len() {
            s.active = Some(index);
        }
    }
}

impl StatusSink for Surface {
    fn set_status_text(&mut self, text: &str) {
        self.0.borrow_mut().status_text = text.to_string();
    }

    fn set_progress_value(&mut self, secs: u64) {
        self.0.borrow_mut().progress = secs;
    }

    fn set_progress_range(&mut self, _min_secs: u64, max_secs: u64) {
        self.0.borrow_mut().progress_max = max_secs;
    }
}
