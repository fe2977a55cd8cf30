//! Cooperative deferred tasks on a single event loop.
//!
//! Nothing here runs on its own: the owner advances the clock and pulls due
//! tasks with `pop_due`. Each scheduled task gets a `TaskHandle` that can be
//! cancelled until it fires.

use std::time::Duration;

/// Periodic work the playback controller schedules.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Task {
    /// Push elapsed time and progress to the status sink.
    SyncTick,
    /// Check whether the engine finished the track on its own.
    EndOfTrackMonitor,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct TaskHandle(u64);

#[derive(Debug)]
struct Pending {
    handle: TaskHandle,
    due: Duration,
    task: Task,
}

#[derive(Debug, Default)]
pub struct Scheduler {
    now: Duration,
    next_id: u64,
    pending: Vec<Pending>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move the clock forward. Going backwards is ignored.
    pub fn advance_to(&mut self, now: Duration) {
        if now > self.now {
            self.now = now;
        }
    }

    /// Run `task` once, `after` from now.
    pub fn schedule(&mut self, after: Duration, task: Task) -> TaskHandle {
        let handle = TaskHandle(self.next_id);
        self.next_id += 1;
        self.pending.push(Pending {
            handle,
            due: self.now + after,
            task,
        });
        handle
    }

    /// Cancel a pending task. Returns false if it already fired or was cancelled.
    pub fn cancel(&mut self, handle: TaskHandle) -> bool {
        let before = self.pending.len();
        self.pending.retain(|p| p.handle != handle);
        self.pending.len() != before
    }

    /// Remove and return the earliest task that is due, if any.
    ///
    /// Ties are broken by scheduling order.
    pub fn pop_due(&mut self) -> Option<(TaskHandle, Task)> {
        let idx = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, p)| p.due <= self.now)
            .min_by_key(|(_, p)| (p.due, p.handle.0))
            .map(|(i, _)| i)?;
        let p = self.pending.remove(idx);
        Some((p.handle, p.task))
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Number of pending tasks of the given kind.
    pub fn pending_of(&self, task: Task) -> usize {
        self.pending.iter().filter(|p| p.task == task).count()
    }

    /// When the earliest pending task falls due, on the scheduler's clock.
    pub fn next_deadline(&self) -> Option<Duration> {
        self.pending.iter().map(|p| p.due).min()
    }
}
