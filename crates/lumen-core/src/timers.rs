//! Registry of every timer the page controller starts.
//!
//! Delays, intervals and debounced calls are all registered here so that
//! tearing the page down cancels whatever is still pending. The handle type is
//! whatever the host runtime returns for a spawned task.

use std::collections::HashMap;

/// A cancellable scheduled task.
pub trait TimerHandle {
    fn cancel(self);
}

impl TimerHandle for tokio::task::JoinHandle<()> {
    fn cancel(self) {
        self.abort();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId(u64);

/// Tracks live timers by id.
///
/// A slot is reserved before the task is spawned so the task can report its
/// own completion; `attach` then stores the handle unless the task already
/// finished.
#[derive(Debug)]
pub struct TimerRegistry<H> {
    next_id: u64,
    slots: HashMap<TimerId, Option<H>>,
    torn_down: bool,
}

impl<H> Default for TimerRegistry<H> {
    fn default() -> Self {
        Self {
            next_id: 0,
            slots: HashMap::new(),
            torn_down: false,
        }
    }
}

impl<H: TimerHandle> TimerRegistry<H> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserve an id for a task about to be spawned.
    pub fn reserve(&mut self) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.slots.insert(id, None);
        id
    }

    /// Reserve an id, spawn with it and store the returned handle.
    ///
    /// `spawn` must not run the task inline; the task reports back with
    /// [`complete`](Self::complete) using the id it was given.
    pub fn track(&mut self, spawn: impl FnOnce(TimerId) -> H) -> TimerId {
        let id = self.reserve();
        let handle = spawn(id);
        self.attach(id, handle);
        id
    }

    /// Store the handle for a reserved id.
    ///
    /// After teardown, or when the task already completed, the handle is
    /// cancelled or dropped instead of stored.
    pub fn attach(&mut self, id: TimerId, handle: H) {
        if self.torn_down {
            self.slots.remove(&id);
            handle.cancel();
            return;
        }
        if let Some(slot) = self.slots.get_mut(&id) {
            *slot = Some(handle);
        }
    }

    /// Mark a task as finished; its handle is released.
    pub fn complete(&mut self, id: TimerId) {
        self.slots.remove(&id);
    }

    /// Cancel one task early.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        match self.slots.remove(&id) {
            Some(Some(handle)) => {
                handle.cancel();
                true
            }
            Some(None) => true,
            None => false,
        }
    }

    /// Cancel everything still live. Returns how many tasks were cancelled.
    ///
    /// Later `attach` calls cancel their handle immediately.
    pub fn teardown(&mut self) -> usize {
        self.torn_down = true;
        let mut cancelled = 0;
        for (_, slot) in self.slots.drain() {
            if let Some(handle) = slot {
                handle.cancel();
            }
            cancelled += 1;
        }
        cancelled
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    pub fn live(&self) -> usize {
        self.slots.len()
    }
}
