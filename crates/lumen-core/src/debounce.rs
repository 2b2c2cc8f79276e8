//! Latest-wins debouncing for bursty inputs (resize, pointer movement).
//!
//! Every push replaces the pending value, so a burst collapses into one
//! effect carrying the last value. The caller schedules a deferred call per
//! push and hands its ticket back with `fire`; superseded tickets return
//! `None`. [`DebounceSlot`] also tracks the deferred call waiting on the
//! newest ticket so a newer push can cancel it.

use std::time::Duration;

/// Proof of a particular push; only the newest ticket fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DebounceTicket(u64);

#[derive(Debug)]
pub struct Debouncer<T> {
    delay: Duration,
    generation: u64,
    pending: Option<(DebounceTicket, T)>,
}

impl<T> Debouncer<T> {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            generation: 0,
            pending: None,
        }
    }

    /// Quiet period the caller waits before firing.
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Replace the pending value.
    pub fn push(&mut self, value: T) -> DebounceTicket {
        self.generation += 1;
        let ticket = DebounceTicket(self.generation);
        self.pending = Some((ticket, value));
        ticket
    }

    /// Take the pending value if `ticket` is still the newest push.
    pub fn fire(&mut self, ticket: DebounceTicket) -> Option<T> {
        match &self.pending {
            Some((newest, _)) if *newest == ticket => self.pending.take().map(|(_, v)| v),
            _ => None,
        }
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Drop the pending value without firing.
    pub fn cancel(&mut self) -> Option<T> {
        self.pending.take().map(|(_, v)| v)
    }
}

/// A debouncer plus the deferred call `W` waiting on its newest ticket.
#[derive(Debug)]
pub struct DebounceSlot<T, W> {
    debouncer: Debouncer<T>,
    waiting: Option<(DebounceTicket, W)>,
}

impl<T, W> DebounceSlot<T, W> {
    pub fn new(delay: Duration) -> Self {
        Self {
            debouncer: Debouncer::new(delay),
            waiting: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.debouncer.delay()
    }

    /// Push a value. Returns its ticket and the superseded waiting call,
    /// which the caller must cancel.
    pub fn push(&mut self, value: T) -> (DebounceTicket, Option<W>) {
        let ticket = self.debouncer.push(value);
        (ticket, self.waiting.take().map(|(_, w)| w))
    }

    /// Record the deferred call scheduled for `ticket`.
    ///
    /// A ticket that is no longer the newest hands `waiting` straight back.
    pub fn wait(&mut self, ticket: DebounceTicket, waiting: W) -> Option<W> {
        match &self.debouncer.pending {
            Some((newest, _)) if *newest == ticket => {
                self.waiting = Some((ticket, waiting));
                None
            }
            _ => Some(waiting),
        }
    }

    /// Deferred call for `ticket` ran. Yields the settled value if `ticket`
    /// is still the newest push.
    pub fn settle(&mut self, ticket: DebounceTicket) -> Option<T> {
        if matches!(&self.waiting, Some((waiting, _)) if *waiting == ticket) {
            self.waiting = None;
        }
        self.debouncer.fire(ticket)
    }

    pub fn has_pending(&self) -> bool {
        self.debouncer.has_pending()
    }

    /// Drop the pending value. Returns the waiting call to cancel.
    pub fn cancel(&mut self) -> Option<W> {
        self.debouncer.cancel();
        self.waiting.take().map(|(_, w)| w)
    }
}
