//! Toast notifications.
//!
//! Each notification lives on its own fixed timeline:
//!
//! ```text
//! 0 ──frame──▶ shown ──visible──▶ hidden ──fade──▶ removed
//! ```
//!
//! There is no queue and no de-duplication. Rapid calls produce independent,
//! overlapping notifications that stack on screen.

use std::time::Duration;

use crate::config::Timings;

/// Identifier of one notification, unique per center.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NotificationId(pub u64);

/// Display stage of a live notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationStage {
    /// In the page, not yet transitioned in
    Inserted,
    /// Carries the `show` class
    Shown,
    /// `show` removed, fading out
    Hidden,
}

impl NotificationStage {
    pub fn css_class(&self) -> &'static str {
        match self {
            NotificationStage::Shown => "notification show",
            NotificationStage::Inserted | NotificationStage::Hidden => "notification",
        }
    }
}

/// A live notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: NotificationId,
    pub message: String,
    pub stage: NotificationStage,
}

/// Offsets from creation at which a notification changes stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotificationSchedule {
    pub shown_at: Duration,
    pub hidden_at: Duration,
    pub removed_at: Duration,
}

impl NotificationSchedule {
    pub fn from_timings(timings: &Timings) -> Self {
        let shown_at = timings.frame();
        let hidden_at = shown_at + timings.notification_visible();
        let removed_at = hidden_at + timings.notification_fade();
        Self {
            shown_at,
            hidden_at,
            removed_at,
        }
    }

    /// Sleep through the lifecycle of one notification.
    ///
    /// `step` is called with each new stage as it is reached, then with
    /// `None` when the notification must be removed.
    pub async fn run(self, mut step: impl FnMut(Option<NotificationStage>)) {
        let created = tokio::time::Instant::now();
        for at in [self.shown_at, self.hidden_at, self.removed_at] {
            tokio::time::sleep_until(created + at).await;
            step(self.stage_at(at));
        }
    }

    /// Stage at `elapsed` since creation, `None` once removed.
    pub fn stage_at(&self, elapsed: Duration) -> Option<NotificationStage> {
        if elapsed >= self.removed_at {
            None
        } else if elapsed >= self.hidden_at {
            Some(NotificationStage::Hidden)
        } else if elapsed >= self.shown_at {
            Some(NotificationStage::Shown)
        } else {
            Some(NotificationStage::Inserted)
        }
    }
}

/// All live notifications, oldest first.
#[derive(Debug, Clone, Default)]
pub struct NotificationCenter {
    next_id: u64,
    live: Vec<Notification>,
}

impl NotificationCenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a new notification in the `Inserted` stage.
    pub fn push(&mut self, message: impl Into<String>) -> NotificationId {
        let id = NotificationId(self.next_id);
        self.next_id += 1;
        self.live.push(Notification {
            id,
            message: message.into(),
            stage: NotificationStage::Inserted,
        });
        id
    }

    /// Move a notification to `stage`. Returns `false` if it is gone.
    pub fn set_stage(&mut self, id: NotificationId, stage: NotificationStage) -> bool {
        match self.live.iter_mut().find(|n| n.id == id) {
            Some(notification) => {
                notification.stage = stage;
                true
            }
            None => false,
        }
    }

    /// Apply one lifecycle step from [`NotificationSchedule::run`].
    pub fn advance(&mut self, id: NotificationId, stage: Option<NotificationStage>) {
        match stage {
            Some(stage) => {
                self.set_stage(id, stage);
            }
            None => {
                self.remove(id);
            }
        }
    }

    pub fn remove(&mut self, id: NotificationId) -> Option<Notification> {
        let pos = self.live.iter().position(|n| n.id == id)?;
        Some(self.live.remove(pos))
    }

    pub fn get(&self, id: NotificationId) -> Option<&Notification> {
        self.live.iter().find(|n| n.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.live.iter()
    }

    pub fn len(&self) -> usize {
        self.live.len()
    }

    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }
}
