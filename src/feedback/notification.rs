use std::{
    sync::{Arc, Mutex, MutexGuard, PoisonError},
    time::{Duration, Instant},
};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::models::CartLine;

pub const DEFAULT_DURATION: Duration = Duration::from_millis(2500);

/// What tapping the notification's button does.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NotificationAction {
    ViewCart,
    Undo { line: CartLine },
}

impl NotificationAction {
    pub fn label(&self) -> &'static str {
        match self {
            NotificationAction::ViewCart => "View Cart",
            NotificationAction::Undo { .. } => "Undo",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Notification {
    pub id: Uuid,
    pub message: String,
    pub action: NotificationAction,
    pub created_at: DateTime<Utc>,
}

struct Pending {
    notification: Notification,
    shown_at: Instant,
}

/// Single-slot transient message holder.
///
/// At most one notification is visible. Showing a new one drops the pending
/// one outright; superseded messages are never delivered. A notification
/// expires `duration` after it was shown.
#[derive(Clone)]
pub struct Notifier {
    slot: Arc<Mutex<Option<Pending>>>,
    duration: Duration,
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new(DEFAULT_DURATION)
    }
}

impl Notifier {
    pub fn new(duration: Duration) -> Self {
        Self {
            slot: Arc::new(Mutex::new(None)),
            duration,
        }
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn show(&self, message: impl Into<String>, action: Option<NotificationAction>) -> Uuid {
        self.show_at(message, action, Instant::now())
    }

    pub fn show_at(
        &self,
        message: impl Into<String>,
        action: Option<NotificationAction>,
        now: Instant,
    ) -> Uuid {
        let notification = Notification {
            id: Uuid::new_v4(),
            message: message.into(),
            action: action.unwrap_or(NotificationAction::ViewCart),
            created_at: Utc::now(),
        };
        let id = notification.id;
        *self.lock() = Some(Pending {
            notification,
            shown_at: now,
        });
        id
    }

    pub fn current(&self) -> Option<Notification> {
        self.current_at(Instant::now())
    }

    pub fn current_at(&self, now: Instant) -> Option<Notification> {
        let mut slot = self.lock();
        if self.expire(&mut slot, now) {
            return None;
        }
        slot.as_ref().map(|pending| pending.notification.clone())
    }

    /// Time left before the visible notification auto-dismisses.
    pub fn remaining_at(&self, now: Instant) -> Option<Duration> {
        let slot = self.lock();
        slot.as_ref()
            .and_then(|pending| (pending.shown_at + self.duration).checked_duration_since(now))
    }

    pub fn dismiss(&self) -> bool {
        self.lock().take().is_some()
    }

    /// Clears the slot and hands back its action, but only while `id` is
    /// still the visible notification.
    pub fn take_action(&self, id: Uuid) -> Option<NotificationAction> {
        self.take_action_at(id, Instant::now())
    }

    pub fn take_action_at(&self, id: Uuid, now: Instant) -> Option<NotificationAction> {
        let mut slot = self.lock();
        if self.expire(&mut slot, now) {
            return None;
        }
        let visible = slot
            .as_ref()
            .is_some_and(|pending| pending.notification.id == id);
        if !visible {
            return None;
        }
        slot.take().map(|pending| pending.notification.action)
    }

    fn expire(&self, slot: &mut Option<Pending>, now: Instant) -> bool {
        let expired = slot
            .as_ref()
            .is_some_and(|pending| now.saturating_duration_since(pending.shown_at) >= self.duration);
        if expired {
            *slot = None;
        }
        expired
    }

    fn lock(&self) -> MutexGuard<'_, Option<Pending>> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
