//! Best-effort user feedback fired by store mutations: the notification slot
//! and haptic cues. Nothing here returns an error to the caller.

use std::sync::Arc;

use uuid::Uuid;

pub mod haptics;
pub mod notification;

use haptics::{HapticCue, HapticError, Haptics, LogHaptics, NoHaptics};
use notification::{NotificationAction, Notifier};

#[derive(Clone)]
pub struct Feedback {
    notifier: Notifier,
    haptics: Arc<dyn Haptics>,
}

impl Default for Feedback {
    fn default() -> Self {
        Self::new(Notifier::default(), Arc::new(NoHaptics))
    }
}

impl Feedback {
    pub fn new(notifier: Notifier, haptics: Arc<dyn Haptics>) -> Self {
        Self { notifier, haptics }
    }

    pub fn with_log_haptics(notifier: Notifier) -> Self {
        Self::new(notifier, Arc::new(LogHaptics))
    }

    pub fn notifier(&self) -> &Notifier {
        &self.notifier
    }

    pub fn notify(&self, message: impl Into<String>, action: Option<NotificationAction>) -> Uuid {
        self.notifier.show(message, action)
    }

    pub fn haptic(&self, cue: HapticCue) {
        match self.haptics.play(cue) {
            Ok(()) | Err(HapticError::Unavailable) => {}
            Err(err) => tracing::warn!(error = %err, ?cue, "haptic feedback failed"),
        }
    }
}
