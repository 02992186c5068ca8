use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImpactStyle {
    Light,
    Medium,
    Heavy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HapticCue {
    Impact(ImpactStyle),
    Notification(NotificationKind),
    Selection,
}

#[derive(Debug, Error)]
pub enum HapticError {
    #[error("haptics are not available on this device")]
    Unavailable,

    #[error("haptic engine failed: {0}")]
    Engine(String),
}

/// Sink for tactile cues. Callers never propagate its errors.
pub trait Haptics: Send + Sync {
    fn play(&self, cue: HapticCue) -> Result<(), HapticError>;
}

/// Platforms without a vibration motor.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoHaptics;

impl Haptics for NoHaptics {
    fn play(&self, _cue: HapticCue) -> Result<(), HapticError> {
        Err(HapticError::Unavailable)
    }
}

/// Records cues to the log instead of a device.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogHaptics;

impl Haptics for LogHaptics {
    fn play(&self, cue: HapticCue) -> Result<(), HapticError> {
        tracing::debug!(?cue, "haptic cue");
        Ok(())
    }
}
