use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::{
    dto::cart::NavigationTarget,
    feedback::notification::{Notification, NotificationAction},
    models::CartLine,
};

#[derive(Debug, Serialize, ToSchema)]
pub struct NotificationView {
    pub id: Uuid,
    pub message: String,
    pub action_label: String,
    pub action: NotificationAction,
    pub created_at: DateTime<Utc>,
    pub expires_in_ms: u64,
}

impl NotificationView {
    pub fn new(notification: Notification, expires_in_ms: u64) -> Self {
        Self {
            id: notification.id,
            message: notification.message,
            action_label: notification.action.label().to_string(),
            action: notification.action,
            created_at: notification.created_at,
            expires_in_ms,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ActionOutcome {
    Restored { line: CartLine },
    Navigate { target: NavigationTarget },
}
