use std::time::Instant;

use uuid::Uuid;

use crate::{
    dto::{
        cart::NavigationTarget,
        notifications::{ActionOutcome, NotificationView},
    },
    error::{AppError, AppResult},
    feedback::notification::NotificationAction,
    response::{ApiResponse, Meta},
    state::AppState,
};

pub async fn current(state: &AppState) -> AppResult<ApiResponse<Option<NotificationView>>> {
    let notifier = state.feedback.notifier();
    let now = Instant::now();
    let view = notifier.current_at(now).map(|notification| {
        let remaining = notifier.remaining_at(now).unwrap_or_default();
        NotificationView::new(notification, remaining.as_millis() as u64)
    });

    Ok(ApiResponse::success("OK", view, None))
}

pub async fn dismiss(state: &AppState) -> AppResult<ApiResponse<serde_json::Value>> {
    let dismissed = state.feedback.notifier().dismiss();
    Ok(ApiResponse::success(
        "Dismissed",
        serde_json::json!({ "dismissed": dismissed }),
        Some(Meta::empty()),
    ))
}

/// Runs the action attached to notification `id` if it is still visible.
pub async fn invoke_action(state: &AppState, id: Uuid) -> AppResult<ApiResponse<ActionOutcome>> {
    let action = state
        .feedback
        .notifier()
        .take_action(id)
        .ok_or(AppError::NotFound)?;

    let outcome = match action {
        NotificationAction::Undo { line } => {
            let line = state.cart.lock().await.restore(line);
            tracing::debug!(item_id = line.id, quantity = line.quantity, "removal undone");
            ActionOutcome::Restored { line }
        }
        NotificationAction::ViewCart => ActionOutcome::Navigate {
            target: NavigationTarget::Cart,
        },
    };

    Ok(ApiResponse::success("OK", outcome, None))
}
