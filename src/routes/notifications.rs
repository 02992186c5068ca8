use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{get, post},
};
use uuid::Uuid;

use crate::{
    dto::notifications::{ActionOutcome, NotificationView},
    error::AppResult,
    response::ApiResponse,
    services::notification_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(current_notification).delete(dismiss_notification))
        .route("/{id}/action", post(invoke_action))
}

#[utoipa::path(
    get,
    path = "/api/notifications",
    responses(
        (status = 200, description = "The visible notification, if any", body = ApiResponse<NotificationView>)
    ),
    tag = "Notifications"
)]
pub async fn current_notification(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<Option<NotificationView>>>> {
    Ok(Json(notification_service::current(&state).await?))
}

#[utoipa::path(
    delete,
    path = "/api/notifications",
    responses(
        (status = 200, description = "Notification dismissed", body = ApiResponse<serde_json::Value>)
    ),
    tag = "Notifications"
)]
pub async fn dismiss_notification(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    Ok(Json(notification_service::dismiss(&state).await?))
}

#[utoipa::path(
    post,
    path = "/api/notifications/{id}/action",
    params(
        ("id" = Uuid, Path, description = "Notification ID")
    ),
    responses(
        (status = 200, description = "Undo applied or navigation target returned", body = ApiResponse<ActionOutcome>),
        (status = 404, description = "Notification expired or superseded"),
    ),
    tag = "Notifications"
)]
pub async fn invoke_action(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<ActionOutcome>>> {
    Ok(Json(notification_service::invoke_action(&state, id).await?))
}
