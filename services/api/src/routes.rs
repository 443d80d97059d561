//! Reminder API routes

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::get,
};
use serde_json::json;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::{
    error::{ApiError, ApiResult},
    identity::Identity,
    middleware::{auth_middleware, authorize},
    models::{Reminder, SearchQuery},
    state::AppState,
};

/// Create the router for the reminder API
pub fn create_router(state: AppState) -> Router {
    // Layers added later run first: authenticate, then authorize.
    let reminder_routes = Router::new()
        .route("/api/reminders", get(list_mine).post(create_reminder))
        .route("/api/reminders/all", get(list_all))
        .route("/api/reminders/search", get(search_reminder))
        .route(
            "/api/reminders/:id",
            get(get_reminder)
                .put(update_reminder)
                .delete(delete_reminder),
        )
        .route_layer(middleware::from_fn(authorize))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    Router::new()
        .route("/health", get(health_check))
        .merge(reminder_routes)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "service": "reminder-api"
    }))
}

/// Create a reminder owned by the caller
pub async fn create_reminder(
    State(state): State<AppState>,
    identity: Identity,
    Json(reminder): Json<Reminder>,
) -> ApiResult<StatusCode> {
    let created = state.reminder_service.create(reminder, &identity).await?;

    if created {
        info!(user_id = %identity.user_id(), "Reminder created");
        Ok(StatusCode::CREATED)
    } else {
        Ok(StatusCode::IM_A_TEAPOT)
    }
}

/// List every reminder in the store
pub async fn list_all(State(state): State<AppState>) -> ApiResult<Json<Vec<Reminder>>> {
    match state.reminder_service.read_all().await? {
        Some(reminders) if !reminders.is_empty() => Ok(Json(reminders)),
        _ => Err(ApiError::NotFound),
    }
}

/// List the caller's reminders; an empty list is still a success
pub async fn list_mine(
    State(state): State<AppState>,
    identity: Identity,
) -> ApiResult<Json<Vec<Reminder>>> {
    state
        .reminder_service
        .read_all_user_locations(&identity)
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound)
}

/// Get a reminder by ID
pub async fn get_reminder(
    State(state): State<AppState>,
    identity: Identity,
    Path(id): Path<i64>,
) -> ApiResult<Json<Reminder>> {
    state
        .reminder_service
        .read(id, &identity)
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound)
}

/// Find a reminder by title
pub async fn search_reminder(
    State(state): State<AppState>,
    identity: Identity,
    Query(query): Query<SearchQuery>,
) -> ApiResult<Json<Reminder>> {
    state
        .reminder_service
        .search(query.title.as_deref(), &identity)
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound)
}

/// Replace a reminder
pub async fn update_reminder(
    State(state): State<AppState>,
    identity: Identity,
    Path(id): Path<i64>,
    Json(reminder): Json<Reminder>,
) -> ApiResult<StatusCode> {
    let updated = state
        .reminder_service
        .update(reminder, id, &identity)
        .await?;

    Ok(if updated {
        StatusCode::OK
    } else {
        StatusCode::NOT_MODIFIED
    })
}

/// Delete a reminder
pub async fn delete_reminder(
    State(state): State<AppState>,
    identity: Identity,
    Path(id): Path<i64>,
) -> ApiResult<StatusCode> {
    let deleted = state.reminder_service.delete(id, &identity).await?;

    Ok(if deleted {
        StatusCode::OK
    } else {
        StatusCode::NOT_MODIFIED
    })
}
