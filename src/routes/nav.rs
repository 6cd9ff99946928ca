//! Quick navigation item endpoints.
//!
//! The collection has no GET-by-id route; the front end only ever lists
//! the tiles and edits them in place.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use serde_json::Value;

use super::parse_id;
use crate::error::{AppError, AppResult};
use crate::models::QuickNavItem;
use crate::schema;
use crate::state::AppState;

/// List all quick-nav items: `GET /api/quick-nav-items`
pub async fn list_nav_items(State(state): State<AppState>) -> AppResult<Json<Vec<QuickNavItem>>> {
    Ok(Json(state.store.nav_items().await))
}

/// Create a quick-nav item: `POST /api/quick-nav-items`
pub async fn create_nav_item(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> AppResult<(StatusCode, Json<QuickNavItem>)> {
    let draft = schema::new_quick_nav_item(&body)?;
    let item = state.store.create_nav_item(draft).await;

    Ok((StatusCode::CREATED, Json(item)))
}

/// Partially update a quick-nav item: `PATCH /api/quick-nav-items/{id}`
pub async fn update_nav_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> AppResult<Json<QuickNavItem>> {
    let id = parse_id(&id)?;
    let patch = schema::quick_nav_item_patch(&body)?;
    let item = state
        .store
        .update_nav_item(id, patch)
        .await
        .ok_or_else(|| AppError::NotFound("Quick navigation item not found".into()))?;

    Ok(Json(item))
}

/// Delete a quick-nav item: `DELETE /api/quick-nav-items/{id}`
pub async fn delete_nav_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    let id = parse_id(&id)?;
    if state.store.delete_nav_item(id).await {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound("Quick navigation item not found".into()))
    }
}
