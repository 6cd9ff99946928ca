//! Page content endpoints.
//!
//! Pages are keyed by name rather than numeric id, are created once at
//! seeding, and are never deleted. PATCH is the edit-mode write path: the
//! store bumps `version` and stamps `lastUpdated` on every successful
//! update.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use serde_json::Value;

use crate::error::{AppError, AppResult};
use crate::models::PageContent;
use crate::schema;
use crate::state::AppState;

/// List all pages: `GET /api/pages`
pub async fn list_pages(State(state): State<AppState>) -> AppResult<Json<Vec<PageContent>>> {
    Ok(Json(state.store.pages().await))
}

/// Get one page by name: `GET /api/pages/{page_name}`
///
/// An unknown name is a 404, never an implicit create.
pub async fn get_page(
    State(state): State<AppState>,
    Path(page_name): Path<String>,
) -> AppResult<Json<PageContent>> {
    let page = state
        .store
        .page(&page_name)
        .await
        .ok_or_else(|| AppError::NotFound("Page not found".into()))?;

    Ok(Json(page))
}

/// Create a page: `POST /api/pages`
///
/// An existing page under the same name is silently replaced.
pub async fn create_page(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> AppResult<(StatusCode, Json<PageContent>)> {
    let draft = schema::new_page_content(&body)?;
    let page = state.store.create_page(draft).await;

    Ok((StatusCode::CREATED, Json(page)))
}

/// Partially update a page: `PATCH /api/pages/{page_name}`
pub async fn update_page(
    State(state): State<AppState>,
    Path(page_name): Path<String>,
    Json(body): Json<Value>,
) -> AppResult<Json<PageContent>> {
    let patch = schema::page_content_patch(&body)?;
    let page = state
        .store
        .update_page(&page_name, patch)
        .await
        .ok_or_else(|| AppError::NotFound("Page not found".into()))?;

    Ok(Json(page))
}
