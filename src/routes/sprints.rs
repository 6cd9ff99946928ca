//! Sprint endpoints.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use serde_json::Value;

use super::parse_id;
use crate::error::{AppError, AppResult};
use crate::models::Sprint;
use crate::schema;
use crate::state::AppState;

/// List all sprints: `GET /api/sprints`
pub async fn list_sprints(State(state): State<AppState>) -> AppResult<Json<Vec<Sprint>>> {
    Ok(Json(state.store.sprints().await))
}

/// Get one sprint: `GET /api/sprints/{id}`
pub async fn get_sprint(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Sprint>> {
    let id = parse_id(&id)?;
    let sprint = state
        .store
        .sprint(id)
        .await
        .ok_or_else(|| AppError::NotFound("Sprint not found".into()))?;

    Ok(Json(sprint))
}

/// Create a sprint: `POST /api/sprints`
pub async fn create_sprint(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> AppResult<(StatusCode, Json<Sprint>)> {
    let draft = schema::new_sprint(&body)?;
    let sprint = state.store.create_sprint(draft).await;

    Ok((StatusCode::CREATED, Json(sprint)))
}

/// Partially update a sprint: `PATCH /api/sprints/{id}`
pub async fn update_sprint(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> AppResult<Json<Sprint>> {
    let id = parse_id(&id)?;
    let patch = schema::sprint_patch(&body)?;
    let sprint = state
        .store
        .update_sprint(id, patch)
        .await
        .ok_or_else(|| AppError::NotFound("Sprint not found".into()))?;

    Ok(Json(sprint))
}

/// Delete a sprint: `DELETE /api/sprints/{id}`
pub async fn delete_sprint(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    let id = parse_id(&id)?;
    if state.store.delete_sprint(id).await {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound("Sprint not found".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemStore;
    use serde_json::json;
    use std::path::PathBuf;

    async fn seeded_state() -> AppState {
        AppState::new(MemStore::with_defaults().await, PathBuf::from("documents"))
    }

    #[tokio::test]
    async fn test_create_sprint_assigns_next_id_and_echoes_fields() {
        let state = seeded_state().await;
        let (status, Json(sprint)) = create_sprint(
            State(state),
            Json(json!({
                "name": "Sprint 7",
                "dateRange": "Jul 1-14",
                "status": "Planned",
                "deliverables": ["X"],
            })),
        )
        .await
        .unwrap();

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(sprint.id, 7); // six defaults preloaded
        assert_eq!(sprint.name, "Sprint 7");
        assert_eq!(sprint.date_range, "Jul 1-14");
        assert_eq!(sprint.status, "Planned");
        assert_eq!(sprint.deliverables, vec!["X".to_string()]);
        assert_eq!(sprint.subtitle, None);
    }

    #[tokio::test]
    async fn test_patch_status_preserves_deliverables() {
        let state = seeded_state().await;
        let before = state.store.sprint(3).await.unwrap();

        let Json(updated) = update_sprint(
            State(state),
            Path("3".into()),
            Json(json!({"status": "In Progress"})),
        )
        .await
        .unwrap();

        assert_eq!(updated.status, "In Progress");
        assert_eq!(updated.name, before.name);
        assert_eq!(updated.deliverables, before.deliverables);
    }

    #[tokio::test]
    async fn test_delete_missing_sprint_is_not_found() {
        let state = seeded_state().await;
        let err = delete_sprint(State(state), Path("42".into())).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_invalid_sprint_id_is_bad_request() {
        let state = seeded_state().await;
        let err = update_sprint(State(state), Path("seven".into()), Json(json!({})))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }
}
