//! Team member endpoints.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use serde_json::Value;

use super::parse_id;
use crate::error::{AppError, AppResult};
use crate::models::TeamMember;
use crate::schema;
use crate::state::AppState;

/// List all team members: `GET /api/team-members`
pub async fn list_members(State(state): State<AppState>) -> AppResult<Json<Vec<TeamMember>>> {
    Ok(Json(state.store.members().await))
}

/// Get one team member: `GET /api/team-members/{id}`
pub async fn get_member(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<TeamMember>> {
    let id = parse_id(&id)?;
    let member = state
        .store
        .member(id)
        .await
        .ok_or_else(|| AppError::NotFound("Team member not found".into()))?;

    Ok(Json(member))
}

/// Create a team member: `POST /api/team-members`
pub async fn create_member(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> AppResult<(StatusCode, Json<TeamMember>)> {
    let draft = schema::new_team_member(&body)?;
    let member = state.store.create_member(draft).await;

    Ok((StatusCode::CREATED, Json(member)))
}

/// Partially update a team member: `PATCH /api/team-members/{id}`
pub async fn update_member(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> AppResult<Json<TeamMember>> {
    let id = parse_id(&id)?;
    let patch = schema::team_member_patch(&body)?;
    let member = state
        .store
        .update_member(id, patch)
        .await
        .ok_or_else(|| AppError::NotFound("Team member not found".into()))?;

    Ok(Json(member))
}

/// Delete a team member: `DELETE /api/team-members/{id}`
pub async fn delete_member(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    let id = parse_id(&id)?;
    if state.store.delete_member(id).await {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound("Team member not found".into()))
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
    async fn test_invalid_id_is_bad_request() {
        let state = seeded_state().await;
        let err = get_member(State(state), Path("abc".into())).await.unwrap_err();

        match err {
            AppError::BadRequest(msg) => assert_eq!(msg, "Invalid ID"),
            other => panic!("expected BadRequest, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_missing_member_is_not_found() {
        let state = seeded_state().await;
        let err = get_member(State(state), Path("999".into())).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_empty_create_body_lists_missing_fields() {
        let state = seeded_state().await;
        let err = create_member(State(state), Json(json!({})))
            .await
            .unwrap_err();

        match err {
            AppError::BadRequest(msg) => {
                assert!(msg.contains("name is required"));
                assert!(msg.contains("role is required"));
                assert!(msg.contains("initials is required"));
            }
            other => panic!("expected BadRequest, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_create_then_patch_roundtrip() {
        let state = seeded_state().await;
        let (status, Json(created)) = create_member(
            State(state.clone()),
            Json(json!({
                "name": "Nadia Imani",
                "role": "QA Engineer",
                "initials": "NI",
                "skills": ["Testing", "Automation"],
            })),
        )
        .await
        .unwrap();
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(created.id, 6); // after the five seeded members

        let Json(updated) = update_member(
            State(state),
            Path(created.id.to_string()),
            Json(json!({"role": "QA Lead"})),
        )
        .await
        .unwrap();

        assert_eq!(updated.role, "QA Lead");
        assert_eq!(updated.name, "Nadia Imani");
        assert_eq!(updated.skills, vec!["Testing".to_string(), "Automation".to_string()]);
    }

    #[tokio::test]
    async fn test_delete_twice_second_is_not_found() {
        let state = seeded_state().await;

        let status = delete_member(State(state.clone()), Path("1".into()))
            .await
            .unwrap();
        assert_eq!(status, StatusCode::NO_CONTENT);

        let err = delete_member(State(state), Path("1".into())).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }
}
