//! Admin login endpoint.

use axum::Json;
use axum::extract::State;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Login request body. Fields are optional so a missing one reports the
/// API's own 400 message rather than a deserialization rejection.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

/// Login response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub success: bool,
    pub user_id: u64,
}

/// Authenticate the admin user: `POST /api/login`
///
/// Passwords are stored and compared as plaintext. In a real deployment
/// this would be a salted hash.
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let (username, password) = match (req.username, req.password) {
        (Some(u), Some(p)) if !u.is_empty() && !p.is_empty() => (u, p),
        _ => {
            return Err(AppError::BadRequest(
                "Username and password are required".into(),
            ));
        }
    };

    match state.store.user_by_username(&username).await {
        Some(user) if user.password == password => {
            tracing::info!(username, "login succeeded");
            Ok(Json(LoginResponse {
                success: true,
                user_id: user.id,
            }))
        }
        _ => Err(AppError::Unauthorized("Invalid credentials".into())),
    }
}
