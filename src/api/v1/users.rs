//! User management endpoints

use axum::extract::{Path, State};
use axum::http::StatusCode;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::api::state::AppState;
use crate::api::types::{ApiError, Json};
use crate::domain::{UpdateUser, User, UserStatus};

/// Request to create a new user
#[derive(Debug, Clone, Deserialize)]
pub struct CreateUserApiRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
}

/// Request to partially update a user
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateUserApiRequest {
    pub username: Option<String>,
    pub email: Option<String>,
    pub status: Option<UserStatus>,
}

impl From<UpdateUserApiRequest> for UpdateUser {
    fn from(req: UpdateUserApiRequest) -> Self {
        Self {
            username: req.username,
            email: req.email,
            status: req.status,
        }
    }
}

/// User representation returned by the API
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: String,
    pub username: String,
    pub email: String,
    pub status: UserStatus,
    pub created_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id().as_str().to_string(),
            username: user.username().to_string(),
            email: user.email().to_string(),
            status: user.status(),
            created_at: user.created_at().to_rfc3339(),
            updated_at: user.updated_at().map(|t| t.to_rfc3339()),
        }
    }
}

/// Response for a delete operation
#[derive(Debug, Clone, Serialize)]
pub struct DeleteUserResponse {
    pub deleted: bool,
}

/// POST /v1/users
pub async fn create_user(
    State(state): State<AppState>,
    Json(request): Json<CreateUserApiRequest>,
) -> Result<(StatusCode, Json<UserResponse>), ApiError> {
    let user = state
        .user_registry
        .create(&request.username, &request.email)?;

    info!(user_id = %user.id(), "User created");

    Ok((StatusCode::CREATED, Json(UserResponse::from(&user))))
}

/// GET /v1/users/{user_id}
pub async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<UserResponse>, ApiError> {
    let user = state
        .user_registry
        .get(&user_id)?
        .ok_or_else(|| ApiError::not_found(format!("User '{}' not found", user_id)))?;

    Ok(Json(UserResponse::from(&user)))
}

/// PUT /v1/users/{user_id}
pub async fn update_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Json(request): Json<UpdateUserApiRequest>,
) -> Result<Json<UserResponse>, ApiError> {
    let user = state.user_registry.update(&user_id, request.into())?;

    info!(user_id = %user.id(), "User updated");

    Ok(Json(UserResponse::from(&user)))
}

/// DELETE /v1/users/{user_id}
pub async fn delete_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<DeleteUserResponse>, ApiError> {
    let deleted = state.user_registry.delete(&user_id)?;

    if deleted {
        info!(user_id = %user_id, "User deleted");
    }

    Ok(Json(DeleteUserResponse { deleted }))
}
