//! Password and token endpoints

use serde::{Deserialize, Serialize};

use crate::api::types::{ApiError, Json};
use crate::infrastructure::security;

const DEFAULT_PASSWORD_LENGTH: usize = 12;

/// Request to generate a password
#[derive(Debug, Clone, Deserialize)]
pub struct GeneratePasswordRequest {
    #[serde(default = "default_length")]
    pub length: usize,
}

fn default_length() -> usize {
    DEFAULT_PASSWORD_LENGTH
}

#[derive(Debug, Clone, Serialize)]
pub struct GeneratePasswordResponse {
    pub password: String,
    pub length: usize,
}

/// Request to hash a password
#[derive(Debug, Clone, Deserialize)]
pub struct HashPasswordRequest {
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct HashPasswordResponse {
    pub hashed: String,
}

/// Request to verify a password against a stored hash
#[derive(Debug, Clone, Deserialize)]
pub struct VerifyPasswordRequest {
    pub password: String,
    pub hashed: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct VerifyPasswordResponse {
    pub valid: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct TokenResponse {
    pub token: String,
}

/// POST /v1/security/password
pub async fn generate_password(
    Json(request): Json<GeneratePasswordRequest>,
) -> Result<Json<GeneratePasswordResponse>, ApiError> {
    let password = security::generate_password(request.length)?;
    let length = password.len();

    Ok(Json(GeneratePasswordResponse { password, length }))
}

/// POST /v1/security/password/hash
pub async fn hash_password(
    Json(request): Json<HashPasswordRequest>,
) -> Json<HashPasswordResponse> {
    Json(HashPasswordResponse {
        hashed: security::hash_password(&request.password),
    })
}

/// POST /v1/security/password/verify
pub async fn verify_password(
    Json(request): Json<VerifyPasswordRequest>,
) -> Json<VerifyPasswordResponse> {
    Json(VerifyPasswordResponse {
        valid: security::verify_password(&request.password, &request.hashed),
    })
}

/// POST /v1/security/token
pub async fn generate_token() -> Json<TokenResponse> {
    Json(TokenResponse {
        token: security::generate_token(),
    })
}
