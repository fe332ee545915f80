//! Axum route handlers for registration and login.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::auth::{Credentials, Session};
use crate::errors::AppError;
use crate::models::NewProfile;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    pub full_name: Option<String>,
    pub phone: Option<String>,
    pub role: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub message: String,
    pub session: Session,
}

fn credentials(email: &str, password: String) -> Result<Credentials, AppError> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err(AppError::Validation(
            "Email and password are required.".to_string(),
        ));
    }
    Ok(Credentials {
        email: email.to_string(),
        password,
    })
}

fn bad_body(rejection: JsonRejection) -> AppError {
    AppError::Validation(rejection.body_text())
}

/// POST /register
///
/// Creates the credential with the auth provider, then writes the profile row
/// keyed by the issued user id.
pub async fn handle_register(
    State(state): State<AppState>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<Json<MessageResponse>, AppError> {
    let Json(request) = payload.map_err(bad_body)?;
    let creds = credentials(&request.email, request.password)?;

    let user = state.auth.sign_up(&creds).await?;

    let profile = NewProfile {
        id: user.id,
        full_name: request.full_name,
        email: creds.email,
        phone: request.phone,
        role: request.role,
    };
    state
        .profiles
        .insert_profile(&profile)
        .await
        .map_err(|e| AppError::Upstream(e.to_string()))?;

    info!("Registered user {}", user.id);
    Ok(Json(MessageResponse {
        message: "Registration successful".to_string(),
    }))
}

/// POST /login
pub async fn handle_login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<LoginResponse>, AppError> {
    let Json(request) = payload.map_err(bad_body)?;
    let creds = credentials(&request.email, request.password)?;

    let session = state.auth.sign_in(&creds).await?;

    info!("User {} signed in", session.user.id);
    Ok(Json(LoginResponse {
        message: "Login successful".to_string(),
        session,
    }))
}
