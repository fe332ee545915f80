//! Auth provider — credential creation and password sign-in are delegated to
//! a Supabase GoTrue endpoint. Nothing here stores or checks passwords.

pub mod handlers;

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::debug;
use uuid::Uuid;

use crate::errors::AppError;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{message}")]
    Rejected { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Sign-up response did not include a user")]
    MissingUser,
}

impl From<AuthError> for AppError {
    fn from(e: AuthError) -> Self {
        match e {
            AuthError::Rejected { message, .. } => AppError::Upstream(message),
            AuthError::MissingUser => AppError::Upstream(AuthError::MissingUser.to_string()),
            other => AppError::Internal(anyhow::Error::new(other)),
        }
    }
}

#[derive(Clone, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: Uuid,
    #[serde(default)]
    pub email: Option<String>,
}

/// Session issued on sign-in, returned to the client unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: i64,
    #[serde(default)]
    pub expires_at: Option<i64>,
    pub refresh_token: String,
    pub user: AuthUser,
}

/// Sign-up answers with a session when email confirmation is off, or with the
/// bare user when a confirmation mail is pending.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum SignUpResponse {
    Session(Session),
    User(AuthUser),
}

#[async_trait]
pub trait AuthProvider: Send + Sync {
    async fn sign_up(&self, credentials: &Credentials) -> Result<AuthUser, AuthError>;
    async fn sign_in(&self, credentials: &Credentials) -> Result<Session, AuthError>;
}

/// GoTrue REST client. The anon key goes in both `apikey` and bearer headers.
#[derive(Clone)]
pub struct SupabaseAuth {
    client: Client,
    base_url: String,
    anon_key: String,
}

impl SupabaseAuth {
    pub fn new(base_url: &str, anon_key: String, timeout: Duration) -> Result<Self, AuthError> {
        Ok(Self {
            client: Client::builder().timeout(timeout).build()?,
            base_url: base_url.trim_end_matches('/').to_string(),
            anon_key,
        })
    }

    async fn post(&self, path: &str, credentials: &Credentials) -> Result<String, AuthError> {
        let response = self
            .client
            .post(format!("{}{path}", self.base_url))
            .header("apikey", &self.anon_key)
            .bearer_auth(&self.anon_key)
            .json(credentials)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        debug!("Auth provider {path} returned {status}");

        if !status.is_success() {
            return Err(AuthError::Rejected {
                status: status.as_u16(),
                message: provider_message(&body),
            });
        }
        Ok(body)
    }
}

#[async_trait]
impl AuthProvider for SupabaseAuth {
    async fn sign_up(&self, credentials: &Credentials) -> Result<AuthUser, AuthError> {
        let body = self.post("/auth/v1/signup", credentials).await?;
        match serde_json::from_str::<SignUpResponse>(&body) {
            Ok(SignUpResponse::Session(session)) => Ok(session.user),
            Ok(SignUpResponse::User(user)) => Ok(user),
            Err(_) => Err(AuthError::MissingUser),
        }
    }

    async fn sign_in(&self, credentials: &Credentials) -> Result<Session, AuthError> {
        let body = self
            .post("/auth/v1/token?grant_type=password", credentials)
            .await?;
        Ok(serde_json::from_str(&body)?)
    }
}

/// First human-readable message in a GoTrue error body; the raw body otherwise.
fn provider_message(body: &str) -> String {
    let parsed: Option<Value> = serde_json::from_str(body).ok();
    parsed
        .as_ref()
        .and_then(|v| {
            ["error_description", "msg", "message", "error"]
                .iter()
                .find_map(|key| v.get(key).and_then(Value::as_str))
        })
        .map(str::to_string)
        .unwrap_or_else(|| body.to_string())
}
