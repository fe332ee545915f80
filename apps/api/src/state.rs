use std::sync::Arc;

use crate::auth::AuthProvider;
use crate::config::Config;
use crate::recommendation::insight::InsightGenerator;
use crate::store::{ProfileStore, UniversityStore};

/// Shared application state injected into all route handlers via Axum extractors.
/// Every external collaborator sits behind a trait object so tests can swap it.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub universities: Arc<dyn UniversityStore>,
    pub profiles: Arc<dyn ProfileStore>,
    pub auth: Arc<dyn AuthProvider>,
    /// Default: `GeminiInsightGenerator` (unconfigured when GEMINI_API_KEY is absent).
    pub insight: Arc<dyn InsightGenerator>,
}
