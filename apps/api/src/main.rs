mod auth;
mod config;
mod db;
mod errors;
mod llm_client;
mod models;
mod recommendation;
mod routes;
mod state;
mod store;

use anyhow::Result;
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use std::sync::Arc;

use crate::auth::SupabaseAuth;
use crate::config::Config;
use crate::db::create_pool;
use crate::llm_client::LlmClient;
use crate::recommendation::insight::{GeminiInsightGenerator, InsightGenerator};
use crate::routes::build_router;
use crate::state::AppState;
use crate::store::PgStore;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting UniMatch API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize PostgreSQL (universities + profiles)
    let pool = create_pool(&config.database_url, config.upstream_timeout).await?;
    let store = Arc::new(PgStore::new(pool));

    // Initialize auth provider client
    let auth = SupabaseAuth::new(
        &config.supabase_url,
        config.supabase_anon_key.clone(),
        config.upstream_timeout,
    )?;
    info!("Auth provider client initialized ({})", config.supabase_url);

    // Initialize insight generator (fallback text only when no key is set)
    let insight: Arc<dyn InsightGenerator> = match &config.gemini_api_key {
        Some(key) => {
            let llm = LlmClient::new(key.clone(), config.insight_timeout)?;
            info!("LLM client initialized (model: {})", llm_client::MODEL);
            Arc::new(GeminiInsightGenerator::new(llm))
        }
        None => {
            warn!("GEMINI_API_KEY not set; AI insights will use fallback text");
            Arc::new(GeminiInsightGenerator::unconfigured())
        }
    };

    // Build app state
    let state = AppState {
        config: config.clone(),
        universities: store.clone(),
        profiles: store,
        auth: Arc::new(auth),
        insight,
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
