pub mod health;

use axum::{
    routing::{get, get_service, post, MethodRouter},
    Router,
};
use tower_http::services::{ServeDir, ServeFile};

use crate::auth::handlers as auth_handlers;
use crate::recommendation::handlers as recommendation_handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let pages = state.config.static_dir.clone();
    let page =
        |file: &str| -> MethodRouter<AppState> { get_service(ServeFile::new(pages.join(file))) };

    Router::new()
        .route("/health", get(health::health_handler))
        // Pages
        .route("/", page("home.html"))
        .route("/dashboard", page("dashboard.html"))
        // Auth API (GET serves the form page)
        .route(
            "/login",
            page("login.html").post(auth_handlers::handle_login),
        )
        .route(
            "/register",
            page("register.html").post(auth_handlers::handle_register),
        )
        // Recommendation API
        .route(
            "/recommend",
            post(recommendation_handlers::handle_recommend),
        )
        // Assets (scripts, styles, other pages)
        .fallback_service(ServeDir::new(&pages))
        .with_state(state)
}
