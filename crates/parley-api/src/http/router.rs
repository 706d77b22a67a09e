//! Axum router configuration with middleware.
//!
//! API routes live under `/api/`. Middleware: CORS (fully permissive) and
//! request tracing.
//!
//! The web front end is served from `web/` (configurable via
//! `PARLEY_WEB_DIR`). API routes take priority; unknown paths fall through
//! to `index.html`. If the directory does not exist, only the API is served.

use axum::Router;
use axum::routing::{delete, get, patch, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::http::handlers;
use crate::state::AppState;

/// Build the complete router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new()
        // Conversation
        .route("/chat", post(handlers::chat::send_message))
        .route("/models", get(handlers::chat::list_models))
        .route(
            "/chat/history/{session_id}",
            get(handlers::chat::get_history),
        )
        .route(
            "/chat/clear/{session_id}",
            delete(handlers::chat::clear_history),
        )
        // Chat metadata
        .route(
            "/chats",
            get(handlers::chats::list_chats).post(handlers::chats::create_chat),
        )
        .route(
            "/chats/{session_id}",
            patch(handlers::chats::rename_chat).delete(handlers::chats::delete_chat),
        );

    let mut router = Router::new()
        .nest("/api", api_routes)
        .route("/health", get(health_check))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let web_dir = std::env::var("PARLEY_WEB_DIR").unwrap_or_else(|_| "web".to_string());
    if std::path::Path::new(&web_dir).exists() {
        let index_path = format!("{web_dir}/index.html");
        let serve_dir = ServeDir::new(&web_dir).fallback(ServeFile::new(index_path));
        router = router.fallback_service(serve_dir);
        tracing::info!(path = %web_dir, "static file serving enabled");
    }

    router
}

/// GET /health
async fn health_check() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn health_reports_ok() {
        let axum::Json(body) = health_check().await;
        assert_eq!(body["status"], "ok");
        assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    }

    #[tokio::test]
    async fn router_builds_with_state() {
        let (state, _dir) = crate::http::test_support::state_without_providers().await;
        let _router = build_router(state);
    }
}
