//! Axum application builder.
//!
//! Configures routes, middleware, and state for the server.
//!
//! # Routes
//!
//! - `GET /api/health` - Health check
//! - `GET|POST /api/pages`, `GET|PATCH /api/pages/{page_name}` - Page contents
//! - `GET|POST /api/team-members`, `GET|PATCH|DELETE /api/team-members/{id}`
//! - `GET|POST /api/sprints`, `GET|PATCH|DELETE /api/sprints/{id}`
//! - `GET|POST /api/quick-nav-items`, `PATCH|DELETE /api/quick-nav-items/{id}`
//! - `POST /api/login` - Admin login
//! - `GET /api/documents/{name}` - Fixed set of downloadable documents

use std::path::PathBuf;
use std::time::Duration;

use axum::Router;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::routes::{auth, documents, health, members, nav, pages, sprints};
use crate::state::AppState;

/// Create the Axum application with all routes.
pub fn create_app(state: AppState) -> Router {
    // CORS layer for frontend development
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
        .max_age(Duration::from_secs(3600));

    Router::new()
        // Health
        .route("/api/health", get(health::health))
        // Page contents
        .route("/api/pages", get(pages::list_pages).post(pages::create_page))
        .route(
            "/api/pages/{page_name}",
            get(pages::get_page).patch(pages::update_page),
        )
        // Team members
        .route(
            "/api/team-members",
            get(members::list_members).post(members::create_member),
        )
        .route(
            "/api/team-members/{id}",
            get(members::get_member)
                .patch(members::update_member)
                .delete(members::delete_member),
        )
        // Sprints
        .route(
            "/api/sprints",
            get(sprints::list_sprints).post(sprints::create_sprint),
        )
        .route(
            "/api/sprints/{id}",
            get(sprints::get_sprint)
                .patch(sprints::update_sprint)
                .delete(sprints::delete_sprint),
        )
        // Quick navigation items
        .route(
            "/api/quick-nav-items",
            get(nav::list_nav_items).post(nav::create_nav_item),
        )
        .route(
            "/api/quick-nav-items/{id}",
            axum::routing::patch(nav::update_nav_item).delete(nav::delete_nav_item),
        )
        // Auth
        .route("/api/login", post(auth::login))
        // Documents
        .route("/api/documents/{name}", get(documents::get_document))
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        // State
        .with_state(state)
}

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Port to listen on.
    pub port: u16,
    /// Host to bind to.
    pub host: String,
    /// Directory holding the downloadable documents.
    pub docs_dir: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 5000,
            host: "0.0.0.0".into(),
            docs_dir: PathBuf::from("documents"),
        }
    }
}

impl ServerConfig {
    /// Create config from environment variables.
    pub fn from_env() -> Self {
        let port = std::env::var("HUB_PORT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(5000);

        let host = std::env::var("HUB_HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let docs_dir = std::env::var("HUB_DOCS_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("documents"));

        Self {
            port,
            host,
            docs_dir,
        }
    }

    /// Get bind address.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemStore;

    #[test]
    fn test_server_config_default() {
        let config = ServerConfig::default();
        assert_eq!(config.port, 5000);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.bind_addr(), "0.0.0.0:5000");
    }

    #[test]
    fn test_create_app() {
        let state = AppState::new(MemStore::new(), PathBuf::from("documents"));
        let _app = create_app(state);
        // App created successfully
    }
}
