//! Capstone Hub server: Axum-based backend for the project documentation site.
//!
//! Serves CRUD REST endpoints over four record types (page contents, team
//! members, sprints, quick-nav items) backed by an in-memory record store,
//! a login endpoint, and a fixed set of downloadable project documents.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐      ┌──────────────┐      ┌──────────────┐
//! │  HTTP layer  │─────>│  Validation  │─────>│   MemStore   │
//! │  (routes/*)  │      │  (schema)    │      │  (store)     │
//! └──────────────┘      └──────────────┘      └──────────────┘
//! ```
//!
//! Handlers translate verbs and paths into store calls; the schema module
//! turns raw JSON bodies into typed drafts before anything touches the
//! store; the store owns all entity state behind a single lock.
//!
//! # Modules
//!
//! - [`app`]: Axum application builder and router setup
//! - [`state`]: Shared state handed to every handler
//! - [`error`]: Unified error handling with HTTP status codes
//! - [`routes`]: HTTP route handlers (health, pages, members, sprints, nav, auth, documents)
//! - [`models`]: Entity, draft, and patch types
//! - [`schema`]: Payload validation producing typed drafts
//! - [`store`]: In-memory record store with id generation
//! - [`seed`]: Default content loaded at startup

pub mod app;
pub mod error;
pub mod models;
pub mod routes;
pub mod schema;
pub mod seed;
pub mod state;
pub mod store;

// Re-exports for convenience
pub use app::{ServerConfig, create_app};
pub use error::{AppError, AppResult};
pub use state::AppState;
pub use store::MemStore;
