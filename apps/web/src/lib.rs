//! # Bookstore Web
//!
//! HTTP front end for the bookstore backend: server-rendered management
//! pages plus the form and JSON endpoints behind them.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                           Web Server                                    │
//! │                                                                         │
//! │  Browser ──► axum Router (TraceLayer) ──► routes::* ──► bookstore-db   │
//! │                     │                        │              │          │
//! │                     │                        ▼              ▼          │
//! │                     │                  forms (decode)    SQLite pool   │
//! │                     │                        │                         │
//! │                     ◄──────── views (maud) ◄─┘                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration
//! Environment variables:
//! - `BOOKSTORE_HOST` - bind address (default: 0.0.0.0)
//! - `BOOKSTORE_PORT` - listen port (default: 55902)
//! - `DATABASE_PATH` - SQLite file (default: ./bookstore.db)
//! - `DB_MAX_CONNECTIONS` - pool size (default: 10)
//! - `DB_ACQUIRE_TIMEOUT_SECS` - pool acquire timeout (default: 30)
//! - `LOG_LEVEL` - fallback when `RUST_LOG` is unset (default: info)

pub mod config;
pub mod error;
pub mod forms;
pub mod routes;
pub mod views;

use axum::Router;
use bookstore_db::Database;
use tower_http::trace::TraceLayer;

// Re-exports
pub use config::WebConfig;
pub use error::AppError;

/// Shared application state.
#[derive(Debug, Clone)]
pub struct AppState {
    pub db: Database,
}

impl AppState {
    pub fn new(db: Database) -> Self {
        AppState { db }
    }
}

/// Builds the full router with request tracing.
pub fn app(state: AppState) -> Router {
    routes::router()
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
