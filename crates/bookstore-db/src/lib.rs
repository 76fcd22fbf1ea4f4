//! # bookstore-db: Database Layer for the Bookstore Backend
//!
//! This crate provides database access for the bookstore.
//! It uses SQLite with sqlx for async operations.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Bookstore Data Flow                              │
//! │                                                                         │
//! │  axum handler (POST /booksAndOrders/new-order)                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   bookstore-db (THIS CRATE)                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │   Database    │    │  Repositories │    │  Migrations  │  │   │
//! │  │   │   (pool.rs)   │    │ member, book  │    │  (embedded)  │  │   │
//! │  │   │               │◄───│ coupon, order │    │ 001_initial  │  │   │
//! │  │   │ SqlitePool    │    │ line_item     │    │              │  │   │
//! │  │   └───────────────┘    └───────┬───────┘    └──────────────┘  │   │
//! │  │                                │                               │   │
//! │  │                        ┌───────▼───────┐                       │   │
//! │  │                        │ gate +        │  one transaction      │   │
//! │  │                        │ assembly      │  per multi-row write  │   │
//! │  │                        └───────────────┘                       │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SQLite Database (./bookstore.db)                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation and configuration
//! - [`migrations`] - Embedded database migrations
//! - [`error`] - Database error types
//! - [`repository`] - Per-entity repositories
//! - [`gate`] - Existence checks before dependent writes
//! - [`assembly`] - Order + line item creation in one transaction
//!
//! ## Usage
//!
//! ```rust,ignore
//! use bookstore_db::{Database, DbConfig};
//!
//! let db = Database::new(DbConfig::new("./bookstore.db")).await?;
//!
//! let members = db.members().list().await?;
//! let created = db.assembly().create_order_with_item(&input).await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod assembly;
pub mod error;
pub mod gate;
pub mod migrations;
pub mod pool;
pub mod repository;

// =============================================================================
// Re-exports
// =============================================================================

pub use assembly::OrderAssembly;
pub use error::{DbError, DbResult};
pub use migrations::MigrationStatus;
pub use pool::{Database, DbConfig};

// Repository re-exports for convenience
pub use repository::book::BookRepository;
pub use repository::coupon::CouponRepository;
pub use repository::line_item::LineItemRepository;
pub use repository::member::MemberRepository;
pub use repository::order::OrderRepository;
