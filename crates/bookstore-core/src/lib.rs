//! # bookstore-core: Pure Domain Logic for the Bookstore Backend
//!
//! This crate contains the entity types, form-field validation and order
//! pricing as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Bookstore Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 apps/web (axum + maud pages)                    │   │
//! │  │    /members  /books  /coupons  /orders  /booksAndOrders         │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ form bodies                            │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ bookstore-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │  pricing  │  │ validation│  │   │
//! │  │   │  Member   │  │   Money   │  │  order    │  │  parsing  │  │   │
//! │  │   │  Book ... │  │           │  │  totals   │  │  blank→∅  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 bookstore-db (Database Layer)                   │   │
//! │  │        SQLite queries, migrations, repositories, assembly       │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Entity types (Member, Book, Coupon, Order, LineItem) and their inputs
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`pricing`] - Order total computation
//! - [`error`] - Domain error types
//! - [`validation`] - Field validation and normalization
//!
//! ## Example Usage
//!
//! ```rust
//! use bookstore_core::money::Money;
//! use bookstore_core::pricing::order_total;
//!
//! let cost = Money::parse("12.50").unwrap();
//! let total = order_total(cost, 2, Some(Money::from_cents(500))).unwrap();
//!
//! assert_eq!(total.cents(), 2000);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod pricing;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, ValidationError};
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum quantity of a single book on one line item.
///
/// ## Business Reason
/// Prevents accidental over-ordering (e.g., typing 1000 instead of 10).
pub const MAX_ITEM_QUANTITY: i64 = 999;

/// Largest amount accepted in a money field ($1,000,000.00), in cents.
///
/// Keeps `cost × MAX_ITEM_QUANTITY` well inside `i64`.
pub const MAX_AMOUNT_CENTS: i64 = 100_000_000;

/// Maximum length for free-text fields (names, titles, authors, genres).
pub const MAX_TEXT_LEN: usize = 255;
