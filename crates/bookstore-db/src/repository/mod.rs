//! # Repository Module
//!
//! Database repository implementations for the bookstore.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  HTTP handler                                                          │
//! │       │                                                                 │
//! │       │  db.members().list()                                           │
//! │       ▼                                                                 │
//! │  MemberRepository                                                      │
//! │  ├── list(&self)                                                       │
//! │  ├── get_by_id(&self, id)                                              │
//! │  ├── create(&self, &NewMember) → memberID                              │
//! │  ├── update(&self, id, &NewMember)                                     │
//! │  └── delete(&self, id)        (refused while orders reference it)      │
//! │       │                                                                 │
//! │       │  SQL Query                                                      │
//! │       ▼                                                                 │
//! │  SQLite Database                                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Each module also exposes crate-private `fetch_*` / `insert_*` helpers that
//! run on any executor, so the Validation Gate and Order Assembly can reuse
//! the same SQL inside a transaction.
//!
//! ## Available Repositories
//!
//! - [`MemberRepository`](member::MemberRepository) - Members
//! - [`BookRepository`](book::BookRepository) - Books, keyed by ISBN
//! - [`CouponRepository`](coupon::CouponRepository) - Coupons
//! - [`OrderRepository`](order::OrderRepository) - Orders
//! - [`LineItemRepository`](line_item::LineItemRepository) - BooksAndOrders rows

pub mod book;
pub mod coupon;
pub mod line_item;
pub mod member;
pub mod order;
