//! # Validation Gate
//!
//! Existence checks run before a dependent row is written.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  BEGIN                                                                  │
//! │    require_member(memberID) ──► Member not found: 7   (404)            │
//! │    require_book(ISBN)       ──► Book not found: ...   (404)            │
//! │    require_coupon(couponID) ──► Coupon not found: 3   (404)            │
//! │    require_order(orderID)   ──► Order not found: 12   (404)            │
//! │    ... INSERT dependent rows ...                                        │
//! │  COMMIT                                                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every check takes the caller's transaction connection, so the lookups
//! and the writes they guard see the same snapshot. The checks never write.

use sqlx::SqliteConnection;

use crate::error::{DbError, DbResult};
use crate::repository::book::fetch_book;
use crate::repository::coupon::fetch_coupon;
use crate::repository::member::fetch_member;
use crate::repository::order::fetch_order;
use bookstore_core::{Book, Coupon, Member, Order};

/// Fails with `Member not found` unless the member exists.
pub async fn require_member(conn: &mut SqliteConnection, member_id: i64) -> DbResult<Member> {
    fetch_member(&mut *conn, member_id)
        .await?
        .ok_or_else(|| DbError::not_found("Member", member_id))
}

/// Fails with `Book not found` unless the book exists.
pub async fn require_book(conn: &mut SqliteConnection, isbn: &str) -> DbResult<Book> {
    fetch_book(&mut *conn, isbn)
        .await?
        .ok_or_else(|| DbError::not_found("Book", isbn))
}

/// Fails with `Coupon not found` unless the coupon exists.
pub async fn require_coupon(conn: &mut SqliteConnection, coupon_id: i64) -> DbResult<Coupon> {
    fetch_coupon(&mut *conn, coupon_id)
        .await?
        .ok_or_else(|| DbError::not_found("Coupon", coupon_id))
}

/// Checks an optional coupon reference; `None` always passes.
pub async fn require_optional_coupon(
    conn: &mut SqliteConnection,
    coupon_id: Option<i64>,
) -> DbResult<Option<Coupon>> {
    match coupon_id {
        Some(id) => require_coupon(conn, id).await.map(Some),
        None => Ok(None),
    }
}

/// Fails with `Order not found` unless the order exists.
pub async fn require_order(conn: &mut SqliteConnection, order_id: i64) -> DbResult<Order> {
    fetch_order(&mut *conn, order_id)
        .await?
        .ok_or_else(|| DbError::not_found("Order", order_id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};
    use bookstore_core::NewMember;

    #[tokio::test]
    async fn test_gate_reports_missing_entity() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let mut conn = db.pool().acquire().await.unwrap();

        let err = require_member(&mut *conn, 7).await.unwrap_err();
        assert_eq!(err.to_string(), "Member not found: 7");

        let err = require_book(&mut *conn, "9780441013593").await.unwrap_err();
        assert_eq!(err.to_string(), "Book not found: 9780441013593");

        assert!(require_optional_coupon(&mut *conn, None).await.unwrap().is_none());
        assert!(matches!(
            require_optional_coupon(&mut *conn, Some(3)).await,
            Err(DbError::NotFound { .. })
        ));
        assert!(matches!(require_order(&mut *conn, 12).await, Err(DbError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_gate_passes_existing_member() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let id = db
            .members()
            .create(&NewMember::new("Ada", "Lovelace", "555-0100", "ada@example.com").unwrap())
            .await
            .unwrap();

        let mut conn = db.pool().acquire().await.unwrap();
        let member = require_member(&mut *conn, id).await.unwrap();
        assert_eq!(member.last_name, "Lovelace");
    }
}
