//! # Order Assembly
//!
//! Creates an order together with its first line item, and appends line
//! items to existing orders.
//!
//! ## Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  create_order_with_item(input)                                          │
//! │                                                                         │
//! │  BEGIN ─────────────────────────────────────────────────────────────┐   │
//! │   │  gate: member exists?  ── no ──► Member not found  ──► ROLLBACK │   │
//! │   │  gate: book exists?    ── no ──► Book not found    ──► ROLLBACK │   │
//! │   │  gate: coupon exists?  ── no ──► Coupon not found  ──► ROLLBACK │   │
//! │   │  total = input.total_price                                      │   │
//! │   │        or book.cost × quantity − coupon.discount (≥ 0)          │   │
//! │   │  INSERT Orders           → orderID                              │   │
//! │   │  INSERT BooksAndOrders   (orderID, ISBN, quantity)              │   │
//! │  COMMIT ◄───────────────────────────────────────────────────────────┘   │
//! │                                                                         │
//! │  Either both rows exist afterwards or neither does.                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use sqlx::SqlitePool;
use tracing::{debug, info};

use crate::error::{DbError, DbResult};
use crate::pool::begin_write;
use crate::gate;
use crate::repository::line_item::insert_line_item;
use crate::repository::order::insert_order;
use bookstore_core::pricing::order_total;
use bookstore_core::{CreatedOrder, NewLineItem, NewOrderWithItem};

/// Transactional order and line-item writes.
#[derive(Debug, Clone)]
pub struct OrderAssembly {
    pool: SqlitePool,
}

impl OrderAssembly {
    pub fn new(pool: SqlitePool) -> Self {
        OrderAssembly { pool }
    }

    /// Creates an order and its first line item atomically.
    ///
    /// ## Returns
    /// * `Ok(CreatedOrder)` - The new orderID and line item ID
    /// * `Err(DbError::NotFound)` - Member, book or coupon missing; nothing written
    /// * `Err(DbError::Core)` - The computed total overflowed
    pub async fn create_order_with_item(&self, input: &NewOrderWithItem) -> DbResult<CreatedOrder> {
        debug!(
            member_id = input.member_id,
            isbn = %input.isbn,
            quantity = input.quantity,
            "Assembling order"
        );

        let mut tx = begin_write(&self.pool).await?;

        gate::require_member(&mut *tx, input.member_id).await?;
        let book = gate::require_book(&mut *tx, &input.isbn).await?;
        let coupon = gate::require_optional_coupon(&mut *tx, input.coupon_id).await?;

        let total = match input.total_price {
            Some(total) => total,
            None => order_total(book.cost(), input.quantity, coupon.map(|c| c.discount()))?,
        };

        let order_id = insert_order(&mut *tx, input.member_id, input.coupon_id, total.cents()).await?;
        let line_item_id = insert_line_item(&mut *tx, order_id, &input.isbn, input.quantity).await?;

        tx.commit()
            .await
            .map_err(|e| DbError::TransactionFailed(e.to_string()))?;

        info!(order_id, line_item_id, total = %total, "Order assembled");
        Ok(CreatedOrder {
            order_id,
            line_item_id,
        })
    }

    /// Appends a line item to an existing order.
    ///
    /// The order's stored total is left unchanged.
    pub async fn append_line_item(&self, input: &NewLineItem) -> DbResult<i64> {
        debug!(order_id = input.order_id, isbn = %input.isbn, "Appending line item");

        let mut tx = begin_write(&self.pool).await?;

        gate::require_order(&mut *tx, input.order_id).await?;
        gate::require_book(&mut *tx, &input.isbn).await?;

        let line_item_id = insert_line_item(&mut *tx, input.order_id, &input.isbn, input.quantity).await?;

        tx.commit()
            .await
            .map_err(|e| DbError::TransactionFailed(e.to_string()))?;

        info!(order_id = input.order_id, line_item_id, "Line item appended");
        Ok(line_item_id)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};
    use bookstore_core::{BookFields, NewBook, NewCoupon, NewMember};

    const DUNE: &str = "9780441013593";

    async fn seeded_db() -> (Database, i64) {
        seed(DbConfig::in_memory()).await
    }

    async fn seed(config: DbConfig) -> (Database, i64) {
        let db = Database::new(config).await.unwrap();
        let member_id = db
            .members()
            .create(&NewMember::new("Ada", "Lovelace", "555-0100", "ada@example.com").unwrap())
            .await
            .unwrap();
        db.books()
            .create(
                &NewBook::new(BookFields {
                    isbn: DUNE,
                    title: "Dune",
                    author: "Frank Herbert",
                    genre: "Science Fiction",
                    cost: "12.50",
                    ..Default::default()
                })
                .unwrap(),
            )
            .await
            .unwrap();
        (db, member_id)
    }

    async fn row_counts(db: &Database) -> (i64, i64) {
        (
            db.orders().count().await.unwrap(),
            db.line_items().count().await.unwrap(),
        )
    }

    #[tokio::test]
    async fn test_creates_order_and_line_item() {
        let (db, member_id) = seeded_db().await;
        let input = NewOrderWithItem::new(&member_id.to_string(), None, DUNE, "2", Some("25.00")).unwrap();

        let created = db.assembly().create_order_with_item(&input).await.unwrap();

        let order = db.orders().get_by_id(created.order_id).await.unwrap().unwrap();
        assert_eq!(order.member_id, member_id);
        assert_eq!(order.total_price_cents, 2500);

        let item = db.line_items().get_by_id(created.line_item_id).await.unwrap().unwrap();
        assert_eq!(item.order_id, created.order_id);
        assert_eq!(item.isbn, DUNE);
        assert_eq!(item.quantity, 2);
    }

    #[tokio::test]
    async fn test_computes_total_with_coupon_when_omitted() {
        let (db, member_id) = seeded_db().await;
        let coupon_id = db
            .coupons()
            .create(&NewCoupon::new("5.00", "2027-01-01").unwrap())
            .await
            .unwrap();
        let input = NewOrderWithItem::new(
            &member_id.to_string(),
            Some(coupon_id.to_string().as_str()),
            DUNE,
            "2",
            Some(""),
        )
        .unwrap();

        let created = db.assembly().create_order_with_item(&input).await.unwrap();

        let order = db.orders().get_by_id(created.order_id).await.unwrap().unwrap();
        assert_eq!(order.coupon_id, Some(coupon_id));
        assert_eq!(order.total_price_cents, 2000);
    }

    #[tokio::test]
    async fn test_missing_member_creates_nothing() {
        let (db, _) = seeded_db().await;
        let input = NewOrderWithItem::new("999", None, DUNE, "1", None).unwrap();

        let err = db.assembly().create_order_with_item(&input).await.unwrap_err();

        assert_eq!(err.to_string(), "Member not found: 999");
        assert_eq!(row_counts(&db).await, (0, 0));
    }

    #[tokio::test]
    async fn test_missing_book_creates_nothing() {
        let (db, member_id) = seeded_db().await;
        let input = NewOrderWithItem::new(&member_id.to_string(), None, "0441172717", "1", None).unwrap();

        let err = db.assembly().create_order_with_item(&input).await.unwrap_err();

        assert_eq!(err.to_string(), "Book not found: 0441172717");
        assert_eq!(row_counts(&db).await, (0, 0));
    }

    #[tokio::test]
    async fn test_missing_coupon_creates_nothing() {
        let (db, member_id) = seeded_db().await;
        let input = NewOrderWithItem::new(&member_id.to_string(), Some("41"), DUNE, "1", None).unwrap();

        let err = db.assembly().create_order_with_item(&input).await.unwrap_err();

        assert!(matches!(err, DbError::NotFound { .. }));
        assert_eq!(row_counts(&db).await, (0, 0));
    }

    #[tokio::test]
    async fn test_append_to_existing_order() {
        let (db, member_id) = seeded_db().await;
        let input = NewOrderWithItem::new(&member_id.to_string(), None, DUNE, "1", None).unwrap();
        let created = db.assembly().create_order_with_item(&input).await.unwrap();

        let appended = db
            .assembly()
            .append_line_item(&NewLineItem::new(&created.order_id.to_string(), DUNE, "4").unwrap())
            .await
            .unwrap();

        let items = db.line_items().list_for_order(created.order_id).await.unwrap();
        let ids: Vec<_> = items.iter().map(|i| i.line_item_id).collect();
        assert_eq!(ids, vec![created.line_item_id, appended]);

        // The order can't be deleted while it has line items.
        assert!(matches!(
            db.orders().delete(created.order_id).await,
            Err(DbError::HasDependents { count: 2, .. })
        ));
        // Neither can the book they reference.
        assert!(matches!(
            db.books().delete(DUNE).await,
            Err(DbError::HasDependents { .. })
        ));
    }

    #[tokio::test]
    async fn test_append_to_missing_order_is_not_found() {
        let (db, _) = seeded_db().await;

        let err = db
            .assembly()
            .append_line_item(&NewLineItem::new("8", DUNE, "1").unwrap())
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Order not found: 8");
        assert_eq!(row_counts(&db).await, (0, 0));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 8)]
    async fn test_concurrent_assembly_on_file_database() {
        let dir = tempfile::tempdir().unwrap();
        let (db, member_id) = seed(DbConfig::new(dir.path().join("bookstore.db"))).await;

        let tasks: Vec<_> = (0..40)
            .map(|_| {
                let db = db.clone();
                tokio::spawn(async move {
                    let input =
                        NewOrderWithItem::new(&member_id.to_string(), None, DUNE, "1", None).unwrap();
                    db.assembly().create_order_with_item(&input).await
                })
            })
            .collect();

        for task in tasks {
            task.await.unwrap().unwrap();
        }

        assert_eq!(row_counts(&db).await, (40, 40));
        db.close().await;
    }
}
