//! # Line Item Repository
//!
//! Rows of the `BooksAndOrders` junction table: one book and a quantity
//! within an order. Writes that need the Validation Gate go through
//! [`crate::assembly::OrderAssembly`]; this repository lists, reads and
//! deletes.

use sqlx::{SqliteExecutor, SqlitePool};
use tracing::{debug, info};

use crate::error::{DbError, DbResult};
use bookstore_core::{LineItem, LineItemDetail};

pub(crate) async fn insert_line_item<'e, E>(
    executor: E,
    order_id: i64,
    isbn: &str,
    quantity: i64,
) -> DbResult<i64>
where
    E: SqliteExecutor<'e>,
{
    let result = sqlx::query(
        r#"
        INSERT INTO BooksAndOrders (orderID, ISBN, quantity)
        VALUES (?1, ?2, ?3)
        "#,
    )
    .bind(order_id)
    .bind(isbn)
    .bind(quantity)
    .execute(executor)
    .await?;

    Ok(result.last_insert_rowid())
}

/// Repository for line item database operations.
#[derive(Debug, Clone)]
pub struct LineItemRepository {
    pool: SqlitePool,
}

impl LineItemRepository {
    /// Creates a new LineItemRepository.
    pub fn new(pool: SqlitePool) -> Self {
        LineItemRepository { pool }
    }

    /// Lists every line item with its order's member and total and its book's title.
    ///
    /// Ordered by orderID, then line item ID.
    pub async fn list_detailed(&self) -> DbResult<Vec<LineItemDetail>> {
        let items = sqlx::query_as::<_, LineItemDetail>(
            r#"
            SELECT
                bo.booksAndOrdersID                AS line_item_id,
                bo.orderID                         AS order_id,
                m.firstName || ' ' || m.lastName   AS member_name,
                bo.ISBN                            AS isbn,
                b.title                            AS title,
                bo.quantity                        AS quantity,
                b.cost                             AS unit_cost_cents,
                o.totalPrice                       AS order_total_cents
            FROM BooksAndOrders bo
            INNER JOIN Orders o  ON o.orderID = bo.orderID
            INNER JOIN Members m ON m.memberID = o.memberID
            INNER JOIN Books b   ON b.ISBN = bo.ISBN
            ORDER BY bo.orderID ASC, bo.booksAndOrdersID ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        debug!(count = items.len(), "Listed line items");
        Ok(items)
    }

    /// Gets a line item by its own ID.
    pub async fn get_by_id(&self, line_item_id: i64) -> DbResult<Option<LineItem>> {
        let item = sqlx::query_as::<_, LineItem>(
            r#"
            SELECT
                booksAndOrdersID AS line_item_id,
                orderID          AS order_id,
                ISBN             AS isbn,
                quantity
            FROM BooksAndOrders
            WHERE booksAndOrdersID = ?1
            "#,
        )
        .bind(line_item_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(item)
    }

    /// Line items of one order, in insertion order.
    pub async fn list_for_order(&self, order_id: i64) -> DbResult<Vec<LineItem>> {
        let items = sqlx::query_as::<_, LineItem>(
            r#"
            SELECT
                booksAndOrdersID AS line_item_id,
                orderID          AS order_id,
                ISBN             AS isbn,
                quantity
            FROM BooksAndOrders
            WHERE orderID = ?1
            ORDER BY booksAndOrdersID ASC
            "#,
        )
        .bind(order_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(items)
    }

    /// Deletes exactly one line item.
    ///
    /// ## Returns
    /// * `Err(DbError::NotFound)` - No line item with this ID
    pub async fn delete(&self, line_item_id: i64) -> DbResult<()> {
        debug!(line_item_id, "Deleting line item");

        let result = sqlx::query("DELETE FROM BooksAndOrders WHERE booksAndOrdersID = ?1")
            .bind(line_item_id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Line item", line_item_id));
        }

        info!(line_item_id, "Line item deleted");
        Ok(())
    }

    /// Counts all line items.
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM BooksAndOrders")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};
    use bookstore_core::{BookFields, NewBook, NewMember, NewOrderWithItem};

    async fn seeded_db() -> (Database, i64) {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let member_id = db
            .members()
            .create(&NewMember::new("Ada", "Lovelace", "555-0100", "ada@example.com").unwrap())
            .await
            .unwrap();
        db.books()
            .create(
                &NewBook::new(BookFields {
                    isbn: "9780441013593",
                    title: "Dune",
                    author: "Frank Herbert",
                    genre: "Science Fiction",
                    cost: "10.00",
                    ..Default::default()
                })
                .unwrap(),
            )
            .await
            .unwrap();
        (db, member_id)
    }

    #[tokio::test]
    async fn test_delete_removes_exactly_one_row() {
        let (db, member_id) = seeded_db().await;
        let input =
            NewOrderWithItem::new(&member_id.to_string(), None, "9780441013593", "1", None).unwrap();
        let first = db.assembly().create_order_with_item(&input).await.unwrap();
        let second = db.assembly().create_order_with_item(&input).await.unwrap();

        db.line_items().delete(first.line_item_id).await.unwrap();

        assert!(db.line_items().get_by_id(first.line_item_id).await.unwrap().is_none());
        assert!(db.line_items().get_by_id(second.line_item_id).await.unwrap().is_some());
        assert_eq!(db.line_items().count().await.unwrap(), 1);
        // The order itself stays.
        assert!(db.orders().get_by_id(first.order_id).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_delete_missing_line_item_is_not_found() {
        let (db, _) = seeded_db().await;

        assert!(matches!(
            db.line_items().delete(77).await,
            Err(DbError::NotFound { .. })
        ));
    }

    #[tokio::test]
    async fn test_list_detailed_joins_order_and_book() {
        let (db, member_id) = seeded_db().await;
        let input =
            NewOrderWithItem::new(&member_id.to_string(), None, "9780441013593", "3", None).unwrap();
        let created = db.assembly().create_order_with_item(&input).await.unwrap();

        let items = db.line_items().list_detailed().await.unwrap();
        assert_eq!(items.len(), 1);
        let item = &items[0];
        assert_eq!(item.line_item_id, created.line_item_id);
        assert_eq!(item.order_id, created.order_id);
        assert_eq!(item.member_name, "Ada Lovelace");
        assert_eq!(item.title, "Dune");
        assert_eq!(item.quantity, 3);
        assert_eq!(item.order_total_cents, 3000);

        let for_order = db.line_items().list_for_order(created.order_id).await.unwrap();
        assert_eq!(for_order.len(), 1);
    }
}
