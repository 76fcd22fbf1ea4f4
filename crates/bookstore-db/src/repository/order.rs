//! # Order Repository
//!
//! Database operations for orders.
//!
//! ## Key Operations
//! - Listing joined with the member's name and line-item count
//! - Creating a bare order (member and coupon checked by the Validation Gate)
//! - Updating coupon / total price
//! - Deleting an order with no line items
//!
//! Orders together with their first line item are created by
//! [`crate::assembly::OrderAssembly`].

use sqlx::{SqliteExecutor, SqlitePool};
use tracing::{debug, info};

use crate::error::{DbError, DbResult};
use crate::pool::begin_write;
use crate::gate;
use bookstore_core::{NewOrder, Order, OrderSummary, OrderUpdate};

pub(crate) async fn fetch_order<'e, E>(executor: E, order_id: i64) -> DbResult<Option<Order>>
where
    E: SqliteExecutor<'e>,
{
    let order = sqlx::query_as::<_, Order>(
        r#"
        SELECT
            orderID    AS order_id,
            memberID   AS member_id,
            couponID   AS coupon_id,
            totalPrice AS total_price_cents
        FROM Orders
        WHERE orderID = ?1
        "#,
    )
    .bind(order_id)
    .fetch_optional(executor)
    .await?;

    Ok(order)
}

/// Inserts an order row on the caller's executor and returns the new orderID.
pub(crate) async fn insert_order<'e, E>(
    executor: E,
    member_id: i64,
    coupon_id: Option<i64>,
    total_price_cents: i64,
) -> DbResult<i64>
where
    E: SqliteExecutor<'e>,
{
    let result = sqlx::query(
        r#"
        INSERT INTO Orders (memberID, couponID, totalPrice)
        VALUES (?1, ?2, ?3)
        "#,
    )
    .bind(member_id)
    .bind(coupon_id)
    .bind(total_price_cents)
    .execute(executor)
    .await?;

    Ok(result.last_insert_rowid())
}

/// Repository for order database operations.
#[derive(Debug, Clone)]
pub struct OrderRepository {
    pool: SqlitePool,
}

impl OrderRepository {
    /// Creates a new OrderRepository.
    pub fn new(pool: SqlitePool) -> Self {
        OrderRepository { pool }
    }

    /// Lists all orders by orderID, with the ordering member's name.
    pub async fn list(&self) -> DbResult<Vec<OrderSummary>> {
        let orders = sqlx::query_as::<_, OrderSummary>(
            r#"
            SELECT
                o.orderID                          AS order_id,
                o.memberID                         AS member_id,
                m.firstName || ' ' || m.lastName   AS member_name,
                o.couponID                         AS coupon_id,
                o.totalPrice                       AS total_price_cents,
                (SELECT COUNT(*) FROM BooksAndOrders bo
                  WHERE bo.orderID = o.orderID)    AS item_count
            FROM Orders o
            INNER JOIN Members m ON m.memberID = o.memberID
            ORDER BY o.orderID ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        debug!(count = orders.len(), "Listed orders");
        Ok(orders)
    }

    /// Gets an order by ID.
    pub async fn get_by_id(&self, order_id: i64) -> DbResult<Option<Order>> {
        fetch_order(&self.pool, order_id).await
    }

    /// Creates an order with no line items.
    ///
    /// ## Returns
    /// * `Ok(orderID)` - Order created
    /// * `Err(DbError::NotFound)` - Member or coupon doesn't exist (nothing written)
    pub async fn create(&self, order: &NewOrder) -> DbResult<i64> {
        debug!(member_id = order.member_id, coupon_id = ?order.coupon_id, "Creating order");

        let mut tx = begin_write(&self.pool).await?;

        gate::require_member(&mut *tx, order.member_id).await?;
        gate::require_optional_coupon(&mut *tx, order.coupon_id).await?;

        let order_id =
            insert_order(&mut *tx, order.member_id, order.coupon_id, order.total_price.cents()).await?;

        tx.commit()
            .await
            .map_err(|e| DbError::TransactionFailed(e.to_string()))?;

        info!(order_id, member_id = order.member_id, "Order created");
        Ok(order_id)
    }

    /// Changes an order's coupon and total price.
    pub async fn update(&self, order_id: i64, update: &OrderUpdate) -> DbResult<()> {
        debug!(order_id, coupon_id = ?update.coupon_id, "Updating order");

        let mut tx = begin_write(&self.pool).await?;

        gate::require_optional_coupon(&mut *tx, update.coupon_id).await?;

        let result = sqlx::query("UPDATE Orders SET couponID = ?1, totalPrice = ?2 WHERE orderID = ?3")
            .bind(update.coupon_id)
            .bind(update.total_price.cents())
            .bind(order_id)
            .execute(&mut *tx)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Order", order_id));
        }

        tx.commit()
            .await
            .map_err(|e| DbError::TransactionFailed(e.to_string()))?;

        Ok(())
    }

    /// Deletes an order that has no line items.
    pub async fn delete(&self, order_id: i64) -> DbResult<()> {
        debug!(order_id, "Deleting order");

        let mut tx = begin_write(&self.pool).await?;

        let line_items: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM BooksAndOrders WHERE orderID = ?1")
            .bind(order_id)
            .fetch_one(&mut *tx)
            .await?;

        if line_items > 0 {
            return Err(DbError::has_dependents("Order", order_id, "line items", line_items));
        }

        let result = sqlx::query("DELETE FROM Orders WHERE orderID = ?1")
            .bind(order_id)
            .execute(&mut *tx)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Order", order_id));
        }

        tx.commit()
            .await
            .map_err(|e| DbError::TransactionFailed(e.to_string()))?;

        info!(order_id, "Order deleted");
        Ok(())
    }

    /// Counts all orders.
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM Orders")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}
