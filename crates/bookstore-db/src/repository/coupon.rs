//! # Coupon Repository
//!
//! Database operations for discount coupons. Only the expiration date of an
//! existing coupon can change; the discount is fixed at creation.

use chrono::NaiveDate;
use sqlx::{SqliteExecutor, SqlitePool};
use tracing::{debug, info};

use crate::error::{DbError, DbResult};
use crate::pool::begin_write;
use bookstore_core::{Coupon, CouponUpdate, NewCoupon};

const SELECT_COUPON: &str = r#"
    SELECT
        couponID       AS coupon_id,
        couponDiscount AS coupon_discount_cents,
        expirationDate AS expiration_date
    FROM Coupons
"#;

pub(crate) async fn fetch_coupon<'e, E>(executor: E, coupon_id: i64) -> DbResult<Option<Coupon>>
where
    E: SqliteExecutor<'e>,
{
    let coupon = sqlx::query_as::<_, Coupon>(&format!("{SELECT_COUPON} WHERE couponID = ?1"))
        .bind(coupon_id)
        .fetch_optional(executor)
        .await?;

    Ok(coupon)
}

/// Repository for coupon database operations.
#[derive(Debug, Clone)]
pub struct CouponRepository {
    pool: SqlitePool,
}

impl CouponRepository {
    /// Creates a new CouponRepository.
    pub fn new(pool: SqlitePool) -> Self {
        CouponRepository { pool }
    }

    /// Lists all coupons, soonest expiration first.
    pub async fn list(&self) -> DbResult<Vec<Coupon>> {
        let coupons = sqlx::query_as::<_, Coupon>(&format!(
            "{SELECT_COUPON} ORDER BY expirationDate ASC, couponID ASC"
        ))
        .fetch_all(&self.pool)
        .await?;

        debug!(count = coupons.len(), "Listed coupons");
        Ok(coupons)
    }

    /// Gets a coupon by ID.
    pub async fn get_by_id(&self, coupon_id: i64) -> DbResult<Option<Coupon>> {
        fetch_coupon(&self.pool, coupon_id).await
    }

    /// Inserts a new coupon and returns the generated couponID.
    pub async fn create(&self, coupon: &NewCoupon) -> DbResult<i64> {
        debug!(discount = %coupon.discount, "Inserting coupon");

        let result = sqlx::query(
            r#"
            INSERT INTO Coupons (couponDiscount, expirationDate)
            VALUES (?1, ?2)
            "#,
        )
        .bind(coupon.discount.cents())
        .bind(coupon.expiration_date)
        .execute(&self.pool)
        .await?;

        let coupon_id = result.last_insert_rowid();
        info!(coupon_id, "Coupon created");
        Ok(coupon_id)
    }

    /// Moves a coupon's expiration date.
    pub async fn update(&self, coupon_id: i64, update: &CouponUpdate) -> DbResult<()> {
        debug!(coupon_id, expiration_date = %update.expiration_date, "Updating coupon");

        let result = sqlx::query("UPDATE Coupons SET expirationDate = ?1 WHERE couponID = ?2")
            .bind(update.expiration_date)
            .bind(coupon_id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Coupon", coupon_id));
        }

        Ok(())
    }

    /// Deletes a coupon that no order references.
    pub async fn delete(&self, coupon_id: i64) -> DbResult<()> {
        debug!(coupon_id, "Deleting coupon");

        let mut tx = begin_write(&self.pool).await?;

        let orders: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM Orders WHERE couponID = ?1")
            .bind(coupon_id)
            .fetch_one(&mut *tx)
            .await?;

        if orders > 0 {
            return Err(DbError::has_dependents("Coupon", coupon_id, "orders", orders));
        }

        let result = sqlx::query("DELETE FROM Coupons WHERE couponID = ?1")
            .bind(coupon_id)
            .execute(&mut *tx)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Coupon", coupon_id));
        }

        tx.commit()
            .await
            .map_err(|e| DbError::TransactionFailed(e.to_string()))?;

        info!(coupon_id, "Coupon deleted");
        Ok(())
    }

    /// Coupons still valid on `today`.
    pub async fn list_active(&self, today: NaiveDate) -> DbResult<Vec<Coupon>> {
        let coupons = sqlx::query_as::<_, Coupon>(&format!(
            "{SELECT_COUPON} WHERE expirationDate >= ?1 ORDER BY expirationDate ASC, couponID ASC"
        ))
        .bind(today)
        .fetch_all(&self.pool)
        .await?;

        Ok(coupons)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};

    async fn test_db() -> Database {
        Database::new(DbConfig::in_memory()).await.unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[tokio::test]
    async fn test_create_and_list_by_expiration() {
        let db = test_db().await;
        let later = db
            .coupons()
            .create(&NewCoupon::new("5.00", "2027-01-31").unwrap())
            .await
            .unwrap();
        let sooner = db
            .coupons()
            .create(&NewCoupon::new("2.50", "2026-11-30").unwrap())
            .await
            .unwrap();

        let ids: Vec<_> = db.coupons().list().await.unwrap().iter().map(|c| c.coupon_id).collect();
        assert_eq!(ids, vec![sooner, later]);

        let stored = db.coupons().get_by_id(sooner).await.unwrap().unwrap();
        assert_eq!(stored.coupon_discount_cents, 250);
        assert_eq!(stored.expiration_date, date(2026, 11, 30));
    }

    #[tokio::test]
    async fn test_update_changes_only_expiration() {
        let db = test_db().await;
        let id = db
            .coupons()
            .create(&NewCoupon::new("5.00", "2026-11-30").unwrap())
            .await
            .unwrap();

        db.coupons()
            .update(id, &CouponUpdate::new("2027-06-30").unwrap())
            .await
            .unwrap();

        let stored = db.coupons().get_by_id(id).await.unwrap().unwrap();
        assert_eq!(stored.expiration_date, date(2027, 6, 30));
        assert_eq!(stored.coupon_discount_cents, 500);
    }

    #[tokio::test]
    async fn test_update_missing_coupon_is_not_found() {
        let db = test_db().await;

        let result = db
            .coupons()
            .update(9, &CouponUpdate::new("2027-06-30").unwrap())
            .await;
        assert!(matches!(result, Err(DbError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_list_active_skips_expired() {
        let db = test_db().await;
        db.coupons()
            .create(&NewCoupon::new("1.00", "2026-01-01").unwrap())
            .await
            .unwrap();
        let valid = db
            .coupons()
            .create(&NewCoupon::new("1.00", "2026-12-31").unwrap())
            .await
            .unwrap();

        let active = db.coupons().list_active(date(2026, 10, 16)).await.unwrap();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].coupon_id, valid);
    }

    #[tokio::test]
    async fn test_delete_coupon() {
        let db = test_db().await;
        let id = db
            .coupons()
            .create(&NewCoupon::new("1.00", "2026-12-31").unwrap())
            .await
            .unwrap();

        db.coupons().delete(id).await.unwrap();
        assert!(db.coupons().get_by_id(id).await.unwrap().is_none());
    }
}
