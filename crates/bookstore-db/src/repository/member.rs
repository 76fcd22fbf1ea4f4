//! # Member Repository
//!
//! Database operations for members.
//!
//! ## Key Operations
//! - List ordered by surname
//! - Create / full-row update / delete
//! - Delete refuses while orders still reference the member

use sqlx::{SqliteExecutor, SqlitePool};
use tracing::{debug, info};

use crate::error::{DbError, DbResult};
use crate::pool::begin_write;
use bookstore_core::{Member, NewMember};

const SELECT_MEMBER: &str = r#"
    SELECT
        memberID    AS member_id,
        firstName   AS first_name,
        lastName    AS last_name,
        phoneNumber AS phone_number,
        email
    FROM Members
"#;

/// Looks up a member on any executor (pool or transaction connection).
pub(crate) async fn fetch_member<'e, E>(executor: E, member_id: i64) -> DbResult<Option<Member>>
where
    E: SqliteExecutor<'e>,
{
    let member = sqlx::query_as::<_, Member>(&format!("{SELECT_MEMBER} WHERE memberID = ?1"))
        .bind(member_id)
        .fetch_optional(executor)
        .await?;

    Ok(member)
}

/// Repository for member database operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = MemberRepository::new(pool);
///
/// let id = repo.create(&NewMember::new("Ada", "Lovelace", "555-0100", "ada@example.com")?).await?;
/// let members = repo.list().await?;
/// ```
#[derive(Debug, Clone)]
pub struct MemberRepository {
    pool: SqlitePool,
}

impl MemberRepository {
    /// Creates a new MemberRepository.
    pub fn new(pool: SqlitePool) -> Self {
        MemberRepository { pool }
    }

    /// Lists all members ordered by last name, then first name.
    pub async fn list(&self) -> DbResult<Vec<Member>> {
        let members = sqlx::query_as::<_, Member>(&format!(
            "{SELECT_MEMBER} ORDER BY lastName ASC, firstName ASC, memberID ASC"
        ))
        .fetch_all(&self.pool)
        .await?;

        debug!(count = members.len(), "Listed members");
        Ok(members)
    }

    /// Gets a member by ID.
    ///
    /// ## Returns
    /// * `Ok(Some(Member))` - Member found
    /// * `Ok(None)` - Member not found
    pub async fn get_by_id(&self, member_id: i64) -> DbResult<Option<Member>> {
        fetch_member(&self.pool, member_id).await
    }

    /// Inserts a new member and returns the generated memberID.
    pub async fn create(&self, member: &NewMember) -> DbResult<i64> {
        debug!(last_name = %member.last_name, "Inserting member");

        let result = sqlx::query(
            r#"
            INSERT INTO Members (firstName, lastName, phoneNumber, email)
            VALUES (?1, ?2, ?3, ?4)
            "#,
        )
        .bind(&member.first_name)
        .bind(&member.last_name)
        .bind(&member.phone_number)
        .bind(&member.email)
        .execute(&self.pool)
        .await?;

        let member_id = result.last_insert_rowid();
        info!(member_id, "Member created");
        Ok(member_id)
    }

    /// Replaces every field of an existing member.
    ///
    /// ## Returns
    /// * `Err(DbError::NotFound)` - No member with this ID
    pub async fn update(&self, member_id: i64, member: &NewMember) -> DbResult<()> {
        debug!(member_id, "Updating member");

        let result = sqlx::query(
            r#"
            UPDATE Members
            SET firstName = ?1, lastName = ?2, phoneNumber = ?3, email = ?4
            WHERE memberID = ?5
            "#,
        )
        .bind(&member.first_name)
        .bind(&member.last_name)
        .bind(&member.phone_number)
        .bind(&member.email)
        .bind(member_id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Member", member_id));
        }

        Ok(())
    }

    /// Deletes a member that no order references.
    ///
    /// ## Returns
    /// * `Err(DbError::HasDependents)` - Orders still reference the member
    /// * `Err(DbError::NotFound)` - No member with this ID
    pub async fn delete(&self, member_id: i64) -> DbResult<()> {
        debug!(member_id, "Deleting member");

        let mut tx = begin_write(&self.pool).await?;

        let orders: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM Orders WHERE memberID = ?1")
            .bind(member_id)
            .fetch_one(&mut *tx)
            .await?;

        if orders > 0 {
            return Err(DbError::has_dependents("Member", member_id, "orders", orders));
        }

        let result = sqlx::query("DELETE FROM Members WHERE memberID = ?1")
            .bind(member_id)
            .execute(&mut *tx)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Member", member_id));
        }

        tx.commit()
            .await
            .map_err(|e| DbError::TransactionFailed(e.to_string()))?;

        info!(member_id, "Member deleted");
        Ok(())
    }

    /// Counts all members.
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM Members")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};

    async fn test_db() -> Database {
        Database::new(DbConfig::in_memory()).await.unwrap()
    }

    fn member(first: &str, last: &str) -> NewMember {
        NewMember::new(first, last, "555-0100", "someone@example.com").unwrap()
    }

    #[tokio::test]
    async fn test_create_then_list_orders_by_surname() {
        let db = test_db().await;
        let repo = db.members();

        repo.create(&member("Grace", "Hopper")).await.unwrap();
        repo.create(&member("Alan", "Turing")).await.unwrap();
        let ada = repo
            .create(&NewMember::new("Ada", "Lovelace", "555-0100", "ada@example.com").unwrap())
            .await
            .unwrap();

        let members = repo.list().await.unwrap();
        let surnames: Vec<_> = members.iter().map(|m| m.last_name.as_str()).collect();
        assert_eq!(surnames, vec!["Hopper", "Lovelace", "Turing"]);

        let stored = repo.get_by_id(ada).await.unwrap().unwrap();
        assert_eq!(stored.first_name, "Ada");
        assert_eq!(stored.phone_number, "555-0100");
        assert_eq!(stored.email, "ada@example.com");
    }

    #[tokio::test]
    async fn test_update_replaces_fields() {
        let db = test_db().await;
        let repo = db.members();
        let id = repo.create(&member("Ada", "Lovelace")).await.unwrap();

        repo.update(id, &member("Augusta", "King")).await.unwrap();

        let stored = repo.get_by_id(id).await.unwrap().unwrap();
        assert_eq!(stored.full_name(), "Augusta King");
    }

    #[tokio::test]
    async fn test_update_missing_member_is_not_found() {
        let db = test_db().await;

        let err = db.members().update(42, &member("No", "One")).await.unwrap_err();
        assert!(matches!(err, DbError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_delete_member() {
        let db = test_db().await;
        let repo = db.members();
        let id = repo.create(&member("Ada", "Lovelace")).await.unwrap();

        repo.delete(id).await.unwrap();

        assert!(repo.get_by_id(id).await.unwrap().is_none());
        assert!(matches!(repo.delete(id).await, Err(DbError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_delete_member_with_orders_is_refused() {
        let db = test_db().await;
        let member_id = db.members().create(&member("Ada", "Lovelace")).await.unwrap();
        let order = bookstore_core::NewOrder::new(&member_id.to_string(), None, "10.00").unwrap();
        db.orders().create(&order).await.unwrap();

        let err = db.members().delete(member_id).await.unwrap_err();
        assert!(matches!(err, DbError::HasDependents { count: 1, .. }));
        assert_eq!(db.members().count().await.unwrap(), 1);
    }
}
