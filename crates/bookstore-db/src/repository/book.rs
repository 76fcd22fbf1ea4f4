//! # Book Repository
//!
//! Database operations for the book catalog. Books are keyed by ISBN, so
//! creation can collide with an existing row; that collision surfaces as
//! [`DbError::UniqueViolation`] rather than a generic query failure.

use sqlx::{SqliteExecutor, SqlitePool};
use tracing::{debug, info, warn};

use crate::error::{DbError, DbResult};
use crate::pool::begin_write;
use bookstore_core::{Book, NewBook};

const SELECT_BOOK: &str = r#"
    SELECT
        ISBN          AS isbn,
        title,
        author,
        publisher,
        publishedDate AS published_date,
        genre,
        cost          AS cost_cents
    FROM Books
"#;

pub(crate) async fn fetch_book<'e, E>(executor: E, isbn: &str) -> DbResult<Option<Book>>
where
    E: SqliteExecutor<'e>,
{
    let book = sqlx::query_as::<_, Book>(&format!("{SELECT_BOOK} WHERE ISBN = ?1"))
        .bind(isbn)
        .fetch_optional(executor)
        .await?;

    Ok(book)
}

/// Repository for book database operations.
#[derive(Debug, Clone)]
pub struct BookRepository {
    pool: SqlitePool,
}

impl BookRepository {
    /// Creates a new BookRepository.
    pub fn new(pool: SqlitePool) -> Self {
        BookRepository { pool }
    }

    /// Lists all books ordered by title.
    pub async fn list(&self) -> DbResult<Vec<Book>> {
        let books = sqlx::query_as::<_, Book>(&format!("{SELECT_BOOK} ORDER BY title ASC, ISBN ASC"))
            .fetch_all(&self.pool)
            .await?;

        debug!(count = books.len(), "Listed books");
        Ok(books)
    }

    /// Gets a book by ISBN.
    pub async fn get_by_isbn(&self, isbn: &str) -> DbResult<Option<Book>> {
        fetch_book(&self.pool, isbn).await
    }

    /// Inserts a new book and returns its ISBN.
    ///
    /// ## Returns
    /// * `Err(DbError::UniqueViolation)` - ISBN already exists
    pub async fn create(&self, book: &NewBook) -> DbResult<String> {
        debug!(isbn = %book.isbn, "Inserting book");

        let result = sqlx::query(
            r#"
            INSERT INTO Books (ISBN, title, author, publisher, publishedDate, genre, cost)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
            "#,
        )
        .bind(&book.isbn)
        .bind(&book.title)
        .bind(&book.author)
        .bind(&book.publisher)
        .bind(book.published_date)
        .bind(&book.genre)
        .bind(book.cost.cents())
        .execute(&self.pool)
        .await;

        match result {
            Ok(_) => {
                info!(isbn = %book.isbn, "Book created");
                Ok(book.isbn.clone())
            }
            Err(e) => match DbError::from(e) {
                DbError::UniqueViolation { .. } => {
                    warn!(isbn = %book.isbn, "Duplicate ISBN rejected");
                    Err(DbError::duplicate("ISBN", book.isbn.as_str()))
                }
                other => Err(other),
            },
        }
    }

    /// Replaces every non-key field of the book identified by `isbn`.
    ///
    /// The ISBN itself is immutable; `book.isbn` is ignored.
    pub async fn update(&self, isbn: &str, book: &NewBook) -> DbResult<()> {
        debug!(isbn = %isbn, "Updating book");

        let result = sqlx::query(
            r#"
            UPDATE Books
            SET title = ?1, author = ?2, publisher = ?3, publishedDate = ?4, genre = ?5, cost = ?6
            WHERE ISBN = ?7
            "#,
        )
        .bind(&book.title)
        .bind(&book.author)
        .bind(&book.publisher)
        .bind(book.published_date)
        .bind(&book.genre)
        .bind(book.cost.cents())
        .bind(isbn)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Book", isbn));
        }

        Ok(())
    }

    /// Deletes a book that no line item references.
    pub async fn delete(&self, isbn: &str) -> DbResult<()> {
        debug!(isbn = %isbn, "Deleting book");

        let mut tx = begin_write(&self.pool).await?;

        let line_items: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM BooksAndOrders WHERE ISBN = ?1")
            .bind(isbn)
            .fetch_one(&mut *tx)
            .await?;

        if line_items > 0 {
            return Err(DbError::has_dependents("Book", isbn, "line items", line_items));
        }

        let result = sqlx::query("DELETE FROM Books WHERE ISBN = ?1")
            .bind(isbn)
            .execute(&mut *tx)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Book", isbn));
        }

        tx.commit()
            .await
            .map_err(|e| DbError::TransactionFailed(e.to_string()))?;

        info!(isbn = %isbn, "Book deleted");
        Ok(())
    }

    /// Counts all books.
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM Books")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}
