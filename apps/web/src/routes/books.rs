use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Redirect;
use axum::{Form, Json};
use bookstore_core::validation::validate_isbn;
use maud::Markup;
use serde_json::{json, Value};
use tracing::info;

use crate::error::AppError;
use crate::forms::{BookForm, DeleteBookForm};
use crate::views;
use crate::AppState;

pub async fn list(State(state): State<AppState>) -> Result<Markup, AppError> {
    let books = state.db.books().list().await?;
    Ok(views::books_page(&books))
}

pub async fn create(
    State(state): State<AppState>,
    Form(form): Form<BookForm>,
) -> Result<Redirect, AppError> {
    let book = form.validate()?;
    let isbn = state.db.books().create(&book).await?;

    info!(%isbn, "Book created");
    Ok(Redirect::to("/books"))
}

/// The form's `isbnInput` selects the row; every other column is replaced.
pub async fn update_form(
    State(state): State<AppState>,
    Form(form): Form<BookForm>,
) -> Result<Redirect, AppError> {
    let book = form.validate()?;
    state.db.books().update(&book.isbn, &book).await?;

    Ok(Redirect::to("/books"))
}

pub async fn update(
    State(state): State<AppState>,
    Path(isbn): Path<String>,
    Form(form): Form<BookForm>,
) -> Result<Json<Value>, AppError> {
    let book = form.validate_with_isbn(&isbn)?;
    state.db.books().update(&book.isbn, &book).await?;

    Ok(Json(json!({ "success": true })))
}

pub async fn delete_form(
    State(state): State<AppState>,
    Form(form): Form<DeleteBookForm>,
) -> Result<Redirect, AppError> {
    state.db.books().delete(&form.isbn()?).await?;
    Ok(Redirect::to("/books"))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(isbn): Path<String>,
) -> Result<StatusCode, AppError> {
    let isbn = validate_isbn(&isbn)?;
    state.db.books().delete(&isbn).await?;
    Ok(StatusCode::NO_CONTENT)
}
