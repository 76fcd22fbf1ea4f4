use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Redirect;
use axum::Form;
use chrono::Local;
use maud::Markup;
use tracing::info;

use crate::error::AppError;
use crate::forms::{ExistingOrderItemForm, NewOrderWithItemForm};
use crate::views::{self, LineItemsPage};
use crate::AppState;

/// The five reads are independent, so they run concurrently and the page
/// renders once all of them have resolved.
pub async fn list(State(state): State<AppState>) -> Result<Markup, AppError> {
    let today = Local::now().date_naive();
    let (line_items, orders, books, members, coupons) = (
        state.db.line_items(),
        state.db.orders(),
        state.db.books(),
        state.db.members(),
        state.db.coupons(),
    );

    let (items, orders, books, members, coupons) = tokio::try_join!(
        line_items.list_detailed(),
        orders.list(),
        books.list(),
        members.list(),
        coupons.list_active(today),
    )?;

    Ok(views::line_items_page(&LineItemsPage {
        items,
        orders,
        books,
        members,
        coupons,
    }))
}

/// Order Assembly: one new order holding one line item.
pub async fn new_order(
    State(state): State<AppState>,
    Form(form): Form<NewOrderWithItemForm>,
) -> Result<Redirect, AppError> {
    let input = form.validate()?;
    let created = state.db.assembly().create_order_with_item(&input).await?;

    info!(
        order_id = created.order_id,
        line_item_id = created.line_item_id,
        "Order assembled"
    );
    Ok(Redirect::to("/booksAndOrders"))
}

pub async fn existing_order(
    State(state): State<AppState>,
    Form(form): Form<ExistingOrderItemForm>,
) -> Result<Redirect, AppError> {
    let input = form.validate()?;
    let line_item_id = state.db.assembly().append_line_item(&input).await?;

    info!(line_item_id, order_id = input.order_id, "Line item appended");
    Ok(Redirect::to("/booksAndOrders"))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(line_item_id): Path<i64>,
) -> Result<StatusCode, AppError> {
    state.db.line_items().delete(line_item_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
