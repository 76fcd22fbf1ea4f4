use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Redirect;
use axum::{Form, Json};
use chrono::Local;
use maud::Markup;
use serde_json::{json, Value};
use tracing::info;

use crate::error::AppError;
use crate::forms::{CreateOrderForm, DeleteOrderForm, UpdateOrderForm};
use crate::views;
use crate::AppState;

/// Orders listing. The pickers offer every member and the unexpired coupons.
pub async fn list(State(state): State<AppState>) -> Result<Markup, AppError> {
    let today = Local::now().date_naive();
    let orders = state.db.orders();
    let members = state.db.members();
    let coupons = state.db.coupons();

    let (orders, members, coupons) =
        tokio::try_join!(orders.list(), members.list(), coupons.list_active(today))?;

    Ok(views::orders_page(&orders, &members, &coupons))
}

pub async fn create(
    State(state): State<AppState>,
    Form(form): Form<CreateOrderForm>,
) -> Result<Redirect, AppError> {
    let order = form.validate()?;
    let order_id = state.db.orders().create(&order).await?;

    info!(order_id, member_id = order.member_id, "Order created");
    Ok(Redirect::to("/orders"))
}

pub async fn update_form(
    State(state): State<AppState>,
    Form(form): Form<UpdateOrderForm>,
) -> Result<Redirect, AppError> {
    let order_id = form.order_id()?;
    let update = form.validate()?;
    state.db.orders().update(order_id, &update).await?;

    Ok(Redirect::to("/orders"))
}

pub async fn update(
    State(state): State<AppState>,
    Path(order_id): Path<i64>,
    Form(form): Form<UpdateOrderForm>,
) -> Result<Json<Value>, AppError> {
    let update = form.validate()?;
    state.db.orders().update(order_id, &update).await?;

    Ok(Json(json!({ "success": true })))
}

pub async fn delete_form(
    State(state): State<AppState>,
    Form(form): Form<DeleteOrderForm>,
) -> Result<Redirect, AppError> {
    state.db.orders().delete(form.order_id()?).await?;
    Ok(Redirect::to("/orders"))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(order_id): Path<i64>,
) -> Result<StatusCode, AppError> {
    state.db.orders().delete(order_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
