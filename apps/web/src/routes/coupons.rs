use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Redirect;
use axum::{Form, Json};
use maud::Markup;
use serde_json::{json, Value};
use tracing::info;

use crate::error::AppError;
use crate::forms::{CreateCouponForm, DeleteCouponForm, UpdateCouponForm};
use crate::views;
use crate::AppState;

pub async fn list(State(state): State<AppState>) -> Result<Markup, AppError> {
    let coupons = state.db.coupons().list().await?;
    Ok(views::coupons_page(&coupons))
}

pub async fn create(
    State(state): State<AppState>,
    Form(form): Form<CreateCouponForm>,
) -> Result<Redirect, AppError> {
    let coupon = form.validate()?;
    let coupon_id = state.db.coupons().create(&coupon).await?;

    info!(coupon_id, "Coupon created");
    Ok(Redirect::to("/coupons"))
}

pub async fn update_form(
    State(state): State<AppState>,
    Form(form): Form<UpdateCouponForm>,
) -> Result<Redirect, AppError> {
    let coupon_id = form.coupon_id()?;
    let update = form.validate()?;
    state.db.coupons().update(coupon_id, &update).await?;

    Ok(Redirect::to("/coupons"))
}

pub async fn update(
    State(state): State<AppState>,
    Path(coupon_id): Path<i64>,
    Form(form): Form<UpdateCouponForm>,
) -> Result<Json<Value>, AppError> {
    let update = form.validate()?;
    state.db.coupons().update(coupon_id, &update).await?;

    Ok(Json(json!({ "success": true })))
}

pub async fn delete_form(
    State(state): State<AppState>,
    Form(form): Form<DeleteCouponForm>,
) -> Result<Redirect, AppError> {
    state.db.coupons().delete(form.coupon_id()?).await?;
    Ok(Redirect::to("/coupons"))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(coupon_id): Path<i64>,
) -> Result<StatusCode, AppError> {
    state.db.coupons().delete(coupon_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
