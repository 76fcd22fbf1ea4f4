use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Redirect;
use axum::{Form, Json};
use maud::Markup;
use serde_json::{json, Value};
use tracing::info;

use crate::error::AppError;
use crate::forms::{CreateMemberForm, DeleteMemberForm, UpdateMemberForm};
use crate::views;
use crate::AppState;

pub async fn list(State(state): State<AppState>) -> Result<Markup, AppError> {
    let members = state.db.members().list().await?;
    Ok(views::members_page(&members))
}

pub async fn create(
    State(state): State<AppState>,
    Form(form): Form<CreateMemberForm>,
) -> Result<Redirect, AppError> {
    let member = form.validate()?;
    let member_id = state.db.members().create(&member).await?;

    info!(member_id, "Member created");
    Ok(Redirect::to("/members"))
}

pub async fn update_form(
    State(state): State<AppState>,
    Form(form): Form<UpdateMemberForm>,
) -> Result<Redirect, AppError> {
    let member_id = form.member_id()?;
    let member = form.validate()?;
    state.db.members().update(member_id, &member).await?;

    Ok(Redirect::to("/members"))
}

pub async fn update(
    State(state): State<AppState>,
    Path(member_id): Path<i64>,
    Form(form): Form<UpdateMemberForm>,
) -> Result<Json<Value>, AppError> {
    let member = form.validate()?;
    state.db.members().update(member_id, &member).await?;

    Ok(Json(json!({ "success": true })))
}

pub async fn delete_form(
    State(state): State<AppState>,
    Form(form): Form<DeleteMemberForm>,
) -> Result<Redirect, AppError> {
    state.db.members().delete(form.member_id()?).await?;
    Ok(Redirect::to("/members"))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(member_id): Path<i64>,
) -> Result<StatusCode, AppError> {
    state.db.members().delete(member_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
