//! `/user/*` handlers.

use super::{list_message, parse_id};
use crate::error::{AppError, Entity};
use crate::extractors::FormFields;
use crate::model::{User, UserForm};
use crate::response::{success_empty, success_many, success_one};
use crate::service::CrudService;
use crate::state::AppState;
use axum::extract::{Path, State};
use axum::response::IntoResponse;

pub async fn get(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str, Entity::User)?;
    let user = CrudService::read::<User>(&state.pool, id).await?;
    Ok(success_one(user, "user found"))
}

pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let users = CrudService::list::<User>(&state.pool).await?;
    let message = list_message(Entity::User, users.len());
    Ok(success_many(users, message))
}

pub async fn create(
    State(state): State<AppState>,
    FormFields(form): FormFields<UserForm>,
) -> Result<impl IntoResponse, AppError> {
    let new_user = form.into_new_user()?;
    let user = CrudService::create::<User>(&state.pool, new_user.into_columns()).await?;
    tracing::info!(user_id = user.id, "user created");
    Ok(success_one(user, "user created successfully"))
}

/// Sparse update; responds with the patched in-memory row rather than re-reading it.
pub async fn update(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    FormFields(form): FormFields<UserForm>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str, Entity::User)?;
    let mut user = CrudService::read::<User>(&state.pool, id).await?;
    let patch = form.into_patch()?;
    patch.apply(&mut user);
    CrudService::update::<User>(&state.pool, id, patch.into_columns()).await?;
    Ok(success_one(user, "user updated successfully"))
}

/// Products owned by the user are removed by the foreign key cascade.
pub async fn delete(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str, Entity::User)?;
    CrudService::read::<User>(&state.pool, id).await?;
    CrudService::delete::<User>(&state.pool, id).await?;
    tracing::info!(user_id = id, "user deleted");
    Ok(success_empty("user deleted successfully"))
}
