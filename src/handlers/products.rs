//! `/product/*` handlers. Every write that sets `user_id` looks the owner up first.

use super::{list_message, parse_id};
use crate::error::{AppError, Entity};
use crate::extractors::FormFields;
use crate::model::{Product, ProductForm, User};
use crate::response::{success_empty, success_many, success_one};
use crate::service::CrudService;
use crate::state::AppState;
use axum::extract::{Path, State};
use axum::response::IntoResponse;

pub async fn get(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str, Entity::Product)?;
    let product = CrudService::read::<Product>(&state.pool, id).await?;
    Ok(success_one(product, "product found"))
}

pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let products = CrudService::list::<Product>(&state.pool).await?;
    let message = list_message(Entity::Product, products.len());
    Ok(success_many(products, message))
}

pub async fn create(
    State(state): State<AppState>,
    FormFields(form): FormFields<ProductForm>,
) -> Result<impl IntoResponse, AppError> {
    let owner_id = form.owner_id()?;
    CrudService::read::<User>(&state.pool, owner_id).await?;
    let new_product = form.into_new_product(owner_id)?;
    let product = CrudService::create::<Product>(&state.pool, new_product.into_columns()).await?;
    tracing::info!(product_id = product.id, user_id = owner_id, "product created");
    Ok(success_one(product, "product created successfully"))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    FormFields(form): FormFields<ProductForm>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str, Entity::Product)?;
    let mut product = CrudService::read::<Product>(&state.pool, id).await?;
    let new_owner = form.new_owner_id()?;
    if let Some(owner_id) = new_owner {
        CrudService::read::<User>(&state.pool, owner_id).await?;
    }
    let patch = form.into_patch(new_owner)?;
    patch.apply(&mut product);
    CrudService::update::<Product>(&state.pool, id, patch.into_columns()).await?;
    Ok(success_one(product, "product updated successfully"))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str, Entity::Product)?;
    CrudService::read::<Product>(&state.pool, id).await?;
    CrudService::delete::<Product>(&state.pool, id).await?;
    Ok(success_empty("product deleted successfully"))
}
