//! Ownership lookups across the users/products foreign key.

use super::parse_id;
use crate::error::{AppError, Entity};
use crate::model::{Product, User};
use crate::response::{success_many, success_one};
use crate::service::CrudService;
use crate::sql::PgBindValue;
use crate::state::AppState;
use axum::extract::{Path, State};
use axum::response::IntoResponse;

/// GET /user-products/:id: products owned by a user. An empty list is still a 200.
pub async fn user_products(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let user_id = parse_id(&id_str, Entity::User)?;
    CrudService::read::<User>(&state.pool, user_id).await?;
    let products =
        CrudService::list_where::<Product>(&state.pool, &[("user_id", PgBindValue::I64(user_id))]).await?;
    Ok(success_many(products, "products found"))
}

/// GET /product-owner/:id: the user a product belongs to.
pub async fn product_owner(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str, Entity::Product)?;
    let product = CrudService::read::<Product>(&state.pool, id).await?;
    let owner = CrudService::read::<User>(&state.pool, product.user_id).await?;
    Ok(success_one(owner, "user found"))
}
