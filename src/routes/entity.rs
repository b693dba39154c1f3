//! Entity CRUD routes. Ids are taken as path strings; handlers parse them.

use crate::handlers::{products, relations, users};
use crate::state::AppState;
use axum::{
    routing::{delete, get, patch, post},
    Router,
};

pub fn user_routes(state: AppState) -> Router {
    Router::new()
        .route("/get/:id", get(users::get))
        .route("/list", get(users::list))
        .route("/create", post(users::create))
        .route("/update/:id", patch(users::update))
        .route("/delete/:id", delete(users::delete))
        .with_state(state)
}

pub fn product_routes(state: AppState) -> Router {
    Router::new()
        .route("/get/:id", get(products::get))
        .route("/list", get(products::list))
        .route("/create", post(products::create))
        .route("/update/:id", patch(products::update))
        .route("/delete/:id", delete(products::delete))
        .with_state(state)
}

/// GET /user-products/:id and GET /product-owner/:id.
pub fn relation_routes(state: AppState) -> Router {
    Router::new()
        .route("/user-products/:id", get(relations::user_products))
        .route("/product-owner/:id", get(relations::product_owner))
        .with_state(state)
}
