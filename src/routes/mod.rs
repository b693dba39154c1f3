//! Router assembly.

mod common;
mod entity;

pub use common::common_routes;
pub use entity::{product_routes, relation_routes, user_routes};

use crate::state::AppState;
use axum::Router;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

/// Full application router: CRUD groups, ownership lookups, and the common endpoints.
pub fn app(state: AppState, body_limit_bytes: usize) -> Router {
    Router::new()
        .nest("/user", user_routes(state.clone()))
        .nest("/product", product_routes(state.clone()))
        .merge(relation_routes(state.clone()))
        .merge(common_routes(state))
        .layer(RequestBodyLimitLayer::new(body_limit_bytes))
        .layer(TraceLayer::new_for_http())
}
