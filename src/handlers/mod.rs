//! HTTP handlers for user and product CRUD and the ownership lookups.

pub mod products;
pub mod relations;
pub mod users;

use crate::error::{AppError, Entity};

/// Path ids that are not integers cannot match a row, so they report as not found.
fn parse_id(id_str: &str, entity: Entity) -> Result<i64, AppError> {
    id_str.trim().parse().map_err(|_| AppError::NotFound(entity))
}

/// `"<entity>s found"`, or `"no record found"` for an empty list.
fn list_message(entity: Entity, len: usize) -> String {
    if len == 0 {
        AppError::NoRecords.to_string()
    } else {
        format!("{}s found", entity)
    }
}
