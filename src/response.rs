//! Standard response envelope helpers.

use axum::{http::StatusCode, Json};
use serde::Serialize;

/// `{data, message, error}` wrapper shared by every endpoint. Exactly one of
/// `message` / `error` is set.
#[derive(Serialize, Debug)]
pub struct Envelope<T> {
    pub data: Option<T>,
    pub message: Option<String>,
    pub error: Option<String>,
    #[serde(rename = "totalCount", skip_serializing_if = "Option::is_none")]
    pub total_count: Option<usize>,
}

impl<T> Envelope<T> {
    pub fn success(data: Option<T>, message: impl Into<String>) -> Self {
        Envelope {
            data,
            message: Some(message.into()),
            error: None,
            total_count: None,
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Envelope {
            data: None,
            message: None,
            error: Some(error.into()),
            total_count: None,
        }
    }
}

pub fn success_one<T: Serialize>(data: T, message: impl Into<String>) -> (StatusCode, Json<Envelope<T>>) {
    (StatusCode::OK, Json(Envelope::success(Some(data), message)))
}

/// List response; `totalCount` is the length of `data`.
pub fn success_many<T: Serialize>(data: Vec<T>, message: impl Into<String>) -> (StatusCode, Json<Envelope<Vec<T>>>) {
    let count = data.len();
    let mut body = Envelope::success(Some(data), message);
    body.total_count = Some(count);
    (StatusCode::OK, Json(body))
}

/// Success with `data: null` (deletes).
pub fn success_empty(message: impl Into<String>) -> (StatusCode, Json<Envelope<()>>) {
    (StatusCode::OK, Json(Envelope::success(None, message)))
}
