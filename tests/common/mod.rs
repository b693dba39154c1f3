use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::Value;
use sqlx::PgPool;
use tower::util::ServiceExt;
use user_products_api::{app, AppState};

pub fn router(pool: PgPool) -> Router {
    app(AppState { pool }, 1024 * 1024)
}

/// Sends one request; `form` is sent url-encoded.
pub async fn make_request(app: Router, method: Method, path: &str, form: Option<&str>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(path);
    let body = match form {
        Some(form) => {
            builder = builder.header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
            Body::from(form.to_string())
        }
        None => Body::empty(),
    };
    let response = app.oneshot(builder.body(body).unwrap()).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

/// Every envelope carries exactly one of `message` / `error`.
pub fn assert_envelope(body: &Value) {
    assert!(
        body["message"].is_null() != body["error"].is_null(),
        "exactly one of message/error must be set: {body}"
    );
}

/// Installs a trigger that makes every `event` (INSERT, UPDATE or DELETE) on `table` raise.
#[allow(dead_code)]
pub async fn reject_writes(pool: &PgPool, table: &str, event: &str) {
    sqlx::query(
        "CREATE OR REPLACE FUNCTION reject_write() RETURNS trigger AS $$ \
         BEGIN RAISE EXCEPTION 'write rejected'; END; $$ LANGUAGE plpgsql",
    )
    .execute(pool)
    .await
    .unwrap();
    sqlx::query(&format!(
        "CREATE TRIGGER reject_{table}_{event} BEFORE {event} ON {table} \
         FOR EACH ROW EXECUTE FUNCTION reject_write()"
    ))
    .execute(pool)
    .await
    .unwrap();
}
