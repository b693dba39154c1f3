//! Extract form fields from `application/x-www-form-urlencoded` or `multipart/form-data` bodies.

use crate::error::AppError;
use async_trait::async_trait;
use axum::{
    extract::{FromRequest, Multipart, Request},
    http::header::CONTENT_TYPE,
    Form,
};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// Form fields deserialized into `T`. A request without a form content type
/// yields `T` built from no fields at all. For a repeated key the first value
/// wins; multipart file parts are not fields.
///
/// Runs before the handler body, so an undecodable form is rejected with 400
/// before any row lookup can answer 404.
#[derive(Debug)]
pub struct FormFields<T>(pub T);

fn invalid_body() -> AppError {
    AppError::Validation("invalid form body".into())
}

#[async_trait]
impl<S, T> FromRequest<S> for FormFields<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Send,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|s| s.to_ascii_lowercase())
            .unwrap_or_default();

        let mut fields = Map::new();
        if content_type.starts_with("multipart/form-data") {
            let mut multipart = Multipart::from_request(req, state).await.map_err(|e| {
                tracing::debug!(error = %e, "multipart rejected");
                invalid_body()
            })?;
            while let Some(field) = multipart.next_field().await.map_err(|_| invalid_body())? {
                if field.file_name().is_some() {
                    continue;
                }
                let Some(name) = field.name().map(str::to_string) else { continue };
                let text = field.text().await.map_err(|_| invalid_body())?;
                fields.entry(name).or_insert(Value::String(text));
            }
        } else if content_type.starts_with("application/x-www-form-urlencoded") {
            let Form(pairs) = Form::<Vec<(String, String)>>::from_request(req, state)
                .await
                .map_err(|e| {
                    tracing::debug!(error = %e, "urlencoded form rejected");
                    invalid_body()
                })?;
            for (k, v) in pairs {
                fields.entry(k).or_insert(Value::String(v));
            }
        }

        let value = serde_json::from_value(Value::Object(fields)).map_err(|e| {
            tracing::debug!(error = %e, "form fields do not fit request struct");
            invalid_body()
        })?;
        Ok(FormFields(value))
    }
}
