//! Apply the `users` / `products` schema shipped in `migrations/`.

use crate::error::AppError;
use sqlx::PgPool;

/// Runs pending migrations. Idempotent: applied versions are tracked in `_sqlx_migrations`.
pub async fn apply_migrations(pool: &PgPool) -> Result<(), AppError> {
    sqlx::migrate!().run(pool).await?;
    tracing::info!("migrations applied");
    Ok(())
}
