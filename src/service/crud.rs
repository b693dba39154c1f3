//! Generic CRUD execution against PostgreSQL.
//!
//! Storage failures are folded into the client-facing taxonomy here: a failed
//! lookup is reported as not found, a failed list as "no record found", and a
//! failed write as a persistence error for the entity. The driver error itself
//! is only logged.

use crate::error::{AppError, Entity, WriteAction};
use crate::sql::{self, PgBindValue, QueryBuf, Table};
use sqlx::postgres::PgRow;
use sqlx::{FromRow, PgPool};

/// A row type backed by one table.
pub trait Record: for<'r> FromRow<'r, PgRow> + Send + Unpin {
    const ENTITY: Entity;
    const TABLE: &'static Table;
}

pub struct CrudService;

impl CrudService {
    /// Fetch one row by primary key.
    pub async fn read<R: Record>(pool: &PgPool, id: i64) -> Result<R, AppError> {
        let q = sql::select_by_id(R::TABLE, id);
        match Self::fetch_optional::<R>(pool, &q).await {
            Ok(Some(row)) => Ok(row),
            Ok(None) => {
                tracing::debug!(table = R::TABLE.name, id, "row not found");
                Err(AppError::NotFound(R::ENTITY))
            }
            Err(e) => {
                tracing::warn!(table = R::TABLE.name, id, error = %e, "lookup failed");
                Err(AppError::NotFound(R::ENTITY))
            }
        }
    }

    /// All rows, ordered by primary key.
    pub async fn list<R: Record>(pool: &PgPool) -> Result<Vec<R>, AppError> {
        Self::list_where::<R>(pool, &[]).await
    }

    /// Rows matching every `(column, value)` filter exactly.
    pub async fn list_where<R: Record>(
        pool: &PgPool,
        filters: &[(&str, PgBindValue)],
    ) -> Result<Vec<R>, AppError> {
        let q = sql::select_list(R::TABLE, filters);
        Self::fetch_all::<R>(pool, &q).await.map_err(|e| {
            tracing::warn!(table = R::TABLE.name, error = %e, "list failed");
            AppError::NoRecords
        })
    }

    /// Insert one row; returns it with the generated id.
    pub async fn create<R: Record>(
        pool: &PgPool,
        values: Vec<(&'static str, PgBindValue)>,
    ) -> Result<R, AppError> {
        let q = sql::insert(R::TABLE, values);
        match Self::fetch_optional::<R>(pool, &q).await {
            Ok(Some(row)) => Ok(row),
            Ok(None) => Err(Self::write_failed::<R>(WriteAction::Create, None)),
            Err(e) => Err(Self::write_failed::<R>(WriteAction::Create, Some(e))),
        }
    }

    /// Sparse update by id: only the given columns are written. No-op when `changes` is empty.
    pub async fn update<R: Record>(
        pool: &PgPool,
        id: i64,
        changes: Vec<(&'static str, PgBindValue)>,
    ) -> Result<(), AppError> {
        let Some(q) = sql::update(R::TABLE, id, changes) else {
            tracing::debug!(table = R::TABLE.name, id, "empty patch, nothing to write");
            return Ok(());
        };
        Self::execute(pool, &q)
            .await
            .map(|_| ())
            .map_err(|e| Self::write_failed::<R>(WriteAction::Update, Some(e)))
    }

    /// Delete one row by id.
    pub async fn delete<R: Record>(pool: &PgPool, id: i64) -> Result<(), AppError> {
        let q = sql::delete(R::TABLE, id);
        Self::execute(pool, &q)
            .await
            .map(|_| ())
            .map_err(|e| Self::write_failed::<R>(WriteAction::Delete, Some(e)))
    }

    fn write_failed<R: Record>(action: WriteAction, source: Option<sqlx::Error>) -> AppError {
        match source {
            Some(e) => tracing::warn!(table = R::TABLE.name, %action, error = %e, "write failed"),
            None => tracing::warn!(table = R::TABLE.name, %action, "write returned no row"),
        }
        AppError::Persistence {
            entity: R::ENTITY,
            action,
        }
    }

    async fn fetch_optional<R: Record>(pool: &PgPool, q: &QueryBuf) -> Result<Option<R>, sqlx::Error> {
        tracing::debug!(sql = %q.sql, params = ?q.params, "query");
        let mut query = sqlx::query_as::<_, R>(&q.sql);
        for p in &q.params {
            query = query.bind(p.clone());
        }
        query.fetch_optional(pool).await
    }

    async fn fetch_all<R: Record>(pool: &PgPool, q: &QueryBuf) -> Result<Vec<R>, sqlx::Error> {
        tracing::debug!(sql = %q.sql, params = ?q.params, "query");
        let mut query = sqlx::query_as::<_, R>(&q.sql);
        for p in &q.params {
            query = query.bind(p.clone());
        }
        query.fetch_all(pool).await
    }

    async fn execute(pool: &PgPool, q: &QueryBuf) -> Result<u64, sqlx::Error> {
        tracing::debug!(sql = %q.sql, params = ?q.params, "execute");
        let mut query = sqlx::query(&q.sql);
        for p in &q.params {
            query = query.bind(p.clone());
        }
        let result = query.execute(pool).await?;
        Ok(result.rows_affected())
    }
}
