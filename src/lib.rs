//! REST backend for users and the products they own, on PostgreSQL.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod migration;
pub mod model;
pub mod response;
pub mod routes;
pub mod service;
pub mod sql;
pub mod state;
pub mod store;

pub use config::ServerConfig;
pub use error::{AppError, ConfigError, Entity};
pub use migration::apply_migrations;
pub use model::{Product, User};
pub use response::{success_empty, success_many, success_one, Envelope};
pub use routes::app;
pub use service::CrudService;
pub use state::AppState;
pub use store::{connect, ensure_database_exists};
