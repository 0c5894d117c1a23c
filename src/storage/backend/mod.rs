//! SeaORM storage backend
//!
//! This module provides database storage using SeaORM,
//! supporting SQLite, MySQL/MariaDB, and PostgreSQL.

mod connection;
mod converters;
mod link_store;
mod messages;
mod mutations;
mod query;

use sea_orm::{DatabaseConnection, DbErr, SqlErr};
use tracing::info;

use crate::config::DatabaseConfig;
use crate::errors::{LinkgateError, Result};

pub use connection::{connect_generic, connect_sqlite, run_migrations};
pub use converters::{
    model_to_message, model_to_shortlink, new_message_to_active_model,
    new_shortlink_to_active_model,
};

/// 从数据库 URL 推断数据库类型
pub fn infer_backend_from_url(database_url: &str) -> Result<String> {
    if database_url.starts_with("sqlite:")
        || database_url.ends_with(".db")
        || database_url.ends_with(".sqlite")
        || database_url == ":memory:"
    {
        Ok("sqlite".to_string())
    } else if database_url.starts_with("mysql://") || database_url.starts_with("mariadb://") {
        Ok("mysql".to_string())
    } else if database_url.starts_with("postgres://") || database_url.starts_with("postgresql://") {
        Ok("postgres".to_string())
    } else {
        Err(LinkgateError::database_config(format!(
            "Cannot infer database type from URL: {}. Supported: sqlite://, mysql://, mariadb://, postgres://",
            database_url
        )))
    }
}

/// 把唯一索引冲突映射为 AliasConflict，其余错误视为存储错误
pub(crate) fn map_write_error(err: DbErr, hash: &str, action: &str) -> LinkgateError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => {
            LinkgateError::alias_conflict(format!("Alias '{}' is already in use", hash))
        }
        _ => LinkgateError::database_operation(format!("Failed to {} '{}': {}", action, hash, err)),
    }
}

/// SeaORM-based storage backend
#[derive(Clone)]
pub struct SeaOrmStorage {
    db: DatabaseConnection,
    backend_name: String,
}

impl SeaOrmStorage {
    pub async fn new(config: &DatabaseConfig) -> Result<Self> {
        let database_url = config.database_url.as_str();
        if database_url.is_empty() {
            return Err(LinkgateError::database_config("database_url is not set"));
        }

        let backend_name = infer_backend_from_url(database_url)?;

        let db = if backend_name == "sqlite" {
            connect_sqlite(database_url, config.timeout).await?
        } else {
            connect_generic(database_url, &backend_name, config.pool_size, config.timeout).await?
        };

        let storage = SeaOrmStorage { db, backend_name };

        run_migrations(&storage.db).await?;

        info!(
            "{} Storage initialized.",
            storage.backend_name.to_uppercase()
        );
        Ok(storage)
    }

    pub fn backend_name(&self) -> &str {
        &self.backend_name
    }

    /// 获取数据库连接（关闭时释放连接池）
    pub fn get_db(&self) -> &DatabaseConnection {
        &self.db
    }
}
