//! Persistence layer
//!
//! `LinkStore` is the seam the services depend on; `SeaOrmStorage` is the
//! database-backed implementation (SQLite, MySQL/MariaDB, PostgreSQL).

use std::sync::Arc;

use async_trait::async_trait;

use crate::config::DatabaseConfig;
use crate::errors::Result;

pub mod backend;
pub mod models;

pub use backend::SeaOrmStorage;
pub use models::{
    ContactMessage, LinkFilter, LinkStats, NewContactMessage, NewShortLink, ShortLink,
};

/// 短链接与留言的存储接口
///
/// 别名唯一性由存储层的唯一索引保证；`increment_clicks` 必须是单条原子更新。
#[async_trait]
pub trait LinkStore: Send + Sync {
    async fn find_by_hash(&self, hash: &str) -> Result<Option<ShortLink>>;

    async fn find_by_id(&self, id: i32) -> Result<Option<ShortLink>>;

    /// hash 已存在时返回 `AliasConflict`
    async fn create(&self, link: NewShortLink) -> Result<ShortLink>;

    /// 不存在时返回 `NotFound`
    async fn increment_clicks(&self, id: i32) -> Result<()>;

    async fn update(&self, id: i32, original_url: &str, hash: &str) -> Result<ShortLink>;

    async fn delete(&self, id: i32) -> Result<()>;

    /// 按 created_at 倒序
    async fn list(&self, filter: LinkFilter) -> Result<Vec<ShortLink>>;

    async fn stats(&self) -> Result<LinkStats>;

    async fn create_message(&self, message: NewContactMessage) -> Result<ContactMessage>;

    async fn list_messages(&self) -> Result<Vec<ContactMessage>>;

    async fn delete_message(&self, id: i32) -> Result<()>;

    async fn count_messages(&self) -> Result<u64>;
}

pub struct StorageFactory;

impl StorageFactory {
    /// 按数据库 URL 推断后端并完成迁移
    pub async fn create(config: &DatabaseConfig) -> Result<Arc<SeaOrmStorage>> {
        let storage = SeaOrmStorage::new(config).await?;
        Ok(Arc::new(storage))
    }
}
