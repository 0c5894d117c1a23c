//! Mutation operations for SeaOrmStorage
//!
//! This module contains all write database operations.

use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, ExprTrait, QueryFilter, sea_query::Expr};
use tracing::{debug, info};

use super::converters::{model_to_shortlink, new_shortlink_to_active_model};
use super::{SeaOrmStorage, map_write_error};
use crate::errors::{LinkgateError, Result};
use crate::storage::models::{NewShortLink, ShortLink};

use migration::entities::short_link;

impl SeaOrmStorage {
    /// 插入新链接；hash 的唯一索引冲突映射为 AliasConflict
    pub async fn insert_link(&self, link: NewShortLink) -> Result<ShortLink> {
        let hash = link.hash.clone();

        let model = new_shortlink_to_active_model(link)
            .insert(&self.db)
            .await
            .map_err(|e| map_write_error(e, &hash, "create link"))?;

        info!("Short link created: {} (id {})", model.hash, model.id);
        Ok(model_to_shortlink(model))
    }

    /// `UPDATE short_links SET clicks = clicks + 1 WHERE id = ?`
    ///
    /// 在数据库内完成自增，并发请求不会丢失计数
    pub async fn increment_click(&self, id: i32) -> Result<()> {
        let result = short_link::Entity::update_many()
            .col_expr(
                short_link::Column::Clicks,
                Expr::col(short_link::Column::Clicks).add(Expr::val(1i64)),
            )
            .filter(short_link::Column::Id.eq(id))
            .exec(&self.db)
            .await
            .map_err(|e| {
                LinkgateError::database_operation(format!(
                    "Failed to increment clicks for link #{}: {}",
                    id, e
                ))
            })?;

        if result.rows_affected == 0 {
            return Err(LinkgateError::not_found(format!("Link #{} not found", id)));
        }

        debug!("Click recorded for link #{}", id);
        Ok(())
    }

    /// 修改目标地址与 hash，点击数、密码和过期时间保持不变
    pub async fn update_link(&self, id: i32, original_url: &str, hash: &str) -> Result<ShortLink> {
        let result = short_link::Entity::update_many()
            .col_expr(short_link::Column::OriginalUrl, Expr::value(original_url))
            .col_expr(short_link::Column::Hash, Expr::value(hash))
            .filter(short_link::Column::Id.eq(id))
            .exec(&self.db)
            .await
            .map_err(|e| map_write_error(e, hash, "update link"))?;

        if result.rows_affected == 0 {
            return Err(LinkgateError::not_found(format!("Link #{} not found", id)));
        }

        info!("Short link updated: #{} -> {}", id, hash);
        self.get_by_id(id)
            .await?
            .ok_or_else(|| LinkgateError::not_found(format!("Link #{} not found", id)))
    }

    pub async fn delete_link(&self, id: i32) -> Result<()> {
        let result = short_link::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| {
                LinkgateError::database_operation(format!("Failed to delete link #{}: {}", id, e))
            })?;

        if result.rows_affected == 0 {
            return Err(LinkgateError::not_found(format!("Link #{} not found", id)));
        }

        info!("Short link deleted: #{}", id);
        Ok(())
    }
}
