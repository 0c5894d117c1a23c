//! Query operations for SeaOrmStorage
//!
//! This module contains all read-only database operations.

use chrono::Utc;
use sea_orm::{
    ColumnTrait, Condition, EntityTrait, ExprTrait, FromQueryResult, QueryFilter, QueryOrder,
    QuerySelect, sea_query::Expr,
};
use tracing::{debug, error};

use super::SeaOrmStorage;
use super::converters::model_to_shortlink;
use crate::errors::{LinkgateError, Result};
use crate::storage::models::{LinkFilter, LinkStats, ShortLink};

use migration::entities::short_link;

/// 用于统计查询的结果结构体（DSL 聚合查询）
#[derive(Debug, FromQueryResult)]
struct StatsResult {
    total_links: i64,
    total_clicks: Option<i64>,
    active_links: Option<i64>,
}

impl SeaOrmStorage {
    pub async fn get_by_hash(&self, hash: &str) -> Result<Option<ShortLink>> {
        short_link::Entity::find()
            .filter(short_link::Column::Hash.eq(hash))
            .one(&self.db)
            .await
            .map(|model| model.map(model_to_shortlink))
            .map_err(|e| {
                error!("查询短链接失败 '{}': {}", hash, e);
                LinkgateError::database_operation(format!("Failed to load link '{}': {}", hash, e))
            })
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<ShortLink>> {
        short_link::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map(|model| model.map(model_to_shortlink))
            .map_err(|e| {
                LinkgateError::database_operation(format!("Failed to load link #{}: {}", id, e))
            })
    }

    /// 按创建时间倒序列出，search 对 hash 和 original_url 做子串匹配
    pub async fn list_links(&self, filter: LinkFilter) -> Result<Vec<ShortLink>> {
        let mut query = short_link::Entity::find();

        if let Some(ref search) = filter.search
            && !search.is_empty()
        {
            query = query.filter(
                Condition::any()
                    .add(short_link::Column::Hash.contains(search.as_str()))
                    .add(short_link::Column::OriginalUrl.contains(search.as_str())),
            );
        }

        let models = query
            .order_by_desc(short_link::Column::CreatedAt)
            .order_by_desc(short_link::Column::Id)
            .limit(filter.limit)
            .all(&self.db)
            .await
            .map_err(|e| LinkgateError::database_operation(format!("Failed to list links: {}", e)))?;

        debug!("Listed {} links (search: {:?})", models.len(), filter.search);
        Ok(models.into_iter().map(model_to_shortlink).collect())
    }

    /// 单条聚合 SQL 计算总数、总点击和未过期链接数
    pub async fn get_stats(&self) -> Result<LinkStats> {
        let now = Utc::now();

        let result = short_link::Entity::find()
            .select_only()
            // COUNT(*) - 总链接数
            .column_as(short_link::Column::Id.count(), "total_links")
            // SUM(clicks) - 总点击数
            .column_as(short_link::Column::Clicks.sum(), "total_clicks")
            // SUM(CASE WHEN expires_at IS NULL OR expires_at >= now THEN 1 ELSE 0 END)
            .column_as(
                Expr::case(
                    Condition::any()
                        .add(short_link::Column::ExpiresAt.is_null())
                        .add(short_link::Column::ExpiresAt.gte(now)),
                    1,
                )
                .finally(0)
                .sum(),
                "active_links",
            )
            .into_model::<StatsResult>()
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("统计查询失败: {}", e);
                LinkgateError::database_operation(format!("Failed to compute stats: {}", e))
            })?;

        Ok(match result {
            Some(stats) => LinkStats {
                total_links: Ord::max(stats.total_links, 0) as u64,
                total_clicks: Ord::max(stats.total_clicks.unwrap_or(0), 0) as u64,
                active_links: Ord::max(stats.active_links.unwrap_or(0), 0) as u64,
            },
            None => LinkStats::default(),
        })
    }
}
