//! 请求/响应 DTO

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::services::{ShortenRequest, ShortenResult};
use crate::storage::{ContactMessage, ShortLink};

#[derive(Debug, Deserialize)]
pub struct ShortenPayload {
    pub url: String,
    #[serde(default)]
    pub alias: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub expires_at: Option<String>,
}

impl From<ShortenPayload> for ShortenRequest {
    fn from(payload: ShortenPayload) -> Self {
        Self {
            url: payload.url,
            alias: payload.alias,
            password: payload.password,
            expires_at: payload.expires_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub message: &'static str,
    pub short_url: String,
    pub hash: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qr_code: Option<String>,
    pub expires_at: Option<DateTime<Utc>>,
}

impl From<ShortenResult> for ShortenResponse {
    fn from(result: ShortenResult) -> Self {
        Self {
            message: "Link created",
            short_url: result.short_url,
            hash: result.hash,
            qr_code: result.qr_code,
            expires_at: result.link.expires_at,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct InspectPayload {
    pub code: String,
    #[serde(default)]
    pub password: Option<String>,
}

/// `POST /{hash}` 表单
#[derive(Debug, Deserialize)]
pub struct UnlockForm {
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateLinkPayload {
    pub url: String,
    #[serde(default)]
    pub alias: String,
}

#[derive(Debug, Deserialize)]
pub struct StatsQuery {
    #[serde(default)]
    pub q: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

/// 管理视图中的链接，不包含密码哈希
#[derive(Debug, Serialize)]
pub struct LinkView {
    pub id: i32,
    pub hash: String,
    pub url: String,
    pub clicks: i64,
    pub created_at: DateTime<Utc>,
    pub expires_at: Option<DateTime<Utc>>,
    pub protected: bool,
    pub expired: bool,
}

impl LinkView {
    pub fn from_link(link: ShortLink, now: DateTime<Utc>) -> Self {
        Self {
            expired: link.is_expired_at(now),
            protected: link.is_protected(),
            id: link.id,
            hash: link.hash,
            url: link.original_url,
            clicks: link.clicks,
            created_at: link.created_at,
            expires_at: link.expires_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct UpdateLinkResponse {
    pub message: &'static str,
    pub link: LinkView,
}

#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub links: Vec<LinkView>,
    pub messages: Vec<ContactMessage>,
    pub total_links: u64,
    pub total_clicks: u64,
    pub active_links: u64,
    pub total_messages: u64,
    pub uptime_seconds: i64,
    pub version: &'static str,
    pub query: String,
}
