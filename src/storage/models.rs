use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 已持久化的短链接
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortLink {
    pub id: i32,
    pub hash: String,
    pub original_url: String,
    /// Argon2id PHC 字符串，None 表示未加密
    #[serde(skip_serializing)]
    pub password_hash: Option<String>,
    pub expires_at: Option<DateTime<Utc>>,
    pub clicks: i64,
    pub created_at: DateTime<Utc>,
}

impl ShortLink {
    pub fn is_protected(&self) -> bool {
        self.password_hash.as_deref().is_some_and(|h| !h.is_empty())
    }

    /// 严格晚于 expires_at 才算过期
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|expires_at| now > expires_at)
    }
}

/// 待插入的短链接（id 由存储分配）
#[derive(Debug, Clone)]
pub struct NewShortLink {
    pub hash: String,
    pub original_url: String,
    pub password_hash: Option<String>,
    pub expires_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

/// 联系表单留言
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

/// 链接聚合统计
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkStats {
    pub total_links: u64,
    pub total_clicks: u64,
    pub active_links: u64,
}

/// 链接列表过滤条件
#[derive(Debug, Clone, Default)]
pub struct LinkFilter {
    /// 子串匹配 hash 或 original_url
    pub search: Option<String>,
    pub limit: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn link(password_hash: Option<&str>, expires_at: Option<DateTime<Utc>>) -> ShortLink {
        ShortLink {
            id: 1,
            hash: "abc123".to_string(),
            original_url: "https://example.com".to_string(),
            password_hash: password_hash.map(str::to_string),
            expires_at,
            clicks: 0,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_is_protected() {
        assert!(!link(None, None).is_protected());
        assert!(!link(Some(""), None).is_protected());
        assert!(link(Some("$argon2id$..."), None).is_protected());
    }

    #[test]
    fn test_is_expired_at_boundary() {
        let now = Utc::now();
        assert!(!link(None, None).is_expired_at(now));
        assert!(!link(None, Some(now)).is_expired_at(now));
        assert!(link(None, Some(now - Duration::seconds(1))).is_expired_at(now));
        assert!(!link(None, Some(now + Duration::days(1))).is_expired_at(now));
    }

    #[test]
    fn test_password_hash_not_serialized() {
        let json = serde_json::to_value(link(Some("$argon2id$secret"), None)).unwrap();
        assert!(json.get("password_hash").is_none());
        assert_eq!(json["hash"], "abc123");
    }
}
