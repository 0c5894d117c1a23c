use chrono::{DateTime, Utc};
use tracing::warn;

use crate::storage::ShortLink;
use crate::utils::password::verify_password;

/// 单次访问的判定结果，不落库
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessDecision {
    Resolved,
    Expired,
    PasswordRequired,
    PasswordRejected,
}

/// 判定顺序：过期 → 密码 → 放行
///
/// `password` 为 None 表示请求未携带密码；`Some("")` 视为提交了错误密码。
pub fn evaluate_access(
    link: &ShortLink,
    password: Option<&str>,
    now: DateTime<Utc>,
) -> AccessDecision {
    if link.is_expired_at(now) {
        return AccessDecision::Expired;
    }

    let Some(stored_hash) = link.password_hash.as_deref().filter(|h| !h.is_empty()) else {
        return AccessDecision::Resolved;
    };

    let Some(supplied) = password else {
        return AccessDecision::PasswordRequired;
    };

    match verify_password(supplied, stored_hash) {
        Ok(true) => AccessDecision::Resolved,
        Ok(false) => AccessDecision::PasswordRejected,
        Err(e) => {
            // 存储的哈希损坏时按密码错误处理
            warn!("Stored password hash for '{}' is unreadable: {}", link.hash, e);
            AccessDecision::PasswordRejected
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::password::hash_password;
    use chrono::Duration;

    fn link(password_hash: Option<String>, expires_at: Option<DateTime<Utc>>) -> ShortLink {
        ShortLink {
            id: 1,
            hash: "abc123".to_string(),
            original_url: "https://example.com".to_string(),
            password_hash,
            expires_at,
            clicks: 0,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_open_link_resolves() {
        let now = Utc::now();
        assert_eq!(evaluate_access(&link(None, None), None, now), AccessDecision::Resolved);
        // 多余的密码不影响放行
        assert_eq!(
            evaluate_access(&link(None, None), Some("anything"), now),
            AccessDecision::Resolved
        );
    }

    #[test]
    fn test_expired_wins_over_password() {
        let now = Utc::now();
        let hash = hash_password("secret").unwrap();
        let expired = link(Some(hash), Some(now - Duration::minutes(1)));

        assert_eq!(evaluate_access(&expired, None, now), AccessDecision::Expired);
        assert_eq!(evaluate_access(&expired, Some("secret"), now), AccessDecision::Expired);
    }

    #[test]
    fn test_expiry_boundary_is_exclusive() {
        let now = Utc::now();
        assert_eq!(
            evaluate_access(&link(None, Some(now)), None, now),
            AccessDecision::Resolved
        );
    }

    #[test]
    fn test_password_flow() {
        let now = Utc::now();
        let protected = link(Some(hash_password("secret").unwrap()), None);

        assert_eq!(evaluate_access(&protected, None, now), AccessDecision::PasswordRequired);
        assert_eq!(
            evaluate_access(&protected, Some("wrong"), now),
            AccessDecision::PasswordRejected
        );
        assert_eq!(evaluate_access(&protected, Some(""), now), AccessDecision::PasswordRejected);
        assert_eq!(evaluate_access(&protected, Some("secret"), now), AccessDecision::Resolved);
    }

    #[test]
    fn test_malformed_hash_is_rejection() {
        let broken = link(Some("not-a-phc-string".to_string()), None);
        assert_eq!(
            evaluate_access(&broken, Some("secret"), Utc::now()),
            AccessDecision::PasswordRejected
        );
    }
}
