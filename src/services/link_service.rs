//! Link management service
//!
//! Shortening, inspection, resolution and the admin operations on links.
//! The store is injected so handlers and tests can share one instance.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use tracing::{debug, info};

use super::access_policy::{AccessDecision, evaluate_access};
use crate::config::LinksConfig;
use crate::errors::{LinkgateError, Result};
use crate::storage::{LinkFilter, LinkStats, LinkStore, NewShortLink, ShortLink};
use crate::utils::password::{process_new_password, verify_password};
use crate::utils::qr::encode_base64_png;
use crate::utils::url_validator::validate_url;
use crate::utils::{
    MAX_ALIAS_LENGTH, TimeParser, extract_code, generate_random_code, is_reserved_short_code,
    is_valid_short_code,
};

/// 受保护链接在未解锁时显示的占位地址
pub const PROTECTED_PLACEHOLDER: &str = "🔒 Protected";

pub const INCORRECT_PASSWORD: &str = "Incorrect password";

// ============ Settings ============

#[derive(Debug, Clone)]
pub struct LinkSettings {
    pub code_length: usize,
    /// None 表示未指定过期时间的链接永不过期
    pub default_expiry: Option<Duration>,
    pub list_limit: u64,
    /// 对外访问的根地址，如 https://s.example.com
    pub base_url: Option<String>,
    pub qr_size: u32,
}

impl Default for LinkSettings {
    fn default() -> Self {
        Self {
            code_length: 6,
            default_expiry: Some(Duration::days(30)),
            list_limit: 100,
            base_url: None,
            qr_size: 256,
        }
    }
}

impl From<&LinksConfig> for LinkSettings {
    fn from(config: &LinksConfig) -> Self {
        Self {
            // hash 列宽为 MAX_ALIAS_LENGTH
            code_length: config.code_length.clamp(1, MAX_ALIAS_LENGTH),
            default_expiry: (config.default_expiry_days > 0)
                .then(|| Duration::try_days(config.default_expiry_days))
                .flatten(),
            list_limit: config.list_limit.max(1),
            base_url: config
                .base_url
                .as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string),
            qr_size: config.qr_size,
        }
    }
}

// ============ Request/Response DTOs ============

/// Request to shorten a URL
#[derive(Debug, Clone, Default)]
pub struct ShortenRequest {
    pub url: String,
    /// Custom alias (generated if absent or blank)
    pub alias: Option<String>,
    /// Plaintext password, hashed before storage
    pub password: Option<String>,
    /// RFC3339, datetime-local or relative ("1d", "2h30m")
    pub expires_at: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ShortenResult {
    pub hash: String,
    pub short_url: String,
    /// base64 PNG, omitted when encoding fails
    pub qr_code: Option<String>,
    pub link: ShortLink,
}

/// Metadata returned by `inspect`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InspectResult {
    pub hash: String,
    pub original_url: String,
    /// -1 while a protected link is locked
    pub clicks: i64,
    pub created_at: DateTime<Utc>,
    pub expires_at: Option<DateTime<Utc>>,
    pub protected: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unlocked: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// How a visitor reached the link
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolveAttempt {
    /// GET: no password supplied
    Visit,
    /// POST with the password form value
    Unlock(String),
}

impl ResolveAttempt {
    fn password(&self) -> Option<&str> {
        match self {
            Self::Visit => None,
            Self::Unlock(password) => Some(password),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolveOutcome {
    Redirect(String),
    /// `rejected` is true after a wrong password
    PasswordPrompt { hash: String, rejected: bool },
    Expired,
    NotFound,
}

// ============ Service ============

pub struct LinkService {
    store: Arc<dyn LinkStore>,
    settings: LinkSettings,
}

impl LinkService {
    pub fn new(store: Arc<dyn LinkStore>, settings: LinkSettings) -> Self {
        Self { store, settings }
    }

    pub fn settings(&self) -> &LinkSettings {
        &self.settings
    }

    /// Create a short link
    ///
    /// `origin` (`scheme://host`) is used for the short URL when no base URL
    /// is configured.
    pub async fn shorten(&self, req: ShortenRequest, origin: &str) -> Result<ShortenResult> {
        let url = validate_url(&req.url).map_err(|e| LinkgateError::invalid_input(e.to_string()))?;
        let original_url = req.url.trim().to_string();
        debug!("LinkService: shortening {}", url);

        let now = Utc::now();
        let expires_at = self.parse_expires_at(req.expires_at.as_deref(), now)?;

        let alias = req
            .alias
            .as_deref()
            .map(str::trim)
            .filter(|a| !a.is_empty());

        let hash = match alias {
            Some(alias) => {
                Self::validate_alias(alias)?;
                // 快速预检；并发插入仍由唯一索引兜底
                if self.store.find_by_hash(alias).await?.is_some() {
                    return Err(LinkgateError::alias_conflict(format!(
                        "Alias '{}' is already in use",
                        alias
                    )));
                }
                alias.to_string()
            }
            None => generate_random_code(self.settings.code_length),
        };

        let password = req.password.as_deref().filter(|p| !p.trim().is_empty());
        let password_hash = process_new_password(password)
            .map_err(|e| LinkgateError::password_hash(e.to_string()))?;

        let link = self
            .store
            .create(NewShortLink {
                hash,
                original_url,
                password_hash,
                expires_at,
                created_at: now,
            })
            .await?;

        let short_url = self.short_url(&link.hash, origin);
        let qr_code = encode_base64_png(&short_url, self.settings.qr_size);

        info!(
            "LinkService: created link '{}' -> '{}' (protected: {}, expires: {:?})",
            link.hash,
            link.original_url,
            link.is_protected(),
            link.expires_at
        );

        Ok(ShortenResult {
            hash: link.hash.clone(),
            short_url,
            qr_code,
            link,
        })
    }

    /// Look up link metadata without following it
    ///
    /// Accepts a bare code or a full short URL. Expiration is not evaluated
    /// and clicks are never incremented.
    pub async fn inspect(&self, code: &str, password: Option<&str>) -> Result<InspectResult> {
        let code = extract_code(code);
        if code.is_empty() {
            return Err(LinkgateError::not_found("Link not found"));
        }

        let link = self
            .store
            .find_by_hash(code)
            .await?
            .ok_or_else(|| LinkgateError::not_found(format!("Link '{}' not found", code)))?;

        let mut result = InspectResult {
            hash: link.hash.clone(),
            original_url: link.original_url.clone(),
            clicks: link.clicks,
            created_at: link.created_at,
            expires_at: link.expires_at,
            protected: link.is_protected(),
            unlocked: None,
            error: None,
        };

        if !result.protected {
            return Ok(result);
        }

        // 只校验密码，过期与否不影响查看
        let password = password.filter(|p| !p.is_empty());
        let unlocked = match (password, link.password_hash.as_deref()) {
            (Some(supplied), Some(stored)) => verify_password(supplied, stored).unwrap_or(false),
            _ => false,
        };

        if unlocked {
            result.unlocked = Some(true);
        } else {
            result.original_url = PROTECTED_PLACEHOLDER.to_string();
            result.clicks = -1;
            if password.is_some() {
                result.error = Some(INCORRECT_PASSWORD.to_string());
            }
        }

        Ok(result)
    }

    /// Follow a short link
    ///
    /// Only a resolved access records a click, with a single atomic update.
    pub async fn resolve(&self, code: &str, attempt: ResolveAttempt) -> Result<ResolveOutcome> {
        let Some(link) = self.store.find_by_hash(code).await? else {
            return Ok(ResolveOutcome::NotFound);
        };

        match evaluate_access(&link, attempt.password(), Utc::now()) {
            AccessDecision::Resolved => match self.store.increment_clicks(link.id).await {
                Ok(()) => Ok(ResolveOutcome::Redirect(link.original_url)),
                // 查询与计数之间被删除
                Err(LinkgateError::NotFound(_)) => Ok(ResolveOutcome::NotFound),
                Err(e) => Err(e),
            },
            AccessDecision::Expired => {
                debug!("LinkService: link '{}' expired at {:?}", link.hash, link.expires_at);
                Ok(ResolveOutcome::Expired)
            }
            AccessDecision::PasswordRequired => Ok(ResolveOutcome::PasswordPrompt {
                hash: link.hash,
                rejected: false,
            }),
            AccessDecision::PasswordRejected => {
                info!("LinkService: wrong password for '{}'", link.hash);
                Ok(ResolveOutcome::PasswordPrompt {
                    hash: link.hash,
                    rejected: true,
                })
            }
        }
    }

    /// Change the target URL and alias of an existing link
    ///
    /// A blank alias keeps the current hash.
    pub async fn update_link(&self, id: i32, new_url: &str, new_alias: &str) -> Result<ShortLink> {
        validate_url(new_url).map_err(|e| LinkgateError::invalid_input(e.to_string()))?;

        let existing = self
            .store
            .find_by_id(id)
            .await?
            .ok_or_else(|| LinkgateError::not_found(format!("Link #{} not found", id)))?;

        let new_alias = new_alias.trim();
        let hash = if new_alias.is_empty() || new_alias == existing.hash {
            existing.hash.clone()
        } else {
            Self::validate_alias(new_alias)?;
            if self.store.find_by_hash(new_alias).await?.is_some() {
                return Err(LinkgateError::alias_conflict(format!(
                    "Alias '{}' is already in use",
                    new_alias
                )));
            }
            new_alias.to_string()
        };

        let updated = self.store.update(id, new_url.trim(), &hash).await?;

        info!(
            "LinkService: updated link #{} '{}' -> '{}'",
            id, updated.hash, updated.original_url
        );
        Ok(updated)
    }

    pub async fn delete_link(&self, id: i32) -> Result<()> {
        self.store.delete(id).await?;
        info!("LinkService: deleted link #{}", id);
        Ok(())
    }

    /// Newest first, capped at `list_limit`
    pub async fn list_links(&self, search: Option<&str>) -> Result<Vec<ShortLink>> {
        let search = search
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string);

        self.store
            .list(LinkFilter {
                search,
                limit: self.settings.list_limit,
            })
            .await
    }

    pub async fn stats(&self) -> Result<LinkStats> {
        self.store.stats().await
    }

    /// `{base}/{hash}`，base 优先取配置，其次取请求来源
    pub fn short_url(&self, hash: &str, origin: &str) -> String {
        let base = self.settings.base_url.as_deref().unwrap_or(origin);
        format!("{}/{}", base.trim_end_matches('/'), hash)
    }

    // ============ Helpers ============

    fn validate_alias(alias: &str) -> Result<()> {
        if !is_valid_short_code(alias) {
            return Err(LinkgateError::invalid_input(format!(
                "Invalid alias '{}'. Use 1-10 letters, digits, '_' or '-'.",
                alias
            )));
        }
        if is_reserved_short_code(alias) {
            return Err(LinkgateError::invalid_input(format!(
                "Alias '{}' conflicts with a reserved route",
                alias
            )));
        }
        Ok(())
    }

    fn parse_expires_at(
        &self,
        input: Option<&str>,
        now: DateTime<Utc>,
    ) -> Result<Option<DateTime<Utc>>> {
        match input.map(str::trim).filter(|s| !s.is_empty()) {
            Some(raw) => {
                let expires_at = TimeParser::parse_expire_time(raw, now).map_err(|e| {
                    LinkgateError::invalid_input(format!("Invalid expiration date: {}", e))
                })?;
                if expires_at <= now {
                    return Err(LinkgateError::invalid_input(
                        "Expiration date must be in the future",
                    ));
                }
                Ok(Some(expires_at))
            }
            None => Ok(self
                .settings
                .default_expiry
                .and_then(|ttl| now.checked_add_signed(ttl))),
        }
    }
}
