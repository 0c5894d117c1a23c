//! 目标 URL 校验
//!
//! 只接受带主机名的 http/https 绝对地址，并拦截脚本类协议

use url::Url;

/// URL 验证错误
#[derive(Debug)]
pub enum UrlValidationError {
    EmptyUrl,
    InvalidProtocol(String),
    DangerousProtocol(String),
    MissingHost,
    InvalidFormat(String),
}

impl std::fmt::Display for UrlValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyUrl => write!(f, "URL cannot be empty"),
            Self::InvalidProtocol(proto) => write!(
                f,
                "Invalid protocol: {}. Only http:// and https:// are allowed",
                proto
            ),
            Self::DangerousProtocol(proto) => {
                write!(f, "Dangerous protocol blocked: {}", proto)
            }
            Self::MissingHost => write!(f, "URL must contain a host"),
            Self::InvalidFormat(msg) => write!(f, "Invalid URL format: {}", msg),
        }
    }
}

impl std::error::Error for UrlValidationError {}

/// 危险协议列表
const DANGEROUS_PROTOCOLS: &[&str] = &[
    "javascript:",
    "data:",
    "file:",
    "vbscript:",
    "about:",
    "blob:",
];

/// 校验目标 URL，成功时返回解析结果
///
/// 检查顺序：非空 → 危险协议 → http/https → 可解析 → 含主机名
pub fn validate_url(raw: &str) -> Result<Url, UrlValidationError> {
    let raw = raw.trim();

    if raw.is_empty() {
        return Err(UrlValidationError::EmptyUrl);
    }

    let lower = raw.to_ascii_lowercase();

    if let Some(proto) = DANGEROUS_PROTOCOLS.iter().find(|p| lower.starts_with(*p)) {
        return Err(UrlValidationError::DangerousProtocol(proto.to_string()));
    }

    if !lower.starts_with("http://") && !lower.starts_with("https://") {
        let proto = lower
            .split_once(':')
            .map(|(scheme, _)| format!("{}:", scheme))
            .unwrap_or_default();
        return Err(UrlValidationError::InvalidProtocol(proto));
    }

    let parsed = Url::parse(raw).map_err(|e| UrlValidationError::InvalidFormat(e.to_string()))?;

    match parsed.host_str() {
        Some(host) if !host.is_empty() => Ok(parsed),
        _ => Err(UrlValidationError::MissingHost),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_urls() {
        assert!(validate_url("http://example.com").is_ok());
        assert!(validate_url("https://example.com").is_ok());
        assert!(validate_url("https://example.com/path?query=1#frag").is_ok());
        assert!(validate_url("http://localhost:8080").is_ok());
        assert!(validate_url("  https://example.com  ").is_ok());
    }

    #[test]
    fn test_not_a_url() {
        assert!(matches!(
            validate_url("not-a-url"),
            Err(UrlValidationError::InvalidProtocol(_))
        ));
        assert!(matches!(
            validate_url("example.com/path"),
            Err(UrlValidationError::InvalidProtocol(_))
        ));
    }

    #[test]
    fn test_dangerous_protocols() {
        assert!(matches!(
            validate_url("javascript:alert(1)"),
            Err(UrlValidationError::DangerousProtocol(_))
        ));
        assert!(matches!(
            validate_url("data:text/html,<script>alert(1)</script>"),
            Err(UrlValidationError::DangerousProtocol(_))
        ));
        assert!(matches!(
            validate_url("JAVASCRIPT:alert(1)"),
            Err(UrlValidationError::DangerousProtocol(_))
        ));
    }

    #[test]
    fn test_invalid_protocols() {
        assert!(matches!(
            validate_url("ftp://example.com"),
            Err(UrlValidationError::InvalidProtocol(_))
        ));
        assert!(matches!(
            validate_url("mailto:test@example.com"),
            Err(UrlValidationError::InvalidProtocol(_))
        ));
    }

    #[test]
    fn test_missing_host_or_malformed() {
        assert!(validate_url("http://").is_err());
        assert!(matches!(
            validate_url("http://exa mple.com"),
            Err(UrlValidationError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_empty_url() {
        assert!(matches!(validate_url(""), Err(UrlValidationError::EmptyUrl)));
        assert!(matches!(validate_url("   "), Err(UrlValidationError::EmptyUrl)));
    }
}
