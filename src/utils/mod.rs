pub mod password;
pub mod qr;
pub mod time_parser;
pub mod url_validator;

pub use time_parser::TimeParser;

/// 自定义别名的最大长度（与 short_links.hash 列宽一致）
pub const MAX_ALIAS_LENGTH: usize = 10;

/// 与固定路由冲突、不能作为短码使用的路径段
pub const RESERVED_CODES: &[&str] = &[
    "shorten",
    "inspect",
    "stats",
    "link",
    "message",
    "contact",
    "static",
    "health",
    "favicon.ico",
];

pub fn generate_random_code(length: usize) -> String {
    use std::iter;

    // 随机选择字母和数字
    let chars = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

    // 每次调用使用线程本地 RNG，无共享可变状态
    iter::repeat_with(|| chars[rand::random_range(0..chars.len())] as char)
        .take(length)
        .collect()
}

/// 短码格式校验：1..=MAX_ALIAS_LENGTH 个 `[A-Za-z0-9_-]` 字符
pub fn is_valid_short_code(code: &str) -> bool {
    !code.is_empty()
        && code.len() <= MAX_ALIAS_LENGTH
        && code
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'_' || b == b'-')
}

pub fn is_reserved_short_code(code: &str) -> bool {
    RESERVED_CODES
        .iter()
        .any(|reserved| reserved.eq_ignore_ascii_case(code))
}

/// 从短码或完整短链接中取出短码（最后一个路径段）
pub fn extract_code(input: &str) -> &str {
    let trimmed = input.trim();
    match trimmed.rsplit_once('/') {
        Some((_, last)) => last,
        None => trimmed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_random_code_length_and_charset() {
        for len in [1, 6, 10] {
            let code = generate_random_code(len);
            assert_eq!(code.len(), len);
            assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
        }
    }

    #[test]
    fn test_generate_random_code_varies() {
        let a = generate_random_code(10);
        let b = generate_random_code(10);
        assert_ne!(a, b);
    }

    #[test]
    fn test_is_valid_short_code() {
        assert!(is_valid_short_code("abc123"));
        assert!(is_valid_short_code("my-link_1"));
        assert!(is_valid_short_code("a"));
        assert!(!is_valid_short_code(""));
        assert!(!is_valid_short_code("elevenchars"));
        assert!(!is_valid_short_code("has space"));
        assert!(!is_valid_short_code("a/b"));
        assert!(!is_valid_short_code("'; DROP"));
    }

    #[test]
    fn test_reserved_codes() {
        assert!(is_reserved_short_code("shorten"));
        assert!(is_reserved_short_code("STATS"));
        assert!(!is_reserved_short_code("google"));
    }

    #[test]
    fn test_extract_code() {
        assert_eq!(extract_code("abc123"), "abc123");
        assert_eq!(extract_code("https://s.example.com/abc123"), "abc123");
        assert_eq!(extract_code("localhost:8080/xyz"), "xyz");
        assert_eq!(extract_code("  abc  "), "abc");
        assert_eq!(extract_code("https://s.example.com/"), "");
    }
}
