//! 链接密码哈希工具模块
//!
//! 使用 Argon2id 算法进行密码哈希和验证。哈希只在创建链接时计算一次，
//! 存储 PHC 格式字符串，验证时由 argon2 做常量时间比较。

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};

/// 密码哈希错误
#[derive(Debug)]
pub enum PasswordError {
    HashError(String),
    VerifyError(String),
}

impl std::fmt::Display for PasswordError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::HashError(msg) => write!(f, "Password hash error: {}", msg),
            Self::VerifyError(msg) => write!(f, "Password verify error: {}", msg),
        }
    }
}

impl std::error::Error for PasswordError {}

/// 对密码进行 Argon2id 哈希
pub fn hash_password(password: &str) -> Result<String, PasswordError> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    argon2
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| PasswordError::HashError(e.to_string()))
}

/// 验证密码是否匹配哈希
///
/// 存储的哈希无法解析时返回 `VerifyError`
pub fn verify_password(password: &str, hash: &str) -> Result<bool, PasswordError> {
    let parsed_hash =
        PasswordHash::new(hash).map_err(|e| PasswordError::VerifyError(e.to_string()))?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}

/// 处理用户输入的新密码
///
/// - 如果输入为空或 None，返回 None（链接不受保护）
/// - 否则对密码进行哈希
pub fn process_new_password(password: Option<&str>) -> Result<Option<String>, PasswordError> {
    match password {
        Some(pwd) if !pwd.is_empty() => hash_password(pwd).map(Some),
        _ => Ok(None),
    }
}
