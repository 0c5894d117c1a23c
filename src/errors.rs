use std::fmt;

use actix_web::http::StatusCode;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkgateError {
    InvalidInput(String),
    AliasConflict(String),
    NotFound(String),
    Expired(String),
    Unauthorized(String),
    DatabaseOperation(String),
    DatabaseConfig(String),
    DatabaseConnection(String),
    PasswordHash(String),
    Serialization(String),
    FileOperation(String),
}

impl LinkgateError {
    /// 获取错误代码
    pub fn code(&self) -> &'static str {
        match self {
            LinkgateError::InvalidInput(_) => "E001",
            LinkgateError::AliasConflict(_) => "E002",
            LinkgateError::NotFound(_) => "E003",
            LinkgateError::Expired(_) => "E004",
            LinkgateError::Unauthorized(_) => "E005",
            LinkgateError::DatabaseOperation(_) => "E006",
            LinkgateError::DatabaseConfig(_) => "E007",
            LinkgateError::DatabaseConnection(_) => "E008",
            LinkgateError::PasswordHash(_) => "E009",
            LinkgateError::Serialization(_) => "E010",
            LinkgateError::FileOperation(_) => "E011",
        }
    }

    /// 获取错误类型名称
    pub fn error_type(&self) -> &'static str {
        match self {
            LinkgateError::InvalidInput(_) => "Invalid Input",
            LinkgateError::AliasConflict(_) => "Alias Conflict",
            LinkgateError::NotFound(_) => "Resource Not Found",
            LinkgateError::Expired(_) => "Link Expired",
            LinkgateError::Unauthorized(_) => "Unauthorized",
            LinkgateError::DatabaseOperation(_) => "Database Operation Error",
            LinkgateError::DatabaseConfig(_) => "Database Configuration Error",
            LinkgateError::DatabaseConnection(_) => "Database Connection Error",
            LinkgateError::PasswordHash(_) => "Password Hash Error",
            LinkgateError::Serialization(_) => "Serialization Error",
            LinkgateError::FileOperation(_) => "File Operation Error",
        }
    }

    /// 获取错误详情
    pub fn message(&self) -> &str {
        match self {
            LinkgateError::InvalidInput(msg)
            | LinkgateError::AliasConflict(msg)
            | LinkgateError::NotFound(msg)
            | LinkgateError::Expired(msg)
            | LinkgateError::Unauthorized(msg)
            | LinkgateError::DatabaseOperation(msg)
            | LinkgateError::DatabaseConfig(msg)
            | LinkgateError::DatabaseConnection(msg)
            | LinkgateError::PasswordHash(msg)
            | LinkgateError::Serialization(msg)
            | LinkgateError::FileOperation(msg) => msg,
        }
    }

    /// HTTP 状态码映射
    pub fn http_status(&self) -> StatusCode {
        match self {
            LinkgateError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            LinkgateError::AliasConflict(_) => StatusCode::CONFLICT,
            LinkgateError::NotFound(_) => StatusCode::NOT_FOUND,
            LinkgateError::Expired(_) => StatusCode::GONE,
            LinkgateError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            LinkgateError::DatabaseOperation(_)
            | LinkgateError::DatabaseConfig(_)
            | LinkgateError::DatabaseConnection(_)
            | LinkgateError::PasswordHash(_)
            | LinkgateError::Serialization(_)
            | LinkgateError::FileOperation(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// 格式化为彩色输出（用于启动失败时的终端输出）
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        format!(
            "{} {} {}\n  {}",
            "[ERROR]".red().bold(),
            self.code().yellow(),
            self.error_type().red(),
            self.message().white()
        )
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for LinkgateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for LinkgateError {}

// 便捷的构造函数
impl LinkgateError {
    pub fn invalid_input<T: Into<String>>(msg: T) -> Self {
        LinkgateError::InvalidInput(msg.into())
    }

    pub fn alias_conflict<T: Into<String>>(msg: T) -> Self {
        LinkgateError::AliasConflict(msg.into())
    }

    pub fn not_found<T: Into<String>>(msg: T) -> Self {
        LinkgateError::NotFound(msg.into())
    }

    pub fn expired<T: Into<String>>(msg: T) -> Self {
        LinkgateError::Expired(msg.into())
    }

    pub fn unauthorized<T: Into<String>>(msg: T) -> Self {
        LinkgateError::Unauthorized(msg.into())
    }

    pub fn database_operation<T: Into<String>>(msg: T) -> Self {
        LinkgateError::DatabaseOperation(msg.into())
    }

    pub fn database_config<T: Into<String>>(msg: T) -> Self {
        LinkgateError::DatabaseConfig(msg.into())
    }

    pub fn database_connection<T: Into<String>>(msg: T) -> Self {
        LinkgateError::DatabaseConnection(msg.into())
    }

    pub fn password_hash<T: Into<String>>(msg: T) -> Self {
        LinkgateError::PasswordHash(msg.into())
    }

    pub fn serialization<T: Into<String>>(msg: T) -> Self {
        LinkgateError::Serialization(msg.into())
    }

    pub fn file_operation<T: Into<String>>(msg: T) -> Self {
        LinkgateError::FileOperation(msg.into())
    }
}

// 为常见的错误类型实现 From trait
impl From<sea_orm::DbErr> for LinkgateError {
    fn from(err: sea_orm::DbErr) -> Self {
        LinkgateError::DatabaseOperation(err.to_string())
    }
}

impl From<std::io::Error> for LinkgateError {
    fn from(err: std::io::Error) -> Self {
        LinkgateError::FileOperation(err.to_string())
    }
}

impl From<serde_json::Error> for LinkgateError {
    fn from(err: serde_json::Error) -> Self {
        LinkgateError::Serialization(err.to_string())
    }
}

impl From<chrono::ParseError> for LinkgateError {
    fn from(err: chrono::ParseError) -> Self {
        LinkgateError::InvalidInput(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, LinkgateError>;
