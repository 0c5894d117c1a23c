//! HTTP 响应帮助函数

use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, error, web};
use serde::Serialize;
use tracing::error;

use crate::errors::LinkgateError;

/// `{"error": "...", "code": "Exxx"}`
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
    pub code: &'static str,
}

pub fn error_body(err: &LinkgateError) -> ErrorBody {
    ErrorBody {
        error: err.message().to_string(),
        code: err.code(),
    }
}

/// 从 LinkgateError 构建 JSON 错误响应（自动映射 HTTP 状态码）
pub fn error_response(err: &LinkgateError) -> HttpResponse {
    let status = err.http_status();
    if status.is_server_error() {
        error!("{}", err.format_simple());
    }

    HttpResponse::build(status)
        .append_header(("Content-Type", "application/json; charset=utf-8"))
        .json(error_body(err))
}

/// 统一 Result → HttpResponse 转换，成功时返回 200 + JSON
pub fn api_result<T: Serialize>(result: Result<T, LinkgateError>) -> HttpResponse {
    match result {
        Ok(data) => HttpResponse::Ok().json(data),
        Err(e) => error_response(&e),
    }
}

/// 请求来源 `scheme://host`，用于拼接短链接
pub fn request_origin(req: &HttpRequest) -> String {
    let info = req.connection_info();
    format!("{}://{}", info.scheme(), info.host())
}

/// JSON 解析失败时返回统一的 400 错误体
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(64 * 1024)
        .error_handler(|err, _req| {
            let body = error_body(&LinkgateError::invalid_input(format!(
                "Invalid request body: {}",
                err
            )));
            let response = HttpResponse::build(StatusCode::BAD_REQUEST).json(body);
            error::InternalError::from_response(err, response).into()
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_body_fields() {
        let body = error_body(&LinkgateError::alias_conflict("taken"));
        assert_eq!(body.code, "E002");
        assert_eq!(body.error, "taken");
    }

    #[test]
    fn test_error_response_status() {
        assert_eq!(
            error_response(&LinkgateError::expired("gone")).status(),
            StatusCode::GONE
        );
        assert_eq!(
            error_response(&LinkgateError::database_operation("boom")).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
