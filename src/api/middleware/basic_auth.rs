//! Admin basic-auth middleware
//!
//! 未配置管理员密码时管理路由直接返回 404，凭据比较使用常量时间。

use actix_service::{Service, Transform};
use actix_web::{
    Error, HttpResponse,
    body::EitherBody,
    dev::{ServiceRequest, ServiceResponse},
    http::header::{AUTHORIZATION, CONTENT_TYPE, WWW_AUTHENTICATE},
};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use futures_util::future::{LocalBoxFuture, Ready, ready};
use std::rc::Rc;
use subtle::ConstantTimeEq;
use tracing::{debug, info, trace};

use crate::api::helpers::error_body;
use crate::config::AdminConfig;
use crate::errors::LinkgateError;

pub const ADMIN_REALM: &str = "Basic realm=\"admin\"";

/// Admin authentication middleware
#[derive(Clone)]
pub struct AdminAuth {
    username: Rc<str>,
    password: Rc<str>,
}

impl AdminAuth {
    pub fn new(config: &AdminConfig) -> Self {
        Self {
            username: Rc::from(config.username.as_str()),
            password: Rc::from(config.password.as_str()),
        }
    }
}

impl<S, B> Transform<S, ServiceRequest> for AdminAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = AdminAuthMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AdminAuthMiddleware {
            service: Rc::new(service),
            username: self.username.clone(),
            password: self.password.clone(),
        }))
    }
}

pub struct AdminAuthMiddleware<S> {
    service: Rc<S>,
    username: Rc<str>,
    password: Rc<str>,
}

/// 解析 `Authorization: Basic base64(user:pass)`
pub fn parse_basic_credentials(header: &str) -> Option<(String, String)> {
    let (scheme, encoded) = header.trim().split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("basic") {
        return None;
    }

    let decoded = STANDARD.decode(encoded.trim()).ok()?;
    let decoded = String::from_utf8(decoded).ok()?;
    let (user, pass) = decoded.split_once(':')?;
    Some((user.to_string(), pass.to_string()))
}

/// 两个字段都比较完再合并结果
fn credentials_match(expected_user: &str, expected_pass: &str, user: &str, pass: &str) -> bool {
    let user_ok = expected_user.as_bytes().ct_eq(user.as_bytes());
    let pass_ok = expected_pass.as_bytes().ct_eq(pass.as_bytes());
    (user_ok & pass_ok).into()
}

impl<S, B> AdminAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    /// Handle requests when admin password is not configured
    fn handle_disabled(req: ServiceRequest) -> ServiceResponse<EitherBody<B>> {
        debug!("Admin password not configured - returning 404");
        req.into_response(
            HttpResponse::NotFound()
                .insert_header((CONTENT_TYPE, "text/plain; charset=utf-8"))
                .body("Not Found")
                .map_into_right_body(),
        )
    }

    fn handle_unauthorized(req: ServiceRequest) -> ServiceResponse<EitherBody<B>> {
        info!("Admin authentication failed for {}", req.path());
        let err = LinkgateError::unauthorized("Authentication required");
        req.into_response(
            HttpResponse::Unauthorized()
                .insert_header((WWW_AUTHENTICATE, ADMIN_REALM))
                .json(error_body(&err))
                .map_into_right_body(),
        )
    }

    fn is_authorized(req: &ServiceRequest, username: &str, password: &str) -> bool {
        req.headers()
            .get(AUTHORIZATION)
            .and_then(|h| h.to_str().ok())
            .and_then(parse_basic_credentials)
            .is_some_and(|(user, pass)| credentials_match(username, password, &user, &pass))
    }
}

impl<S, B> Service<ServiceRequest> for AdminAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(
        &self,
        ctx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let srv = self.service.clone();
        let username = self.username.clone();
        let password = self.password.clone();

        Box::pin(async move {
            if password.is_empty() {
                return Ok(Self::handle_disabled(req));
            }

            if !Self::is_authorized(&req, &username, &password) {
                return Ok(Self::handle_unauthorized(req));
            }

            trace!("Admin authentication successful");
            let response = srv.call(req).await?.map_into_left_body();
            Ok(response)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic_credentials() {
        let header = format!("Basic {}", STANDARD.encode("admin:s3cret:with-colon"));
        assert_eq!(
            parse_basic_credentials(&header),
            Some(("admin".to_string(), "s3cret:with-colon".to_string()))
        );
    }

    #[test]
    fn test_parse_rejects_other_schemes() {
        assert!(parse_basic_credentials("Bearer abc").is_none());
        assert!(parse_basic_credentials("Basic !!!notbase64").is_none());
        let no_colon = format!("Basic {}", STANDARD.encode("adminonly"));
        assert!(parse_basic_credentials(&no_colon).is_none());
    }

    #[test]
    fn test_credentials_match() {
        assert!(credentials_match("admin", "pw", "admin", "pw"));
        assert!(!credentials_match("admin", "pw", "admin", "pw2"));
        assert!(!credentials_match("admin", "pw", "root", "pw"));
        assert!(!credentials_match("admin", "pw", "", ""));
    }
}
