//! Short link resolution: `GET /{hash}` and `POST /{hash}`

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, Responder, web};
use tracing::{error, trace};

use crate::api::pages;
use crate::api::types::UnlockForm;
use crate::services::{LinkService, ResolveAttempt, ResolveOutcome};
use crate::utils::is_valid_short_code;

pub struct RedirectService {}

impl RedirectService {
    pub async fn handle_visit(
        path: web::Path<String>,
        service: web::Data<LinkService>,
    ) -> impl Responder {
        Self::process(path.into_inner(), ResolveAttempt::Visit, &service).await
    }

    /// 密码表单提交；缺少或无法解析的表单体按空密码处理
    pub async fn handle_unlock(
        path: web::Path<String>,
        service: web::Data<LinkService>,
        form: Option<web::Form<UnlockForm>>,
    ) -> impl Responder {
        let password = form.map(|f| f.into_inner().password).unwrap_or_default();
        let attempt = ResolveAttempt::Unlock(password);
        Self::process(path.into_inner(), attempt, &service).await
    }

    async fn process(hash: String, attempt: ResolveAttempt, service: &LinkService) -> HttpResponse {
        if !is_valid_short_code(&hash) {
            // 非法短码，直接 404，不查库
            trace!("Invalid short code rejected: {}", &hash);
            return pages::not_found_page();
        }

        match service.resolve(&hash, attempt).await {
            Ok(ResolveOutcome::Redirect(target)) => Self::finish_redirect(&target),
            Ok(ResolveOutcome::PasswordPrompt { hash, rejected }) => {
                pages::password_page(&hash, rejected)
            }
            Ok(ResolveOutcome::Expired) => pages::expired_page(),
            Ok(ResolveOutcome::NotFound) => pages::not_found_page(),
            Err(e) => {
                error!("Failed to resolve '{}': {}", hash, e);
                pages::error_page()
            }
        }
    }

    #[inline]
    fn finish_redirect(target: &str) -> HttpResponse {
        HttpResponse::build(StatusCode::FOUND)
            .insert_header(("Location", target))
            .insert_header(("Cache-Control", "no-store"))
            .finish()
    }

    pub async fn landing() -> impl Responder {
        pages::landing_page()
    }
}

pub fn redirect_routes() -> actix_web::Scope {
    web::scope("")
        .route("/", web::get().to(RedirectService::landing))
        .route("/{hash}", web::get().to(RedirectService::handle_visit))
        .route("/{hash}", web::post().to(RedirectService::handle_unlock))
}
