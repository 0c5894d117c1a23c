//! Public link API: `POST /shorten` and `POST /inspect`

use actix_web::{HttpRequest, HttpResponse, Responder, web};
use tracing::debug;

use crate::api::helpers::{api_result, error_response, request_origin};
use crate::api::types::{InspectPayload, ShortenPayload, ShortenResponse};
use crate::services::LinkService;

pub async fn post_shorten(
    req: HttpRequest,
    service: web::Data<LinkService>,
    payload: web::Json<ShortenPayload>,
) -> impl Responder {
    let origin = request_origin(&req);
    let request = payload.into_inner().into();

    match service.shorten(request, &origin).await {
        Ok(result) => HttpResponse::Ok().json(ShortenResponse::from(result)),
        Err(e) => {
            debug!("Shorten rejected: {}", e);
            error_response(&e)
        }
    }
}

pub async fn post_inspect(
    service: web::Data<LinkService>,
    payload: web::Json<InspectPayload>,
) -> impl Responder {
    let payload = payload.into_inner();
    api_result(
        service
            .inspect(&payload.code, payload.password.as_deref())
            .await,
    )
}
