use actix_web::{HttpResponse, Responder, web};

use crate::api::helpers::error_response;
use crate::api::types::MessageResponse;
use crate::services::{ContactRequest, ContactService};

/// `POST /contact`
pub async fn post_contact(
    service: web::Data<ContactService>,
    payload: web::Json<ContactRequest>,
) -> impl Responder {
    match service.submit(payload.into_inner()).await {
        Ok(_) => HttpResponse::Ok().json(MessageResponse {
            message: "Message sent",
        }),
        Err(e) => error_response(&e),
    }
}
