//! HTTP surface
//!
//! Route table, extractors' error handling and app state wiring.

pub mod helpers;
pub mod middleware;
pub mod pages;
pub mod services;
pub mod types;

use std::sync::Arc;

use actix_web::web;

use crate::config::AdminConfig;
use crate::services::{ContactService, LinkService, LinkSettings};
use crate::storage::LinkStore;

use middleware::AdminAuth;
use services::{
    AdminService, AppStartTime, post_contact, post_inspect, post_shorten, redirect_routes,
};

/// 跨 worker 共享的应用状态
#[derive(Clone)]
pub struct AppState {
    pub links: web::Data<LinkService>,
    pub contacts: web::Data<ContactService>,
    pub started: web::Data<AppStartTime>,
}

impl AppState {
    pub fn new(store: Arc<dyn LinkStore>, settings: LinkSettings) -> Self {
        Self {
            links: web::Data::new(LinkService::new(store.clone(), settings)),
            contacts: web::Data::new(ContactService::new(store)),
            started: web::Data::new(AppStartTime::now()),
        }
    }
}

/// 注册全部路由；`/{hash}` 通配路由必须最后注册
pub fn configure_app(cfg: &mut web::ServiceConfig, state: &AppState, admin: &AdminConfig) {
    cfg.app_data(helpers::json_config())
        .app_data(state.links.clone())
        .app_data(state.contacts.clone())
        .app_data(state.started.clone())
        .route("/shorten", web::post().to(post_shorten))
        .route("/inspect", web::post().to(post_inspect))
        .route("/contact", web::post().to(post_contact))
        .service(
            web::resource("/stats")
                .wrap(AdminAuth::new(admin))
                .route(web::get().to(AdminService::get_stats)),
        )
        .service(
            web::resource("/link/{id}")
                .wrap(AdminAuth::new(admin))
                .route(web::put().to(AdminService::update_link))
                .route(web::delete().to(AdminService::delete_link)),
        )
        .service(
            web::resource("/message/{id}")
                .wrap(AdminAuth::new(admin))
                .route(web::delete().to(AdminService::delete_message)),
        )
        .service(redirect_routes());
}
