//! Admin endpoints (basic auth)
//!
//! - GET /stats?q= - 链接、留言与汇总数据
//! - PUT /link/{id} - 修改目标地址与别名
//! - DELETE /link/{id}
//! - DELETE /message/{id}

use actix_web::{HttpResponse, Responder, web};
use chrono::Utc;
use tracing::info;

use crate::api::helpers::error_response;
use crate::api::types::{LinkView, StatsQuery, StatsResponse, UpdateLinkPayload, UpdateLinkResponse};
use crate::errors::Result;
use crate::services::{ContactService, LinkService};

/// 应用启动时间，用于计算 uptime
#[derive(Clone, Debug)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}

impl AppStartTime {
    pub fn now() -> Self {
        Self {
            start_datetime: Utc::now(),
        }
    }
}

pub struct AdminService {}

impl AdminService {
    pub async fn get_stats(
        query: web::Query<StatsQuery>,
        links: web::Data<LinkService>,
        contacts: web::Data<ContactService>,
        started: web::Data<AppStartTime>,
    ) -> impl Responder {
        let query = query.into_inner().q.unwrap_or_default().trim().to_string();

        match Self::collect_stats(&query, &links, &contacts, &started).await {
            Ok(stats) => HttpResponse::Ok().json(stats),
            Err(e) => error_response(&e),
        }
    }

    async fn collect_stats(
        query: &str,
        links: &LinkService,
        contacts: &ContactService,
        started: &AppStartTime,
    ) -> Result<StatsResponse> {
        let now = Utc::now();
        let search = (!query.is_empty()).then_some(query);

        let link_list = links.list_links(search).await?;
        let totals = links.stats().await?;
        let messages = contacts.list().await?;
        let total_messages = contacts.count().await?;

        Ok(StatsResponse {
            links: link_list
                .into_iter()
                .map(|link| LinkView::from_link(link, now))
                .collect(),
            messages,
            total_links: totals.total_links,
            total_clicks: totals.total_clicks,
            active_links: totals.active_links,
            total_messages,
            uptime_seconds: (now - started.start_datetime).num_seconds().max(0),
            version: env!("CARGO_PKG_VERSION"),
            query: query.to_string(),
        })
    }

    pub async fn update_link(
        path: web::Path<i32>,
        links: web::Data<LinkService>,
        payload: web::Json<UpdateLinkPayload>,
    ) -> impl Responder {
        let id = path.into_inner();
        let payload = payload.into_inner();

        match links.update_link(id, &payload.url, &payload.alias).await {
            Ok(link) => {
                info!("Admin API: link #{} updated", id);
                HttpResponse::Ok().json(UpdateLinkResponse {
                    message: "Link updated",
                    link: LinkView::from_link(link, Utc::now()),
                })
            }
            Err(e) => error_response(&e),
        }
    }

    pub async fn delete_link(path: web::Path<i32>, links: web::Data<LinkService>) -> impl Responder {
        let id = path.into_inner();
        match links.delete_link(id).await {
            Ok(()) => {
                info!("Admin API: link #{} deleted", id);
                HttpResponse::NoContent().finish()
            }
            Err(e) => error_response(&e),
        }
    }

    pub async fn delete_message(
        path: web::Path<i32>,
        contacts: web::Data<ContactService>,
    ) -> impl Responder {
        let id = path.into_inner();
        match contacts.delete(id).await {
            Ok(()) => {
                info!("Admin API: message #{} deleted", id);
                HttpResponse::NoContent().finish()
            }
            Err(e) => error_response(&e),
        }
    }
}
