//! Listing HTTP handlers
//!
//! Thin layer over [`ListingService`]: deserialize, delegate, map errors to
//! status codes. Wire field names are camelCase to match the frontend
//! contract; every returned listing carries its computed `rating`.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, Responder, Result as ActixResult, web};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{error, trace, warn};

use crate::errors::ScrapTradeError;
use crate::services::{ListingService, NewListing, rating};
use crate::storage::{Listing, ListingFilter, ListingKind};

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct PostNewListing {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub category: Option<String>,
    pub details: Option<String>,
    pub rate: Option<f64>,
    pub unit: Option<String>,
    pub city: Option<String>,
    pub user_name: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ListingsQuery {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub category: Option<String>,
    pub city: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ListingResponse {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: ListingKind,
    pub category: String,
    pub details: String,
    pub rate: f64,
    pub unit: String,
    pub city: String,
    pub user_name: String,
    pub views: usize,
    pub clicks: usize,
    /// 由 (views, clicks) 现算的星级，不落库
    pub rating: u8,
    pub created_at: String,
}

impl From<Listing> for ListingResponse {
    fn from(listing: Listing) -> Self {
        let stars = rating(listing.views, listing.clicks);
        Self {
            id: listing.id,
            kind: listing.kind,
            category: listing.category,
            details: listing.details,
            rate: listing.rate,
            unit: listing.unit,
            city: listing.city,
            user_name: listing.user_name,
            views: listing.views,
            clicks: listing.clicks,
            rating: stars,
            created_at: listing.created_at.to_rfc3339(),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ContactRevealResponse {
    pub contact_email: String,
    pub message: String,
}

/// 按错误分类映射状态码：校验 → 400，不存在 → 404，其余 → 500
fn error_response(err: &ScrapTradeError) -> HttpResponse {
    let status = match err {
        ScrapTradeError::Validation(_) => StatusCode::BAD_REQUEST,
        ScrapTradeError::NotFound(_) => StatusCode::NOT_FOUND,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };

    if status.is_server_error() {
        error!("Request failed: {}", err);
    } else {
        warn!("Request rejected: {}", err);
    }

    HttpResponse::build(status)
        .append_header(("Content-Type", "application/json; charset=utf-8"))
        .json(serde_json::json!({ "error": err.message() }))
}

/// 获取挂单列表（支持 type/category/city 过滤，最新在前）
pub async fn get_listings(
    query: web::Query<ListingsQuery>,
    service: web::Data<Arc<ListingService>>,
) -> ActixResult<impl Responder> {
    trace!("Listing API: list request with filters: {:?}", query);

    let kind = match query.kind.as_deref().filter(|s| !s.is_empty()) {
        Some(raw) => match raw.parse::<ListingKind>() {
            Ok(kind) => Some(kind),
            Err(e) => return Ok(error_response(&ScrapTradeError::validation(e))),
        },
        None => None,
    };

    let filter = ListingFilter {
        kind,
        category: query.category.clone().filter(|s| !s.is_empty()),
        city: query.city.clone().filter(|s| !s.is_empty()),
    };

    match service.list(filter).await {
        Ok(listings) => {
            let body: Vec<ListingResponse> =
                listings.into_iter().map(ListingResponse::from).collect();
            trace!("Listing API: returning {} listings", body.len());
            Ok(HttpResponse::Ok()
                .append_header(("Content-Type", "application/json; charset=utf-8"))
                .json(body))
        }
        Err(e) => Ok(error_response(&e)),
    }
}

/// 创建挂单
pub async fn create_listing(
    payload: web::Json<PostNewListing>,
    service: web::Data<Arc<ListingService>>,
) -> ActixResult<impl Responder> {
    let payload = payload.into_inner();
    trace!(
        "Listing API: create request: type={:?} category={:?} city={:?}",
        payload.kind, payload.category, payload.city
    );

    let request = NewListing {
        kind: payload.kind,
        category: payload.category,
        details: payload.details,
        rate: payload.rate,
        unit: payload.unit,
        city: payload.city,
        user_name: payload.user_name,
    };

    match service.create(request).await {
        Ok(listing) => Ok(HttpResponse::Created()
            .append_header(("Content-Type", "application/json; charset=utf-8"))
            .json(ListingResponse::from(listing))),
        Err(e) => Ok(error_response(&e)),
    }
}

/// 浏览计数 +1
pub async fn record_view(
    path: web::Path<String>,
    service: web::Data<Arc<ListingService>>,
) -> ActixResult<impl Responder> {
    let id = path.into_inner();
    trace!("Listing API: view for {}", id);

    match service.record_view(&id).await {
        Ok(()) => Ok(HttpResponse::Ok()
            .append_header(("Content-Type", "application/json; charset=utf-8"))
            .json(serde_json::json!({ "success": true }))),
        Err(e) => Ok(error_response(&e)),
    }
}

/// 揭示联系方式：点击计数 +1，返回静态联系信息
pub async fn reveal_contact(
    path: web::Path<String>,
    service: web::Data<Arc<ListingService>>,
) -> ActixResult<impl Responder> {
    let id = path.into_inner();
    trace!("Listing API: contact reveal for {}", id);

    match service.record_contact_reveal(&id).await {
        Ok(contact) => Ok(HttpResponse::Ok()
            .append_header(("Content-Type", "application/json; charset=utf-8"))
            .json(ContactRevealResponse {
                contact_email: contact.email,
                message: contact.message,
            })),
        Err(e) => Ok(error_response(&e)),
    }
}

/// 挂单路由 `/api/listings`
///
/// 包含：
/// - GET/HEAD /api/listings - 过滤列表
/// - POST /api/listings - 创建挂单
/// - PATCH /api/listings/{id}/view - 浏览计数
/// - PATCH /api/listings/{id}/contact - 联系方式揭示
pub fn listing_routes() -> actix_web::Scope {
    web::scope("/api/listings")
        .route("", web::get().to(get_listings))
        .route("", web::head().to(get_listings))
        .route("", web::post().to(create_listing))
        .route("/{id}/view", web::patch().to(record_view))
        .route("/{id}/contact", web::patch().to(reveal_contact))
}
