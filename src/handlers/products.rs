//! 카탈로그 공개 조회 핸들러
//!
//! 판매 중인 상품과 활성 카테고리만 노출합니다. 인증이 필요하지 않습니다.
use actix_web::{get, web, HttpResponse};
use validator::Validate;
use crate::core::errors::AppError;
use crate::core::registry::ServiceLocator;
use crate::domain::dto::common::ApiResponse;
use crate::domain::dto::products::request::{PageQuery, SearchProductsRequest};
use crate::domain::models::pagination::PageRequest;
use crate::services::products::CatalogService;

/// # Endpoint
/// `GET /products?page=1&limit=10`
#[get("")]
pub async fn list_products(
    query: web::Query<PageQuery>,
) -> Result<HttpResponse, AppError> {
    let catalog = ServiceLocator::get::<CatalogService>()?;
    let products = catalog
        .get_products(PageRequest::clamped(query.page, query.limit))
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(products)))
}

/// 이름과 설명에서 검색어를 찾아 관련도 순으로 반환합니다.
///
/// # Endpoint
/// `GET /products/search?query=coffee&min_price=1&max_price=50&page=1&limit=10`
#[get("/search")]
pub async fn search_products(
    query: web::Query<SearchProductsRequest>,
) -> Result<HttpResponse, AppError> {
    query.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let catalog = ServiceLocator::get::<CatalogService>()?;
    let results = catalog.search_products(&query).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(results)))
}

/// # Endpoint
/// `GET /products/{product_id}`
#[get("/{product_id}")]
pub async fn get_product(
    product_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let catalog = ServiceLocator::get::<CatalogService>()?;
    let product = catalog.get_product(&product_id).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(product)))
}

/// # Endpoint
/// `GET /categories`
#[get("")]
pub async fn list_categories() -> Result<HttpResponse, AppError> {
    let catalog = ServiceLocator::get::<CatalogService>()?;
    let categories = catalog.list_categories().await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(categories)))
}
