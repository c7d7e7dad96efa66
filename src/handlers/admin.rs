//! 카탈로그 관리자 핸들러
//!
//! `/admin` 스코프는 `ManageCatalog` capability를 요구합니다 (고객 토큰은 403).
use actix_web::{delete, post, put, web, HttpResponse};
use validator::Validate;
use crate::core::errors::AppError;
use crate::core::registry::ServiceLocator;
use crate::domain::dto::common::ApiResponse;
use crate::domain::dto::products::request::{
    CreateCategoryRequest, CreateProductRequest, UpdateCategoryRequest, UpdateProductRequest,
};
use crate::domain::models::auth::AuthenticatedUser;
use crate::services::products::CatalogService;

#[post("/categories")]
pub async fn create_category(
    admin: AuthenticatedUser,
    payload: web::Json<CreateCategoryRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let catalog = ServiceLocator::get::<CatalogService>()?;
    let category = catalog.create_category(&payload).await?;

    log::info!("관리자 {} 카테고리 생성: {}", admin.email, category.id);
    Ok(HttpResponse::Created().json(ApiResponse::success(category)))
}

#[put("/categories/{category_id}")]
pub async fn update_category(
    category_id: web::Path<String>,
    payload: web::Json<UpdateCategoryRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let catalog = ServiceLocator::get::<CatalogService>()?;
    let category = catalog.update_category(&category_id, &payload).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(category)))
}

#[delete("/categories/{category_id}")]
pub async fn delete_category(
    category_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let catalog = ServiceLocator::get::<CatalogService>()?;
    catalog.delete_category(&category_id).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::message("카테고리가 삭제되었습니다")))
}

#[post("/products")]
pub async fn create_product(
    admin: AuthenticatedUser,
    payload: web::Json<CreateProductRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let catalog = ServiceLocator::get::<CatalogService>()?;
    let product = catalog.create_product(&payload).await?;

    log::info!("관리자 {} 상품 생성: {}", admin.email, product.id);
    Ok(HttpResponse::Created().json(ApiResponse::success(product)))
}

/// 전달된 필드만 변경합니다. `stock`은 재고를 해당 값으로 설정합니다.
#[put("/products/{product_id}")]
pub async fn update_product(
    product_id: web::Path<String>,
    payload: web::Json<UpdateProductRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let catalog = ServiceLocator::get::<CatalogService>()?;
    let product = catalog.update_product(&product_id, &payload).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(product)))
}

#[delete("/products/{product_id}")]
pub async fn delete_product(
    product_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let catalog = ServiceLocator::get::<CatalogService>()?;
    catalog.delete_product(&product_id).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::message("상품이 삭제되었습니다")))
}
