//! 장바구니 HTTP 핸들러
//!
//! 모든 엔드포인트는 인증된 사용자 자신의 장바구니만 다룹니다.
//! 다른 사용자의 항목 ID는 존재하지 않는 것으로 응답합니다 (404).
use actix_web::{delete, get, post, put, web, HttpResponse};
use validator::Validate;
use crate::core::errors::AppError;
use crate::core::registry::ServiceLocator;
use crate::domain::dto::carts::request::{AddToCartRequest, UpdateCartItemRequest};
use crate::domain::dto::common::ApiResponse;
use crate::domain::models::auth::AuthenticatedUser;
use crate::services::carts::CartService;

/// # Endpoint
/// `GET /cart`
#[get("")]
pub async fn get_cart(
    user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let cart_service = ServiceLocator::get::<CartService>()?;
    let cart = cart_service.get_cart(&user.user_id).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(cart)))
}

/// 상품을 담습니다. 이미 담긴 상품이면 수량이 합산됩니다.
///
/// # Endpoint
/// `POST /cart/items`
#[post("/items")]
pub async fn add_item(
    user: AuthenticatedUser,
    payload: web::Json<AddToCartRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let cart_service = ServiceLocator::get::<CartService>()?;
    let cart = cart_service
        .add_item(&user.user_id, &payload.product_id, payload.quantity)
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(cart)))
}

/// # Endpoint
/// `PUT /cart/items/{item_id}`
#[put("/items/{item_id}")]
pub async fn update_item(
    user: AuthenticatedUser,
    item_id: web::Path<String>,
    payload: web::Json<UpdateCartItemRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let cart_service = ServiceLocator::get::<CartService>()?;
    let cart = cart_service
        .update_item(&user.user_id, &item_id, payload.quantity)
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(cart)))
}

/// # Endpoint
/// `DELETE /cart/items/{item_id}`
#[delete("/items/{item_id}")]
pub async fn remove_item(
    user: AuthenticatedUser,
    item_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let cart_service = ServiceLocator::get::<CartService>()?;
    cart_service.remove_item(&user.user_id, &item_id).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::message("장바구니에서 삭제되었습니다")))
}
