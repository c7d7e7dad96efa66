//! 주문 HTTP 핸들러
use actix_web::{get, post, web, HttpResponse};
use crate::core::errors::AppError;
use crate::core::registry::ServiceLocator;
use crate::domain::dto::common::ApiResponse;
use crate::domain::dto::products::request::PageQuery;
use crate::domain::models::auth::AuthenticatedUser;
use crate::domain::models::pagination::PageRequest;
use crate::services::orders::OrderService;

/// 장바구니 전체를 하나의 주문으로 전환합니다.
///
/// # Endpoint
/// `POST /orders`
#[post("")]
pub async fn place_order(
    user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let order_service = ServiceLocator::get::<OrderService>()?;
    let order = order_service.place_order(&user.user_id).await?;

    Ok(HttpResponse::Created().json(ApiResponse::success(order)))
}

/// # Endpoint
/// `GET /orders?page=1&limit=10`
#[get("")]
pub async fn get_orders(
    user: AuthenticatedUser,
    query: web::Query<PageQuery>,
) -> Result<HttpResponse, AppError> {
    let order_service = ServiceLocator::get::<OrderService>()?;
    let page = PageRequest::clamped(query.page, query.limit);
    let orders = order_service.get_orders(&user.user_id, page).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(orders)))
}

/// # Endpoint
/// `GET /orders/{order_id}`
#[get("/{order_id}")]
pub async fn get_order(
    user: AuthenticatedUser,
    order_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let order_service = ServiceLocator::get::<OrderService>()?;
    let order = order_service.get_order(&user.user_id, &order_id).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(order)))
}
