//! # 주문 서비스
//!
//! 장바구니를 주문으로 전환하는 트랜잭션과 주문 조회를 담당합니다.
//!
//! ## 주문 생성 (하나의 작업 단위)
//!
//! 1. 장바구니 잠금 후 활성 항목 조회 (비어 있으면 `CartEmpty`)
//! 2. 항목별 상품 잠금과 재고 재검증 (부족하면 `InsufficientStock`, 아무것도 변경되지 않음)
//! 3. 재고 차감
//! 4. 상품명/가격 스냅샷을 담은 주문 저장
//! 5. 장바구니 항목 소프트 삭제
//! 6. 커밋
//!
//! 어느 단계에서든 실패하면 작업 단위가 drop되어 전체가 롤백됩니다.

use std::sync::Arc;
use crate::core::errors::{AppError, AppResult};
use crate::domain::dto::orders::response::{OrderListResponse, OrderResponse};
use crate::domain::entities::{Order, OrderItem, Product};
use crate::domain::models::pagination::{PageRequest, PaginationMeta};
use crate::repositories::{with_retry, Store};
use crate::services::carts::cart_service::insufficient_stock;

pub struct OrderService {
    store: Arc<dyn Store>,
}

impl OrderService {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }

    /// # Errors
    ///
    /// * `AppError::NotFound` - 장바구니가 없거나 담긴 상품이 더 이상 판매되지 않는 경우
    /// * `AppError::CartEmpty` - 활성 항목이 없는 경우
    /// * `AppError::InsufficientStock` - 어느 한 항목이라도 재고가 부족한 경우
    pub async fn place_order(&self, user_id: &str) -> AppResult<OrderResponse> {
        with_retry("place_order", move || self.place_order_once(user_id)).await
    }

    /// 사용자의 주문을 최신순으로 조회합니다.
    pub async fn get_orders(&self, user_id: &str, page: PageRequest) -> AppResult<OrderListResponse> {
        let mut uow = self.store.begin().await?;
        let (orders, total) = uow.list_orders_for_user(user_id, page).await?;
        uow.commit().await?;

        Ok(OrderListResponse {
            orders: orders.into_iter().map(OrderResponse::from).collect(),
            meta: PaginationMeta::new(page, total),
        })
    }

    /// 다른 사용자의 주문은 존재하지 않는 것으로 응답합니다.
    pub async fn get_order(&self, user_id: &str, order_id: &str) -> AppResult<OrderResponse> {
        let mut uow = self.store.begin().await?;
        let order = uow
            .find_order(order_id)
            .await?
            .filter(|order| order.user_id == user_id)
            .ok_or_else(|| AppError::NotFound("order not found".to_string()))?;
        uow.commit().await?;

        Ok(OrderResponse::from(order))
    }

    async fn place_order_once(&self, user_id: &str) -> AppResult<OrderResponse> {
        let mut uow = self.store.begin().await?;

        let cart = uow
            .find_cart_for_update(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("cart not found".to_string()))?;

        let items = uow.find_active_cart_items(&cart.id).await?;
        if items.is_empty() {
            return Err(AppError::CartEmpty);
        }

        let mut lines = Vec::with_capacity(items.len());
        for item in items {
            let product = uow
                .find_product_for_update(&item.product_id)
                .await?
                .filter(Product::is_available)
                .ok_or_else(|| AppError::NotFound("product not found".to_string()))?;

            if !product.can_supply(item.quantity) {
                return Err(insufficient_stock(&product));
            }
            lines.push((item, product));
        }

        for (item, product) in &lines {
            if !uow.decrement_product_stock(&product.id, item.quantity).await? {
                return Err(insufficient_stock(product));
            }
        }

        let order_items = lines
            .iter()
            .map(|(item, product)| OrderItem::new(&product.id, &product.name, item.quantity, product.price))
            .collect();
        let order = Order::new(user_id, order_items);

        uow.insert_order(&order).await?;
        uow.clear_cart_items(&cart.id).await?;
        uow.commit().await?;

        log::info!("🧾 주문 생성: {} (user: {}, total: {:.2})", order.id, user_id, order.total);
        Ok(OrderResponse::from(order))
    }
}
