use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::domain::entities::{Order, OrderItem};
use crate::domain::models::pagination::PaginationMeta;
use crate::utils::time::to_utc;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItemResponse {
    pub id: String,
    pub product_id: String,
    pub product_name: String,
    pub quantity: i32,
    /// 주문 시점 단가
    pub price: f64,
    pub subtotal: f64,
}

impl From<&OrderItem> for OrderItemResponse {
    fn from(item: &OrderItem) -> Self {
        Self {
            id: item.id.clone(),
            product_id: item.product_id.clone(),
            product_name: item.product_name.clone(),
            quantity: item.quantity,
            price: item.price,
            subtotal: item.subtotal(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderResponse {
    pub id: String,
    pub user_id: String,
    pub items: Vec<OrderItemResponse>,
    pub total: f64,
    pub created_at: DateTime<Utc>,
}

impl From<Order> for OrderResponse {
    fn from(order: Order) -> Self {
        Self {
            items: order.items.iter().map(OrderItemResponse::from).collect(),
            id: order.id,
            user_id: order.user_id,
            total: order.total,
            created_at: to_utc(order.created_at),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct OrderListResponse {
    pub orders: Vec<OrderResponse>,
    pub meta: PaginationMeta,
}
