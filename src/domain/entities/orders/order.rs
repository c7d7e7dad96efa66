//! Order / OrderItem Entities
//!
//! 주문은 주문 시점 장바구니의 불변 스냅샷입니다.
//! 주문 항목은 상품 ID, 수량, 주문 시점 가격과 상품명을 복사해 두므로
//! 이후 상품 가격이나 재고가 바뀌어도 이미 생성된 주문에는 영향이 없습니다.

use mongodb::bson::DateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItem {
    pub id: String,
    pub product_id: String,
    /// 주문 시점 상품명
    pub product_name: String,
    pub quantity: i32,
    /// 주문 시점 단가
    pub price: f64,
}

impl OrderItem {
    pub fn new(product_id: &str, product_name: &str, quantity: i32, price: f64) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            product_id: product_id.to_string(),
            product_name: product_name.to_string(),
            quantity,
            price,
        }
    }

    pub fn subtotal(&self) -> f64 {
        self.price * self.quantity as f64
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    #[serde(rename = "_id")]
    pub id: String,
    pub user_id: String,
    pub items: Vec<OrderItem>,
    pub total: f64,
    pub created_at: DateTime,
}

impl Order {
    /// 항목 스냅샷으로 주문을 만들고 합계를 계산합니다.
    pub fn new(user_id: &str, items: Vec<OrderItem>) -> Self {
        let total = items.iter().map(OrderItem::subtotal).sum();

        Self {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            items,
            total,
            created_at: DateTime::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_is_sum_of_subtotals() {
        let order = Order::new(
            "user-1",
            vec![
                OrderItem::new("p-1", "Mug", 3, 2.5),
                OrderItem::new("p-2", "Pen", 2, 1.25),
            ],
        );

        assert_eq!(order.total, 10.0);
        assert_eq!(order.items.len(), 2);
    }
}
