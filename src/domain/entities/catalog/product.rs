//! Product Entity
//!
//! 재고(`stock`)는 판매 가능 수량의 유일한 기준값입니다.
//! 주문 확정 트랜잭션 안에서만 차감되고, 모든 장바구니 변경 전에 검증됩니다.

use mongodb::bson::DateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    #[serde(rename = "_id")]
    pub id: String,
    pub category_id: String,
    pub name: String,
    pub description: String,
    /// 단가 (0 이상)
    pub price: f64,
    /// 재고 수량 (0 이상)
    pub stock: i32,
    pub sku: String,
    pub is_active: bool,
    pub created_at: DateTime,
    pub updated_at: DateTime,
    pub deleted_at: Option<DateTime>,
}

impl Product {
    pub fn new(
        category_id: String,
        name: String,
        description: String,
        price: f64,
        stock: i32,
        sku: String,
    ) -> Self {
        let now = DateTime::now();

        Self {
            id: Uuid::new_v4().to_string(),
            category_id,
            name,
            description,
            price,
            stock,
            sku,
            is_active: true,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }
    }

    /// 판매 중인 상품인지 확인 (활성 + 삭제되지 않음)
    pub fn is_available(&self) -> bool {
        self.is_active && self.deleted_at.is_none()
    }

    /// 요청 수량을 현재 재고로 감당할 수 있는지 확인
    pub fn can_supply(&self, quantity: i32) -> bool {
        quantity <= self.stock
    }

    pub fn soft_delete(&mut self) {
        let now = DateTime::now();
        self.is_active = false;
        self.deleted_at = Some(now);
        self.updated_at = now;
    }
}
