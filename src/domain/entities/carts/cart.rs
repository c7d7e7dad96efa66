//! Cart / CartItem Entities
//!
//! 장바구니는 사용자와 1:1로 연결되며 가입 시점에 생성됩니다.
//! 사용자가 장바구니 자체를 수정하지 않고 항목(CartItem)을 통해서만 변경됩니다.
//! 하나의 장바구니에는 상품별로 활성 항목이 최대 하나만 존재합니다.

use mongodb::bson::DateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cart {
    #[serde(rename = "_id")]
    pub id: String,
    pub user_id: String,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl Cart {
    pub fn new(user_id: &str) -> Self {
        let now = DateTime::now();

        Self {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            created_at: now,
            updated_at: now,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartItem {
    #[serde(rename = "_id")]
    pub id: String,
    pub cart_id: String,
    pub product_id: String,
    /// 1 이상
    pub quantity: i32,
    pub created_at: DateTime,
    pub updated_at: DateTime,
    /// 소프트 삭제 시각 (제거 또는 주문 확정 시)
    pub deleted_at: Option<DateTime>,
}

impl CartItem {
    pub fn new(cart_id: &str, product_id: &str, quantity: i32) -> Self {
        let now = DateTime::now();

        Self {
            id: Uuid::new_v4().to_string(),
            cart_id: cart_id.to_string(),
            product_id: product_id.to_string(),
            quantity,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }
    }

    pub fn is_active(&self) -> bool {
        self.deleted_at.is_none()
    }

    pub fn soft_delete(&mut self) {
        let now = DateTime::now();
        self.deleted_at = Some(now);
        self.updated_at = now;
    }
}
