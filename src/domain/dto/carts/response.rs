use serde::{Deserialize, Serialize};
use crate::domain::entities::{CartItem, Category, Product};

/// 장바구니 항목에 포함되는 카테고리 요약
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategorySummary {
    pub id: String,
    pub name: String,
}

/// 장바구니 항목에 포함되는 상품 요약
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductSummary {
    pub id: String,
    pub name: String,
    pub sku: String,
    pub price: f64,
    pub stock: i32,
    pub category: Option<CategorySummary>,
}

impl ProductSummary {
    pub fn new(product: &Product, category: Option<&Category>) -> Self {
        Self {
            id: product.id.clone(),
            name: product.name.clone(),
            sku: product.sku.clone(),
            price: product.price,
            stock: product.stock,
            category: category.map(|c| CategorySummary {
                id: c.id.clone(),
                name: c.name.clone(),
            }),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartItemResponse {
    pub id: String,
    pub product_id: String,
    pub quantity: i32,
    pub subtotal: f64,
    pub product: ProductSummary,
}

impl CartItemResponse {
    pub fn new(item: &CartItem, product: &Product, category: Option<&Category>) -> Self {
        Self {
            id: item.id.clone(),
            product_id: item.product_id.clone(),
            quantity: item.quantity,
            subtotal: product.price * item.quantity as f64,
            product: ProductSummary::new(product, category),
        }
    }
}

/// 장바구니 조회 결과. `total`은 활성 항목의 가격 × 수량 합계입니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartResponse {
    pub id: String,
    pub user_id: String,
    pub items: Vec<CartItemResponse>,
    pub total: f64,
}

impl CartResponse {
    pub fn new(id: String, user_id: String, items: Vec<CartItemResponse>) -> Self {
        let total = items.iter().map(|item| item.subtotal).sum();
        Self { id, user_id, items, total }
    }
}
