use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::domain::entities::{Category, Product};
use crate::domain::models::pagination::PaginationMeta;
use crate::utils::time::to_utc;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryResponse {
    pub id: String,
    pub name: String,
    pub description: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Category> for CategoryResponse {
    fn from(category: Category) -> Self {
        Self {
            id: category.id,
            name: category.name,
            description: category.description,
            is_active: category.is_active,
            created_at: to_utc(category.created_at),
            updated_at: to_utc(category.updated_at),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductResponse {
    pub id: String,
    pub category_id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub stock: i32,
    pub sku: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            category_id: product.category_id,
            name: product.name,
            description: product.description,
            price: product.price,
            stock: product.stock,
            sku: product.sku,
            is_active: product.is_active,
            created_at: to_utc(product.created_at),
            updated_at: to_utc(product.updated_at),
        }
    }
}

/// 검색 결과 한 건: 상품 정보와 관련도 점수
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductSearchResult {
    #[serde(flatten)]
    pub product: ProductResponse,
    pub rank: f32,
}

#[derive(Debug, Clone, Serialize)]
pub struct SearchProductsResponse {
    pub results: Vec<ProductSearchResult>,
    pub meta: PaginationMeta,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProductListResponse {
    pub products: Vec<ProductResponse>,
    pub meta: PaginationMeta,
}
