use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateCategoryRequest {
    #[validate(length(min = 1, max = 100, message = "카테고리 이름은 1-100자 사이여야 합니다"))]
    pub name: String,

    #[serde(default)]
    #[validate(length(max = 1000, message = "설명은 1000자 이하여야 합니다"))]
    pub description: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateCategoryRequest {
    #[validate(length(min = 1, max = 100, message = "카테고리 이름은 1-100자 사이여야 합니다"))]
    pub name: Option<String>,

    #[validate(length(max = 1000, message = "설명은 1000자 이하여야 합니다"))]
    pub description: Option<String>,

    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateProductRequest {
    #[validate(length(min = 1, message = "카테고리 ID가 필요합니다"))]
    pub category_id: String,

    #[validate(length(min = 1, max = 200, message = "상품명은 1-200자 사이여야 합니다"))]
    pub name: String,

    #[serde(default)]
    pub description: String,

    #[validate(range(min = 0.0, message = "가격은 0 이상이어야 합니다"))]
    pub price: f64,

    #[validate(range(min = 0, message = "재고는 0 이상이어야 합니다"))]
    pub stock: i32,

    #[validate(length(min = 1, max = 64, message = "SKU는 1-64자 사이여야 합니다"))]
    pub sku: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateProductRequest {
    pub category_id: Option<String>,

    #[validate(length(min = 1, max = 200, message = "상품명은 1-200자 사이여야 합니다"))]
    pub name: Option<String>,

    pub description: Option<String>,

    #[validate(range(min = 0.0, message = "가격은 0 이상이어야 합니다"))]
    pub price: Option<f64>,

    #[validate(range(min = 0, message = "재고는 0 이상이어야 합니다"))]
    pub stock: Option<i32>,

    #[validate(length(min = 1, max = 64, message = "SKU는 1-64자 사이여야 합니다"))]
    pub sku: Option<String>,

    pub is_active: Option<bool>,
}

/// 목록 조회 쿼리. 값 보정은 [`PageRequest::clamped`](crate::domain::models::pagination::PageRequest::clamped)가 담당합니다.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PageQuery {
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

/// 상품 검색 요청 (`GET /products/search?query=...`)
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_price_range"))]
pub struct SearchProductsRequest {
    #[serde(default)]
    #[validate(length(max = 200, message = "검색어는 200자 이하여야 합니다"))]
    pub query: String,

    pub page: Option<i64>,

    pub limit: Option<i64>,

    pub category_id: Option<String>,

    #[validate(range(min = 0.0, message = "최소 가격은 0 이상이어야 합니다"))]
    pub min_price: Option<f64>,

    #[validate(range(min = 0.0, message = "최대 가격은 0 이상이어야 합니다"))]
    pub max_price: Option<f64>,
}

/// 최소 가격이 최대 가격보다 클 수 없습니다
fn validate_price_range(req: &SearchProductsRequest) -> Result<(), ValidationError> {
    if let (Some(min), Some(max)) = (req.min_price, req.max_price) {
        if min > max {
            return Err(ValidationError::new("invalid_price_range")
                .with_message("최소 가격이 최대 가격보다 클 수 없습니다".into()));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn search(query: &str) -> SearchProductsRequest {
        SearchProductsRequest {
            query: query.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_inverted_price_range_is_rejected() {
        let mut req = search("mug");
        req.min_price = Some(20.0);
        req.max_price = Some(10.0);

        assert!(req.validate().is_err());

        req.max_price = Some(20.0);
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_empty_query_is_rejected() {
        assert!(search("").validate().is_err());
    }

    #[test]
    fn test_negative_stock_is_rejected() {
        let req = CreateProductRequest {
            category_id: "c-1".into(),
            name: "Mug".into(),
            description: String::new(),
            price: 3.0,
            stock: -1,
            sku: "MUG-1".into(),
        };

        assert!(req.validate().is_err());
    }
}
