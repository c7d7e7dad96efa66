use serde::{Deserialize, Serialize};
use validator::Validate;

/// 장바구니 상품 추가 요청
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AddToCartRequest {
    #[validate(length(min = 1, message = "상품 ID가 필요합니다"))]
    pub product_id: String,

    #[validate(range(min = 1, message = "수량은 1 이상이어야 합니다"))]
    pub quantity: i32,
}

/// 장바구니 항목 수량 변경 요청 (항목 ID는 경로로 전달)
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateCartItemRequest {
    #[validate(range(min = 1, message = "수량은 1 이상이어야 합니다"))]
    pub quantity: i32,
}
