//! 재고 원장 접근자
//!
//! 상품 재고는 가용성의 유일한 기준입니다. 장바구니 변경과 주문 생성은
//! 재고를 읽기 전에 반드시 [`StockLedger::find_product_for_update`]로 잠금을 획득하고,
//! 같은 작업 단위 안에서만 재고를 변경합니다.

use async_trait::async_trait;
use crate::core::errors::AppResult;
use crate::domain::entities::Product;

#[async_trait]
pub trait StockLedger: Send {
    /// 상품을 조회하면서 쓰기 잠금을 획득합니다.
    async fn find_product_for_update(&mut self, product_id: &str) -> AppResult<Option<Product>>;

    /// 재고가 `quantity` 이상일 때만 차감합니다.
    ///
    /// # Returns
    ///
    /// 차감되었으면 `true`, 재고가 부족하거나 상품이 없으면 `false`
    async fn decrement_product_stock(&mut self, product_id: &str, quantity: i32) -> AppResult<bool>;

    /// 관리자 재고 조정
    async fn set_product_stock(&mut self, product_id: &str, stock: i32) -> AppResult<()>;
}
