//! 장바구니와 장바구니 항목 저장소 계약

use async_trait::async_trait;
use crate::core::errors::AppResult;
use crate::domain::entities::{Cart, CartItem};

#[async_trait]
pub trait CartRepository: Send {
    async fn find_cart(&mut self, user_id: &str) -> AppResult<Option<Cart>>;

    /// 사용자의 장바구니를 조회하면서 쓰기 잠금을 획득합니다.
    ///
    /// 같은 장바구니에 대한 변경(항목 추가, 주문)은 이 잠금으로 직렬화됩니다.
    async fn find_cart_for_update(&mut self, user_id: &str) -> AppResult<Option<Cart>>;

    /// 사용자당 장바구니는 하나입니다. 동시에 먼저 생성된 장바구니가 있으면
    /// `TransactionConflict`를 반환하여 작업 단위 전체가 다시 실행되도록 합니다.
    async fn insert_cart(&mut self, cart: &Cart) -> AppResult<()>;

    /// 삭제되지 않은 항목을 담은 순서대로 반환합니다.
    async fn find_active_cart_items(&mut self, cart_id: &str) -> AppResult<Vec<CartItem>>;

    /// 삭제되지 않은 항목을 ID로 조회합니다.
    async fn find_cart_item(&mut self, item_id: &str) -> AppResult<Option<CartItem>>;

    async fn find_active_cart_item_for_product(
        &mut self,
        cart_id: &str,
        product_id: &str,
    ) -> AppResult<Option<CartItem>>;

    async fn insert_cart_item(&mut self, item: &CartItem) -> AppResult<()>;

    async fn save_cart_item(&mut self, item: &CartItem) -> AppResult<()>;

    /// 장바구니의 활성 항목을 모두 소프트 삭제하고 건수를 반환합니다.
    async fn clear_cart_items(&mut self, cart_id: &str) -> AppResult<u64>;
}
