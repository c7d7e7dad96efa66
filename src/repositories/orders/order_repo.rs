//! 주문 저장소 계약
//!
//! 주문 항목은 주문 문서에 내장(embedded)되어 한 번의 쓰기로 저장됩니다.
//! 저장된 주문은 이후 수정되지 않습니다.

use async_trait::async_trait;
use crate::core::errors::AppResult;
use crate::domain::entities::Order;
use crate::domain::models::pagination::PageRequest;

#[async_trait]
pub trait OrderRepository: Send {
    async fn insert_order(&mut self, order: &Order) -> AppResult<()>;

    async fn find_order(&mut self, order_id: &str) -> AppResult<Option<Order>>;

    /// 사용자의 주문을 최신순으로 한 페이지 조회합니다.
    ///
    /// # Returns
    ///
    /// `(페이지 주문 목록, 전체 주문 수)`
    async fn list_orders_for_user(&mut self, user_id: &str, page: PageRequest) -> AppResult<(Vec<Order>, u64)>;
}
