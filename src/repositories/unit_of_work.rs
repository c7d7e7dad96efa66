//! # Unit of Work
//!
//! 여러 엔티티에 걸친 변경을 하나의 트랜잭션으로 묶는 추상화입니다.
//!
//! ```text
//! Store::begin()
//!    └─ Box<dyn UnitOfWork>
//!         ├─ 리포지토리 메서드 호출 (잠금 획득, 읽기, 쓰기)
//!         ├─ commit()   → 모든 변경이 한 번에 반영
//!         └─ rollback() 또는 drop → 어떤 변경도 반영되지 않음
//! ```
//!
//! 커밋 전에 작업 단위가 drop되면(에러 전파, 요청 취소) 트랜잭션은 중단됩니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! let mut uow = store.begin().await?;
//! let cart = uow.find_cart_for_update(user_id).await?;
//! uow.insert_cart_item(&item).await?;
//! uow.commit().await?;
//! ```

use std::future::Future;
use std::time::Duration;
use async_trait::async_trait;
use crate::config::StoreConfig;
use crate::core::errors::{AppError, AppResult};
use crate::repositories::{
    carts::CartRepository,
    orders::OrderRepository,
    products::{CategoryRepository, ProductRepository, StockLedger},
    tokens::RefreshTokenRepository,
    users::UserRepository,
};

/// 재시도 간격의 기본 단위. n번째 재시도 전에 `n * RETRY_BACKOFF` 만큼 대기합니다.
const RETRY_BACKOFF: Duration = Duration::from_millis(20);

/// 트랜잭션 하나의 범위에서 모든 리포지토리 연산을 제공하는 작업 단위
#[async_trait]
pub trait UnitOfWork:
    UserRepository
    + RefreshTokenRepository
    + CartRepository
    + CategoryRepository
    + ProductRepository
    + StockLedger
    + OrderRepository
    + Send
{
    /// 모든 변경을 원자적으로 반영합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::TransactionConflict` - 동시 트랜잭션과 충돌하여 커밋되지 않은 경우
    async fn commit(self: Box<Self>) -> AppResult<()>;

    /// 모든 변경을 버립니다.
    async fn rollback(self: Box<Self>) -> AppResult<()>;
}

/// 작업 단위를 시작하는 영속 저장소
#[async_trait]
pub trait Store: Send + Sync {
    async fn begin(&self) -> AppResult<Box<dyn UnitOfWork>>;

    /// 부팅 로그에 표시할 저장소 이름
    fn backend_name(&self) -> String;
}

/// 트랜잭션 충돌 시 작업 단위 전체를 다시 실행합니다.
///
/// `AppError::TransactionConflict`만 재시도하며 비즈니스 규칙 위반이나
/// 다른 인프라 오류는 즉시 반환합니다. 최대 시도 횟수는
/// [`StoreConfig::max_transaction_attempts`]를 따릅니다.
///
/// ```rust,ignore
/// with_retry("place_order", move || self.place_order_once(user_id)).await
/// ```
pub async fn with_retry<T, F, Fut>(label: &str, operation: F) -> AppResult<T>
where
    F: Fn() -> Fut,
    Fut: Future<Output = AppResult<T>>,
{
    retry_with_attempts(label, StoreConfig::max_transaction_attempts(), operation).await
}

async fn retry_with_attempts<T, F, Fut>(label: &str, max_attempts: u32, operation: F) -> AppResult<T>
where
    F: Fn() -> Fut,
    Fut: Future<Output = AppResult<T>>,
{
    let mut attempt = 1;

    loop {
        match operation().await {
            Err(AppError::TransactionConflict(reason)) if attempt < max_attempts => {
                log::warn!("🔁 {} 트랜잭션 충돌, 재시도 {}/{}: {}", label, attempt, max_attempts, reason);
                tokio::time::sleep(RETRY_BACKOFF * attempt).await;
                attempt += 1;
            }
            result => return result,
        }
    }
}
