//! 데이터 액세스 계층
//!
//! 엔티티별 리포지토리 트레이트와 이를 하나의 트랜잭션으로 묶는 [`UnitOfWork`],
//! 그리고 두 가지 저장소 구현을 제공합니다.
//!
//! # Modules
//!
//! - [`unit_of_work`] - `Store` / `UnitOfWork` 트레이트와 충돌 재시도
//! - [`users`], [`tokens`], [`carts`], [`products`], [`orders`] - 엔티티별 계약
//! - [`mongo`] - MongoDB 세션 트랜잭션 구현
//! - [`memory`] - 직렬화 가능한 프로세스 내 구현 (개발/테스트)
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::repositories::{Store, memory::MemoryStore};
//!
//! let store: Arc<dyn Store> = Arc::new(MemoryStore::new());
//! let mut uow = store.begin().await?;
//! let user = uow.find_active_user_by_email("user@example.com").await?;
//! uow.commit().await?;
//! ```

pub mod unit_of_work;
pub mod users;
pub mod tokens;
pub mod carts;
pub mod products;
pub mod orders;
pub mod mongo;
pub mod memory;

pub use unit_of_work::{with_retry, Store, UnitOfWork};
