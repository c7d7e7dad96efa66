//! # Data Transfer Objects
//!
//! HTTP 계층과 서비스 계층 사이에서 주고받는 요청/응답 구조체입니다.
//! 요청 DTO는 `validator` derive로 입력을 검증하며, 검증 실패는 트랜잭션이 시작되기 전에
//! `AppError::ValidationError`로 거부됩니다.
//!
//! 응답 DTO는 엔티티에서 `From` 변환으로 만들어지며 비밀번호 해시 같은 내부 필드를 노출하지 않습니다.

pub mod common;
pub mod users;
pub mod carts;
pub mod orders;
pub mod products;

pub use common::ApiResponse;
