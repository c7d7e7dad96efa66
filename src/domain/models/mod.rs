//! # Domain Models
//!
//! 엔티티가 아닌 도메인 값 객체들입니다.
//!
//! - [`auth`] - 인증된 사용자, 역할과 capability
//! - [`token`] - JWT 클레임과 토큰 쌍
//! - [`events`] - 외부로 발행되는 도메인 이벤트
//! - [`pagination`] - 페이지 보정과 메타데이터 계산
//! - [`search`] - 상품 검색 조건과 관련도 계산

pub mod auth;
pub mod token;
pub mod events;
pub mod pagination;
pub mod search;
