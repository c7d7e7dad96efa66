//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//!
//! ## 아키텍처 위치
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Client (Browser, Mobile App, API Client)
//! └─────────────────────┬───────────────────────┘
//!                       │ HTTP Request/Response
//! ┌─────────────────────▼───────────────────────┐
//!   Middlewares - JWT 검증, capability 검사
//! ├─────────────────────────────────────────────┤
//!   Handlers (이 모듈) - 입력 검증, 응답 포장       ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   Services - 비즈니스 로직, 작업 단위 경계         ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   Repositories - Store / UnitOfWork             ← Repository Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## 규칙
//!
//! - 요청 본문은 `validator`로 검사하며 실패하면 트랜잭션을 시작하기 전에 400으로 응답합니다.
//! - 서비스는 [`ServiceLocator`](crate::core::registry::ServiceLocator)에서 꺼내 사용합니다.
//! - 성공 응답은 `ApiResponse { success, data, message }`로 감쌉니다.
//! - 실패는 `AppError`의 `ResponseError` 구현이 `{ error, message }`로 변환합니다.
//!
//! ## 모듈 구성
//!
//! - **`auth`**: 가입, 로그인, 토큰 갱신, 로그아웃
//! - **`users`**: 내 프로필 조회/수정/탈퇴
//! - **`carts`**: 장바구니 조회와 항목 변경
//! - **`orders`**: 주문 생성과 조회
//! - **`products`**: 상품/카테고리 공개 조회와 검색
//! - **`admin`**: 카탈로그 관리 (관리자 전용)

pub mod admin;
pub mod auth;
pub mod carts;
pub mod orders;
pub mod products;
pub mod users;
