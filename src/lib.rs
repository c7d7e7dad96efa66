//! 쇼핑 서비스 백엔드
//!
//! 인증된 사용자의 장바구니를 주문으로 전환하는 트랜잭션 중심의 전자상거래 백엔드입니다.
//!
//! # Features
//!
//! - **자격 증명**: bcrypt 비밀번호 해싱, HS256 액세스/리프레시 토큰, 리프레시 토큰 1회 사용 회전
//! - **장바구니**: 재고 기준 수량 검증과 장바구니 단위 직렬화
//! - **주문**: 재고 차감과 가격 스냅샷을 하나의 트랜잭션으로 처리 (전부 또는 전무)
//! - **카탈로그**: 카테고리/상품 관리와 관련도 기반 검색, 페이지 보정
//! - **저장소**: MongoDB 멀티 도큐먼트 트랜잭션 또는 메모리 저장소
//! - **이벤트**: 가입/로그인/토큰 갱신 이벤트를 커밋 후 Redis로 발행
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트, 인증 미들웨어
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 입력 검증, 응답 포장
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 비즈니스 로직, 작업 단위 경계, 충돌 재시도
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← Store / UnitOfWork (MongoDB, Memory)
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use shop_service_backend::repositories::memory::MemoryStore;
//! use shop_service_backend::services::ServiceContainer;
//!
//! let container = ServiceContainer::build(
//!     Arc::new(MemoryStore::new()),
//!     Arc::new(LogEventPublisher::default()),
//!     JwtSettings::from_env(),
//!     PasswordHasher::from_env(),
//! );
//! let auth = container.auth.register(request).await?;
//! let order = container.orders.place_order(&auth.user.id).await?;
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod domain;
pub mod events;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod middlewares;
