//! # Domain Layer
//!
//! ```text
//! domain/
//! ├── entities/   ← 저장소에 영속되는 엔티티 (User, Cart, Product, Order ...)
//! ├── models/     ← 값 객체 (역할/권한, JWT 클레임, 이벤트, 페이지네이션, 검색)
//! └── dto/        ← HTTP 요청/응답 구조체
//! ```

pub mod entities;
pub mod dto;
pub mod models;
