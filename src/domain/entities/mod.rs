//! # Domain Entities Module
//!
//! 비즈니스 도메인의 핵심 엔티티를 정의합니다.
//! 모든 엔티티는 MongoDB 문서와 1:1로 매핑되며(`_id`는 UUID 문자열),
//! 메모리 저장소에서도 같은 구조체를 그대로 사용합니다.
//!
//! ```text
//! users/     User, RefreshToken
//! catalog/   Category, Product
//! carts/     Cart, CartItem
//! orders/    Order, OrderItem (주문 도큐먼트에 내장)
//! ```
//!
//! 시각 필드는 `bson::DateTime`을 사용하여 MongoDB에서 정렬 가능한 날짜 타입으로 저장됩니다.

pub mod users;
pub mod catalog;
pub mod carts;
pub mod orders;

pub use users::{RefreshToken, User};
pub use catalog::{Category, Product};
pub use carts::{Cart, CartItem};
pub use orders::{Order, OrderItem};
