//! 주문 DTO

pub mod response;

pub use response::{OrderItemResponse, OrderListResponse, OrderResponse};
