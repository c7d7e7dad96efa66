//! 주문 데이터 액세스 계약

pub mod order_repo;

pub use order_repo::OrderRepository;
