//! 장바구니 서비스 모듈

pub mod cart_service;

pub use cart_service::CartService;
