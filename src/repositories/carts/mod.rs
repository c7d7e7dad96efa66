//! 장바구니 데이터 액세스 계약

pub mod cart_repo;

pub use cart_repo::CartRepository;
