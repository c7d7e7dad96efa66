//! 장바구니 DTO

pub mod request;
pub mod response;

pub use request::{AddToCartRequest, UpdateCartItemRequest};
pub use response::{CartItemResponse, CartResponse, CategorySummary, ProductSummary};
