//! Users Entity Module
//!
//! 사용자 계정과 사용자에게 발급된 리프레시 토큰 레코드를 정의합니다.

pub mod user;
pub mod refresh_token;

pub use user::User;
pub use refresh_token::RefreshToken;
