//! 인증 관련 도메인 모델

pub mod authenticated_user;
pub mod role;

pub use authenticated_user::AuthenticatedUser;
pub use role::{Capability, UserRole};
