//! 사용자 프로필 서비스 모듈
//!
//! ```rust,ignore
//! let user_service = ServiceLocator::get::<UserService>()?;
//! let profile = user_service.get_profile(&user.user_id).await?;
//! ```

pub mod user_service;

pub use user_service::UserService;
