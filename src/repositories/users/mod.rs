//! 사용자 데이터 액세스 계약
//!
//! ```rust,ignore
//! use crate::repositories::users::UserRepository;
//!
//! let mut uow = store.begin().await?;
//! let user = uow.find_active_user_by_email("user@example.com").await?;
//! ```

pub mod user_repo;

pub use user_repo::UserRepository;
