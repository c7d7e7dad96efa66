//! # Core Module
//!
//! 애플리케이션 전반에서 공유되는 핵심 인프라를 제공합니다.
//!
//! - [`errors`] - 통합 에러 타입 [`AppError`]와 HTTP 응답 매핑
//! - [`registry`] - 부팅 시 조립된 서비스를 보관하는 [`ServiceLocator`]

pub mod errors;
pub mod registry;

pub use errors::*;
pub use registry::*;
