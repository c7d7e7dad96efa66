//! 인증 및 보안 서비스 모듈
//!
//! - [`TokenService`] - HMAC-SHA256 액세스/리프레시 토큰 발급과 검증
//! - [`PasswordHasher`] - bcrypt 해싱 (72바이트 제한)
//! - [`AuthService`] - 가입, 로그인, 리프레시 토큰 회전, 로그아웃
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::auth::{AuthService, TokenService};
//!
//! let tokens = TokenService::new(JwtSettings::from_env());
//! let pair = tokens.generate_token_pair(&user.id, &user.email, user.role)?;
//! let claims = tokens.validate_token(&pair.access_token)?;
//! ```

pub mod auth_service;
pub mod password;
pub mod token_service;

pub use auth_service::AuthService;
pub use password::PasswordHasher;
pub use token_service::TokenService;
