//! # Authentication Configuration Module
//!
//! JWT 서명 키와 토큰 수명을 관리합니다.
//!
//! ## 환경 변수
//!
//! ```bash
//! export JWT_SECRET="your-super-secret-jwt-key"
//! export JWT_EXPIRATION_HOURS="24"          # 액세스 토큰 수명
//! export JWT_REFRESH_EXPIRATION_DAYS="30"   # 리프레시 토큰 수명
//! ```
//!
//! 액세스 토큰과 리프레시 토큰의 수명은 서로 독립적으로 설정됩니다.
//! 서비스는 부팅 시 [`JwtSettings::from_env`]로 한 번 읽은 값을 사용하므로
//! 테스트에서는 원하는 수명으로 [`JwtSettings`]를 직접 구성할 수 있습니다.

use std::env;
use chrono::Duration;

pub struct JwtConfig;

impl JwtConfig {
    pub fn secret() -> String {
        env::var("JWT_SECRET")
            .unwrap_or_else(|_| {
                log::warn!("JWT_SECRET not set, using default (not secure for production!)");
                "your-secret-key".to_string()
            })
    }

    pub fn expiration_hours() -> i64 {
        env::var("JWT_EXPIRATION_HOURS")
            .unwrap_or_else(|_| "24".to_string())
            .parse()
            .unwrap_or(24)
    }

    pub fn refresh_expiration_days() -> i64 {
        env::var("JWT_REFRESH_EXPIRATION_DAYS")
            .unwrap_or_else(|_| "30".to_string())
            .parse()
            .unwrap_or(30)
    }
}

/// 토큰 서비스가 사용하는 JWT 설정 스냅샷
#[derive(Debug, Clone)]
pub struct JwtSettings {
    /// HMAC-SHA256 서명 키
    pub secret: String,
    /// 액세스 토큰 수명
    pub access_ttl: Duration,
    /// 리프레시 토큰 수명
    pub refresh_ttl: Duration,
}

impl JwtSettings {
    pub fn new(secret: impl Into<String>, access_ttl: Duration, refresh_ttl: Duration) -> Self {
        Self {
            secret: secret.into(),
            access_ttl,
            refresh_ttl,
        }
    }

    /// 환경 변수에서 설정을 읽어옵니다.
    pub fn from_env() -> Self {
        Self::new(
            JwtConfig::secret(),
            Duration::hours(JwtConfig::expiration_hours()),
            Duration::days(JwtConfig::refresh_expiration_days()),
        )
    }
}
