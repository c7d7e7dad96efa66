//! 데이터 및 서버 설정 관리 모듈
//!
//! 저장소 백엔드, 서버, 이벤트 발행, 실행 환경 및 비밀번호 해싱 관련 설정을 관리합니다.

use std::env;
use std::time::Duration;

/// 애플리케이션 실행 환경
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    /// 개발 환경 - 빠른 개발을 위한 설정
    Development,
    /// 테스트 환경 - 자동화된 테스트용 설정
    Test,
    /// 스테이징 환경 - 프로덕션 유사 환경
    Staging,
    /// 프로덕션 환경 - 최고 수준의 보안 및 성능
    Production,
}

impl Environment {
    /// 현재 실행 환경을 감지합니다.
    ///
    /// `ENVIRONMENT` 환경 변수를 확인하며, 설정되지 않은 경우 `Production`을 기본값으로 사용합니다.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// if Environment::current() == Environment::Development {
    ///     log::debug!("개발 환경");
    /// }
    /// ```
    pub fn current() -> Self {
        Self::from_str(&env::var("ENVIRONMENT").unwrap_or_else(|_| "production".to_string()))
    }

    /// 문자열에서 Environment를 생성합니다.
    ///
    /// 알 수 없는 값인 경우 `Production`을 반환합니다.
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }
}

/// 패스워드 해싱 설정
pub struct PasswordConfig;

impl PasswordConfig {
    /// bcrypt가 처리하는 최대 입력 길이 (바이트)
    pub const MAX_PASSWORD_BYTES: usize = 72;

    /// 현재 환경에 맞는 bcrypt cost를 반환합니다.
    ///
    /// `BCRYPT_COST`가 4-15 범위의 값으로 설정되어 있으면 그 값을 우선 사용합니다.
    ///
    /// # Environment Defaults
    ///
    /// - Development/Test: 4 (빠른 처리)
    /// - Staging: 10 (중간 보안)
    /// - Production: 12 (고보안)
    pub fn bcrypt_cost() -> u32 {
        if let Ok(cost_str) = env::var("BCRYPT_COST") {
            if let Ok(cost) = cost_str.parse::<u32>() {
                if (4..=15).contains(&cost) {
                    return cost;
                }
            }
            log::warn!("BCRYPT_COST 값이 올바르지 않습니다 ({}), 환경 기본값 사용", cost_str);
        }

        Self::bcrypt_cost_for_env(&Environment::current())
    }

    /// 특정 환경에 대한 bcrypt cost를 반환합니다.
    pub fn bcrypt_cost_for_env(env: &Environment) -> u32 {
        match env {
            Environment::Development => 4,
            Environment::Test => 4,
            Environment::Staging => 10,
            Environment::Production => 12,
        }
    }
}

/// 서버 바인딩 설정
pub struct ServerConfig;

impl ServerConfig {
    /// 서버가 바인딩할 포트를 반환합니다. 기본값: 8080
    pub fn port() -> u16 {
        env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()
            .unwrap_or(8080)
    }

    /// 서버가 바인딩할 호스트 주소를 반환합니다. 기본값: "0.0.0.0"
    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string())
    }

    /// 클라이언트 요청 타임아웃. 기본값: 30초
    pub fn request_timeout() -> Duration {
        let secs = env::var("REQUEST_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(30);
        Duration::from_secs(secs)
    }
}

/// 영속 저장소 종류
#[derive(Debug, Clone, PartialEq)]
pub enum StoreBackend {
    /// MongoDB 레플리카셋 (멀티 도큐먼트 트랜잭션 사용)
    MongoDb,
    /// 프로세스 내 메모리 저장소 (개발/테스트용)
    Memory,
}

/// 저장소 및 트랜잭션 설정
pub struct StoreConfig;

impl StoreConfig {
    /// `DATA_STORE` 환경 변수로 저장소 백엔드를 선택합니다. 기본값: mongodb
    pub fn backend() -> StoreBackend {
        match env::var("DATA_STORE")
            .unwrap_or_else(|_| "mongodb".to_string())
            .to_lowercase()
            .as_str()
        {
            "memory" | "in-memory" => StoreBackend::Memory,
            _ => StoreBackend::MongoDb,
        }
    }

    /// 하나의 트랜잭션이 커밋까지 사용할 수 있는 최대 시간. 기본값: 10초
    pub fn transaction_timeout() -> Duration {
        let secs = env::var("TRANSACTION_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .unwrap_or(10);
        Duration::from_secs(secs)
    }

    /// 쓰기 충돌 시 단위 작업 전체를 다시 실행하는 최대 횟수
    pub fn max_transaction_attempts() -> u32 {
        env::var("TRANSACTION_MAX_ATTEMPTS")
            .ok()
            .and_then(|v| v.parse::<u32>().ok())
            .filter(|attempts| (1..=10).contains(attempts))
            .unwrap_or(3)
    }
}

/// 도메인 이벤트 발행 설정
pub struct EventsConfig;

impl EventsConfig {
    /// `REDIS_URL`이 없으면 로그 발행자를 사용합니다.
    pub fn redis_url() -> Option<String> {
        env::var("REDIS_URL").ok().filter(|url| !url.trim().is_empty())
    }

    /// 이벤트를 발행할 Redis 채널. 기본값: "shop.events"
    pub fn channel() -> String {
        env::var("EVENTS_CHANNEL").unwrap_or_else(|_| "shop.events".to_string())
    }
}
