//! # Configuration Module
//!
//! 환경 변수 기반 설정값을 중앙에서 관리합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 저장소, 서버, 이벤트 발행, 실행 환경, 비밀번호 해싱 설정
//! - [`auth_config`] - JWT 서명 키와 토큰 수명 설정
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 서버
//! export HOST="0.0.0.0"
//! export PORT="8080"
//! export REQUEST_TIMEOUT_SECS="30"
//!
//! # 저장소
//! export DATA_STORE="mongodb"              # mongodb | memory
//! export MONGODB_URI="mongodb://localhost:27017/?replicaSet=rs0"
//! export DATABASE_NAME="shop_dev"
//! export TRANSACTION_TIMEOUT_SECS="10"
//! export TRANSACTION_MAX_ATTEMPTS="3"
//!
//! # 이벤트 발행 (미설정 시 로그 발행자 사용)
//! export REDIS_URL="redis://localhost:6379"
//! export EVENTS_CHANNEL="shop.events"
//!
//! # 인증
//! export JWT_SECRET="your-super-secret-key"
//! export JWT_EXPIRATION_HOURS="24"
//! export JWT_REFRESH_EXPIRATION_DAYS="30"
//! export BCRYPT_COST="12"                  # 4-15 범위
//!
//! # 환경
//! export ENVIRONMENT="production"          # development, test, staging, production
//! ```

pub mod data_config;
pub mod auth_config;

pub use data_config::*;
pub use auth_config::*;
