//! 도메인 이벤트 발행 계층
//!
//! - [`publisher`] - `EventPublisher` 트레이트와 Redis/로그 구현
//! - [`redis`] - Redis 비동기 클라이언트

pub mod publisher;
pub mod redis;

pub use publisher::{EventPublisher, LogEventPublisher, RedisEventPublisher};
pub use self::redis::RedisClient;
