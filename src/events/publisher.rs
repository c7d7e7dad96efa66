//! # 도메인 이벤트 발행
//!
//! 인증 흐름(가입, 로그인, 토큰 회전)이 커밋된 뒤 [`DomainEvent`]를 외부로 알립니다.
//!
//! - [`RedisEventPublisher`] - `REDIS_URL`이 설정된 경우 Redis pub/sub 채널로 발행
//! - [`LogEventPublisher`] - Redis 없이 실행할 때 로그로만 기록
//!
//! 발행 실패는 `AppError::EventPublishError`로 호출자에게 전달되며,
//! 이미 커밋된 데이터는 되돌리지 않습니다.

use async_trait::async_trait;
use crate::core::errors::{AppError, AppResult};
use crate::domain::models::events::DomainEvent;
use crate::events::redis::RedisClient;

#[async_trait]
pub trait EventPublisher: Send + Sync {
    async fn publish(&self, event: &DomainEvent) -> AppResult<()>;

    /// 부팅 로그에 표시할 발행자 이름
    fn describe(&self) -> String;
}

pub struct RedisEventPublisher {
    redis: RedisClient,
    channel: String,
}

impl RedisEventPublisher {
    pub fn new(redis: RedisClient, channel: impl Into<String>) -> Self {
        Self {
            redis,
            channel: channel.into(),
        }
    }
}

#[async_trait]
impl EventPublisher for RedisEventPublisher {
    async fn publish(&self, event: &DomainEvent) -> AppResult<()> {
        let receivers = self
            .redis
            .publish(&self.channel, event)
            .await
            .map_err(|e| AppError::EventPublishError(e.to_string()))?;

        log::debug!(
            "📣 이벤트 발행: {} (user: {}, 구독자: {})",
            event.event_type.as_str(),
            event.user_id,
            receivers
        );
        Ok(())
    }

    fn describe(&self) -> String {
        format!("Redis ({})", self.channel)
    }
}

#[derive(Default)]
pub struct LogEventPublisher;

#[async_trait]
impl EventPublisher for LogEventPublisher {
    async fn publish(&self, event: &DomainEvent) -> AppResult<()> {
        log::info!(
            "📣 {} user={} email={} at={}",
            event.event_type.as_str(),
            event.user_id,
            event.email,
            event.occurred_at
        );
        Ok(())
    }

    fn describe(&self) -> String {
        "Log".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::events::AuthEventType;

    #[actix_web::test]
    async fn test_log_publisher_never_fails() {
        let event = DomainEvent::new(AuthEventType::UserLoggedIn, "user-1", "a@x.com");

        assert!(LogEventPublisher.publish(&event).await.is_ok());
        assert_eq!(LogEventPublisher.describe(), "Log");
    }
}
