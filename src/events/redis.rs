//! Redis 클라이언트
//!
//! 멀티플렉싱 비동기 연결을 사용하여 도메인 이벤트를 `PUBLISH`합니다.
//!
//! ```bash
//! REDIS_URL=redis://localhost:6379
//! ```

use redis::{AsyncCommands, Client};
use serde::Serialize;

#[derive(Clone)]
pub struct RedisClient {
    client: Client,
}

impl RedisClient {
    /// 클라이언트를 생성하고 `PING`으로 서버 가용성을 확인합니다.
    pub async fn new(redis_url: &str) -> Result<Self, redis::RedisError> {
        let client = Client::open(redis_url)?;

        let mut conn = client.get_multiplexed_async_connection().await?;
        redis::cmd("PING").query_async::<()>(&mut conn).await?;

        log::info!("✅ Redis 연결 성공");

        Ok(Self { client })
    }

    /// 값을 JSON으로 직렬화하여 채널에 발행하고 수신한 구독자 수를 반환합니다.
    pub async fn publish<T: Serialize>(&self, channel: &str, value: &T) -> Result<i64, redis::RedisError> {
        let json = serde_json::to_string(value)
            .map_err(|e| redis::RedisError::from((redis::ErrorKind::TypeError, "Serialization failed", e.to_string())))?;

        let mut conn = self.client.get_multiplexed_async_connection().await?;
        conn.publish(channel, json).await
    }
}
