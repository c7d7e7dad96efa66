//! 도메인 이벤트
//!
//! 가입, 로그인, 토큰 갱신이 커밋된 뒤 외부 발행자에게 전달되는 메시지입니다.
//! 발행은 최소 한 번(at-least-once) 전달을 목표로 하며, 정확히 한 번을 보장하지 않습니다.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AuthEventType {
    #[serde(rename = "user.registered")]
    UserRegistered,
    #[serde(rename = "user.logged_in")]
    UserLoggedIn,
    #[serde(rename = "user.token_refreshed")]
    TokenRefreshed,
}

impl AuthEventType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuthEventType::UserRegistered => "user.registered",
            AuthEventType::UserLoggedIn => "user.logged_in",
            AuthEventType::TokenRefreshed => "user.token_refreshed",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DomainEvent {
    pub event_id: String,
    pub event_type: AuthEventType,
    pub user_id: String,
    pub email: String,
    pub occurred_at: DateTime<Utc>,
}

impl DomainEvent {
    pub fn new(event_type: AuthEventType, user_id: &str, email: &str) -> Self {
        Self {
            event_id: Uuid::new_v4().to_string(),
            event_type,
            user_id: user_id.to_string(),
            email: email.to_string(),
            occurred_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_type_wire_names() {
        let event = DomainEvent::new(AuthEventType::UserRegistered, "u-1", "a@x.com");
        let json = serde_json::to_value(&event).unwrap();

        assert_eq!(json["event_type"], "user.registered");
        assert_eq!(json["user_id"], "u-1");
        assert_eq!(event.event_type.as_str(), "user.registered");
    }
}
