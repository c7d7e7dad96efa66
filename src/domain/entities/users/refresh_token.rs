//! Refresh Token Entity
//!
//! 서버 측에 저장되는 리프레시 토큰 레코드입니다.
//! 원본 토큰 문자열은 저장하지 않고 SHA-256 지문(`token_hash`)만 보관하며,
//! 회전(rotation)이나 로그아웃 시 레코드를 삭제합니다.

use mongodb::bson::DateTime;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshToken {
    #[serde(rename = "_id")]
    pub id: String,
    pub user_id: String,
    /// 토큰 문자열의 SHA-256 hex 지문
    pub token_hash: String,
    pub expires_at: DateTime,
    pub created_at: DateTime,
}

impl RefreshToken {
    pub fn new(user_id: &str, raw_token: &str, expires_at: DateTime) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            token_hash: Self::fingerprint(raw_token),
            expires_at,
            created_at: DateTime::now(),
        }
    }

    /// 토큰 문자열의 저장용 지문을 계산합니다.
    pub fn fingerprint(raw_token: &str) -> String {
        format!("{:x}", Sha256::digest(raw_token.as_bytes()))
    }

    pub fn is_expired(&self) -> bool {
        self.expires_at <= DateTime::now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_token_is_never_stored() {
        let expires_at = DateTime::from_millis(DateTime::now().timestamp_millis() + 60_000);
        let record = RefreshToken::new("user-1", "raw.jwt.value", expires_at);

        assert_ne!(record.token_hash, "raw.jwt.value");
        assert_eq!(record.token_hash.len(), 64);
        assert_eq!(record.token_hash, RefreshToken::fingerprint("raw.jwt.value"));
        assert!(!record.is_expired());
    }

    #[test]
    fn test_past_expiry_is_expired() {
        let expires_at = DateTime::from_millis(DateTime::now().timestamp_millis() - 1_000);
        let record = RefreshToken::new("user-1", "token", expires_at);

        assert!(record.is_expired());
    }
}
