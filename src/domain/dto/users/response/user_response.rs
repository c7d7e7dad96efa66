use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::domain::entities::users::User;
use crate::domain::models::auth::role::UserRole;
use crate::domain::models::token::TokenPair;
use crate::utils::time::to_utc;

/// 비밀번호 해시를 제외한 사용자 정보
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: Option<String>,
    pub role: UserRole,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        let User {
            id,
            email,
            first_name,
            last_name,
            phone,
            role,
            is_active,
            created_at,
            updated_at,
            ..
        } = user;

        Self {
            id,
            email,
            first_name,
            last_name,
            phone,
            role,
            is_active,
            created_at: to_utc(created_at),
            updated_at: to_utc(updated_at),
        }
    }
}

/// 가입/로그인/토큰 갱신 응답
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub user: UserResponse,
}

impl AuthResponse {
    pub fn new(user: User, tokens: TokenPair) -> Self {
        Self {
            access_token: tokens.access_token,
            refresh_token: tokens.refresh_token,
            token_type: "Bearer".to_string(),
            expires_in: tokens.expires_in,
            user: UserResponse::from(user),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_hash_is_not_exposed() {
        let user = User::new_customer("a@x.com".into(), "secret-hash".into(), "A".into(), "B".into());
        let json = serde_json::to_string(&UserResponse::from(user)).unwrap();

        assert!(!json.contains("secret-hash"));
        assert!(json.contains("\"role\":\"customer\""));
    }
}
