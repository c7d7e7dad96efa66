//! User Entity Implementation
//!
//! 쇼핑몰 사용자 엔티티입니다. 이메일/비밀번호로 가입하며,
//! 삭제는 `deleted_at`을 기록하는 소프트 삭제로 처리됩니다.

use mongodb::bson::DateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use crate::domain::models::auth::role::UserRole;

/// 사용자 엔티티
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: String,
    /// 사용자 이메일 (삭제되지 않은 사용자 사이에서 unique)
    pub email: String,
    /// bcrypt 해시
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: Option<String>,
    pub role: UserRole,
    /// 계정 활성화 여부
    pub is_active: bool,
    pub created_at: DateTime,
    pub updated_at: DateTime,
    /// 소프트 삭제 시각
    pub deleted_at: Option<DateTime>,
}

impl User {
    /// 새 고객 계정 생성
    pub fn new_customer(email: String, password_hash: String, first_name: String, last_name: String) -> Self {
        let now = DateTime::now();

        Self {
            id: Uuid::new_v4().to_string(),
            email,
            password_hash,
            first_name,
            last_name,
            phone: None,
            role: UserRole::Customer,
            is_active: true,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }
    }

    /// 로그인 가능한 상태인지 확인 (활성 + 삭제되지 않음)
    pub fn is_available(&self) -> bool {
        self.is_active && self.deleted_at.is_none()
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name).trim().to_string()
    }

    pub fn soft_delete(&mut self) {
        let now = DateTime::now();
        self.is_active = false;
        self.deleted_at = Some(now);
        self.updated_at = now;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_customer_defaults() {
        let user = User::new_customer(
            "a@x.com".to_string(),
            "hash".to_string(),
            "Ada".to_string(),
            "Lovelace".to_string(),
        );

        assert_eq!(user.role, UserRole::Customer);
        assert!(user.is_available());
        assert_eq!(user.full_name(), "Ada Lovelace");
        assert!(Uuid::parse_str(&user.id).is_ok());
    }

    #[test]
    fn test_soft_delete_makes_user_unavailable() {
        let mut user = User::new_customer("a@x.com".into(), "hash".into(), "A".into(), "B".into());
        user.soft_delete();

        assert!(!user.is_available());
        assert!(user.deleted_at.is_some());
    }
}
