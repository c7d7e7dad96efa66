//! # 사용자 프로필 서비스
//!
//! 인증된 사용자의 프로필 조회, 수정, 회원 탈퇴를 담당합니다.
//! 탈퇴는 소프트 삭제이며 같은 작업 단위에서 사용자의 모든 리프레시 토큰을 폐기합니다.

use std::sync::Arc;
use mongodb::bson::DateTime;
use crate::core::errors::{AppError, AppResult};
use crate::domain::dto::users::{request::UpdateProfileRequest, response::UserResponse};
use crate::repositories::{with_retry, Store};

pub struct UserService {
    store: Arc<dyn Store>,
}

impl UserService {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }

    pub async fn get_profile(&self, user_id: &str) -> AppResult<UserResponse> {
        let mut uow = self.store.begin().await?;
        let user = uow
            .find_active_user(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("user not found".to_string()))?;
        uow.commit().await?;

        Ok(UserResponse::from(user))
    }

    pub async fn update_profile(&self, user_id: &str, request: &UpdateProfileRequest) -> AppResult<UserResponse> {
        with_retry("update_profile", move || self.update_profile_once(user_id, request)).await
    }

    pub async fn delete_account(&self, user_id: &str) -> AppResult<()> {
        with_retry("delete_account", move || self.delete_account_once(user_id)).await
    }

    async fn update_profile_once(&self, user_id: &str, request: &UpdateProfileRequest) -> AppResult<UserResponse> {
        let mut uow = self.store.begin().await?;
        let mut user = uow
            .find_active_user(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("user not found".to_string()))?;

        if let Some(first_name) = &request.first_name {
            user.first_name = first_name.clone();
        }
        if let Some(last_name) = &request.last_name {
            user.last_name = last_name.clone();
        }
        if let Some(phone) = &request.phone {
            user.phone = Some(phone.clone());
        }
        user.updated_at = DateTime::now();

        uow.save_user(&user).await?;
        uow.commit().await?;

        Ok(UserResponse::from(user))
    }

    async fn delete_account_once(&self, user_id: &str) -> AppResult<()> {
        let mut uow = self.store.begin().await?;
        let mut user = uow
            .find_active_user(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("user not found".to_string()))?;

        user.soft_delete();
        uow.save_user(&user).await?;
        let revoked = uow.delete_refresh_tokens_for_user(user_id).await?;
        uow.commit().await?;

        log::info!("🗑️ 회원 탈퇴 처리: {} (폐기된 리프레시 토큰 {}개)", user_id, revoked);
        Ok(())
    }
}
