//! # User Profile HTTP Handlers
//!
//! 인증된 사용자 자신의 프로필을 다루는 엔드포인트입니다.
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `GET` | `/users/me` | 프로필 조회 | 200 OK |
//! | `PUT` | `/users/me` | 프로필 부분 수정 | 200 OK |
//! | `DELETE` | `/users/me` | 회원 탈퇴 (소프트 삭제 + 토큰 폐기) | 200 OK |
use actix_web::{delete, get, put, web, HttpResponse};
use validator::Validate;
use crate::core::errors::AppError;
use crate::core::registry::ServiceLocator;
use crate::domain::dto::common::ApiResponse;
use crate::domain::dto::users::request::UpdateProfileRequest;
use crate::domain::models::auth::AuthenticatedUser;
use crate::services::users::UserService;

#[get("/me")]
pub async fn get_profile(
    user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let user_service = ServiceLocator::get::<UserService>()?;
    let profile = user_service.get_profile(&user.user_id).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(profile)))
}

#[put("/me")]
pub async fn update_profile(
    user: AuthenticatedUser,
    payload: web::Json<UpdateProfileRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let user_service = ServiceLocator::get::<UserService>()?;
    let profile = user_service.update_profile(&user.user_id, &payload).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(profile)))
}

#[delete("/me")]
pub async fn delete_account(
    user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let user_service = ServiceLocator::get::<UserService>()?;
    user_service.delete_account(&user.user_id).await?;

    log::info!("👋 회원 탈퇴: {}", user.user_id);
    Ok(HttpResponse::Ok().json(ApiResponse::message("계정이 삭제되었습니다")))
}
