//! Authentication HTTP Handlers
//!
//! 가입, 로그인, 토큰 갱신, 로그아웃 엔드포인트입니다.
//! 모든 엔드포인트는 인증 없이 접근할 수 있으며 JWT 토큰 쌍을 발급하거나 폐기합니다.
//!
//! # Endpoints
//!
//! - `POST /auth/register` - 회원가입 (201)
//! - `POST /auth/login` - 이메일/비밀번호 로그인
//! - `POST /auth/refresh` - 리프레시 토큰 회전
//! - `POST /auth/logout` - 리프레시 토큰 폐기
use actix_web::{post, web, HttpResponse};
use validator::Validate;
use crate::core::errors::AppError;
use crate::core::registry::ServiceLocator;
use crate::domain::dto::common::ApiResponse;
use crate::domain::dto::users::request::{LoginRequest, RefreshTokenRequest, RegisterRequest};
use crate::services::auth::AuthService;

/// 회원가입 핸들러
///
/// 사용자와 빈 장바구니를 만들고 토큰 쌍을 발급합니다.
///
/// # Endpoint
/// `POST /auth/register`
#[post("/register")]
pub async fn register(
    payload: web::Json<RegisterRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let auth_service = ServiceLocator::get::<AuthService>()?;
    let response = auth_service.register(payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(ApiResponse::success(response)))
}

/// 로컬 로그인 핸들러
///
/// # Endpoint
/// `POST /auth/login`
#[post("/login")]
pub async fn login(
    payload: web::Json<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let auth_service = ServiceLocator::get::<AuthService>()?;
    let response = auth_service.login(payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(response)))
}

/// 토큰 갱신 엔드포인트
///
/// 제출된 리프레시 토큰은 폐기되고 새 토큰 쌍이 발급됩니다.
///
/// # Endpoint
/// `POST /auth/refresh`
#[post("/refresh")]
pub async fn refresh_tokens(
    payload: web::Json<RefreshTokenRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let auth_service = ServiceLocator::get::<AuthService>()?;
    let response = auth_service.refresh(&payload.refresh_token).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(response)))
}

/// 로그아웃 엔드포인트
///
/// 이미 폐기되었거나 알 수 없는 토큰이어도 성공으로 응답합니다.
///
/// # Endpoint
/// `POST /auth/logout`
#[post("/logout")]
pub async fn logout(
    payload: web::Json<RefreshTokenRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let auth_service = ServiceLocator::get::<AuthService>()?;
    auth_service.logout(&payload.refresh_token).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::message("로그아웃되었습니다")))
}
