//! # Application Error Handling System
//!
//! 쇼핑 백엔드 전체에서 사용하는 통합 에러 타입입니다.
//! 모든 계층(리포지토리, 서비스, 핸들러)이 동일한 [`AppError`]를 반환하며,
//! Actix-Web의 `ResponseError` 구현을 통해 일관된 JSON 에러 응답으로 변환됩니다.
//!
//! ## 에러 분류
//!
//! ### 1. 입력 오류 (트랜잭션 시작 전 거부)
//! - `ValidationError`, `PasswordTooLong`
//!
//! ### 2. 비즈니스 규칙 위반 (트랜잭션 중단, 재시도 없음)
//! - `InsufficientStock`, `CartEmpty`, `EmailTaken`, `ConflictError`
//!
//! ### 3. 인증/인가 오류
//! - `InvalidCredentials`, `InvalidToken`, `TokenExpired`, `AuthorizationError`
//!
//! ### 4. 인프라 오류 (호출자가 재시도 가능)
//! - `DatabaseError`, `EventPublishError`, `TransactionConflict`
//!
//! 인프라 오류는 모두 `503 Service Unavailable`과 `service_unavailable` 코드로 응답하여
//! "요청이 잘못됨"과 "시스템이 실패함"을 호출자가 구분할 수 있게 합니다.
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status | code |
//! |----------|-------------|------|
//! | `ValidationError` | 400 | `validation_error` |
//! | `PasswordTooLong` | 400 | `password_too_long` |
//! | `CartEmpty` | 400 | `cart_empty` |
//! | `InvalidCredentials` | 401 | `invalid_credentials` |
//! | `InvalidToken` | 401 | `invalid_token` |
//! | `TokenExpired` | 401 | `token_expired` |
//! | `AuthorizationError` | 403 | `forbidden` |
//! | `NotFound` | 404 | `not_found` |
//! | `EmailTaken` | 409 | `email_taken` |
//! | `InsufficientStock` | 409 | `insufficient_stock` |
//! | `ConflictError` | 409 | `conflict` |
//! | `DatabaseError` / `EventPublishError` / `TransactionConflict` | 503 | `service_unavailable` |
//! | `InternalError` | 500 | `internal_error` |
//!
//! ## 사용 패턴
//!
//! ```rust,ignore
//! use crate::core::errors::AppError;
//!
//! #[post("/items")]
//! async fn add_item(
//!     user: AuthenticatedUser,
//!     payload: web::Json<AddToCartRequest>,
//! ) -> Result<HttpResponse, AppError> {
//!     payload.validate()
//!         .map_err(|e| AppError::ValidationError(e.to_string()))?;
//!
//!     // 서비스 에러는 자동으로 적절한 HTTP 응답으로 변환됩니다
//!     let cart_service = ServiceLocator::get::<CartService>()?;
//!     let cart = cart_service.add_item(&user.user_id, &payload.product_id, payload.quantity).await?;
//!     Ok(HttpResponse::Ok().json(ApiResponse::success(cart)))
//! }
//! ```

use actix_web::http::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 커밋 이후 이벤트 발행 실패. 이미 커밋된 상태는 유지됩니다.
    #[error("Event publish error: {0}")]
    EventPublishError(String),

    /// 동시 트랜잭션과의 쓰기 충돌 (MongoDB `TransientTransactionError`)
    #[error("Transaction conflict: {0}")]
    TransactionConflict(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("password exceeds the maximum length of {max} bytes")]
    PasswordTooLong { max: usize },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("you cannot register with this email")]
    EmailTaken,

    #[error("insufficient stock for product {product_name}")]
    InsufficientStock {
        product_id: String,
        product_name: String,
    },

    #[error("cart is empty")]
    CartEmpty,

    #[error("Conflict error: {0}")]
    ConflictError(String),

    /// 로그인 실패. 계정 열거 공격을 막기 위해 항상 같은 메시지를 사용합니다.
    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("invalid token: {0}")]
    InvalidToken(String),

    #[error("token has expired")]
    TokenExpired,

    #[error("Authorization error: {0}")]
    AuthorizationError(String),

    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 응답 본문의 `error` 필드에 들어가는 안정적인 에러 코드
    pub fn code(&self) -> &'static str {
        match self {
            AppError::ValidationError(_) => "validation_error",
            AppError::PasswordTooLong { .. } => "password_too_long",
            AppError::CartEmpty => "cart_empty",
            AppError::InvalidCredentials => "invalid_credentials",
            AppError::InvalidToken(_) => "invalid_token",
            AppError::TokenExpired => "token_expired",
            AppError::AuthorizationError(_) => "forbidden",
            AppError::NotFound(_) => "not_found",
            AppError::EmailTaken => "email_taken",
            AppError::InsufficientStock { .. } => "insufficient_stock",
            AppError::ConflictError(_) => "conflict",
            AppError::DatabaseError(_)
            | AppError::EventPublishError(_)
            | AppError::TransactionConflict(_) => "service_unavailable",
            AppError::InternalError(_) => "internal_error",
        }
    }

    /// 인프라 장애 여부. 호출자가 같은 요청을 다시 보내도 안전한 경우 `true`입니다.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            AppError::DatabaseError(_)
                    | AppError::EventPublishError(_)
                | AppError::TransactionConflict(_)
        )
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_)
            | AppError::PasswordTooLong { .. }
            | AppError::CartEmpty => StatusCode::BAD_REQUEST,
            AppError::InvalidCredentials
            | AppError::InvalidToken(_)
            | AppError::TokenExpired => StatusCode::UNAUTHORIZED,
            AppError::AuthorizationError(_) => StatusCode::FORBIDDEN,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::EmailTaken
            | AppError::InsufficientStock { .. }
            | AppError::ConflictError(_) => StatusCode::CONFLICT,
            AppError::DatabaseError(_)
            | AppError::EventPublishError(_)
            | AppError::TransactionConflict(_) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> actix_web::HttpResponse {
        // 인프라 상세 정보는 로그에만 남깁니다
        let message = if self.is_retryable() {
            log::error!("🔥 인프라 오류: {}", self);
            "service temporarily unavailable, please retry".to_string()
        } else {
            self.to_string()
        };

        let mut body = serde_json::json!({
            "error": self.code(),
            "message": message,
        });

        if let AppError::InsufficientStock { product_id, .. } = self {
            body["product_id"] = serde_json::Value::String(product_id.clone());
        }

        actix_web::HttpResponse::build(self.status_code()).json(body)
    }
}

pub type AppResult<T> = Result<T, AppError>;

pub trait ErrorContext<T> {
    fn context(self, msg: &str) -> AppResult<T>;

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", f(), e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;

    #[test]
    fn test_validation_error_response() {
        let error = AppError::ValidationError("quantity must be at least 1".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_business_rule_errors_map_to_client_statuses() {
        let stock = AppError::InsufficientStock {
            product_id: "p-1".to_string(),
            product_name: "Keyboard".to_string(),
        };
        assert_eq!(stock.error_response().status(), StatusCode::CONFLICT);
        assert_eq!(stock.code(), "insufficient_stock");
        assert!(stock.to_string().contains("Keyboard"));

        assert_eq!(AppError::CartEmpty.error_response().status(), StatusCode::BAD_REQUEST);
        assert_eq!(AppError::EmailTaken.error_response().status(), StatusCode::CONFLICT);
        assert!(!AppError::EmailTaken.is_retryable());
    }

    #[test]
    fn test_credential_errors_are_unauthorized() {
        for error in [
            AppError::InvalidCredentials,
            AppError::InvalidToken("bad signature".to_string()),
            AppError::TokenExpired,
        ] {
            assert_eq!(error.error_response().status(), StatusCode::UNAUTHORIZED);
        }
    }

    #[test]
    fn test_infrastructure_errors_are_service_unavailable() {
        for error in [
            AppError::DatabaseError("connection refused".to_string()),
            AppError::EventPublishError("broker down".to_string()),
            AppError::TransactionConflict("write conflict".to_string()),
        ] {
            assert!(error.is_retryable());
            assert_eq!(error.code(), "service_unavailable");
            assert_eq!(error.error_response().status(), StatusCode::SERVICE_UNAVAILABLE);
        }
    }

    #[test]
    fn test_internal_error_response() {
        let error = AppError::InternalError("Something went wrong".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!error.is_retryable());
    }

    #[test]
    fn test_error_context_trait() {
        let result: Result<(), &str> = Err("original error");
        let app_result = result.context("Additional context");

        if let Err(AppError::InternalError(msg)) = app_result {
            assert!(msg.contains("Additional context"));
            assert!(msg.contains("original error"));
        } else {
            panic!("Expected InternalError");
        }
    }
}
