//! # 인증 서비스
//!
//! 가입, 로그인, 리프레시 토큰 회전, 로그아웃을 담당합니다.
//!
//! ## 흐름
//!
//! ```text
//! register ─┬─ [tx] 사용자 생성 (이메일 중복 → EmailTaken) + 리프레시 토큰 저장
//!           ├─ [tx] 빈 장바구니 생성 (실패 시 로그만 남김)
//!           └─ user.registered 이벤트 발행
//!
//! refresh ──── [tx] 토큰 레코드 잠금 → 사용자 확인 → 기존 레코드 삭제 → 새 레코드 저장
//!           └─ user.token_refreshed 이벤트 발행
//! ```
//!
//! 이벤트 발행은 커밋 이후에 이루어지며, 발행 실패는 `EventPublishError`로 반환되지만
//! 커밋된 상태는 유지됩니다.

use std::sync::Arc;
use mongodb::bson;
use crate::core::errors::{AppError, AppResult};
use crate::domain::{
    dto::users::{
        request::{LoginRequest, RegisterRequest},
        response::AuthResponse,
    },
    entities::{Cart, RefreshToken, User},
    models::{
        events::{AuthEventType, DomainEvent},
        token::{TokenPair, TokenUse},
    },
};
use crate::events::EventPublisher;
use crate::repositories::{with_retry, Store};
use crate::services::auth::{password::PasswordHasher, token_service::TokenService};
use crate::utils::string_utils::normalize_email;

pub struct AuthService {
    store: Arc<dyn Store>,
    tokens: Arc<TokenService>,
    publisher: Arc<dyn EventPublisher>,
    passwords: PasswordHasher,
}

impl AuthService {
    pub fn new(
        store: Arc<dyn Store>,
        tokens: Arc<TokenService>,
        publisher: Arc<dyn EventPublisher>,
        passwords: PasswordHasher,
    ) -> Self {
        Self {
            store,
            tokens,
            publisher,
            passwords,
        }
    }

    pub async fn register(&self, request: RegisterRequest) -> AppResult<AuthResponse> {
        let email = normalize_email(&request.email);
        let password_hash = self.passwords.hash(&request.password)?;

        let user = User::new_customer(
            email,
            password_hash,
            request.first_name.trim().to_string(),
            request.last_name.trim().to_string(),
        );
        let user_ref = &user;

        let tokens = with_retry("register", move || self.register_once(user_ref)).await?;

        if let Err(e) = with_retry("create_cart", move || self.create_cart_once(&user_ref.id)).await {
            log::error!("❌ 가입 직후 장바구니 생성 실패 (user: {}): {}", user.id, e);
        }

        log::info!("✅ 회원 가입 완료: {}", user.id);
        self.publish(AuthEventType::UserRegistered, &user).await?;

        Ok(AuthResponse::new(user, tokens))
    }

    pub async fn login(&self, request: LoginRequest) -> AppResult<AuthResponse> {
        let email = normalize_email(&request.email);
        let email_ref = email.as_str();

        let user = with_retry("login", move || self.find_user_by_email_once(email_ref))
            .await?
            .ok_or(AppError::InvalidCredentials)?;

        if !self.passwords.verify(&request.password, &user.password_hash)? {
            log::warn!("🔒 로그인 실패: 비밀번호 불일치 (user: {})", user.id);
            return Err(AppError::InvalidCredentials);
        }

        let user_ref = &user;
        let tokens = with_retry("issue_tokens", move || self.issue_tokens_once(user_ref)).await?;

        self.publish(AuthEventType::UserLoggedIn, &user).await?;

        Ok(AuthResponse::new(user, tokens))
    }

    /// 리프레시 토큰을 회전합니다. 한 번 사용된 리프레시 토큰은 다시 사용할 수 없습니다.
    pub async fn refresh(&self, refresh_token: &str) -> AppResult<AuthResponse> {
        self.tokens.validate_token_for(refresh_token, TokenUse::Refresh)?;

        let (user, tokens) = with_retry("refresh_token", move || self.rotate_once(refresh_token)).await?;

        self.publish(AuthEventType::TokenRefreshed, &user).await?;

        Ok(AuthResponse::new(user, tokens))
    }

    /// 저장된 리프레시 토큰을 삭제합니다. 이미 없는 토큰이어도 성공으로 처리합니다.
    pub async fn logout(&self, refresh_token: &str) -> AppResult<()> {
        let token_hash = RefreshToken::fingerprint(refresh_token);
        let token_hash_ref = token_hash.as_str();

        let deleted = with_retry("logout", move || self.revoke_once(token_hash_ref)).await?;
        if !deleted {
            log::debug!("로그아웃 요청의 리프레시 토큰이 이미 존재하지 않습니다");
        }
        Ok(())
    }

    /// 사용자와 첫 리프레시 토큰을 같은 작업 단위에 저장합니다. 둘 중 하나라도 실패하면 아무것도 남지 않습니다.
    async fn register_once(&self, user: &User) -> AppResult<TokenPair> {
        let tokens = self.tokens.generate_token_pair(&user.id, &user.email, user.role)?;

        let mut uow = self.store.begin().await?;
        uow.insert_user(user).await?;
        uow.insert_refresh_token(&refresh_record(&user.id, &tokens)).await?;
        uow.commit().await?;

        Ok(tokens)
    }

    async fn create_cart_once(&self, user_id: &str) -> AppResult<()> {
        let mut uow = self.store.begin().await?;
        if uow.find_cart(user_id).await?.is_none() {
            uow.insert_cart(&Cart::new(user_id)).await?;
        }
        uow.commit().await
    }

    async fn find_user_by_email_once(&self, email: &str) -> AppResult<Option<User>> {
        let mut uow = self.store.begin().await?;
        let user = uow.find_active_user_by_email(email).await?;
        uow.commit().await?;
        Ok(user)
    }

    async fn issue_tokens_once(&self, user: &User) -> AppResult<TokenPair> {
        let tokens = self.tokens.generate_token_pair(&user.id, &user.email, user.role)?;

        let mut uow = self.store.begin().await?;
        uow.insert_refresh_token(&refresh_record(&user.id, &tokens)).await?;
        uow.commit().await?;

        Ok(tokens)
    }

    async fn rotate_once(&self, refresh_token: &str) -> AppResult<(User, TokenPair)> {
        let token_hash = RefreshToken::fingerprint(refresh_token);
        let mut uow = self.store.begin().await?;

        let record = uow
            .find_refresh_token_for_update(&token_hash)
            .await?
            .filter(|record| !record.is_expired())
            .ok_or_else(|| AppError::InvalidToken("refresh token not found or expired".to_string()))?;

        let user = uow
            .find_active_user(&record.user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("user not found".to_string()))?;

        uow.delete_refresh_token(&token_hash).await?;

        let tokens = self.tokens.generate_token_pair(&user.id, &user.email, user.role)?;
        uow.insert_refresh_token(&refresh_record(&user.id, &tokens)).await?;
        uow.commit().await?;

        log::debug!("🔄 리프레시 토큰 회전 (user: {})", user.id);
        Ok((user, tokens))
    }

    async fn revoke_once(&self, token_hash: &str) -> AppResult<bool> {
        let mut uow = self.store.begin().await?;
        let deleted = uow.delete_refresh_token(token_hash).await?;
        uow.commit().await?;
        Ok(deleted)
    }

    async fn publish(&self, event_type: AuthEventType, user: &User) -> AppResult<()> {
        let event = DomainEvent::new(event_type, &user.id, &user.email);

        self.publisher.publish(&event).await.inspect_err(|e| {
            log::error!("❌ 이벤트 발행 실패 ({}): {}", event_type.as_str(), e);
        })
    }
}

fn refresh_record(user_id: &str, tokens: &TokenPair) -> RefreshToken {
    let expires_at = bson::DateTime::from_millis(tokens.refresh_expires_at * 1000);
    RefreshToken::new(user_id, &tokens.refresh_token, expires_at)
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures_util::future::join;
    use crate::services::test_support::TestContext;

    fn register_request(email: &str, password: &str) -> RegisterRequest {
        RegisterRequest {
            email: email.to_string(),
            password: password.to_string(),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
        }
    }

    fn login_request(email: &str, password: &str) -> LoginRequest {
        LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[actix_web::test]
    async fn test_register_creates_user_cart_and_tokens() {
        let ctx = TestContext::new();

        let response = ctx.services.auth.register(register_request("  Ada@Example.com ", "secret1")).await.unwrap();

        assert_eq!(response.user.email, "ada@example.com");
        assert_eq!(response.token_type, "Bearer");
        assert!(ctx.cart_exists(&response.user.id).await);
        assert_eq!(ctx.published(), vec![AuthEventType::UserRegistered]);

        let claims = ctx.services.tokens.validate_token(&response.access_token).unwrap();
        assert_eq!(claims.sub, response.user.id);
    }

    #[actix_web::test]
    async fn test_duplicate_email_is_rejected() {
        let ctx = TestContext::new();
        ctx.services.auth.register(register_request("a@x.com", "secret1")).await.unwrap();

        let result = ctx.services.auth.register(register_request("A@X.com", "secret2")).await;

        assert!(matches!(result, Err(AppError::EmailTaken)));
    }

    #[actix_web::test]
    async fn test_long_password_is_rejected() {
        let ctx = TestContext::new();

        let result = ctx.services.auth.register(register_request("a@x.com", &"p".repeat(73))).await;

        assert!(matches!(result, Err(AppError::PasswordTooLong { max: 72 })));
    }

    #[actix_web::test]
    async fn test_login_errors_are_identical_for_unknown_email_and_wrong_password() {
        let ctx = TestContext::new();
        ctx.services.auth.register(register_request("a@x.com", "secret1")).await.unwrap();

        let unknown = ctx.services.auth.login(login_request("nobody@x.com", "secret1")).await.unwrap_err();
        let wrong = ctx.services.auth.login(login_request("a@x.com", "wrong-pw")).await.unwrap_err();

        assert!(matches!(unknown, AppError::InvalidCredentials));
        assert!(matches!(wrong, AppError::InvalidCredentials));
        assert_eq!(unknown.to_string(), wrong.to_string());
        assert_eq!(unknown.to_string(), "invalid credentials");
    }

    #[actix_web::test]
    async fn test_login_succeeds_and_publishes() {
        let ctx = TestContext::new();
        ctx.services.auth.register(register_request("a@x.com", "secret1")).await.unwrap();

        let response = ctx.services.auth.login(login_request("A@x.com", "secret1")).await.unwrap();

        assert_eq!(response.user.email, "a@x.com");
        assert_eq!(
            ctx.published(),
            vec![AuthEventType::UserRegistered, AuthEventType::UserLoggedIn]
        );
    }

    #[actix_web::test]
    async fn test_refresh_token_is_single_use() {
        let ctx = TestContext::new();
        let registered = ctx.services.auth.register(register_request("a@x.com", "secret1")).await.unwrap();

        let rotated = ctx.services.auth.refresh(&registered.refresh_token).await.unwrap();
        assert_ne!(rotated.refresh_token, registered.refresh_token);

        let reused = ctx.services.auth.refresh(&registered.refresh_token).await;
        assert!(matches!(reused, Err(AppError::InvalidToken(_))));

        assert!(ctx.services.auth.refresh(&rotated.refresh_token).await.is_ok());
    }

    #[actix_web::test]
    async fn test_access_token_cannot_be_used_to_refresh() {
        let ctx = TestContext::new();
        let registered = ctx.services.auth.register(register_request("a@x.com", "secret1")).await.unwrap();

        let result = ctx.services.auth.refresh(&registered.access_token).await;

        assert!(matches!(result, Err(AppError::InvalidToken(_))));
    }

    #[actix_web::test]
    async fn test_logout_revokes_and_is_idempotent() {
        let ctx = TestContext::new();
        let registered = ctx.services.auth.register(register_request("a@x.com", "secret1")).await.unwrap();

        ctx.services.auth.logout(&registered.refresh_token).await.unwrap();
        ctx.services.auth.logout(&registered.refresh_token).await.unwrap();

        let result = ctx.services.auth.refresh(&registered.refresh_token).await;
        assert!(matches!(result, Err(AppError::InvalidToken(_))));
    }

    #[actix_web::test]
    async fn test_register_leaves_no_user_when_token_cannot_be_stored() {
        let ctx = TestContext::new();
        ctx.store.set_refresh_token_outage(true);

        let result = ctx.services.auth.register(register_request("a@x.com", "secret1")).await;
        assert!(matches!(result, Err(AppError::DatabaseError(_))));
        assert!(!ctx.user_exists("a@x.com").await);
        assert!(ctx.published().is_empty());

        ctx.store.set_refresh_token_outage(false);
        let retried = ctx.services.auth.register(register_request("a@x.com", "secret1")).await.unwrap();
        assert!(ctx.cart_exists(&retried.user.id).await);
    }

    #[actix_web::test]
    async fn test_concurrent_refresh_with_same_token_succeeds_once() {
        let ctx = TestContext::new();
        let registered = ctx.services.auth.register(register_request("a@x.com", "secret1")).await.unwrap();

        let (first, second) = join(
            ctx.services.auth.refresh(&registered.refresh_token),
            ctx.services.auth.refresh(&registered.refresh_token),
        )
        .await;

        let outcomes = [first, second];
        assert_eq!(outcomes.iter().filter(|outcome| outcome.is_ok()).count(), 1);
        assert!(outcomes
            .iter()
            .any(|outcome| matches!(outcome, Err(AppError::InvalidToken(_)))));
    }

    #[actix_web::test]
    async fn test_publish_failure_keeps_committed_user() {
        let ctx = TestContext::with_failing_publisher();

        let result = ctx.services.auth.register(register_request("a@x.com", "secret1")).await;
        assert!(matches!(result, Err(AppError::EventPublishError(_))));

        let again = ctx.services.auth.register(register_request("a@x.com", "secret1")).await;
        assert!(matches!(again, Err(AppError::EmailTaken)));
    }
}
