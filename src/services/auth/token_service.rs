//! JWT 토큰 관리 서비스 구현
//!
//! 액세스 토큰과 리프레시 토큰의 생성, 검증을 담당합니다.
//! 두 토큰 모두 HS256으로 서명되며 `token_use` 클레임으로 용도를 구분합니다.
//!
//! 만료 검증에는 여유 시간(leeway)을 두지 않습니다.

use chrono::Utc;
use jsonwebtoken::{decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use uuid::Uuid;
use crate::config::JwtSettings;
use crate::core::errors::{AppError, AppResult};
use crate::domain::models::auth::role::UserRole;
use crate::domain::models::token::{TokenClaims, TokenPair, TokenUse};

pub struct TokenService {
    settings: JwtSettings,
}

impl TokenService {
    pub fn new(settings: JwtSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &JwtSettings {
        &self.settings
    }

    fn sign(&self, user_id: &str, email: &str, role: UserRole, token_use: TokenUse, exp: i64) -> AppResult<String> {
        let claims = TokenClaims {
            sub: user_id.to_string(),
            email: email.to_string(),
            role,
            iat: Utc::now().timestamp(),
            exp,
            jti: Uuid::new_v4().to_string(),
            token_use,
        };

        let encoding_key = EncodingKey::from_secret(self.settings.secret.as_bytes());

        encode(&Header::new(Algorithm::HS256), &claims, &encoding_key)
            .map_err(|e| AppError::InternalError(format!("JWT 토큰 생성 실패: {}", e)))
    }

    /// 액세스/리프레시 토큰 쌍을 발급합니다.
    ///
    /// 리프레시 토큰 저장은 호출자(인증 서비스)가 같은 작업 단위 안에서 수행합니다.
    pub fn generate_token_pair(&self, user_id: &str, email: &str, role: UserRole) -> AppResult<TokenPair> {
        let now = Utc::now();
        let access_exp = (now + self.settings.access_ttl).timestamp();
        let refresh_exp = (now + self.settings.refresh_ttl).timestamp();

        let access_token = self.sign(user_id, email, role, TokenUse::Access, access_exp)?;
        let refresh_token = self.sign(user_id, email, role, TokenUse::Refresh, refresh_exp)?;

        Ok(TokenPair {
            access_token,
            refresh_token,
            expires_in: self.settings.access_ttl.num_seconds(),
            refresh_expires_at: refresh_exp,
        })
    }

    /// 서명과 만료를 검증하고 클레임을 반환합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::TokenExpired` - 만료 시각이 지난 경우
    /// * `AppError::InvalidToken` - 서명 불일치, 형식 오류 등 그 밖의 모든 경우
    pub fn validate_with_secret(token: &str, secret: &str) -> AppResult<TokenClaims> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        decode::<TokenClaims>(token, &DecodingKey::from_secret(secret.as_bytes()), &validation)
            .map(|token_data| token_data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => AppError::TokenExpired,
                _ => AppError::InvalidToken(e.to_string()),
            })
    }

    pub fn validate_token(&self, token: &str) -> AppResult<TokenClaims> {
        Self::validate_with_secret(token, &self.settings.secret)
    }

    /// 특정 용도의 토큰만 허용합니다.
    pub fn validate_token_for(&self, token: &str, expected: TokenUse) -> AppResult<TokenClaims> {
        let claims = self.validate_token(token)?;

        if claims.token_use != expected {
            return Err(AppError::InvalidToken("unexpected token type".to_string()));
        }
        Ok(claims)
    }

    /// `Authorization` 헤더 값에서 Bearer 토큰을 추출합니다.
    pub fn extract_bearer_token(auth_header: &str) -> AppResult<&str> {
        auth_header
            .strip_prefix("Bearer ")
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .ok_or_else(|| AppError::InvalidToken("유효하지 않은 인증 헤더 형식입니다".to_string()))
    }
}
