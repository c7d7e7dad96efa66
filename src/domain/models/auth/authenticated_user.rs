use std::future::{ready, Ready};
use actix_web::{FromRequest, HttpMessage, HttpRequest};
use serde::{Deserialize, Serialize};
use crate::core::errors::AppError;
use crate::domain::models::auth::role::{Capability, UserRole};

/// 검증된 액세스 토큰에서 추출된 사용자 정보
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    /// 사용자 고유 ID
    pub user_id: String,

    pub email: String,

    pub role: UserRole,
}

impl AuthenticatedUser {
    /// capability 보유 여부 확인
    pub fn can(&self, capability: Capability) -> bool {
        self.role.allows(capability)
    }
}

/// 인증 미들웨어가 Request Extensions에 넣어 둔 사용자를 꺼냅니다.
impl FromRequest for AuthenticatedUser {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        match req.extensions().get::<AuthenticatedUser>() {
            Some(user) => ready(Ok(user.clone())),
            None => ready(Err(AppError::InvalidToken("인증되지 않은 요청입니다".to_string()))),
        }
    }
}
