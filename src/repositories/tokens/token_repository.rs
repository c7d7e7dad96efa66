//! 리프레시 토큰 저장소 계약
//!
//! 원본 토큰 문자열은 저장하지 않고 SHA-256 지문(`token_hash`)만 보관합니다.
//! 조회와 삭제도 지문 기준으로 이루어집니다.

use async_trait::async_trait;
use crate::core::errors::AppResult;
use crate::domain::entities::RefreshToken;

#[async_trait]
pub trait RefreshTokenRepository: Send {
    async fn insert_refresh_token(&mut self, token: &RefreshToken) -> AppResult<()>;

    /// 토큰 레코드를 조회하면서 쓰기 잠금을 획득합니다.
    ///
    /// 같은 리프레시 토큰으로 동시에 들어온 회전 요청 중 하나만 커밋될 수 있습니다.
    async fn find_refresh_token_for_update(&mut self, token_hash: &str) -> AppResult<Option<RefreshToken>>;

    /// 지문에 해당하는 레코드를 삭제합니다. 삭제 여부를 반환합니다.
    async fn delete_refresh_token(&mut self, token_hash: &str) -> AppResult<bool>;

    /// 사용자의 모든 리프레시 토큰을 삭제하고 삭제 건수를 반환합니다.
    async fn delete_refresh_tokens_for_user(&mut self, user_id: &str) -> AppResult<u64>;
}
