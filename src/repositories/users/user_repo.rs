//! # 사용자 리포지토리
//!
//! 사용자 엔티티의 데이터 액세스 계약입니다.
//! 모든 메서드는 [`UnitOfWork`](crate::repositories::UnitOfWork) 안에서 호출되며,
//! 커밋 전까지 다른 트랜잭션에 보이지 않습니다.
//!
//! ## 저장소별 구현
//!
//! - MongoDB: `users` 컬렉션. `email`에 `deleted_at`이 null인 문서만 대상으로 하는
//!   부분 유니크 인덱스(`email_active_unique`)를 둡니다.
//! - Memory: 트랜잭션 스냅샷의 `HashMap<String, User>`

use async_trait::async_trait;
use crate::core::errors::AppResult;
use crate::domain::entities::User;

#[async_trait]
pub trait UserRepository: Send {
    /// 사용자를 생성합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::EmailTaken` - 삭제되지 않은 사용자가 같은 이메일을 사용 중인 경우
    async fn insert_user(&mut self, user: &User) -> AppResult<()>;

    /// 활성 상태이고 삭제되지 않은 사용자를 이메일로 조회합니다.
    async fn find_active_user_by_email(&mut self, email: &str) -> AppResult<Option<User>>;

    /// 활성 상태이고 삭제되지 않은 사용자를 ID로 조회합니다.
    async fn find_active_user(&mut self, user_id: &str) -> AppResult<Option<User>>;

    /// 사용자 문서 전체를 교체 저장합니다.
    async fn save_user(&mut self, user: &User) -> AppResult<()>;
}
