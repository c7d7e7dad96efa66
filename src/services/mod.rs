//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 각 서비스는 생성 시점에 저장소(`Store`)와 필요한 협력 객체를 명시적으로 전달받습니다.
//! [`ServiceContainer`]가 부팅 시 전체 서비스를 한 번에 조립하고
//! [`ServiceLocator`]에 등록하여 핸들러와 미들웨어가 사용할 수 있게 합니다.
//!
//! # Features
//!
//! - 가입/로그인/토큰 회전/로그아웃 ([`auth::AuthService`])
//! - 프로필 조회, 수정, 탈퇴 ([`users::UserService`])
//! - 장바구니 변경 ([`carts::CartService`])
//! - 주문 생성과 조회 ([`orders::OrderService`])
//! - 카테고리/상품 관리와 검색 ([`products::CatalogService`])
//!
//! # Examples
//!
//! ```rust,ignore
//! let container = ServiceContainer::build(store, publisher, JwtSettings::from_env(), PasswordHasher::from_env());
//! container.register();
//!
//! // 핸들러에서
//! let cart_service = ServiceLocator::get::<CartService>()?;
//! ```

pub mod auth;
pub mod carts;
pub mod orders;
pub mod products;
pub mod users;

#[cfg(test)]
pub(crate) mod test_support;

use std::sync::Arc;
use crate::config::JwtSettings;
use crate::core::registry::ServiceLocator;
use crate::events::EventPublisher;
use crate::repositories::Store;
use auth::{AuthService, PasswordHasher, TokenService};
use carts::CartService;
use orders::OrderService;
use products::CatalogService;
use users::UserService;

/// 조립이 끝난 서비스 묶음
#[derive(Clone)]
pub struct ServiceContainer {
    pub auth: Arc<AuthService>,
    pub tokens: Arc<TokenService>,
    pub users: Arc<UserService>,
    pub carts: Arc<CartService>,
    pub orders: Arc<OrderService>,
    pub catalog: Arc<CatalogService>,
}

impl ServiceContainer {
    pub fn build(
        store: Arc<dyn Store>,
        publisher: Arc<dyn EventPublisher>,
        jwt: JwtSettings,
        passwords: PasswordHasher,
    ) -> Self {
        let tokens = Arc::new(TokenService::new(jwt));

        Self {
            auth: Arc::new(AuthService::new(store.clone(), tokens.clone(), publisher, passwords)),
            tokens,
            users: Arc::new(UserService::new(store.clone())),
            carts: Arc::new(CartService::new(store.clone())),
            orders: Arc::new(OrderService::new(store.clone())),
            catalog: Arc::new(CatalogService::new(store)),
        }
    }

    /// 모든 서비스를 [`ServiceLocator`]에 등록하고 등록한 개수를 반환합니다.
    pub fn register(&self) -> usize {
        ServiceLocator::set(self.auth.clone());
        ServiceLocator::set(self.tokens.clone());
        ServiceLocator::set(self.users.clone());
        ServiceLocator::set(self.carts.clone());
        ServiceLocator::set(self.orders.clone());
        ServiceLocator::set(self.catalog.clone());
        6
    }
}
