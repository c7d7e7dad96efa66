//! # Service Registry
//!
//! 애플리케이션 전역에서 공유되는 서비스 인스턴스를 타입별로 보관하는 레지스트리입니다.
//! `main.rs`가 부팅 시 저장소(`Store`), 이벤트 발행자, 각 서비스를 조립한 뒤
//! [`ServiceLocator::set`]으로 등록하고, 핸들러와 미들웨어는
//! [`ServiceLocator::get`]으로 꺼내 사용합니다.
//!
//! ## 동작 원리
//!
//! ```text
//! main.rs (부팅)
//!    ├─ Store, EventPublisher 생성
//!    ├─ AuthService, CartService, OrderService ... 생성 (Arc 의존성 주입)
//!    └─ ServiceLocator::set(Arc<T>)  → TypeId 기준으로 저장
//!
//! 요청 처리
//!    └─ ServiceLocator::get::<CartService>()  → 저장된 Arc<T> 복제 반환
//! ```
//!
//! 서비스는 생성 시점에 모든 의존성을 명시적으로 전달받습니다.
//! 레지스트리는 조립된 인스턴스를 찾아주는 역할만 하며, 인스턴스를 직접 만들지 않습니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::core::registry::ServiceLocator;
//!
//! let cart_service = Arc::new(CartService::new(store.clone()));
//! ServiceLocator::set(cart_service);
//!
//! // 핸들러에서
//! let cart_service = ServiceLocator::get::<CartService>()?;
//! ```

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use once_cell::sync::Lazy;
use crate::core::errors::AppError;

pub struct ServiceLocator {
    instances: RwLock<HashMap<TypeId, Arc<dyn Any + Send + Sync>>>,
}

static LOCATOR: Lazy<ServiceLocator> = Lazy::new(ServiceLocator::new);

impl ServiceLocator {
    fn new() -> Self {
        Self {
            instances: RwLock::new(HashMap::new()),
        }
    }

    /// 등록된 인스턴스를 조회합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::InternalError` - 해당 타입이 등록되지 않았거나 레지스트리 락이 오염된 경우
    pub fn get<T: 'static + Send + Sync>() -> Result<Arc<T>, AppError> {
        let type_name = Self::extract_clean_type_name(std::any::type_name::<T>());

        let instances = LOCATOR.instances.read().map_err(|_| {
            AppError::InternalError("서비스 레지스트리 락이 오염되었습니다".to_string())
        })?;

        let instance = instances.get(&TypeId::of::<T>()).cloned().ok_or_else(|| {
            log::error!("❌ 등록되지 않은 서비스 요청: {}", type_name);
            AppError::InternalError(format!("Service not registered: {}", type_name))
        })?;

        instance
            .downcast::<T>()
            .map_err(|_| AppError::InternalError(format!("Type mismatch in ServiceLocator: {}", type_name)))
    }

    /// 외부에서 조립된 인스턴스를 등록합니다.
    ///
    /// 같은 타입이 이미 등록되어 있으면 새 인스턴스로 교체합니다.
    pub fn set<T: 'static + Send + Sync>(instance: Arc<T>) {
        let clean_name = Self::extract_clean_type_name(std::any::type_name::<T>());

        match LOCATOR.instances.write() {
            Ok(mut instances) => {
                instances.insert(TypeId::of::<T>(), instance as Arc<dyn Any + Send + Sync>);
                log::debug!("📦 Registered: {}", clean_name);
            }
            Err(_) => log::error!("❌ 서비스 레지스트리 락이 오염되어 {} 등록에 실패했습니다", clean_name),
        }
    }

    /// 등록 여부를 확인합니다.
    pub fn contains<T: 'static + Send + Sync>() -> bool {
        LOCATOR
            .instances
            .read()
            .map(|instances| instances.contains_key(&TypeId::of::<T>()))
            .unwrap_or(false)
    }

    /// `std::any::type_name`의 전체 모듈 경로에서 타입 이름만 추출합니다.
    fn extract_clean_type_name(type_name: &str) -> String {
        match type_name.rfind("::") {
            Some(pos) => type_name[pos + 2..].to_string(),
            None => type_name.to_string(),
        }
    }
}
