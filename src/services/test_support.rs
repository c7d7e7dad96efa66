//! 서비스 테스트용 조립 도우미
//!
//! 메모리 저장소와 기록용 이벤트 발행자로 전체 서비스를 구성합니다.

use std::sync::{Arc, Mutex};
use async_trait::async_trait;
use chrono::Duration;
use once_cell::sync::Lazy;
use uuid::Uuid;
use crate::config::JwtSettings;
use crate::core::errors::{AppError, AppResult};
use crate::domain::dto::users::request::RegisterRequest;
use crate::domain::dto::users::response::AuthResponse;
use crate::domain::entities::{Category, Product};
use crate::domain::models::events::{AuthEventType, DomainEvent};
use crate::events::EventPublisher;
use crate::repositories::memory::MemoryStore;
use crate::repositories::Store;
use crate::services::auth::PasswordHasher;
use crate::services::ServiceContainer;

pub const TEST_PASSWORD: &str = "correct-horse-battery";

static SHARED: Lazy<TestContext> = Lazy::new(|| {
    let ctx = TestContext::new();
    ctx.services.register();
    ctx
});

/// [`ServiceLocator`](crate::core::registry::ServiceLocator)에 등록된 프로세스 공용 컨텍스트.
/// 라우트/미들웨어 테스트가 함께 사용하므로 고유한 이메일로 데이터를 만들어야 합니다.
pub fn shared() -> &'static TestContext {
    &SHARED
}

#[derive(Default)]
pub struct RecordingPublisher {
    events: Mutex<Vec<DomainEvent>>,
}

#[async_trait]
impl EventPublisher for RecordingPublisher {
    async fn publish(&self, event: &DomainEvent) -> AppResult<()> {
        if let Ok(mut events) = self.events.lock() {
            events.push(event.clone());
        }
        Ok(())
    }

    fn describe(&self) -> String {
        "Recording".to_string()
    }
}

pub struct FailingPublisher;

#[async_trait]
impl EventPublisher for FailingPublisher {
    async fn publish(&self, _event: &DomainEvent) -> AppResult<()> {
        Err(AppError::EventPublishError("broker unavailable".to_string()))
    }

    fn describe(&self) -> String {
        "Failing".to_string()
    }
}

pub struct TestContext {
    pub store: Arc<MemoryStore>,
    pub services: ServiceContainer,
    recorder: Arc<RecordingPublisher>,
}

impl TestContext {
    pub fn new() -> Self {
        let recorder = Arc::new(RecordingPublisher::default());
        Self::assemble(recorder.clone(), recorder)
    }

    pub fn with_failing_publisher() -> Self {
        Self::assemble(Arc::new(FailingPublisher), Arc::new(RecordingPublisher::default()))
    }

    fn assemble(publisher: Arc<dyn EventPublisher>, recorder: Arc<RecordingPublisher>) -> Self {
        let store = Arc::new(MemoryStore::new());
        let jwt = JwtSettings::new("test-secret", Duration::hours(1), Duration::days(30));
        let services = ServiceContainer::build(store.clone(), publisher, jwt, PasswordHasher::new(4));

        Self {
            store,
            services,
            recorder,
        }
    }

    pub fn published(&self) -> Vec<AuthEventType> {
        self.recorder
            .events
            .lock()
            .map(|events| events.iter().map(|event| event.event_type).collect())
            .unwrap_or_default()
    }

    pub async fn register(&self, email: &str) -> AuthResponse {
        self.services
            .auth
            .register(RegisterRequest {
                email: email.to_string(),
                password: TEST_PASSWORD.to_string(),
                first_name: "Ada".to_string(),
                last_name: "Lovelace".to_string(),
            })
            .await
            .expect("register")
    }

    pub async fn cart_exists(&self, user_id: &str) -> bool {
        let mut uow = self.store.begin().await.unwrap();
        uow.find_cart(user_id).await.unwrap().is_some()
    }

    pub async fn user_exists(&self, email: &str) -> bool {
        let mut uow = self.store.begin().await.unwrap();
        uow.find_active_user_by_email(email).await.unwrap().is_some()
    }

    pub async fn seed_product(&self, name: &str, price: f64, stock: i32) -> Product {
        self.seed_product_with_description(name, "", price, stock).await
    }

    pub async fn seed_product_with_description(&self, name: &str, description: &str, price: f64, stock: i32) -> Product {
        let category = Category::new("General".to_string(), String::new());
        let product = Product::new(
            category.id.clone(),
            name.to_string(),
            description.to_string(),
            price,
            stock,
            format!("SKU-{}", Uuid::new_v4()),
        );

        let mut uow = self.store.begin().await.unwrap();
        uow.insert_category(&category).await.unwrap();
        uow.insert_product(&product).await.unwrap();
        uow.commit().await.unwrap();
        product
    }

    pub async fn stock_of(&self, product_id: &str) -> i32 {
        let mut uow = self.store.begin().await.unwrap();
        uow.find_product(product_id).await.unwrap().expect("product").stock
    }

    pub async fn set_stock(&self, product_id: &str, stock: i32) {
        let mut uow = self.store.begin().await.unwrap();
        uow.set_product_stock(product_id, stock).await.unwrap();
        uow.commit().await.unwrap();
    }

    pub async fn set_price(&self, product_id: &str, price: f64) {
        self.modify_product(product_id, |product| product.price = price).await;
    }

    pub async fn deactivate_product(&self, product_id: &str) {
        self.modify_product(product_id, |product| product.is_active = false).await;
    }

    async fn modify_product(&self, product_id: &str, change: impl FnOnce(&mut Product)) {
        let mut uow = self.store.begin().await.unwrap();
        let mut product = uow.find_product(product_id).await.unwrap().expect("product");
        change(&mut product);
        uow.save_product(&product).await.unwrap();
        uow.commit().await.unwrap();
    }
}
