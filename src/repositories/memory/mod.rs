//! # 메모리 저장소
//!
//! 개발 환경과 테스트에서 사용하는 프로세스 내 저장소입니다 (`DATA_STORE=memory`).
//!
//! ## 격리 수준
//!
//! 작업 단위는 시작 시 저장소 전체 잠금을 획득하고 현재 상태의 스냅샷을 복제합니다.
//! 모든 변경은 스냅샷에만 적용되며 `commit`에서 한 번에 반영됩니다.
//! 잠금은 작업 단위가 끝날 때까지 유지되므로 트랜잭션은 한 번에 하나씩 실행됩니다(직렬화 가능).
//! 커밋 없이 drop되면 스냅샷은 버려집니다.

use std::collections::HashMap;
use std::sync::Arc;
#[cfg(test)]
use std::sync::atomic::{AtomicBool, Ordering};
use async_trait::async_trait;
use mongodb::bson::DateTime;
use tokio::sync::{Mutex, OwnedMutexGuard};
use crate::core::errors::{AppError, AppResult};
use crate::domain::entities::{Cart, CartItem, Category, Order, Product, RefreshToken, User};
use crate::domain::models::pagination::PageRequest;
use crate::domain::models::search::{rank_products, ProductSearchCriteria};
use crate::repositories::{
    carts::CartRepository,
    orders::OrderRepository,
    products::{CategoryRepository, ProductRepository, StockLedger},
    tokens::RefreshTokenRepository,
    unit_of_work::{Store, UnitOfWork},
    users::UserRepository,
};

#[derive(Debug, Clone, Default)]
struct MemoryState {
    users: HashMap<String, User>,
    /// `token_hash` 기준
    refresh_tokens: HashMap<String, RefreshToken>,
    carts: HashMap<String, Cart>,
    cart_items: HashMap<String, CartItem>,
    categories: HashMap<String, Category>,
    products: HashMap<String, Product>,
    orders: HashMap<String, Order>,
}

#[derive(Clone, Default)]
pub struct MemoryStore {
    state: Arc<Mutex<MemoryState>>,
    #[cfg(test)]
    refresh_token_outage: Arc<AtomicBool>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 켜져 있는 동안 리프레시 토큰 저장이 `DatabaseError`로 실패합니다.
    #[cfg(test)]
    pub fn set_refresh_token_outage(&self, down: bool) {
        self.refresh_token_outage.store(down, Ordering::SeqCst);
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn begin(&self) -> AppResult<Box<dyn UnitOfWork>> {
        let guard = self.state.clone().lock_owned().await;
        let working = guard.clone();

        Ok(Box::new(MemoryUnitOfWork {
            guard,
            working,
            #[cfg(test)]
            refresh_token_outage: self.refresh_token_outage.load(Ordering::SeqCst),
        }))
    }

    fn backend_name(&self) -> String {
        "Memory".to_string()
    }
}

pub struct MemoryUnitOfWork {
    guard: OwnedMutexGuard<MemoryState>,
    working: MemoryState,
    #[cfg(test)]
    refresh_token_outage: bool,
}

fn page_of<T>(items: Vec<T>, page: PageRequest) -> (Vec<T>, u64) {
    let total = items.len() as u64;
    let items = items
        .into_iter()
        .skip(page.offset() as usize)
        .take(page.limit as usize)
        .collect();
    (items, total)
}

#[async_trait]
impl UnitOfWork for MemoryUnitOfWork {
    async fn commit(self: Box<Self>) -> AppResult<()> {
        let MemoryUnitOfWork { mut guard, working, .. } = *self;
        *guard = working;
        Ok(())
    }

    async fn rollback(self: Box<Self>) -> AppResult<()> {
        Ok(())
    }
}

#[async_trait]
impl UserRepository for MemoryUnitOfWork {
    async fn insert_user(&mut self, user: &User) -> AppResult<()> {
        let taken = self
            .working
            .users
            .values()
            .any(|existing| existing.deleted_at.is_none() && existing.email == user.email);
        if taken {
            return Err(AppError::EmailTaken);
        }

        self.working.users.insert(user.id.clone(), user.clone());
        Ok(())
    }

    async fn find_active_user_by_email(&mut self, email: &str) -> AppResult<Option<User>> {
        Ok(self
            .working
            .users
            .values()
            .find(|user| user.email == email && user.is_available())
            .cloned())
    }

    async fn find_active_user(&mut self, user_id: &str) -> AppResult<Option<User>> {
        Ok(self
            .working
            .users
            .get(user_id)
            .filter(|user| user.is_available())
            .cloned())
    }

    async fn save_user(&mut self, user: &User) -> AppResult<()> {
        self.working.users.insert(user.id.clone(), user.clone());
        Ok(())
    }
}

#[async_trait]
impl RefreshTokenRepository for MemoryUnitOfWork {
    async fn insert_refresh_token(&mut self, token: &RefreshToken) -> AppResult<()> {
        #[cfg(test)]
        if self.refresh_token_outage {
            return Err(AppError::DatabaseError("refresh token store unavailable".to_string()));
        }

        self.working
            .refresh_tokens
            .insert(token.token_hash.clone(), token.clone());
        Ok(())
    }

    async fn find_refresh_token_for_update(&mut self, token_hash: &str) -> AppResult<Option<RefreshToken>> {
        Ok(self.working.refresh_tokens.get(token_hash).cloned())
    }

    async fn delete_refresh_token(&mut self, token_hash: &str) -> AppResult<bool> {
        Ok(self.working.refresh_tokens.remove(token_hash).is_some())
    }

    async fn delete_refresh_tokens_for_user(&mut self, user_id: &str) -> AppResult<u64> {
        let before = self.working.refresh_tokens.len();
        self.working
            .refresh_tokens
            .retain(|_, token| token.user_id != user_id);
        Ok((before - self.working.refresh_tokens.len()) as u64)
    }
}

#[async_trait]
impl CartRepository for MemoryUnitOfWork {
    async fn find_cart(&mut self, user_id: &str) -> AppResult<Option<Cart>> {
        Ok(self
            .working
            .carts
            .values()
            .find(|cart| cart.user_id == user_id)
            .cloned())
    }

    async fn find_cart_for_update(&mut self, user_id: &str) -> AppResult<Option<Cart>> {
        self.find_cart(user_id).await
    }

    async fn insert_cart(&mut self, cart: &Cart) -> AppResult<()> {
        if self.working.carts.values().any(|existing| existing.user_id == cart.user_id) {
            return Err(AppError::TransactionConflict(format!("cart already exists for user {}", cart.user_id)));
        }
        self.working.carts.insert(cart.id.clone(), cart.clone());
        Ok(())
    }

    async fn find_active_cart_items(&mut self, cart_id: &str) -> AppResult<Vec<CartItem>> {
        let mut items: Vec<CartItem> = self
            .working
            .cart_items
            .values()
            .filter(|item| item.cart_id == cart_id && item.is_active())
            .cloned()
            .collect();
        items.sort_by(|a, b| a.created_at.cmp(&b.created_at).then_with(|| a.id.cmp(&b.id)));
        Ok(items)
    }

    async fn find_cart_item(&mut self, item_id: &str) -> AppResult<Option<CartItem>> {
        Ok(self
            .working
            .cart_items
            .get(item_id)
            .filter(|item| item.is_active())
            .cloned())
    }

    async fn find_active_cart_item_for_product(
        &mut self,
        cart_id: &str,
        product_id: &str,
    ) -> AppResult<Option<CartItem>> {
        Ok(self
            .working
            .cart_items
            .values()
            .find(|item| item.cart_id == cart_id && item.product_id == product_id && item.is_active())
            .cloned())
    }

    async fn insert_cart_item(&mut self, item: &CartItem) -> AppResult<()> {
        self.working.cart_items.insert(item.id.clone(), item.clone());
        Ok(())
    }

    async fn save_cart_item(&mut self, item: &CartItem) -> AppResult<()> {
        self.working.cart_items.insert(item.id.clone(), item.clone());
        Ok(())
    }

    async fn clear_cart_items(&mut self, cart_id: &str) -> AppResult<u64> {
        let mut cleared = 0;
        for item in self.working.cart_items.values_mut() {
            if item.cart_id == cart_id && item.is_active() {
                item.soft_delete();
                cleared += 1;
            }
        }
        Ok(cleared)
    }
}

#[async_trait]
impl CategoryRepository for MemoryUnitOfWork {
    async fn insert_category(&mut self, category: &Category) -> AppResult<()> {
        self.working.categories.insert(category.id.clone(), category.clone());
        Ok(())
    }

    async fn find_category(&mut self, category_id: &str) -> AppResult<Option<Category>> {
        Ok(self.working.categories.get(category_id).cloned())
    }

    async fn list_active_categories(&mut self) -> AppResult<Vec<Category>> {
        let mut categories: Vec<Category> = self
            .working
            .categories
            .values()
            .filter(|category| category.is_available())
            .cloned()
            .collect();
        categories.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(categories)
    }

    async fn save_category(&mut self, category: &Category) -> AppResult<()> {
        self.working.categories.insert(category.id.clone(), category.clone());
        Ok(())
    }
}

impl MemoryUnitOfWork {
    fn ensure_unique_sku(&self, product: &Product) -> AppResult<()> {
        let taken = self.working.products.values().any(|existing| {
            existing.id != product.id && existing.deleted_at.is_none() && existing.sku == product.sku
        });
        if taken {
            return Err(AppError::ConflictError(format!("sku {} is already in use", product.sku)));
        }
        Ok(())
    }
}

#[async_trait]
impl ProductRepository for MemoryUnitOfWork {
    async fn insert_product(&mut self, product: &Product) -> AppResult<()> {
        self.ensure_unique_sku(product)?;
        self.working.products.insert(product.id.clone(), product.clone());
        Ok(())
    }

    async fn find_product(&mut self, product_id: &str) -> AppResult<Option<Product>> {
        Ok(self.working.products.get(product_id).cloned())
    }

    async fn save_product(&mut self, product: &Product) -> AppResult<()> {
        self.ensure_unique_sku(product)?;
        self.working.products.insert(product.id.clone(), product.clone());
        Ok(())
    }

    async fn list_active_products(&mut self, page: PageRequest) -> AppResult<(Vec<Product>, u64)> {
        let mut products: Vec<Product> = self
            .working
            .products
            .values()
            .filter(|product| product.is_available())
            .cloned()
            .collect();
        products.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(page_of(products, page))
    }

    async fn search_products(&mut self, criteria: &ProductSearchCriteria) -> AppResult<(Vec<(Product, f32)>, u64)> {
        Ok(rank_products(self.working.products.values().cloned(), criteria))
    }
}

#[async_trait]
impl StockLedger for MemoryUnitOfWork {
    async fn find_product_for_update(&mut self, product_id: &str) -> AppResult<Option<Product>> {
        self.find_product(product_id).await
    }

    async fn decrement_product_stock(&mut self, product_id: &str, quantity: i32) -> AppResult<bool> {
        match self.working.products.get_mut(product_id) {
            Some(product) if product.stock >= quantity => {
                product.stock -= quantity;
                product.updated_at = DateTime::now();
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    async fn set_product_stock(&mut self, product_id: &str, stock: i32) -> AppResult<()> {
        let product = self
            .working
            .products
            .get_mut(product_id)
            .ok_or_else(|| AppError::NotFound("product not found".to_string()))?;
        product.stock = stock;
        product.updated_at = DateTime::now();
        Ok(())
    }
}

#[async_trait]
impl OrderRepository for MemoryUnitOfWork {
    async fn insert_order(&mut self, order: &Order) -> AppResult<()> {
        self.working.orders.insert(order.id.clone(), order.clone());
        Ok(())
    }

    async fn find_order(&mut self, order_id: &str) -> AppResult<Option<Order>> {
        Ok(self.working.orders.get(order_id).cloned())
    }

    async fn list_orders_for_user(&mut self, user_id: &str, page: PageRequest) -> AppResult<(Vec<Order>, u64)> {
        let mut orders: Vec<Order> = self
            .working
            .orders
            .values()
            .filter(|order| order.user_id == user_id)
            .cloned()
            .collect();
        orders.sort_by(|a, b| b.created_at.cmp(&a.created_at).then_with(|| b.id.cmp(&a.id)));
        Ok(page_of(orders, page))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(sku: &str, stock: i32) -> Product {
        Product::new("cat-1".into(), "Mug".into(), "ceramic".into(), 5.0, stock, sku.into())
    }

    #[actix_web::test]
    async fn test_commit_publishes_changes() {
        let store = MemoryStore::new();
        let item = product("MUG-1", 5);

        let mut uow = store.begin().await.unwrap();
        uow.insert_product(&item).await.unwrap();
        uow.commit().await.unwrap();

        let mut uow = store.begin().await.unwrap();
        assert!(uow.find_product(&item.id).await.unwrap().is_some());
    }

    #[actix_web::test]
    async fn test_drop_without_commit_discards_changes() {
        let store = MemoryStore::new();
        let item = product("MUG-1", 5);

        {
            let mut uow = store.begin().await.unwrap();
            uow.insert_product(&item).await.unwrap();
        }

        let mut uow = store.begin().await.unwrap();
        assert!(uow.find_product(&item.id).await.unwrap().is_none());
    }

    #[actix_web::test]
    async fn test_conditional_decrement_never_goes_negative() {
        let store = MemoryStore::new();
        let item = product("MUG-1", 2);

        let mut uow = store.begin().await.unwrap();
        uow.insert_product(&item).await.unwrap();

        assert!(!uow.decrement_product_stock(&item.id, 3).await.unwrap());
        assert!(uow.decrement_product_stock(&item.id, 2).await.unwrap());
        assert_eq!(uow.find_product(&item.id).await.unwrap().unwrap().stock, 0);
    }

    #[actix_web::test]
    async fn test_duplicate_email_and_sku_are_rejected() {
        let store = MemoryStore::new();
        let mut uow = store.begin().await.unwrap();

        let user = User::new_customer("a@x.com".into(), "hash".into(), "A".into(), "B".into());
        uow.insert_user(&user).await.unwrap();
        let twin = User::new_customer("a@x.com".into(), "hash".into(), "C".into(), "D".into());
        assert!(matches!(uow.insert_user(&twin).await, Err(AppError::EmailTaken)));

        uow.insert_product(&product("SKU-1", 1)).await.unwrap();
        assert!(matches!(
            uow.insert_product(&product("SKU-1", 1)).await,
            Err(AppError::ConflictError(_))
        ));
    }

    #[actix_web::test]
    async fn test_second_cart_for_user_is_a_retryable_conflict() {
        let store = MemoryStore::new();
        let mut uow = store.begin().await.unwrap();

        uow.insert_cart(&Cart::new("u-1")).await.unwrap();
        let result = uow.insert_cart(&Cart::new("u-1")).await;

        assert!(matches!(result, Err(AppError::TransactionConflict(_))));
        assert!(result.unwrap_err().is_retryable());
    }

    #[actix_web::test]
    async fn test_email_is_reusable_after_soft_delete() {
        let store = MemoryStore::new();
        let mut uow = store.begin().await.unwrap();

        let mut user = User::new_customer("a@x.com".into(), "hash".into(), "A".into(), "B".into());
        uow.insert_user(&user).await.unwrap();
        user.soft_delete();
        uow.save_user(&user).await.unwrap();

        let again = User::new_customer("a@x.com".into(), "hash".into(), "A".into(), "B".into());
        assert!(uow.insert_user(&again).await.is_ok());
    }
}
