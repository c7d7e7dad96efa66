//! # 장바구니 서비스
//!
//! 장바구니 항목 추가, 수량 변경, 삭제, 조회를 담당합니다.
//!
//! 모든 변경은 하나의 작업 단위 안에서 장바구니 → 상품 순서로 잠금을 획득한 뒤
//! 현재 재고를 기준으로 수량을 검증합니다. 같은 장바구니에 대한 동시 요청은
//! 장바구니 잠금으로 직렬화되므로 재고 검증과 쓰기 사이에 다른 변경이 끼어들 수 없습니다.

use std::sync::Arc;
use mongodb::bson::DateTime;
use crate::core::errors::{AppError, AppResult};
use crate::domain::dto::carts::response::{CartItemResponse, CartResponse};
use crate::domain::entities::{Cart, CartItem, Product};
use crate::repositories::{with_retry, Store, UnitOfWork};

pub struct CartService {
    store: Arc<dyn Store>,
}

pub(crate) fn insufficient_stock(product: &Product) -> AppError {
    AppError::InsufficientStock {
        product_id: product.id.clone(),
        product_name: product.name.clone(),
    }
}

fn ensure_positive(quantity: i32) -> AppResult<()> {
    if quantity < 1 {
        return Err(AppError::ValidationError("quantity must be at least 1".to_string()));
    }
    Ok(())
}

/// 활성 항목을 상품/카테고리 정보와 함께 응답 형태로 조립합니다.
///
/// 상품이 더 이상 존재하지 않는 항목은 건너뜁니다.
async fn build_cart_view<U>(uow: &mut U, cart: &Cart) -> AppResult<CartResponse>
where
    U: UnitOfWork + ?Sized,
{
    let items = uow.find_active_cart_items(&cart.id).await?;
    let mut views = Vec::with_capacity(items.len());

    for item in &items {
        let Some(product) = uow.find_product(&item.product_id).await? else {
            log::warn!("⚠️ 장바구니 항목 {}의 상품 {}을(를) 찾을 수 없습니다", item.id, item.product_id);
            continue;
        };
        let category = uow.find_category(&product.category_id).await?;

        views.push(CartItemResponse::new(item, &product, category.as_ref()));
    }

    Ok(CartResponse::new(cart.id.clone(), cart.user_id.clone(), views))
}

impl CartService {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }

    /// 상품을 장바구니에 담습니다. 이미 담긴 상품이면 수량을 더합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::NotFound` - 상품이 없거나 판매 중이 아닌 경우
    /// * `AppError::InsufficientStock` - 기존 수량 + 요청 수량이 재고를 넘는 경우
    pub async fn add_item(&self, user_id: &str, product_id: &str, quantity: i32) -> AppResult<CartResponse> {
        ensure_positive(quantity)?;
        with_retry("add_item", move || self.add_item_once(user_id, product_id, quantity)).await
    }

    /// 항목 수량을 새 값으로 바꿉니다.
    pub async fn update_item(&self, user_id: &str, item_id: &str, quantity: i32) -> AppResult<CartResponse> {
        ensure_positive(quantity)?;
        with_retry("update_item", move || self.update_item_once(user_id, item_id, quantity)).await
    }

    pub async fn remove_item(&self, user_id: &str, item_id: &str) -> AppResult<()> {
        with_retry("remove_item", move || self.remove_item_once(user_id, item_id)).await
    }

    pub async fn get_cart(&self, user_id: &str) -> AppResult<CartResponse> {
        let mut uow = self.store.begin().await?;
        let cart = uow
            .find_cart(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("cart not found".to_string()))?;

        let view = build_cart_view(uow.as_mut(), &cart).await?;
        uow.commit().await?;
        Ok(view)
    }

    async fn add_item_once(&self, user_id: &str, product_id: &str, quantity: i32) -> AppResult<CartResponse> {
        let mut uow = self.store.begin().await?;

        let cart = match uow.find_cart_for_update(user_id).await? {
            Some(cart) => cart,
            None => {
                let cart = Cart::new(user_id);
                uow.insert_cart(&cart).await?;
                log::debug!("🛒 장바구니가 없어 새로 생성합니다 (user: {})", user_id);
                cart
            }
        };

        let product = uow
            .find_product_for_update(product_id)
            .await?
            .filter(Product::is_available)
            .ok_or_else(|| AppError::NotFound("product not found".to_string()))?;

        match uow.find_active_cart_item_for_product(&cart.id, &product.id).await? {
            Some(mut item) => {
                let total = item
                    .quantity
                    .checked_add(quantity)
                    .filter(|total| product.can_supply(*total))
                    .ok_or_else(|| insufficient_stock(&product))?;

                item.quantity = total;
                item.updated_at = DateTime::now();
                uow.save_cart_item(&item).await?;
            }
            None => {
                if !product.can_supply(quantity) {
                    return Err(insufficient_stock(&product));
                }
                uow.insert_cart_item(&CartItem::new(&cart.id, &product.id, quantity)).await?;
            }
        }

        let view = build_cart_view(uow.as_mut(), &cart).await?;
        uow.commit().await?;
        Ok(view)
    }

    async fn update_item_once(&self, user_id: &str, item_id: &str, quantity: i32) -> AppResult<CartResponse> {
        let mut uow = self.store.begin().await?;

        let cart = uow
            .find_cart_for_update(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("cart item not found".to_string()))?;

        let mut item = uow
            .find_cart_item(item_id)
            .await?
            .filter(|item| item.cart_id == cart.id)
            .ok_or_else(|| AppError::NotFound("cart item not found".to_string()))?;

        let product = uow
            .find_product_for_update(&item.product_id)
            .await?
            .filter(Product::is_available)
            .ok_or_else(|| AppError::NotFound("product not found".to_string()))?;

        if !product.can_supply(quantity) {
            return Err(insufficient_stock(&product));
        }

        item.quantity = quantity;
        item.updated_at = DateTime::now();
        uow.save_cart_item(&item).await?;

        let view = build_cart_view(uow.as_mut(), &cart).await?;
        uow.commit().await?;
        Ok(view)
    }

    async fn remove_item_once(&self, user_id: &str, item_id: &str) -> AppResult<()> {
        let mut uow = self.store.begin().await?;

        let cart = uow
            .find_cart_for_update(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("cart item not found".to_string()))?;

        let mut item = uow
            .find_cart_item(item_id)
            .await?
            .filter(|item| item.cart_id == cart.id)
            .ok_or_else(|| AppError::NotFound("cart item not found".to_string()))?;

        item.soft_delete();
        uow.save_cart_item(&item).await?;
        uow.commit().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures_util::future::join;
    use crate::services::test_support::TestContext;

    #[actix_web::test]
    async fn test_add_item_up_to_exact_stock_succeeds() {
        let ctx = TestContext::new();
        let user = ctx.register("a@x.com").await;
        let product = ctx.seed_product("Mug", 5.0, 5).await;

        ctx.services.carts.add_item(&user.user.id, &product.id, 3).await.unwrap();
        let cart = ctx.services.carts.add_item(&user.user.id, &product.id, 2).await.unwrap();

        assert_eq!(cart.items.len(), 1);
        assert_eq!(cart.items[0].quantity, 5);
        assert_eq!(cart.total, 25.0);
    }

    #[actix_web::test]
    async fn test_add_item_beyond_stock_fails_and_leaves_cart_unchanged() {
        let ctx = TestContext::new();
        let user = ctx.register("a@x.com").await;
        let product = ctx.seed_product("Mug", 5.0, 5).await;

        ctx.services.carts.add_item(&user.user.id, &product.id, 3).await.unwrap();
        let result = ctx.services.carts.add_item(&user.user.id, &product.id, 3).await;

        match result {
            Err(AppError::InsufficientStock { product_id, product_name }) => {
                assert_eq!(product_id, product.id);
                assert_eq!(product_name, "Mug");
            }
            other => panic!("expected InsufficientStock, got {:?}", other.map(|_| ())),
        }

        let cart = ctx.services.carts.get_cart(&user.user.id).await.unwrap();
        assert_eq!(cart.items[0].quantity, 3);
    }

    #[actix_web::test]
    async fn test_add_item_rejects_unknown_and_inactive_products() {
        let ctx = TestContext::new();
        let user = ctx.register("a@x.com").await;
        let product = ctx.seed_product("Mug", 5.0, 5).await;
        ctx.deactivate_product(&product.id).await;

        assert!(matches!(
            ctx.services.carts.add_item(&user.user.id, "missing", 1).await,
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(
            ctx.services.carts.add_item(&user.user.id, &product.id, 1).await,
            Err(AppError::NotFound(_))
        ));
    }

    #[actix_web::test]
    async fn test_add_item_creates_missing_cart() {
        let ctx = TestContext::new();
        let product = ctx.seed_product("Mug", 5.0, 5).await;

        let cart = ctx.services.carts.add_item("user-without-cart", &product.id, 1).await.unwrap();

        assert_eq!(cart.user_id, "user-without-cart");
        assert_eq!(cart.items.len(), 1);
    }

    #[actix_web::test]
    async fn test_zero_quantity_is_a_validation_error() {
        let ctx = TestContext::new();

        assert!(matches!(
            ctx.services.carts.add_item("user-1", "product-1", 0).await,
            Err(AppError::ValidationError(_))
        ));
    }

    #[actix_web::test]
    async fn test_concurrent_adds_against_limited_stock_only_one_succeeds() {
        let ctx = TestContext::new();
        let user = ctx.register("a@x.com").await;
        let product = ctx.seed_product("Mug", 5.0, 5).await;

        let (first, second) = join(
            ctx.services.carts.add_item(&user.user.id, &product.id, 3),
            ctx.services.carts.add_item(&user.user.id, &product.id, 3),
        )
        .await;

        let successes = [first.is_ok(), second.is_ok()].iter().filter(|ok| **ok).count();
        assert_eq!(successes, 1);

        let cart = ctx.services.carts.get_cart(&user.user.id).await.unwrap();
        assert_eq!(cart.items[0].quantity, 3);
    }

    #[actix_web::test]
    async fn test_update_item_validates_against_stock_and_ownership() {
        let ctx = TestContext::new();
        let owner = ctx.register("a@x.com").await;
        let other = ctx.register("b@x.com").await;
        let product = ctx.seed_product("Mug", 5.0, 5).await;

        let cart = ctx.services.carts.add_item(&owner.user.id, &product.id, 1).await.unwrap();
        let item_id = cart.items[0].id.clone();

        let updated = ctx.services.carts.update_item(&owner.user.id, &item_id, 5).await.unwrap();
        assert_eq!(updated.items[0].quantity, 5);

        assert!(matches!(
            ctx.services.carts.update_item(&owner.user.id, &item_id, 6).await,
            Err(AppError::InsufficientStock { .. })
        ));
        assert!(matches!(
            ctx.services.carts.update_item(&other.user.id, &item_id, 1).await,
            Err(AppError::NotFound(_))
        ));
    }

    #[actix_web::test]
    async fn test_remove_item_soft_deletes_line() {
        let ctx = TestContext::new();
        let user = ctx.register("a@x.com").await;
        let product = ctx.seed_product("Mug", 5.0, 5).await;

        let cart = ctx.services.carts.add_item(&user.user.id, &product.id, 2).await.unwrap();
        let item_id = cart.items[0].id.clone();

        ctx.services.carts.remove_item(&user.user.id, &item_id).await.unwrap();

        let cart = ctx.services.carts.get_cart(&user.user.id).await.unwrap();
        assert!(cart.items.is_empty());
        assert_eq!(cart.total, 0.0);
        assert!(matches!(
            ctx.services.carts.remove_item(&user.user.id, &item_id).await,
            Err(AppError::NotFound(_))
        ));
    }

    #[actix_web::test]
    async fn test_get_cart_resolves_product_and_category() {
        let ctx = TestContext::new();
        let user = ctx.register("a@x.com").await;
        let mug = ctx.seed_product("Mug", 5.0, 5).await;
        let plate = ctx.seed_product("Plate", 2.5, 10).await;

        ctx.services.carts.add_item(&user.user.id, &mug.id, 2).await.unwrap();
        ctx.services.carts.add_item(&user.user.id, &plate.id, 4).await.unwrap();

        let cart = ctx.services.carts.get_cart(&user.user.id).await.unwrap();

        assert_eq!(cart.items.len(), 2);
        assert_eq!(cart.total, 20.0);
        assert!(cart.items.iter().all(|item| item.product.category.is_some()));
    }

    #[actix_web::test]
    async fn test_get_cart_without_cart_is_not_found() {
        let ctx = TestContext::new();

        assert!(matches!(
            ctx.services.carts.get_cart("nobody").await,
            Err(AppError::NotFound(_))
        ));
    }
}
