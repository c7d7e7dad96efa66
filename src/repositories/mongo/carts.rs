//! 장바구니와 장바구니 항목 컬렉션

use async_trait::async_trait;
use mongodb::{
    bson::{doc, DateTime},
    options::{FindOneAndUpdateOptions, ReturnDocument},
};
use crate::core::errors::{AppError, AppResult};
use crate::domain::entities::{Cart, CartItem};
use crate::repositories::carts::CartRepository;
use super::{is_duplicate_key, map_mongo_error, MongoUnitOfWork, CARTS, CART_ITEMS};

#[async_trait]
impl CartRepository for MongoUnitOfWork {
    async fn find_cart(&mut self, user_id: &str) -> AppResult<Option<Cart>> {
        self.collection::<Cart>(CARTS)
            .find_one(doc! { "user_id": user_id })
            .session(&mut self.session)
            .await
            .map_err(map_mongo_error)
    }

    async fn find_cart_for_update(&mut self, user_id: &str) -> AppResult<Option<Cart>> {
        let options = FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .build();

        self.collection::<Cart>(CARTS)
            .find_one_and_update(
                doc! { "user_id": user_id },
                doc! { "$set": { "updated_at": DateTime::now() } },
            )
            .with_options(options)
            .session(&mut self.session)
            .await
            .map_err(map_mongo_error)
    }

    async fn insert_cart(&mut self, cart: &Cart) -> AppResult<()> {
        self.collection::<Cart>(CARTS)
            .insert_one(cart)
            .session(&mut self.session)
            .await
            .map_err(|e| {
                // user_id 고유 인덱스: 다른 요청이 먼저 만든 장바구니를 다시 읽도록 재시도
                if is_duplicate_key(&e) {
                    AppError::TransactionConflict(format!("cart already exists for user {}", cart.user_id))
                } else {
                    map_mongo_error(e)
                }
            })?;
        Ok(())
    }

    async fn find_active_cart_items(&mut self, cart_id: &str) -> AppResult<Vec<CartItem>> {
        let cursor = self
            .collection::<CartItem>(CART_ITEMS)
            .find(doc! { "cart_id": cart_id, "deleted_at": null })
            .sort(doc! { "created_at": 1, "_id": 1 })
            .session(&mut self.session)
            .await
            .map_err(map_mongo_error)?;

        self.collect(cursor).await
    }

    async fn find_cart_item(&mut self, item_id: &str) -> AppResult<Option<CartItem>> {
        self.collection::<CartItem>(CART_ITEMS)
            .find_one(doc! { "_id": item_id, "deleted_at": null })
            .session(&mut self.session)
            .await
            .map_err(map_mongo_error)
    }

    async fn find_active_cart_item_for_product(
        &mut self,
        cart_id: &str,
        product_id: &str,
    ) -> AppResult<Option<CartItem>> {
        self.collection::<CartItem>(CART_ITEMS)
            .find_one(doc! { "cart_id": cart_id, "product_id": product_id, "deleted_at": null })
            .session(&mut self.session)
            .await
            .map_err(map_mongo_error)
    }

    async fn insert_cart_item(&mut self, item: &CartItem) -> AppResult<()> {
        self.collection::<CartItem>(CART_ITEMS)
            .insert_one(item)
            .session(&mut self.session)
            .await
            .map_err(map_mongo_error)?;
        Ok(())
    }

    async fn save_cart_item(&mut self, item: &CartItem) -> AppResult<()> {
        self.collection::<CartItem>(CART_ITEMS)
            .replace_one(doc! { "_id": item.id.as_str() }, item)
            .session(&mut self.session)
            .await
            .map_err(map_mongo_error)?;
        Ok(())
    }

    async fn clear_cart_items(&mut self, cart_id: &str) -> AppResult<u64> {
        let now = DateTime::now();
        let result = self
            .collection::<CartItem>(CART_ITEMS)
            .update_many(
                doc! { "cart_id": cart_id, "deleted_at": null },
                doc! { "$set": { "deleted_at": now, "updated_at": now } },
            )
            .session(&mut self.session)
            .await
            .map_err(map_mongo_error)?;
        Ok(result.modified_count)
    }
}
