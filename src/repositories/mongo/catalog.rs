//! 카테고리, 상품 컬렉션과 재고 원장

use async_trait::async_trait;
use mongodb::{
    bson::{doc, from_document, DateTime, Document},
    options::{FindOneAndUpdateOptions, ReturnDocument},
};
use crate::core::errors::{AppError, AppResult};
use crate::domain::entities::{Category, Product};
use crate::domain::models::pagination::PageRequest;
use crate::domain::models::search::ProductSearchCriteria;
use crate::repositories::products::{CategoryRepository, ProductRepository, StockLedger};
use super::{is_duplicate_key, map_mongo_error, MongoUnitOfWork, CATEGORIES, PRODUCTS};

fn sku_conflict(product: &Product) -> impl FnOnce(mongodb::error::Error) -> AppError + '_ {
    move |e| {
        if is_duplicate_key(&e) {
            AppError::ConflictError(format!("sku {} is already in use", product.sku))
        } else {
            map_mongo_error(e)
        }
    }
}

fn search_filter(criteria: &ProductSearchCriteria) -> Document {
    let mut filter = doc! {
        "$text": { "$search": criteria.query.as_str() },
        "is_active": true,
        "deleted_at": null,
    };

    if let Some(category_id) = &criteria.category_id {
        filter.insert("category_id", category_id.as_str());
    }

    let mut price = Document::new();
    if let Some(min) = criteria.min_price {
        price.insert("$gte", min);
    }
    if let Some(max) = criteria.max_price {
        price.insert("$lte", max);
    }
    if !price.is_empty() {
        filter.insert("price", price);
    }

    filter
}

#[async_trait]
impl CategoryRepository for MongoUnitOfWork {
    async fn insert_category(&mut self, category: &Category) -> AppResult<()> {
        self.collection::<Category>(CATEGORIES)
            .insert_one(category)
            .session(&mut self.session)
            .await
            .map_err(map_mongo_error)?;
        Ok(())
    }

    async fn find_category(&mut self, category_id: &str) -> AppResult<Option<Category>> {
        self.collection::<Category>(CATEGORIES)
            .find_one(doc! { "_id": category_id })
            .session(&mut self.session)
            .await
            .map_err(map_mongo_error)
    }

    async fn list_active_categories(&mut self) -> AppResult<Vec<Category>> {
        let cursor = self
            .collection::<Category>(CATEGORIES)
            .find(doc! { "is_active": true, "deleted_at": null })
            .sort(doc! { "name": 1 })
            .session(&mut self.session)
            .await
            .map_err(map_mongo_error)?;

        self.collect(cursor).await
    }

    async fn save_category(&mut self, category: &Category) -> AppResult<()> {
        self.collection::<Category>(CATEGORIES)
            .replace_one(doc! { "_id": category.id.as_str() }, category)
            .session(&mut self.session)
            .await
            .map_err(map_mongo_error)?;
        Ok(())
    }
}

#[async_trait]
impl ProductRepository for MongoUnitOfWork {
    async fn insert_product(&mut self, product: &Product) -> AppResult<()> {
        self.collection::<Product>(PRODUCTS)
            .insert_one(product)
            .session(&mut self.session)
            .await
            .map_err(sku_conflict(product))?;
        Ok(())
    }

    async fn find_product(&mut self, product_id: &str) -> AppResult<Option<Product>> {
        self.collection::<Product>(PRODUCTS)
            .find_one(doc! { "_id": product_id })
            .session(&mut self.session)
            .await
            .map_err(map_mongo_error)
    }

    async fn save_product(&mut self, product: &Product) -> AppResult<()> {
        self.collection::<Product>(PRODUCTS)
            .replace_one(doc! { "_id": product.id.as_str() }, product)
            .session(&mut self.session)
            .await
            .map_err(sku_conflict(product))?;
        Ok(())
    }

    async fn list_active_products(&mut self, page: PageRequest) -> AppResult<(Vec<Product>, u64)> {
        let filter = doc! { "is_active": true, "deleted_at": null };

        let total = self
            .collection::<Product>(PRODUCTS)
            .count_documents(filter.clone())
            .session(&mut self.session)
            .await
            .map_err(map_mongo_error)?;

        let cursor = self
            .collection::<Product>(PRODUCTS)
            .find(filter)
            .sort(doc! { "created_at": -1, "_id": -1 })
            .skip(page.offset())
            .limit(page.limit as i64)
            .session(&mut self.session)
            .await
            .map_err(map_mongo_error)?;

        let products = self.collect(cursor).await?;
        Ok((products, total))
    }

    async fn search_products(&mut self, criteria: &ProductSearchCriteria) -> AppResult<(Vec<(Product, f32)>, u64)> {
        let filter = search_filter(criteria);

        let total = self
            .collection::<Document>(PRODUCTS)
            .count_documents(filter.clone())
            .session(&mut self.session)
            .await
            .map_err(map_mongo_error)?;

        let cursor = self
            .collection::<Document>(PRODUCTS)
            .find(filter)
            .projection(doc! { "score": { "$meta": "textScore" } })
            .sort(doc! { "score": { "$meta": "textScore" }, "created_at": -1 })
            .skip(criteria.page.offset())
            .limit(criteria.page.limit as i64)
            .session(&mut self.session)
            .await
            .map_err(map_mongo_error)?;

        let documents = self.collect(cursor).await?;

        let mut results = Vec::with_capacity(documents.len());
        for mut document in documents {
            let rank = document.get_f64("score").unwrap_or_default() as f32;
            document.remove("score");

            let product: Product = from_document(document)
                .map_err(|e| AppError::DatabaseError(e.to_string()))?;
            results.push((product, rank));
        }

        Ok((results, total))
    }
}

#[async_trait]
impl StockLedger for MongoUnitOfWork {
    async fn find_product_for_update(&mut self, product_id: &str) -> AppResult<Option<Product>> {
        let options = FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .build();

        self.collection::<Product>(PRODUCTS)
            .find_one_and_update(
                doc! { "_id": product_id },
                doc! { "$set": { "updated_at": DateTime::now() } },
            )
            .with_options(options)
            .session(&mut self.session)
            .await
            .map_err(map_mongo_error)
    }

    async fn decrement_product_stock(&mut self, product_id: &str, quantity: i32) -> AppResult<bool> {
        let result = self
            .collection::<Product>(PRODUCTS)
            .update_one(
                doc! { "_id": product_id, "stock": { "$gte": quantity } },
                doc! {
                    "$inc": { "stock": -quantity },
                    "$set": { "updated_at": DateTime::now() },
                },
            )
            .session(&mut self.session)
            .await
            .map_err(map_mongo_error)?;

        Ok(result.modified_count == 1)
    }

    async fn set_product_stock(&mut self, product_id: &str, stock: i32) -> AppResult<()> {
        let result = self
            .collection::<Product>(PRODUCTS)
            .update_one(
                doc! { "_id": product_id },
                doc! { "$set": { "stock": stock, "updated_at": DateTime::now() } },
            )
            .session(&mut self.session)
            .await
            .map_err(map_mongo_error)?;

        if result.matched_count == 0 {
            return Err(AppError::NotFound("product not found".to_string()));
        }
        Ok(())
    }
}
