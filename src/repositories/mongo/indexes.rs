//! 컬렉션 인덱스 보장
//!
//! 부팅 시 한 번 실행됩니다. 이미 같은 정의의 인덱스가 있으면 MongoDB가 무시합니다.

use mongodb::{bson::{doc, Document}, options::IndexOptions, Database, IndexModel};
use crate::core::errors::AppResult;
use super::{map_mongo_error, CARTS, CART_ITEMS, CATEGORIES, ORDERS, PRODUCTS, REFRESH_TOKENS, USERS};

fn index(keys: Document, name: &str) -> IndexModel {
    IndexModel::builder()
        .keys(keys)
        .options(IndexOptions::builder().name(name.to_string()).build())
        .build()
}

fn unique_index(keys: Document, name: &str) -> IndexModel {
    IndexModel::builder()
        .keys(keys)
        .options(IndexOptions::builder()
            .unique(true)
            .name(name.to_string())
            .build())
        .build()
}

/// 소프트 삭제되지 않은 문서끼리만 유일성을 검사하는 인덱스
fn active_unique_index(keys: Document, name: &str) -> IndexModel {
    IndexModel::builder()
        .keys(keys)
        .options(IndexOptions::builder()
            .unique(true)
            .partial_filter_expression(doc! { "deleted_at": { "$type": "null" } })
            .name(name.to_string())
            .build())
        .build()
}

async fn create(db: &Database, collection: &str, indexes: Vec<IndexModel>) -> AppResult<()> {
    db.collection::<Document>(collection)
        .create_indexes(indexes)
        .await
        .map_err(map_mongo_error)?;

    log::debug!("📇 인덱스 확인 완료: {}", collection);
    Ok(())
}

pub(super) async fn ensure_indexes(db: &Database) -> AppResult<()> {
    create(db, USERS, vec![
        active_unique_index(doc! { "email": 1 }, "email_active_unique"),
    ]).await?;

    create(db, REFRESH_TOKENS, vec![
        unique_index(doc! { "token_hash": 1 }, "token_hash_unique"),
        index(doc! { "user_id": 1 }, "user_id"),
    ]).await?;

    create(db, CARTS, vec![
        unique_index(doc! { "user_id": 1 }, "user_id_unique"),
    ]).await?;

    create(db, CART_ITEMS, vec![
        index(doc! { "cart_id": 1, "product_id": 1 }, "cart_product"),
    ]).await?;

    create(db, CATEGORIES, vec![
        index(doc! { "name": 1 }, "name"),
    ]).await?;

    // 상품명 매칭이 설명 매칭보다 높은 점수를 받도록 가중치를 둡니다
    let text_index = IndexModel::builder()
        .keys(doc! { "name": "text", "description": "text" })
        .options(IndexOptions::builder()
            .weights(doc! { "name": 10, "description": 4 })
            .name("product_text".to_string())
            .build())
        .build();

    create(db, PRODUCTS, vec![
        active_unique_index(doc! { "sku": 1 }, "sku_active_unique"),
        text_index,
        index(doc! { "created_at": -1 }, "created_at_desc"),
    ]).await?;

    create(db, ORDERS, vec![
        index(doc! { "user_id": 1, "created_at": -1 }, "user_created_at"),
    ]).await?;

    log::info!("✅ MongoDB 인덱스 준비 완료");
    Ok(())
}
