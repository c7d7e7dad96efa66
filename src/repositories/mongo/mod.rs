//! # MongoDB 저장소
//!
//! `ClientSession` 기반 멀티 도큐먼트 트랜잭션으로 [`UnitOfWork`]를 구현합니다.
//!
//! ## 잠금 방식
//!
//! `*_for_update` 조회는 `find_one_and_update`로 문서의 `updated_at`을 갱신하여
//! 트랜잭션 범위의 쓰기 잠금을 잡습니다. 같은 문서를 수정하려는 다른 트랜잭션은
//! `WriteConflict`(`TransientTransactionError` 라벨)로 실패하며,
//! 이는 [`AppError::TransactionConflict`]로 변환되어 서비스 계층에서 작업 단위 전체가 재시도됩니다.
//!
//! ## 컬렉션
//!
//! | 컬렉션 | 주요 인덱스 |
//! |--------|-------------|
//! | `users` | `email` 부분 유니크 (`deleted_at` null) |
//! | `refresh_tokens` | `token_hash` 유니크, `user_id` |
//! | `carts` | `user_id` 유니크 |
//! | `cart_items` | `cart_id` + `product_id` |
//! | `categories` | `name` |
//! | `products` | `sku` 부분 유니크, 텍스트(`name`, `description`), `created_at` |
//! | `orders` | `user_id` + `created_at` |

mod accounts;
mod carts;
mod catalog;
mod indexes;
mod orders;

use std::time::Duration;
use async_trait::async_trait;
use mongodb::{
    ClientSession, Collection,
    error::{Error as MongoError, ErrorKind, WriteFailure, TRANSIENT_TRANSACTION_ERROR},
    options::{Acknowledgment, ReadConcern, TransactionOptions, WriteConcern},
};
use serde::de::DeserializeOwned;
use crate::config::StoreConfig;
use crate::core::errors::{AppError, AppResult};
use crate::db::Database;
use crate::repositories::unit_of_work::{Store, UnitOfWork};

pub(crate) const USERS: &str = "users";
pub(crate) const REFRESH_TOKENS: &str = "refresh_tokens";
pub(crate) const CARTS: &str = "carts";
pub(crate) const CART_ITEMS: &str = "cart_items";
pub(crate) const CATEGORIES: &str = "categories";
pub(crate) const PRODUCTS: &str = "products";
pub(crate) const ORDERS: &str = "orders";

const DUPLICATE_KEY: i32 = 11000;

pub struct MongoStore {
    database: Database,
    transaction_timeout: Duration,
}

impl MongoStore {
    /// 저장소를 생성하고 필요한 인덱스를 보장합니다.
    pub async fn new(database: Database) -> AppResult<Self> {
        indexes::ensure_indexes(&database.get_database()).await?;

        Ok(Self {
            database,
            transaction_timeout: StoreConfig::transaction_timeout(),
        })
    }
}

#[async_trait]
impl Store for MongoStore {
    async fn begin(&self) -> AppResult<Box<dyn UnitOfWork>> {
        let mut session = self
            .database
            .client()
            .start_session()
            .await
            .map_err(map_mongo_error)?;

        let options = TransactionOptions::builder()
            .read_concern(ReadConcern::snapshot())
            .write_concern(WriteConcern::builder().w(Acknowledgment::Majority).build())
            .max_commit_time(self.transaction_timeout)
            .build();

        session
            .start_transaction()
            .with_options(options)
            .await
            .map_err(map_mongo_error)?;

        Ok(Box::new(MongoUnitOfWork {
            session,
            db: self.database.get_database(),
        }))
    }

    fn backend_name(&self) -> String {
        format!("MongoDB ({})", self.database.database_name())
    }
}

/// 하나의 세션 트랜잭션. drop 시 드라이버가 진행 중인 트랜잭션을 중단합니다.
pub struct MongoUnitOfWork {
    session: ClientSession,
    db: mongodb::Database,
}

impl MongoUnitOfWork {
    fn collection<T>(&self, name: &str) -> Collection<T>
    where
        T: Send + Sync,
    {
        self.db.collection::<T>(name)
    }

    /// 세션 커서를 끝까지 읽어 벡터로 모읍니다.
    async fn collect<T>(&mut self, mut cursor: mongodb::SessionCursor<T>) -> AppResult<Vec<T>>
    where
        T: DeserializeOwned + Send + Sync + Unpin,
    {
        use futures_util::TryStreamExt;

        cursor
            .stream(&mut self.session)
            .try_collect()
            .await
            .map_err(map_mongo_error)
    }
}

#[async_trait]
impl UnitOfWork for MongoUnitOfWork {
    async fn commit(self: Box<Self>) -> AppResult<()> {
        let mut uow = self;
        uow.session
            .commit_transaction()
            .await
            .map_err(map_mongo_error)
    }

    async fn rollback(self: Box<Self>) -> AppResult<()> {
        let mut uow = self;
        uow.session
            .abort_transaction()
            .await
            .map_err(map_mongo_error)
    }
}

/// 드라이버 에러를 애플리케이션 에러로 변환합니다.
///
/// 일시적 트랜잭션 에러(쓰기 충돌 등)는 재시도 가능한 `TransactionConflict`가 됩니다.
pub(crate) fn map_mongo_error(error: MongoError) -> AppError {
    if error.contains_label(TRANSIENT_TRANSACTION_ERROR) {
        return AppError::TransactionConflict(error.to_string());
    }
    AppError::DatabaseError(error.to_string())
}

pub(crate) fn is_duplicate_key(error: &MongoError) -> bool {
    match error.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteError(write_error)) => write_error.code == DUPLICATE_KEY,
        ErrorKind::Command(command_error) => command_error.code == DUPLICATE_KEY,
        _ => false,
    }
}
