//! Database Connection Management Module
//!
//! MongoDB 연결 관리를 담당하는 모듈입니다.
//! 멀티 도큐먼트 트랜잭션을 사용하므로 레플리카셋(단일 노드 포함) 구성이 필요합니다.
//!
//! # 환경 변수 설정
//!
//! ```bash
//! # MongoDB 연결 URI (레플리카셋)
//! export MONGODB_URI="mongodb://localhost:27017/?replicaSet=rs0"
//!
//! # 사용할 데이터베이스 이름
//! export DATABASE_NAME="shop_dev"
//! ```
//!
//! # 기본 사용법
//!
//! ```rust,ignore
//! use crate::db::Database;
//! use crate::repositories::mongo::MongoStore;
//!
//! let database = Database::new().await?;
//! let store = MongoStore::new(database).await?;
//! ```

use mongodb::{Client, options::ClientOptions};
use std::env;
use log::info;
use crate::core::errors::{AppError, AppResult};

/// MongoDB 데이터베이스 연결 래퍼
///
/// 클라이언트(세션 시작용)와 데이터베이스 이름을 함께 보관합니다.
#[derive(Clone)]
pub struct Database {
    client: Client,
    database_name: String,
}

impl Database {
    /// 새 MongoDB 연결을 생성하고 `ping`으로 연결 상태를 검증합니다.
    ///
    /// ## 환경 변수
    /// - `MONGODB_URI`: MongoDB 연결 URI (기본값: "mongodb://localhost:27017")
    /// - `DATABASE_NAME`: 데이터베이스 이름 (기본값: "shop_dev")
    pub async fn new() -> AppResult<Self> {
        let mongodb_uri = env::var("MONGODB_URI")
            .unwrap_or_else(|_| "mongodb://localhost:27017".to_string());

        let database_name = env::var("DATABASE_NAME")
            .unwrap_or_else(|_| "shop_dev".to_string());

        let mut client_options = ClientOptions::parse(&mongodb_uri)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        // 서버 로그에서 연결 출처 식별용
        client_options.app_name = Some("shop_service".to_string());

        let client = Client::with_options(client_options)
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        client
            .database(&database_name)
            .run_command(mongodb::bson::doc! { "ping": 1 })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        info!("✅ MongoDB 연결 성공: {}", database_name);

        Ok(Self {
            client,
            database_name,
        })
    }

    /// 컬렉션 접근용 `mongodb::Database` 핸들
    pub fn get_database(&self) -> mongodb::Database {
        self.client.database(&self.database_name)
    }

    /// 세션과 트랜잭션 시작에 사용하는 클라이언트
    pub fn client(&self) -> &Client {
        &self.client
    }

    pub fn database_name(&self) -> &str {
        &self.database_name
    }
}
