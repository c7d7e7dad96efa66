//! 쇼핑 서비스 메인 애플리케이션
//!
//! Actix-web 기반의 HTTP 서버를 구동하고 모든 서비스를 조립합니다.
//! 저장소(MongoDB 또는 메모리)와 이벤트 발행자(Redis 또는 로그)를 선택한 뒤
//! 서비스를 생성하여 레지스트리에 등록하고 REST API를 제공합니다.

use std::io;
use std::sync::Arc;
use actix_cors::Cors;
use actix_web::http::header;
use actix_web::{middleware, App, HttpServer};
use actix_governor::{Governor, GovernorConfigBuilder};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info, warn};
use shop_service_backend::config::{EventsConfig, JwtSettings, ServerConfig, StoreBackend, StoreConfig};
use shop_service_backend::db::Database;
use shop_service_backend::events::{EventPublisher, LogEventPublisher, RedisClient, RedisEventPublisher};
use shop_service_backend::repositories::memory::MemoryStore;
use shop_service_backend::repositories::mongo::MongoStore;
use shop_service_backend::repositories::Store;
use shop_service_backend::routes::configure_all_routes;
use shop_service_backend::services::auth::PasswordHasher;
use shop_service_backend::services::ServiceContainer;
use shop_service_backend::utils::display_terminal::{
    print_boot_summary, print_step_complete, print_step_start, print_sub_task,
};

/// Rate Limiting 설정 구조체
#[derive(Debug)]
struct RateLimitConfig {
    per_second: u64,
    burst_size: u32,
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    init_logging();

    info!("🚀 쇼핑 서비스 시작중...");

    print_step_start(1, "Connecting data store");
    let store = initialize_store().await?;
    print_sub_task("Store", &store.backend_name());

    let publisher = initialize_publisher().await;
    print_sub_task("Events", &publisher.describe());
    print_step_complete(1, "Data store ready", 2);

    print_step_start(2, "Assembling services");
    let container = ServiceContainer::build(
        store.clone(),
        publisher,
        JwtSettings::from_env(),
        PasswordHasher::from_env(),
    );
    let registered = container.register();
    print_step_complete(2, "Services registered", registered);

    info!("✅ 모든 서비스가 성공적으로 초기화되었습니다!");

    let bind_address = format!("{}:{}", ServerConfig::host(), ServerConfig::port());
    print_boot_summary(&store.backend_name(), registered, &bind_address);

    // HTTP 서버 시작
    start_http_server(&bind_address).await
}

/// HTTP 서버를 구성하고 실행합니다
///
/// Rate Limiting, CORS, 요청 로깅, 경로 정규화 미들웨어를 포함합니다.
///
/// # Errors
///
/// * `std::io::Error` - Rate Limiting 설정 오류, 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server(bind_address: &str) -> io::Result<()> {
    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);
    info!("📍 API: http://{}/api/v1", bind_address);

    // Rate Limiting 설정
    let rate_limit_config = load_rate_limit_config();
    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(rate_limit_config.per_second)
        .burst_size(rate_limit_config.burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| io::Error::other("Rate Limiting 설정이 올바르지 않습니다"))?;

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        rate_limit_config.per_second,
        rate_limit_config.burst_size
    );

    HttpServer::new(move || {
        // CORS 설정
        let cors = configure_cors();

        App::new()
            // Rate Limiting 미들웨어 (가장 먼저 적용)
            .wrap(Governor::new(&governor_conf))

            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())

            // 라우트 설정
            .configure(configure_all_routes)
    })
        .client_request_timeout(ServerConfig::request_timeout())
        .bind(bind_address)?
        .workers(4) // 워커 스레드 수
        .run()
        .await
}

/// 환경별 설정 파일을 로드합니다
///
/// # Environment Variables
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    info!("Current profile: {}", profile);

    match profile.as_str() {
        "prod" => match dotenv::from_filename(".env.prod") {
            Ok(_) => info!(".env.prod 파일 로드 됨"),
            Err(e) => error!(".env.prod 파일 로드 실패: {}", e),
        },
        "dev" => match dotenv::from_filename(".env.dev") {
            Ok(_) => info!(".env.dev 파일 로드 됨"),
            Err(e) => error!(".env.dev 파일 로드 실패: {}", e),
        },
        _ => {
            // 기본 .env 파일 로드
            dotenv().ok();
            info!("기본 .env 파일 로드");
        }
    }
}

/// 로깅 시스템을 초기화합니다
///
/// ```bash
/// # 전체 debug 모드
/// RUST_LOG=debug cargo run
///
/// # 특정 모듈만 debug
/// RUST_LOG=shop_service_backend::services=debug cargo run
/// ```
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=debug"));
}

/// `DATA_STORE` 설정에 따라 저장소를 초기화합니다
///
/// MongoDB 연결 실패는 부팅 실패로 처리합니다.
async fn initialize_store() -> io::Result<Arc<dyn Store>> {
    match StoreConfig::backend() {
        StoreBackend::Memory => {
            warn!("⚠️ 메모리 저장소 사용 중 - 재시작하면 데이터가 사라집니다");
            Ok(Arc::new(MemoryStore::new()))
        }
        StoreBackend::MongoDb => {
            info!("📡 데이터베이스 연결 중...");

            let database = Database::new()
                .await
                .map_err(|e| io::Error::other(format!("데이터베이스 연결 실패: {}", e)))?;
            let store = MongoStore::new(database)
                .await
                .map_err(|e| io::Error::other(format!("인덱스 생성 실패: {}", e)))?;

            info!("✅ MongoDB 연결 성공");
            Ok(Arc::new(store))
        }
    }
}

/// `REDIS_URL`이 설정되어 있으면 Redis 발행자를, 아니면 로그 발행자를 사용합니다
///
/// Redis 연결에 실패해도 서버는 로그 발행자로 계속 부팅합니다.
async fn initialize_publisher() -> Arc<dyn EventPublisher> {
    let Some(redis_url) = EventsConfig::redis_url() else {
        info!("📝 REDIS_URL 미설정 - 이벤트를 로그로만 기록합니다");
        return Arc::new(LogEventPublisher::default());
    };

    match RedisClient::new(&redis_url).await {
        Ok(redis) => {
            info!("✅ Redis 연결 성공");
            Arc::new(RedisEventPublisher::new(redis, EventsConfig::channel()))
        }
        Err(e) => {
            error!("❌ Redis 연결 실패, 로그 발행자로 대체합니다: {}", e);
            Arc::new(LogEventPublisher::default())
        }
    }
}

/// CORS 설정을 구성합니다
///
/// # Allowed Origins
///
/// * `http://localhost:3000` - 프론트엔드 개발 서버
/// * `http://localhost:8080` - 자체 서버
/// * `127.0.0.1` 동등한 주소들
fn configure_cors() -> Cors {
    Cors::default()
        // 허용할 Origin 설정
        .allowed_origin("http://localhost:3000")
        .allowed_origin("http://127.0.0.1:3000")
        .allowed_origin("http://localhost:8080")
        .allowed_origin("http://127.0.0.1:8080")

        // 허용할 HTTP 메서드
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])

        // 허용할 헤더
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])

        .supports_credentials()

        // Preflight 요청 캐시 시간 (초)
        .max_age(3600)
}

/// 환경변수에서 Rate Limiting 설정을 로드합니다
///
/// * `RATE_LIMIT_PER_SECOND` - 초당 허용 요청 수 (기본값: 100)
/// * `RATE_LIMIT_BURST_SIZE` - 버스트 허용량 (기본값: 200)
fn load_rate_limit_config() -> RateLimitConfig {
    let per_second = std::env::var("RATE_LIMIT_PER_SECOND")
        .unwrap_or_else(|_| "100".to_string())
        .parse::<u64>()
        .unwrap_or_else(|e| {
            error!("RATE_LIMIT_PER_SECOND 파싱 실패: {}. 기본값 100 사용", e);
            100
        });

    let burst_size = std::env::var("RATE_LIMIT_BURST_SIZE")
        .unwrap_or_else(|_| "200".to_string())
        .parse::<u32>()
        .unwrap_or_else(|e| {
            error!("RATE_LIMIT_BURST_SIZE 파싱 실패: {}. 기본값 200 사용", e);
            200
        });

    let config = RateLimitConfig {
        per_second,
        burst_size,
    };

    info!("Rate Limiting 설정 로드됨: {:?}", config);
    config
}
