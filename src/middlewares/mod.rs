//! 미들웨어 모듈
//!
//! ActixWeb 요청 처리 파이프라인에서 사용되는 미들웨어들을 제공합니다.
//!
//! # 제공 미들웨어
//!
//! ### 인증 미들웨어 (AuthMiddleware)
//! - Bearer 액세스 토큰 추출 및 검증 (리프레시 토큰은 거부)
//! - 사용자 정보를 request extension에 저장
//! - capability 기반 접근 제어 (부족하면 403)
//!
//! # 사용 방법
//!
//! ```rust,ignore
//! use actix_web::web;
//! use crate::middlewares::AuthMiddleware;
//!
//! web::scope("/cart")
//!     .wrap(AuthMiddleware::requiring(Capability::ManageOwnCart))
//!     .route("", web::get().to(get_cart));
//!
//! web::scope("/admin")
//!     .wrap(AuthMiddleware::requiring(Capability::ManageCatalog))
//!     .route("/products", web::post().to(create_product));
//! ```

pub mod auth_middleware;
mod auth_inner;

pub use auth_middleware::AuthMiddleware;
