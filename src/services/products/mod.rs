//! 카탈로그(카테고리/상품/검색) 서비스 모듈

pub mod catalog_service;

pub use catalog_service::CatalogService;
