//! 카탈로그(카테고리, 상품) 저장소 계약
//!
//! 조회 메서드는 소프트 삭제 여부와 관계없이 원본 문서를 돌려주며,
//! 판매 가능 여부(`is_available`) 판단은 서비스 계층이 담당합니다.
//! 목록과 검색은 판매 중인 상품만 대상으로 합니다.

use async_trait::async_trait;
use crate::core::errors::AppResult;
use crate::domain::entities::{Category, Product};
use crate::domain::models::pagination::PageRequest;
use crate::domain::models::search::ProductSearchCriteria;

#[async_trait]
pub trait CategoryRepository: Send {
    async fn insert_category(&mut self, category: &Category) -> AppResult<()>;

    async fn find_category(&mut self, category_id: &str) -> AppResult<Option<Category>>;

    /// 활성 상태이고 삭제되지 않은 카테고리를 이름순으로 반환합니다.
    async fn list_active_categories(&mut self) -> AppResult<Vec<Category>>;

    async fn save_category(&mut self, category: &Category) -> AppResult<()>;
}

#[async_trait]
pub trait ProductRepository: Send {
    /// 상품을 생성합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ConflictError` - 삭제되지 않은 다른 상품이 같은 SKU를 사용 중인 경우
    async fn insert_product(&mut self, product: &Product) -> AppResult<()>;

    async fn find_product(&mut self, product_id: &str) -> AppResult<Option<Product>>;

    /// 상품 문서 전체를 교체 저장합니다. SKU 충돌 규칙은 `insert_product`와 같습니다.
    async fn save_product(&mut self, product: &Product) -> AppResult<()>;

    /// 판매 중인 상품을 최신순으로 한 페이지 조회합니다.
    async fn list_active_products(&mut self, page: PageRequest) -> AppResult<(Vec<Product>, u64)>;

    /// 텍스트 관련도 순으로 상품을 검색합니다.
    ///
    /// # Returns
    ///
    /// `(페이지 결과와 관련도, 필터를 통과한 전체 건수)`
    async fn search_products(&mut self, criteria: &ProductSearchCriteria) -> AppResult<(Vec<(Product, f32)>, u64)>;
}
