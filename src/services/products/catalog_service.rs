//! # 카탈로그 서비스
//!
//! 카테고리와 상품의 생성, 조회, 수정, 소프트 삭제 및 상품 검색을 담당합니다.
//! 고객 대상 조회는 판매 중(활성 + 미삭제)인 상품만 반환합니다.

use std::sync::Arc;
use mongodb::bson::DateTime;
use crate::core::errors::{AppError, AppResult};
use crate::domain::dto::products::request::{
    CreateCategoryRequest, CreateProductRequest, SearchProductsRequest, UpdateCategoryRequest,
    UpdateProductRequest,
};
use crate::domain::dto::products::response::{
    CategoryResponse, ProductListResponse, ProductResponse, ProductSearchResult, SearchProductsResponse,
};
use crate::domain::entities::{Category, Product};
use crate::domain::models::pagination::{PageRequest, PaginationMeta};
use crate::domain::models::search::ProductSearchCriteria;
use crate::repositories::{Store, UnitOfWork};
use crate::utils::string_utils::validate_required_string;

pub struct CatalogService {
    store: Arc<dyn Store>,
}

/// 상품이 속할 카테고리가 존재하고 활성 상태인지 확인합니다.
async fn ensure_category<U>(uow: &mut U, category_id: &str) -> AppResult<()>
where
    U: UnitOfWork + ?Sized,
{
    uow.find_category(category_id)
        .await?
        .filter(Category::is_available)
        .map(|_| ())
        .ok_or_else(|| AppError::NotFound("category not found".to_string()))
}

impl CatalogService {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }

    // ---------- 카테고리 ----------

    pub async fn create_category(&self, request: &CreateCategoryRequest) -> AppResult<CategoryResponse> {
        let name = validate_required_string(&request.name, "name")?;
        let category = Category::new(name, request.description.trim().to_string());

        let mut uow = self.store.begin().await?;
        uow.insert_category(&category).await?;
        uow.commit().await?;

        log::info!("🗂️ 카테고리 생성: {} ({})", category.name, category.id);
        Ok(CategoryResponse::from(category))
    }

    pub async fn list_categories(&self) -> AppResult<Vec<CategoryResponse>> {
        let mut uow = self.store.begin().await?;
        let categories = uow.list_active_categories().await?;
        uow.commit().await?;

        Ok(categories.into_iter().map(CategoryResponse::from).collect())
    }

    pub async fn update_category(
        &self,
        category_id: &str,
        request: &UpdateCategoryRequest,
    ) -> AppResult<CategoryResponse> {
        let mut uow = self.store.begin().await?;
        let mut category = uow
            .find_category(category_id)
            .await?
            .filter(|category| category.deleted_at.is_none())
            .ok_or_else(|| AppError::NotFound("category not found".to_string()))?;

        if let Some(name) = &request.name {
            category.name = validate_required_string(name, "name")?;
        }
        if let Some(description) = &request.description {
            category.description = description.trim().to_string();
        }
        if let Some(is_active) = request.is_active {
            category.is_active = is_active;
        }
        category.updated_at = DateTime::now();

        uow.save_category(&category).await?;
        uow.commit().await?;

        Ok(CategoryResponse::from(category))
    }

    /// 카테고리를 소프트 삭제합니다. 속한 상품은 그대로 남습니다.
    pub async fn delete_category(&self, category_id: &str) -> AppResult<()> {
        let mut uow = self.store.begin().await?;
        let mut category = uow
            .find_category(category_id)
            .await?
            .filter(|category| category.deleted_at.is_none())
            .ok_or_else(|| AppError::NotFound("category not found".to_string()))?;

        category.soft_delete();
        uow.save_category(&category).await?;
        uow.commit().await?;

        log::info!("🗑️ 카테고리 삭제: {}", category_id);
        Ok(())
    }

    // ---------- 상품 ----------

    /// # Errors
    ///
    /// * `AppError::NotFound` - 카테고리가 없거나 비활성인 경우
    /// * `AppError::ConflictError` - 같은 SKU의 상품이 이미 있는 경우
    pub async fn create_product(&self, request: &CreateProductRequest) -> AppResult<ProductResponse> {
        if request.price < 0.0 || request.stock < 0 {
            return Err(AppError::ValidationError("price and stock must not be negative".to_string()));
        }
        let name = validate_required_string(&request.name, "name")?;
        let sku = validate_required_string(&request.sku, "sku")?;

        let mut uow = self.store.begin().await?;
        ensure_category(uow.as_mut(), &request.category_id).await?;

        let product = Product::new(
            request.category_id.clone(),
            name,
            request.description.trim().to_string(),
            request.price,
            request.stock,
            sku,
        );
        uow.insert_product(&product).await?;
        uow.commit().await?;

        log::info!("📦 상품 생성: {} (sku: {}, stock: {})", product.name, product.sku, product.stock);
        Ok(ProductResponse::from(product))
    }

    /// 판매 중인 상품만 조회합니다.
    pub async fn get_product(&self, product_id: &str) -> AppResult<ProductResponse> {
        let mut uow = self.store.begin().await?;
        let product = uow
            .find_product(product_id)
            .await?
            .filter(Product::is_available)
            .ok_or_else(|| AppError::NotFound("product not found".to_string()))?;
        uow.commit().await?;

        Ok(ProductResponse::from(product))
    }

    pub async fn get_products(&self, page: PageRequest) -> AppResult<ProductListResponse> {
        let mut uow = self.store.begin().await?;
        let (products, total) = uow.list_active_products(page).await?;
        uow.commit().await?;

        Ok(ProductListResponse {
            products: products.into_iter().map(ProductResponse::from).collect(),
            meta: PaginationMeta::new(page, total),
        })
    }

    /// 전달된 필드만 변경합니다. 재고 변경은 재고 원장을 통해 반영됩니다.
    pub async fn update_product(&self, product_id: &str, request: &UpdateProductRequest) -> AppResult<ProductResponse> {
        let mut uow = self.store.begin().await?;
        let mut product = uow
            .find_product_for_update(product_id)
            .await?
            .filter(|product| product.deleted_at.is_none())
            .ok_or_else(|| AppError::NotFound("product not found".to_string()))?;

        if let Some(category_id) = &request.category_id {
            ensure_category(uow.as_mut(), category_id).await?;
            product.category_id = category_id.clone();
        }
        if let Some(name) = &request.name {
            product.name = validate_required_string(name, "name")?;
        }
        if let Some(description) = &request.description {
            product.description = description.trim().to_string();
        }
        if let Some(price) = request.price {
            if price < 0.0 {
                return Err(AppError::ValidationError("price must not be negative".to_string()));
            }
            product.price = price;
        }
        if let Some(sku) = &request.sku {
            product.sku = validate_required_string(sku, "sku")?;
        }
        if let Some(is_active) = request.is_active {
            product.is_active = is_active;
        }
        product.updated_at = DateTime::now();
        uow.save_product(&product).await?;

        if let Some(stock) = request.stock {
            if stock < 0 {
                return Err(AppError::ValidationError("stock must not be negative".to_string()));
            }
            uow.set_product_stock(&product.id, stock).await?;
            product.stock = stock;
        }

        uow.commit().await?;
        Ok(ProductResponse::from(product))
    }

    /// 상품을 소프트 삭제합니다. 기존 주문의 스냅샷에는 영향이 없습니다.
    pub async fn delete_product(&self, product_id: &str) -> AppResult<()> {
        let mut uow = self.store.begin().await?;
        let mut product = uow
            .find_product_for_update(product_id)
            .await?
            .filter(|product| product.deleted_at.is_none())
            .ok_or_else(|| AppError::NotFound("product not found".to_string()))?;

        product.soft_delete();
        uow.save_product(&product).await?;
        uow.commit().await?;

        log::info!("🗑️ 상품 삭제: {}", product_id);
        Ok(())
    }

    // ---------- 검색 ----------

    /// 판매 중인 상품을 이름/설명 관련도 순으로 검색합니다.
    ///
    /// 페이지 값은 보정됩니다 (누락 또는 0 이하 → page 1, limit 10, limit 최대 100).
    /// 공백뿐인 검색어는 어떤 상품과도 일치하지 않으므로 빈 결과를 돌려줍니다.
    pub async fn search_products(&self, request: &SearchProductsRequest) -> AppResult<SearchProductsResponse> {
        let query = request.query.trim();
        let page = PageRequest::clamped(request.page, request.limit);

        if query.is_empty() {
            return Ok(SearchProductsResponse {
                results: Vec::new(),
                meta: PaginationMeta::new(page, 0),
            });
        }

        let criteria = ProductSearchCriteria {
            query: query.to_string(),
            category_id: request.category_id.clone().filter(|id| !id.trim().is_empty()),
            min_price: request.min_price,
            max_price: request.max_price,
            page,
        };

        let mut uow = self.store.begin().await?;
        let (ranked, total) = uow.search_products(&criteria).await?;
        uow.commit().await?;

        log::debug!("🔍 상품 검색 '{}': {}건", query, total);

        Ok(SearchProductsResponse {
            results: ranked
                .into_iter()
                .map(|(product, rank)| ProductSearchResult {
                    product: ProductResponse::from(product),
                    rank,
                })
                .collect(),
            meta: PaginationMeta::new(page, total),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::test_support::TestContext;

    fn search(query: &str) -> SearchProductsRequest {
        SearchProductsRequest {
            query: query.to_string(),
            ..Default::default()
        }
    }

    #[actix_web::test]
    async fn test_create_product_requires_active_category() {
        let ctx = TestContext::new();
        let category = ctx
            .services
            .catalog
            .create_category(&CreateCategoryRequest {
                name: "Kitchen".into(),
                description: String::new(),
            })
            .await
            .unwrap();
        ctx.services.catalog.delete_category(&category.id).await.unwrap();

        let result = ctx
            .services
            .catalog
            .create_product(&CreateProductRequest {
                category_id: category.id.clone(),
                name: "Mug".into(),
                description: String::new(),
                price: 5.0,
                stock: 3,
                sku: "MUG-1".into(),
            })
            .await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
        assert!(ctx.services.catalog.list_categories().await.unwrap().is_empty());
    }

    #[actix_web::test]
    async fn test_duplicate_sku_is_a_conflict() {
        let ctx = TestContext::new();
        let existing = ctx.seed_product("Mug", 5.0, 3).await;

        let result = ctx
            .services
            .catalog
            .create_product(&CreateProductRequest {
                category_id: existing.category_id.clone(),
                name: "Another mug".into(),
                description: String::new(),
                price: 6.0,
                stock: 1,
                sku: existing.sku.clone(),
            })
            .await;

        assert!(matches!(result, Err(AppError::ConflictError(_))));
    }

    #[actix_web::test]
    async fn test_deleted_product_is_hidden() {
        let ctx = TestContext::new();
        let product = ctx.seed_product("Mug", 5.0, 3).await;

        ctx.services.catalog.delete_product(&product.id).await.unwrap();

        assert!(matches!(
            ctx.services.catalog.get_product(&product.id).await,
            Err(AppError::NotFound(_))
        ));
        let list = ctx.services.catalog.get_products(PageRequest::default()).await.unwrap();
        assert_eq!(list.meta.total, 0);
    }

    #[actix_web::test]
    async fn test_update_product_sets_stock_and_keeps_other_fields() {
        let ctx = TestContext::new();
        let product = ctx.seed_product("Mug", 5.0, 3).await;

        let updated = ctx
            .services
            .catalog
            .update_product(
                &product.id,
                &UpdateProductRequest {
                    stock: Some(12),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.stock, 12);
        assert_eq!(updated.name, "Mug");
        assert_eq!(updated.price, 5.0);
        assert_eq!(ctx.stock_of(&product.id).await, 12);
    }

    #[actix_web::test]
    async fn test_search_ranks_name_matches_first() {
        let ctx = TestContext::new();
        ctx.seed_product_with_description("Ceramic Mug", "holds coffee", 5.0, 3).await;
        ctx.seed_product_with_description("Coffee Grinder", "burr grinder for coffee beans", 40.0, 3).await;
        ctx.seed_product_with_description("Tea Pot", "for loose leaf tea", 20.0, 3).await;

        let response = ctx.services.catalog.search_products(&search("coffee")).await.unwrap();

        assert_eq!(response.meta.total, 2);
        assert_eq!(response.results[0].product.name, "Coffee Grinder");
        assert!(response.results[0].rank >= response.results[1].rank);
        assert!(response.results.iter().all(|result| result.rank > 0.0));
    }

    #[actix_web::test]
    async fn test_search_applies_price_filter_and_hides_inactive() {
        let ctx = TestContext::new();
        ctx.seed_product_with_description("Coffee Mug", "", 5.0, 3).await;
        let pricey = ctx.seed_product_with_description("Coffee Machine", "", 300.0, 3).await;
        let hidden = ctx.seed_product_with_description("Coffee Filter", "", 2.0, 3).await;
        ctx.deactivate_product(&hidden.id).await;

        let response = ctx
            .services
            .catalog
            .search_products(&SearchProductsRequest {
                max_price: Some(100.0),
                ..search("coffee")
            })
            .await
            .unwrap();

        assert_eq!(response.meta.total, 1);
        assert_eq!(response.results[0].product.name, "Coffee Mug");
        assert!(response.results.iter().all(|result| result.product.id != pricey.id));
    }

    #[actix_web::test]
    async fn test_search_clamps_pagination_and_blank_query_is_empty() {
        let ctx = TestContext::new();
        ctx.seed_product("Coffee Mug", 5.0, 3).await;

        let response = ctx
            .services
            .catalog
            .search_products(&SearchProductsRequest {
                page: Some(0),
                limit: Some(-5),
                ..search("coffee")
            })
            .await
            .unwrap();
        assert_eq!(response.meta.page, 1);
        assert_eq!(response.meta.limit, 10);

        let blank = ctx.services.catalog.search_products(&search("   ")).await.unwrap();
        assert!(blank.results.is_empty());
        assert_eq!(blank.meta.total, 0);
        assert_eq!(blank.meta.total_pages, 0);
    }

    #[actix_web::test]
    async fn test_search_with_huge_page_returns_empty_page() {
        let ctx = TestContext::new();
        ctx.seed_product("Coffee Mug", 5.0, 3).await;

        let response = ctx
            .services
            .catalog
            .search_products(&SearchProductsRequest {
                page: Some(i64::MAX),
                limit: Some(100),
                ..search("coffee")
            })
            .await
            .unwrap();

        assert!(response.results.is_empty());
        assert_eq!(response.meta.total, 1);
    }
}
