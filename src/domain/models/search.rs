//! 상품 검색 조건과 관련도 계산
//!
//! 저장소 구현이 공통으로 사용하는 검색 조건 타입입니다.
//! MongoDB 저장소는 텍스트 인덱스의 `textScore`를 관련도로 사용하고,
//! 메모리 저장소는 [`rank_products`]로 같은 규칙(필터 → 관련도 내림차순 → 최신순 → 페이지)을 적용합니다.

use crate::domain::entities::Product;
use crate::domain::models::pagination::PageRequest;

/// 상품명에 등장한 검색어의 가중치
const NAME_WEIGHT: f32 = 1.0;
/// 상품 설명에 등장한 검색어의 가중치
const DESCRIPTION_WEIGHT: f32 = 0.4;

#[derive(Debug, Clone, PartialEq)]
pub struct ProductSearchCriteria {
    pub query: String,
    pub category_id: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub page: PageRequest,
}

impl ProductSearchCriteria {
    pub fn terms(&self) -> Vec<String> {
        let mut terms = tokenize(&self.query);
        terms.sort();
        terms.dedup();
        terms
    }

    /// 판매 중 여부, 카테고리, 가격 범위(양 끝 포함) 필터
    pub fn matches_filters(&self, product: &Product) -> bool {
        product.is_available()
            && self
                .category_id
                .as_ref()
                .is_none_or(|category_id| &product.category_id == category_id)
            && self.min_price.is_none_or(|min| product.price >= min)
            && self.max_price.is_none_or(|max| product.price <= max)
    }
}

/// 소문자로 바꾸고 영숫자가 아닌 문자를 기준으로 단어를 나눕니다.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|token| !token.is_empty())
        .map(str::to_lowercase)
        .collect()
}

/// 검색어별 등장 횟수에 필드 가중치를 곱해 더한 뒤 문서 길이로 정규화합니다.
/// 어떤 검색어도 등장하지 않으면 0을 반환합니다.
pub fn relevance(product: &Product, terms: &[String]) -> f32 {
    let name_tokens = tokenize(&product.name);
    let description_tokens = tokenize(&product.description);

    let raw: f32 = terms
        .iter()
        .map(|term| {
            let in_name = name_tokens.iter().filter(|t| *t == term).count() as f32;
            let in_description = description_tokens.iter().filter(|t| *t == term).count() as f32;
            in_name * NAME_WEIGHT + in_description * DESCRIPTION_WEIGHT
        })
        .sum();

    if raw == 0.0 {
        return 0.0;
    }

    let length = (name_tokens.len() + description_tokens.len()) as f32;
    raw / (1.0 + length.ln_1p())
}

/// 필터를 통과하고 검색어와 일치하는 상품을 관련도/최신순으로 정렬하여 한 페이지를 잘라냅니다.
///
/// # Returns
///
/// `(페이지 결과, 필터를 통과한 전체 건수)`
pub fn rank_products<I>(products: I, criteria: &ProductSearchCriteria) -> (Vec<(Product, f32)>, u64)
where
    I: IntoIterator<Item = Product>,
{
    let terms = criteria.terms();

    let mut ranked: Vec<(Product, f32)> = products
        .into_iter()
        .filter(|product| criteria.matches_filters(product))
        .map(|product| {
            let rank = relevance(&product, &terms);
            (product, rank)
        })
        .filter(|(_, rank)| *rank > 0.0)
        .collect();

    ranked.sort_by(|(a, rank_a), (b, rank_b)| {
        rank_b
            .total_cmp(rank_a)
            .then_with(|| b.created_at.cmp(&a.created_at))
    });

    let total = ranked.len() as u64;
    let page = ranked
        .into_iter()
        .skip(criteria.page.offset() as usize)
        .take(criteria.page.limit as usize)
        .collect();

    (page, total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::DateTime;

    fn product(name: &str, description: &str, price: f64, created_ms: i64) -> Product {
        let mut product = Product::new("cat-1".into(), name.into(), description.into(), price, 10, name.into());
        product.created_at = DateTime::from_millis(created_ms);
        product
    }

    fn criteria(query: &str) -> ProductSearchCriteria {
        ProductSearchCriteria {
            query: query.to_string(),
            category_id: None,
            min_price: None,
            max_price: None,
            page: PageRequest::default(),
        }
    }

    #[test]
    fn test_tokenize_lowercases_and_splits() {
        assert_eq!(tokenize("Red-Coffee MUG!"), vec!["red", "coffee", "mug"]);
    }

    #[test]
    fn test_name_match_outranks_description_match() {
        let terms = vec!["mug".to_string()];
        let in_name = product("Coffee Mug", "ceramic", 5.0, 0);
        let in_description = product("Coffee Cup", "like a mug", 5.0, 0);

        assert!(relevance(&in_name, &terms) > relevance(&in_description, &terms));
        assert_eq!(relevance(&product("Plate", "flat", 5.0, 0), &terms), 0.0);
    }

    #[test]
    fn test_equal_rank_breaks_ties_by_newest_first() {
        let older = product("Mug", "", 5.0, 1_000);
        let newer = product("Mug", "", 5.0, 2_000);
        let newer_id = newer.id.clone();

        let (results, total) = rank_products(vec![older, newer], &criteria("mug"));

        assert_eq!(total, 2);
        assert_eq!(results[0].0.id, newer_id);
    }

    #[test]
    fn test_filters_apply_before_paging() {
        let mut inactive = product("Mug", "", 5.0, 0);
        inactive.is_active = false;
        let cheap = product("Mug", "", 2.0, 0);
        let pricey = product("Mug", "", 50.0, 0);
        let pricey_id = pricey.id.clone();

        let mut search = criteria("mug");
        search.min_price = Some(10.0);
        search.max_price = Some(50.0);

        let (results, total) = rank_products(vec![inactive, cheap, pricey], &search);

        assert_eq!(total, 1);
        assert_eq!(results[0].0.id, pricey_id);
    }

    #[test]
    fn test_second_page_skips_offset() {
        let products: Vec<Product> = (0..15).map(|i| product("Mug", "", 5.0, i)).collect();
        let mut search = criteria("mug");
        search.page = PageRequest::clamped(Some(2), Some(10));

        let (results, total) = rank_products(products, &search);

        assert_eq!(total, 15);
        assert_eq!(results.len(), 5);
    }
}
