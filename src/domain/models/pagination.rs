//! 페이지네이션 계산
//!
//! 페이지/크기 값 보정과 오프셋, 전체 페이지 수 계산을 한 곳에서 처리합니다.
//! - page < 1 → 1, limit < 1 → 10, limit > 100 → 100
//! - offset = (page - 1) * limit, 포화 연산으로 계산하며 i64::MAX 를 넘지 않음
//! - total_pages = ceil(total / limit)

use serde::Serialize;

pub const DEFAULT_PAGE: u64 = 1;
pub const DEFAULT_LIMIT: u64 = 10;
pub const MAX_LIMIT: u64 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u64,
    pub limit: u64,
}

impl PageRequest {
    /// 입력값을 보정하여 페이지 요청을 만듭니다. 누락되거나 양수가 아닌 값은 기본값이 됩니다.
    pub fn clamped(page: Option<i64>, limit: Option<i64>) -> Self {
        let page = match page {
            Some(p) if p >= 1 => p as u64,
            _ => DEFAULT_PAGE,
        };
        let limit = match limit {
            Some(l) if l >= 1 => (l as u64).min(MAX_LIMIT),
            _ => DEFAULT_LIMIT,
        };

        Self { page, limit }
    }

    pub fn offset(&self) -> u64 {
        self.page
            .saturating_sub(1)
            .saturating_mul(self.limit)
            .min(i64::MAX as u64)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaginationMeta {
    pub page: u64,
    pub limit: u64,
    pub total: u64,
    pub total_pages: u64,
}

impl PaginationMeta {
    pub fn new(request: PageRequest, total: u64) -> Self {
        Self {
            page: request.page,
            limit: request.limit,
            total,
            total_pages: total.div_ceil(request.limit),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_positive_values_fall_back_to_defaults() {
        assert_eq!(PageRequest::clamped(Some(0), Some(-5)), PageRequest::clamped(Some(1), Some(10)));
        assert_eq!(PageRequest::clamped(None, None), PageRequest::default());
    }

    #[test]
    fn test_limit_is_capped() {
        assert_eq!(PageRequest::clamped(Some(2), Some(1_000)).limit, MAX_LIMIT);
    }

    #[test]
    fn test_offset_arithmetic() {
        assert_eq!(PageRequest::clamped(Some(1), Some(10)).offset(), 0);
        assert_eq!(PageRequest::clamped(Some(3), Some(20)).offset(), 40);
    }

    #[test]
    fn test_offset_saturates_for_huge_pages() {
        let request = PageRequest::clamped(Some(i64::MAX), Some(100));

        assert_eq!(request.page, i64::MAX as u64);
        assert_eq!(request.offset(), i64::MAX as u64);
    }

    #[test]
    fn test_total_pages_rounds_up() {
        let request = PageRequest::clamped(Some(1), Some(10));

        assert_eq!(PaginationMeta::new(request, 0).total_pages, 0);
        assert_eq!(PaginationMeta::new(request, 10).total_pages, 1);
        assert_eq!(PaginationMeta::new(request, 11).total_pages, 2);
    }
}
