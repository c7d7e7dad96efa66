//! # 문자열 유틸리티
//!
//! 요청 필드 정리와 이메일 정규화에 쓰는 헬퍼입니다.

use serde::Deserialize;
use crate::core::errors::AppError;

/// 앞뒤 공백을 제거한 필수 문자열을 반환합니다.
///
/// 공백만 남는 경우 `ValidationError`(`"{field_name}은(는) 필수입니다"`)를 반환합니다.
/// 카테고리/상품 이름처럼 길이 검증만으로는 공백 입력을 막을 수 없는 필드에 사용합니다.
pub fn validate_required_string(value: &str, field_name: &str) -> Result<String, AppError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::ValidationError(
            format!("{}은(는) 필수입니다", field_name)
        ));
    }
    Ok(trimmed.to_string())
}

/// 공백뿐인 선택 문자열을 `None`으로 바꿉니다.
pub fn clean_optional_string(value: Option<String>) -> Option<String> {
    value.and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// 가입/로그인에서 같은 규칙으로 비교하도록 이메일을 trim + 소문자로 정규화합니다.
pub fn normalize_email(value: &str) -> String {
    value.trim().to_lowercase()
}

/// 프로필 수정 요청의 선택 필드용 deserializer
///
/// `#[serde(default, deserialize_with = "deserialize_optional_string")]`와 함께 쓰면
/// `""`, `"   "`, `null`, 필드 누락이 모두 "변경 없음"(`None`)이 됩니다.
pub fn deserialize_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(clean_optional_string(opt))
}
