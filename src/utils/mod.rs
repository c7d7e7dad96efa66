//! 공통 유틸리티 함수 모듈
//!
//! 애플리케이션 전체에서 사용되는 공통 유틸리티 함수들을 제공합니다.
//!
//! # Modules
//!
//! - [`string_utils`] - 문자열 검증, 정리, 이메일 정규화
//! - [`time`] - BSON 시각과 chrono 시각 변환
//! - [`display_terminal`] - 부팅 과정 터미널 출력 포맷팅
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::utils::string_utils::normalize_email;
//! use crate::utils::display_terminal::print_boxed_title;
//!
//! let email = normalize_email("  Alice@Example.com ");
//! print_boxed_title("Shop Service Started");
//! ```

pub mod string_utils;
pub mod time;
pub mod display_terminal;
