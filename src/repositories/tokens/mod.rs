//! 리프레시 토큰 데이터 액세스 계약
//!
//! 토큰 발급 시 저장, 회전 시 잠금 후 삭제, 로그아웃 시 삭제, 회원 탈퇴 시 일괄 삭제를 지원합니다.

pub mod token_repository;

pub use token_repository::RefreshTokenRepository;
