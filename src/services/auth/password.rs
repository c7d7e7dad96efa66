//! 비밀번호 해싱
//!
//! bcrypt는 72바이트를 넘는 입력을 처리하지 못하므로 해싱 전에 길이를 검사합니다.

use crate::config::PasswordConfig;
use crate::core::errors::{AppError, AppResult};

#[derive(Debug, Clone, Copy)]
pub struct PasswordHasher {
    cost: u32,
}

impl PasswordHasher {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    /// 환경별 bcrypt cost를 사용합니다.
    pub fn from_env() -> Self {
        Self::new(PasswordConfig::bcrypt_cost())
    }

    pub fn hash(&self, password: &str) -> AppResult<String> {
        if password.len() > PasswordConfig::MAX_PASSWORD_BYTES {
            return Err(AppError::PasswordTooLong {
                max: PasswordConfig::MAX_PASSWORD_BYTES,
            });
        }

        let start = std::time::Instant::now();
        let password_hash = bcrypt::hash(password, self.cost)
            .map_err(|e| AppError::InternalError(format!("비밀번호 해싱 실패: {}", e)))?;
        log::debug!("Password hashing took: {:?}", start.elapsed());

        Ok(password_hash)
    }

    /// 비밀번호가 해시와 일치하는지 확인합니다. 길이 제한을 넘는 입력은 일치하지 않는 것으로 봅니다.
    pub fn verify(&self, password: &str, password_hash: &str) -> AppResult<bool> {
        if password.len() > PasswordConfig::MAX_PASSWORD_BYTES {
            return Ok(false);
        }

        bcrypt::verify(password, password_hash)
            .map_err(|e| AppError::InternalError(format!("비밀번호 검증 실패: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let hasher = PasswordHasher::new(4);
        let hash = hasher.hash("correct horse").unwrap();

        assert!(hasher.verify("correct horse", &hash).unwrap());
        assert!(!hasher.verify("wrong horse", &hash).unwrap());
    }

    #[test]
    fn test_password_over_72_bytes_is_rejected_before_hashing() {
        let hasher = PasswordHasher::new(4);
        let long = "a".repeat(73);

        assert!(matches!(hasher.hash(&long), Err(AppError::PasswordTooLong { max: 72 })));
        assert!(hasher.hash(&"a".repeat(72)).is_ok());
    }

    #[test]
    fn test_multibyte_length_is_counted_in_bytes() {
        // 한글 한 글자는 UTF-8로 3바이트
        let hasher = PasswordHasher::new(4);
        assert!(hasher.hash(&"가".repeat(25)).is_err());
    }
}
