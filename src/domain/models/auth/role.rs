//! 사용자 역할과 권한(Capability) 모델
//!
//! 역할은 닫힌 열거형으로 표현하고, 접근 제어는 문자열 비교 대신
//! [`UserRole::allows`]를 통한 capability 검사로 수행합니다.

use serde::{Deserialize, Serialize};

/// 사용자 역할
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Customer,
    Admin,
}

/// 경계(미들웨어)에서 검사하는 기능 단위 권한
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    /// 자신의 프로필 조회/수정
    ManageOwnProfile,
    /// 자신의 장바구니 변경
    ManageOwnCart,
    /// 주문 생성 및 자신의 주문 조회
    PlaceOrder,
    /// 카테고리/상품 관리
    ManageCatalog,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Customer => "customer",
            UserRole::Admin => "admin",
        }
    }

    /// 역할이 해당 capability를 보유하는지 확인합니다.
    pub fn allows(&self, capability: Capability) -> bool {
        match (self, capability) {
            (UserRole::Admin, _) => true,
            (UserRole::Customer, Capability::ManageCatalog) => false,
            (UserRole::Customer, _) => true,
        }
    }
}

impl Default for UserRole {
    fn default() -> Self {
        UserRole::Customer
    }
}
