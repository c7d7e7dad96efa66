use mongodb::bson::DateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 상품 카테고리
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub description: String,
    pub is_active: bool,
    pub created_at: DateTime,
    pub updated_at: DateTime,
    pub deleted_at: Option<DateTime>,
}

impl Category {
    pub fn new(name: String, description: String) -> Self {
        let now = DateTime::now();

        Self {
            id: Uuid::new_v4().to_string(),
            name,
            description,
            is_active: true,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }
    }

    pub fn is_available(&self) -> bool {
        self.is_active && self.deleted_at.is_none()
    }

    pub fn soft_delete(&mut self) {
        let now = DateTime::now();
        self.is_active = false;
        self.deleted_at = Some(now);
        self.updated_at = now;
    }
}
