//! Product category model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Category {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCategory {
    #[validate(length(min = 1, max = 128))]
    pub name: String,
    #[validate(length(min = 1, max = 128))]
    pub slug: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_category_requires_name() {
        let c = CreateCategory {
            name: String::new(),
            slug: "mugs".to_string(),
        };
        assert!(c.validate().is_err());
    }
}
