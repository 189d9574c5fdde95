//! Product catalog model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Product {
    pub id: Uuid,
    pub sku: String,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub stock: i32,
    pub category_id: Uuid,
    /// Disabled products are hidden from the storefront but still counted by
    /// the dashboard stock metrics.
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateProduct {
    #[validate(length(min = 1, max = 64))]
    pub sku: String,
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    pub description: Option<String>,
    #[validate(range(min = 0.0))]
    pub price: f64,
    #[validate(range(min = 0))]
    pub stock: i32,
    pub category_id: Uuid,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Default, Validate)]
pub struct UpdateProduct {
    #[validate(length(min = 1, max = 255))]
    pub name: Option<String>,
    pub description: Option<String>,
    #[validate(range(min = 0.0))]
    pub price: Option<f64>,
    #[validate(range(min = 0))]
    pub stock: Option<i32>,
    pub category_id: Option<Uuid>,
    pub is_active: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_product_defaults_to_active() {
        let p: CreateProduct = serde_json::from_str(
            r#"{"sku":"CUP-01","name":"Espresso Cup","price":9.99,"stock":40,
                "category_id":"00000000-0000-0000-0000-000000000000"}"#,
        )
        .unwrap();
        assert!(p.is_active);
        assert!(p.validate().is_ok());
    }

    #[test]
    fn create_product_rejects_negative_stock() {
        let p = CreateProduct {
            sku: "CUP-01".to_string(),
            name: "Espresso Cup".to_string(),
            description: None,
            price: 9.99,
            stock: -1,
            category_id: Uuid::nil(),
            is_active: true,
        };
        assert!(p.validate().is_err());
    }

    #[test]
    fn update_product_rejects_empty_name() {
        let u = UpdateProduct {
            name: Some(String::new()),
            ..Default::default()
        };
        assert!(u.validate().is_err());
    }
}
