//! Order model: line items stored as a JSONB document, status as a closed
//! enumeration parsed from the stored string.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

/// Lifecycle status of an order.
///
/// Stored as TEXT rather than a Postgres enum: rows imported from the old
/// document store carry one legacy spelling (`"PaymentFailed"`) that the
/// parser folds into the canonical bucket.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum OrderStatus {
    Pending,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
    Returned,
    PaymentFailed,
    Refunded,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 8] = [
        OrderStatus::Pending,
        OrderStatus::Processing,
        OrderStatus::Shipped,
        OrderStatus::Delivered,
        OrderStatus::Cancelled,
        OrderStatus::Returned,
        OrderStatus::PaymentFailed,
        OrderStatus::Refunded,
    ];

    /// Canonical stored spelling.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Processing => "processing",
            Self::Shipped => "shipped",
            Self::Delivered => "delivered",
            Self::Cancelled => "cancelled",
            Self::Returned => "returned",
            Self::PaymentFailed => "paymentFailed",
            Self::Refunded => "refunded",
        }
    }

    /// Parse a stored status string.
    ///
    /// Exact match over the canonical spellings, plus the one legacy literal
    /// `"PaymentFailed"` left behind by the document-store import. Anything
    /// else returns `None` and is dropped from status aggregation.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "pending" => Some(Self::Pending),
            "processing" => Some(Self::Processing),
            "shipped" => Some(Self::Shipped),
            "delivered" => Some(Self::Delivered),
            "cancelled" => Some(Self::Cancelled),
            "returned" => Some(Self::Returned),
            "paymentFailed" | "PaymentFailed" => Some(Self::PaymentFailed),
            "refunded" => Some(Self::Refunded),
            _ => None,
        }
    }
}

/// A single line item, denormalized onto the order at checkout time.
///
/// `product_id`/`product_name` are snapshots — the referenced product may no
/// longer exist in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderItem {
    pub product_id: Uuid,
    pub product_name: String,
    pub quantity: i32,
    pub line_item_total: f64,
}

/// Full order row. Line items live in a JSONB column so each order is a
/// self-contained document.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Order {
    pub id: Uuid,
    /// None for guest checkouts.
    pub user_id: Option<Uuid>,
    pub order_status: String,
    pub payment_method: String,
    pub grand_total: f64,
    pub items: Json<Vec<OrderItem>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Order {
    /// Status parsed against the closed enumeration, if recognized.
    pub fn status(&self) -> Option<OrderStatus> {
        OrderStatus::parse(&self.order_status)
    }
}

/// Response DTO excluding the items payload for list views.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct OrderSummary {
    pub id: Uuid,
    pub user_id: Option<Uuid>,
    pub order_status: String,
    pub payment_method: String,
    pub grand_total: f64,
    pub item_count: i32,
    pub created_at: DateTime<Utc>,
}

/// Status update payload for the admin panel.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateOrderStatus {
    pub order_status: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_round_trips_canonical_spellings() {
        for status in OrderStatus::ALL {
            assert_eq!(OrderStatus::parse(status.as_str()), Some(status));
        }
    }

    #[test]
    fn status_accepts_legacy_payment_failed_literal() {
        assert_eq!(
            OrderStatus::parse("PaymentFailed"),
            Some(OrderStatus::PaymentFailed)
        );
    }

    #[test]
    fn status_rejects_unknown_and_wrong_case() {
        assert_eq!(OrderStatus::parse("Pending"), None);
        assert_eq!(OrderStatus::parse("SHIPPED"), None);
        assert_eq!(OrderStatus::parse("on-hold"), None);
        assert_eq!(OrderStatus::parse(""), None);
    }

    #[test]
    fn status_serializes_camel_case() {
        let json = serde_json::to_string(&OrderStatus::PaymentFailed).unwrap();
        assert_eq!(json, "\"paymentFailed\"");
    }

    #[test]
    fn order_item_round_trip() {
        let item = OrderItem {
            product_id: Uuid::new_v4(),
            product_name: "Espresso Cup".to_string(),
            quantity: 2,
            line_item_total: 19.98,
        };
        let json = serde_json::to_string(&item).unwrap();
        let back: OrderItem = serde_json::from_str(&json).unwrap();
        assert_eq!(back, item);
    }
}
