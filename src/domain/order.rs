use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::Product;

/// Represents a customer order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: u64,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: Option<String>,
    pub shipping_address: String,
    /// Order total in the smallest currency unit.
    pub total: u64,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
}

/// Fulfilment status of an order.
///
/// The store overwrites the status unconditionally. The forward progression
/// returned by [`OrderStatus::next`] is the admin convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Processing,
    Shipped,
    Delivered,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 4] = [
        OrderStatus::Pending,
        OrderStatus::Processing,
        OrderStatus::Shipped,
        OrderStatus::Delivered,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Processing => "processing",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Delivered => "delivered",
        }
    }

    /// The next step of the fulfilment progression, `None` once delivered.
    pub fn next(&self) -> Option<OrderStatus> {
        match self {
            OrderStatus::Pending => Some(OrderStatus::Processing),
            OrderStatus::Processing => Some(OrderStatus::Shipped),
            OrderStatus::Shipped => Some(OrderStatus::Delivered),
            OrderStatus::Delivered => None,
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OrderStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| s.to_string())
    }
}

/// A line of an order. Only ever created together with its [`Order`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub id: u64,
    pub order_id: u64,
    pub product_id: u64,
    pub quantity: u32,
    /// Unit price captured when the order was placed.
    pub price: u64,
}

/// Payload for creating a new order.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderCreate {
    pub customer_name: String,
    pub customer_email: String,
    #[serde(default)]
    pub customer_phone: Option<String>,
    pub shipping_address: String,
    pub total: u64,
    /// Accepted for wire compatibility; new orders always start as pending.
    #[serde(default)]
    pub status: Option<String>,
}

impl fmt::Debug for OrderCreate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OrderCreate")
            .field("customer_name", &self.customer_name)
            .field("customer_email", &"<redacted>")
            .field("customer_phone", &self.customer_phone.as_ref().map(|_| "<redacted>"))
            .field("shipping_address", &"<redacted>")
            .field("total", &self.total)
            .field("status", &self.status)
            .finish()
    }
}

/// Payload for one line of a new order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemCreate {
    pub product_id: u64,
    pub quantity: u32,
    pub price: u64,
}

/// An order item joined with the product it references.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemWithProduct {
    #[serde(flatten)]
    pub item: OrderItem,
    pub product: Product,
}

/// An order enriched with its items and their products.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderWithItems {
    #[serde(flatten)]
    pub order: Order,
    pub items: Vec<OrderItemWithProduct>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_progression() {
        assert_eq!(OrderStatus::Pending.next(), Some(OrderStatus::Processing));
        assert_eq!(OrderStatus::Processing.next(), Some(OrderStatus::Shipped));
        assert_eq!(OrderStatus::Shipped.next(), Some(OrderStatus::Delivered));
        assert_eq!(OrderStatus::Delivered.next(), None);
    }

    #[test]
    fn test_status_parsing() {
        assert_eq!("shipped".parse::<OrderStatus>(), Ok(OrderStatus::Shipped));
        assert_eq!("Shipped".parse::<OrderStatus>(), Err("Shipped".to_string()));
        assert_eq!(serde_json::to_string(&OrderStatus::Processing).unwrap(), r#""processing""#);
    }

    #[test]
    fn test_order_payload_from_checkout_json() {
        let json = r#"{
            "customerName": "Anna",
            "customerEmail": "anna@example.com",
            "customerPhone": "",
            "shippingAddress": "Nevsky 1",
            "total": 42000,
            "status": "delivered"
        }"#;
        let order: OrderCreate = serde_json::from_str(json).unwrap();
        assert_eq!(order.customer_phone.as_deref(), Some(""));
        assert_eq!(order.status.as_deref(), Some("delivered"));
    }

    #[test]
    fn test_order_payload_accepts_unknown_status() {
        let json = r#"{
            "customerName": "Anna",
            "customerEmail": "anna@example.com",
            "shippingAddress": "Nevsky 1",
            "total": 42000,
            "status": "cancelled"
        }"#;
        let order: OrderCreate = serde_json::from_str(json).unwrap();
        assert_eq!(order.status.as_deref(), Some("cancelled"));
    }

    #[test]
    fn test_order_payload_debug_hides_contact_details() {
        let order = OrderCreate {
            customer_name: "Anna".to_string(),
            customer_email: "anna@example.com".to_string(),
            customer_phone: Some("+7 900 000 00 00".to_string()),
            shipping_address: "Nevsky 1".to_string(),
            total: 42000,
            status: None,
        };
        let debug = format!("{order:?}");
        assert!(debug.contains("Anna"));
        assert!(!debug.contains("anna@example.com"));
        assert!(!debug.contains("+7 900"));
        assert!(!debug.contains("Nevsky"));
    }
}
