//! Catalog products.
//!
//! # Actor Framework
//! [`Product`] implements the [`Entity`](crate::actor_framework::Entity) trait,
//! allowing it to be managed by a [`ResourceActor`](crate::actor_framework::ResourceActor).
//!
//! See `product_actor::entity` for details on:
//! - Creation parameters ([`ProductCreate`])
//! - Update parameters ([`ProductUpdate`])
//! - Custom actions ([`ProductAction`](crate::product_actor::ProductAction))

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Represents a product in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: u64,
    pub name: String,
    pub description: String,
    /// Price in the smallest currency unit.
    pub price: u64,
    pub category: Category,
    pub condition: Condition,
    pub image_url: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Furniture")]
    Furniture,
    #[serde(rename = "Decorative Items")]
    DecorativeItems,
    #[serde(rename = "Jewelry & Accessories")]
    JewelryAndAccessories,
    #[serde(rename = "Books & Documents")]
    BooksAndDocuments,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Furniture,
        Category::DecorativeItems,
        Category::JewelryAndAccessories,
        Category::BooksAndDocuments,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Furniture => "Furniture",
            Category::DecorativeItems => "Decorative Items",
            Category::JewelryAndAccessories => "Jewelry & Accessories",
            Category::BooksAndDocuments => "Books & Documents",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| format!("unknown category: {s}"))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Condition {
    #[serde(rename = "Fully Restored")]
    FullyRestored,
    #[serde(rename = "Partially Restored")]
    PartiallyRestored,
    #[serde(rename = "Original Condition")]
    OriginalCondition,
}

impl Condition {
    pub const ALL: [Condition; 3] = [
        Condition::FullyRestored,
        Condition::PartiallyRestored,
        Condition::OriginalCondition,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Condition::FullyRestored => "Fully Restored",
            Condition::PartiallyRestored => "Partially Restored",
            Condition::OriginalCondition => "Original Condition",
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Condition {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Condition::ALL
            .into_iter()
            .find(|condition| condition.as_str() == s)
            .ok_or_else(|| format!("unknown condition: {s}"))
    }
}

/// Payload for creating a new product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductCreate {
    pub name: String,
    pub description: String,
    pub price: u64,
    pub category: Category,
    pub condition: Condition,
    pub image_url: String,
    #[serde(default)]
    pub is_active: Option<bool>,
}

impl ProductCreate {
    /// Checks required text fields and the positive-price invariant.
    pub fn validate(&self) -> Result<(), String> {
        require_text("name", &self.name)?;
        require_text("description", &self.description)?;
        require_text("imageUrl", &self.image_url)?;
        require_positive_price(self.price)
    }
}

/// Partial update for an existing product. `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProductUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<u64>,
    pub category: Option<Category>,
    pub condition: Option<Condition>,
    pub image_url: Option<String>,
    pub is_active: Option<bool>,
}

impl ProductUpdate {
    pub fn validate(&self) -> Result<(), String> {
        if let Some(name) = &self.name {
            require_text("name", name)?;
        }
        if let Some(description) = &self.description {
            require_text("description", description)?;
        }
        if let Some(image_url) = &self.image_url {
            require_text("imageUrl", image_url)?;
        }
        match self.price {
            Some(price) => require_positive_price(price),
            None => Ok(()),
        }
    }
}

fn require_text(field: &str, value: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        Err(format!("{field} is required"))
    } else {
        Ok(())
    }
}

fn require_positive_price(price: u64) -> Result<(), String> {
    if price == 0 {
        Err("price must be greater than 0".to_string())
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chair() -> ProductCreate {
        ProductCreate {
            name: "Test Chair".to_string(),
            description: "Oak".to_string(),
            price: 10_000,
            category: Category::Furniture,
            condition: Condition::OriginalCondition,
            image_url: "http://x/y.jpg".to_string(),
            is_active: None,
        }
    }

    #[test]
    fn test_create_validation() {
        assert!(chair().validate().is_ok());

        let free = ProductCreate { price: 0, ..chair() };
        assert_eq!(free.validate(), Err("price must be greater than 0".to_string()));

        let unnamed = ProductCreate { name: "  ".to_string(), ..chair() };
        assert_eq!(unnamed.validate(), Err("name is required".to_string()));
    }

    #[test]
    fn test_update_validation_only_checks_present_fields() {
        assert!(ProductUpdate::default().validate().is_ok());
        assert!(ProductUpdate { price: Some(0), ..Default::default() }.validate().is_err());
        assert!(ProductUpdate { image_url: Some(String::new()), ..Default::default() }.validate().is_err());
    }

    #[test]
    fn test_enum_strings_match_wire_names() {
        let json = serde_json::to_string(&chair()).unwrap();
        assert!(json.contains(r#""category":"Furniture""#));
        assert!(json.contains(r#""condition":"Original Condition""#));
        assert!(json.contains(r#""imageUrl":"http://x/y.jpg""#));

        assert_eq!("Books & Documents".parse::<Category>(), Ok(Category::BooksAndDocuments));
        assert!("Toys".parse::<Category>().is_err());
        assert_eq!(Condition::PartiallyRestored.to_string(), "Partially Restored");
    }

    #[test]
    fn test_create_payload_accepts_missing_active_flag() {
        let json = r#"{
            "name": "Lamp", "description": "Brass", "price": 500,
            "category": "Decorative Items", "condition": "Fully Restored",
            "imageUrl": "http://x/lamp.jpg"
        }"#;
        let params: ProductCreate = serde_json::from_str(json).unwrap();
        assert_eq!(params.is_active, None);
        assert_eq!(params.category, Category::DecorativeItems);
    }
}
