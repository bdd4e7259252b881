use chrono::Utc;
use crate::actor_framework::Entity;
use crate::domain::{Product, ProductCreate, ProductUpdate};
use super::actions::{ProductAction, ProductActionResult};

impl Entity for Product {
    type Id = u64;
    type CreateParams = ProductCreate;
    type Update = ProductUpdate;
    type Action = ProductAction;
    type ActionResult = ProductActionResult;

    fn id(&self) -> &u64 {
        &self.id
    }

    /// Creates a new Product from creation parameters.
    ///
    /// # Notes
    /// `created_at` is stamped here and `is_active` defaults to `true`.
    fn from_create_params(id: u64, params: ProductCreate) -> Result<Self, String> {
        Ok(Self {
            id,
            name: params.name,
            description: params.description,
            price: params.price,
            category: params.category,
            condition: params.condition,
            image_url: params.image_url,
            is_active: params.is_active.unwrap_or(true),
            created_at: Utc::now(),
        })
    }

    /// Merges the provided fields onto the product. `id` and `created_at`
    /// are never touched.
    fn on_update(&mut self, update: ProductUpdate) -> Result<(), String> {
        if update.price == Some(0) {
            return Err("price must be greater than 0".to_string());
        }
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        if let Some(price) = update.price {
            self.price = price;
        }
        if let Some(category) = update.category {
            self.category = category;
        }
        if let Some(condition) = update.condition {
            self.condition = condition;
        }
        if let Some(image_url) = update.image_url {
            self.image_url = image_url;
        }
        if let Some(is_active) = update.is_active {
            self.is_active = is_active;
        }
        Ok(())
    }

    fn is_listed(&self) -> bool {
        self.is_active
    }

    fn handle_action(&mut self, action: ProductAction) -> Result<ProductActionResult, String> {
        match action {
            ProductAction::Deactivate => {
                self.is_active = false;
                Ok(ProductActionResult::Deactivated)
            }
        }
    }
}
