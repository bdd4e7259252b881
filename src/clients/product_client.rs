use tracing::{debug, instrument, warn};
use crate::actor_framework::ResourceClient;
use crate::domain::{Product, ProductCreate, ProductUpdate};
use crate::product_actor::{ProductAction, ProductActionResult, ProductError};

/// Client for interacting with the Product actor.
///
/// Input validation (required fields, positive price) happens here, before
/// a request reaches the store.
#[derive(Clone)]
pub struct ProductClient {
    inner: ResourceClient<Product>,
}

crate::impl_basic_client!(ProductClient, Product, ProductError, product, batch);

impl ProductClient {
    /// Active products, in creation order.
    #[instrument(skip(self))]
    pub async fn list_products(&self) -> Result<Vec<Product>, ProductError> {
        debug!("Sending request");
        Ok(self.inner.list().await?)
    }

    #[instrument(skip(self, product), fields(name = %product.name, price = product.price))]
    pub async fn create_product(&self, product: ProductCreate) -> Result<Product, ProductError> {
        debug!("Sending request");
        if let Err(reason) = product.validate() {
            warn!(%reason, "Rejected product");
            return Err(ProductError::ValidationError(reason));
        }
        Ok(self.inner.create(product).await?)
    }

    #[instrument(skip(self))]
    pub async fn update_product(&self, id: u64, update: ProductUpdate) -> Result<Product, ProductError> {
        debug!("Sending request");
        update.validate().map_err(ProductError::ValidationError)?;
        Ok(self.inner.update(id, update).await?)
    }

    /// Soft-deletes a product. Returns `false` when no product has this id.
    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: u64) -> Result<bool, ProductError> {
        debug!("Sending request");
        match self.inner.perform_action(id, ProductAction::Deactivate).await {
            Ok(ProductActionResult::Deactivated) => Ok(true),
            Err(e) => match ProductError::from(e) {
                ProductError::NotFound(_) => Ok(false),
                other => Err(other),
            },
        }
    }
}
