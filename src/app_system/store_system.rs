use thiserror::Error;
use tracing::{error, info, instrument, warn};
use crate::actor_framework::{sequential_ids, ResourceActor};
use crate::clients::{OrderClient, ProductClient, UserClient};
use crate::config::{ConfigError, StoreConfig};
use crate::domain::{Product, User};
use crate::order_actor::OrderService;
use crate::product_actor::ProductError;
use super::seed_catalog;

#[derive(Debug, Error)]
pub enum StoreSystemError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("Catalog seeding failed: {0}")]
    Seed(#[from] ProductError),
}

/// The store as a whole: one actor per map, wired together.
///
/// **Startup Order:**
/// 1. Start the resource actors (products, users)
/// 2. Start the order actor with a product client
/// 3. Seed the catalog if configured
pub struct StoreSystem {
    pub order_client: OrderClient,
    pub product_client: ProductClient,
    pub user_client: UserClient,
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl StoreSystem {
    /// Starts all actors with empty maps.
    #[instrument(name = "store_system", skip(config), fields(mailbox_size = config.mailbox_size))]
    pub fn new(config: &StoreConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        info!("Starting store system");
        let mut handles = Vec::new();

        let (product_actor, product_resource_client) =
            ResourceActor::<Product>::new(config.mailbox_size, sequential_ids());
        let product_client = ProductClient::new(product_resource_client);
        handles.push(tokio::spawn(product_actor.run()));

        let (user_actor, user_resource_client) = ResourceActor::<User>::new(config.mailbox_size, sequential_ids());
        let user_client = UserClient::new(user_resource_client);
        handles.push(tokio::spawn(user_actor.run()));

        let (order_service, order_client) = OrderService::new(config.mailbox_size, product_client.clone());
        handles.push(tokio::spawn(order_service.run()));

        info!("Store system started");
        Ok(Self {
            order_client,
            product_client,
            user_client,
            handles,
        })
    }

    /// Starts all actors and seeds the catalog when `config.seed_catalog` is set.
    pub async fn start(config: &StoreConfig) -> Result<Self, StoreSystemError> {
        let system = Self::new(config)?;
        if config.seed_catalog {
            seed_catalog(&system.product_client).await?;
        }
        Ok(system)
    }

    /// Gracefully shutdown the store.
    ///
    /// The order actor is stopped first; the resource actors stop once the
    /// last client handle is dropped, so callers must drop any clones they
    /// still hold before awaiting this.
    #[instrument(skip(self))]
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down store system");

        if let Err(e) = self.order_client.shutdown().await {
            warn!(error = %e, "Order actor already stopped");
        }
        drop(self.order_client);
        drop(self.product_client);
        drop(self.user_client);

        let mut failed = false;
        for handle in self.handles {
            if let Err(e) = handle.await {
                error!(error = ?e, "Actor task failed");
                failed = true;
            }
        }

        if failed {
            return Err("one or more actors failed during shutdown".to_string());
        }
        info!("Store system shutdown complete");
        Ok(())
    }
}
