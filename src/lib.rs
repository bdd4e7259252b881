//! # Storefront
//!
//! The data store behind a small antiques storefront: a product catalog,
//! orders with their line items, and (vestigial) users, each map owned by
//! its own actor.
//!
//! - **Services** own state and run as tokio tasks → [`actor_framework::ResourceActor`],
//!   [`order_actor::OrderService`]
//! - **Clients** are cloneable handles that talk to them → [`clients::ProductClient`],
//!   [`clients::OrderClient`], [`clients::UserClient`]
//! - **Shop** workflows sit on top of the clients → [`shop::Cart`], [`shop::place_order`],
//!   [`shop::Dashboard`]
//!
//! ```rust,no_run
//! # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! use storefront::app_system::StoreSystem;
//! use storefront::config::StoreConfig;
//!
//! let system = StoreSystem::start(&StoreConfig::default()).await?;
//! let catalog = system.product_client.list_products().await?;
//! println!("{} products listed", catalog.len());
//! system.shutdown().await?;
//! # Ok(())
//! # }
//! ```

pub mod actor_framework;
pub mod app_system;
pub mod clients;
pub mod config;
pub mod domain;
pub mod order_actor;
pub mod product_actor;
pub mod shop;
pub mod user_actor;

#[cfg(test)]
mod mock_framework;
