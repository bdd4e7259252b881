//! Runtime orchestration and lifecycle management.
//!
//! - [`StoreSystem`] starts, wires, seeds and shuts down the store actors
//! - [`setup_tracing`] initializes the tracing/logging infrastructure
//! - [`sample_catalog`] is the catalog loaded on a fresh start

pub mod seed;
pub mod store_system;
pub mod tracing;

pub use seed::*;
pub use store_system::*;
pub use self::tracing::*;
