//! Product-specific domain logic: the entity hooks and the soft-delete action.

mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;
