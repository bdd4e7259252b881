//! User entity hooks. Users are a vestigial part of the store.

pub mod entity;
pub mod error;

pub use error::*;
