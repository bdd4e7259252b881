//! Shopper and admin workflows built on top of the store clients.

pub mod admin;
pub mod cart;
pub mod catalog;
pub mod checkout;

pub use admin::*;
pub use cart::*;
pub use catalog::*;
pub use checkout::*;
