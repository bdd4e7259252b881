//! The order actor: owns orders and their items, and joins them with
//! products from the catalog actor.

/// Sends an error on the response channel and returns from the handler.
macro_rules! send_error {
    ($respond_to:expr, $error:expr) => {{
        let _ = $respond_to.send(Err($error));
        return;
    }};
}

pub mod error;
pub mod messages;
pub mod service;

pub use error::*;
pub use messages::*;
pub use service::*;
