use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, instrument, warn};
use crate::clients::OrderClient;
use crate::domain::{OrderCreate, OrderItemCreate, OrderWithItems};
use crate::order_actor::OrderError;
use super::Cart;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum CheckoutError {
    #[error("Cart is empty")]
    EmptyCart,
    #[error("Missing required field: {0}")]
    MissingField(&'static str),
    #[error("Cart total exceeds the supported amount")]
    TotalOverflow,
    #[error(transparent)]
    Order(#[from] OrderError),
}

/// Customer details collected at checkout. Phone is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CheckoutForm {
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    pub shipping_address: String,
}

impl CheckoutForm {
    fn validate(&self) -> Result<(), CheckoutError> {
        let required = [
            ("customerName", &self.customer_name),
            ("customerEmail", &self.customer_email),
            ("shippingAddress", &self.shipping_address),
        ];
        match required.into_iter().find(|(_, value)| value.trim().is_empty()) {
            Some((field, _)) => Err(CheckoutError::MissingField(field)),
            None => Ok(()),
        }
    }
}

/// Builds the order payload for `cart`: the total is the cart total and
/// every line captures the product's current price.
pub fn build_order(cart: &Cart, form: CheckoutForm) -> Result<(OrderCreate, Vec<OrderItemCreate>), CheckoutError> {
    let total = cart.total_price().ok_or(CheckoutError::TotalOverflow)?;
    let order = OrderCreate {
        customer_name: form.customer_name,
        customer_email: form.customer_email,
        customer_phone: Some(form.customer_phone),
        shipping_address: form.shipping_address,
        total,
        status: None,
    };
    let items = cart
        .lines()
        .iter()
        .map(|line| OrderItemCreate {
            product_id: line.product.id,
            quantity: line.quantity,
            price: line.product.price,
        })
        .collect();
    Ok((order, items))
}

/// Submits the cart as an order. The cart is cleared only once the order
/// has been stored.
#[instrument(skip_all, fields(lines = cart.lines().len(), total = ?cart.total_price()))]
pub async fn place_order(
    orders: &OrderClient,
    cart: &mut Cart,
    form: CheckoutForm,
) -> Result<OrderWithItems, CheckoutError> {
    if cart.is_empty() {
        warn!("Checkout attempted with an empty cart");
        return Err(CheckoutError::EmptyCart);
    }
    form.validate()?;

    let (order, items) = build_order(cart, form)?;
    let placed = orders.create_order(order, items).await?;
    cart.clear();

    info!(order_id = placed.order.id, "Order placed");
    Ok(placed)
}
