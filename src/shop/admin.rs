use std::collections::BTreeMap;
use chrono::{DateTime, Datelike, Utc};
use serde::Serialize;
use crate::clients::{OrderClient, ProductClient};
use crate::domain::{OrderStatus, OrderWithItems, Product};
use crate::order_actor::OrderError;
use crate::product_actor::ProductError;

/// Headline numbers for the admin panel.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    /// Sum of all order totals, smallest currency unit. Saturates.
    pub total_revenue: u64,
    /// Products currently listed in the catalog.
    pub total_products: usize,
    pub total_orders: usize,
    /// Orders placed in the calendar month of `now`.
    pub orders_this_month: usize,
    pub orders_by_status: BTreeMap<&'static str, usize>,
}

#[derive(Debug, thiserror::Error)]
pub enum DashboardError {
    #[error(transparent)]
    Product(#[from] ProductError),
    #[error(transparent)]
    Order(#[from] OrderError),
}

impl Dashboard {
    pub fn summarize(products: &[Product], orders: &[OrderWithItems], now: DateTime<Utc>) -> Self {
        let mut orders_by_status: BTreeMap<&'static str, usize> =
            OrderStatus::ALL.iter().map(|status| (status.as_str(), 0)).collect();
        for order in orders {
            *orders_by_status.entry(order.order.status.as_str()).or_default() += 1;
        }

        Self {
            total_revenue: orders
                .iter()
                .fold(0u64, |revenue, order| revenue.saturating_add(order.order.total)),
            total_products: products.len(),
            total_orders: orders.len(),
            orders_this_month: orders
                .iter()
                .filter(|order| {
                    let placed = order.order.created_at;
                    placed.year() == now.year() && placed.month() == now.month()
                })
                .count(),
            orders_by_status,
        }
    }

    pub async fn load(products: &ProductClient, orders: &OrderClient) -> Result<Self, DashboardError> {
        let products = products.list_products().await?;
        let orders = orders.list_orders().await?;
        Ok(Self::summarize(&products, &orders, Utc::now()))
    }
}
