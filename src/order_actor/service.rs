use std::collections::{BTreeMap, HashMap};
use chrono::Utc;
use tokio::sync::mpsc;
use tracing::{debug, error, info, instrument, warn};
use crate::clients::{OrderClient, ProductClient};
use crate::domain::{
    Order, OrderCreate, OrderItem, OrderItemCreate, OrderItemWithProduct, OrderStatus, OrderWithItems, Product,
};
use super::{OrderError, OrderRequest, ServiceResponse};

/// Root actor for orders.
///
/// Owns the order and order-item maps exclusively. Every request is handled
/// to completion before the next one is received, so an order and its items
/// are always stored as one unit. Products are read through the catalog
/// actor, both to validate new items and to enrich orders on the way out.
pub struct OrderService {
    receiver: mpsc::Receiver<OrderRequest>,
    product_client: ProductClient,
    orders: BTreeMap<u64, Order>,
    order_items: BTreeMap<u64, OrderItem>,
    next_order_id: u64,
    next_item_id: u64,
}

impl OrderService {
    pub fn new(buffer_size: usize, product_client: ProductClient) -> (Self, OrderClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let service = Self {
            receiver,
            product_client,
            orders: BTreeMap::new(),
            order_items: BTreeMap::new(),
            next_order_id: 1,
            next_item_id: 1,
        };
        let client = OrderClient::new(sender);
        (service, client)
    }

    #[instrument(name = "order_service", skip(self))]
    pub async fn run(mut self) {
        info!("OrderService starting");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                OrderRequest::ListOrders { respond_to } => {
                    self.handle_list_orders(respond_to).await;
                }
                OrderRequest::GetOrder { id, respond_to } => {
                    self.handle_get_order(id, respond_to).await;
                }
                OrderRequest::CreateOrder { order, items, respond_to } => {
                    self.handle_create_order(order, items, respond_to).await;
                }
                OrderRequest::UpdateOrderStatus { id, status, respond_to } => {
                    self.handle_update_order_status(id, status, respond_to);
                }
                OrderRequest::Shutdown => {
                    info!("OrderService shutting down");
                    break;
                }
            }
        }

        info!("OrderService stopped");
    }

    #[instrument(skip(self, respond_to))]
    async fn handle_list_orders(&self, respond_to: ServiceResponse<Vec<OrderWithItems>, OrderError>) {
        debug!("Processing list_orders request");
        let orders: Vec<&Order> = self.orders.values().collect();
        let result = self.enrich(&orders).await;
        if let Ok(orders) = &result {
            info!(order_count = orders.len(), "Listed orders");
        }
        let _ = respond_to.send(result);
    }

    #[instrument(fields(order_id = %id), skip(self, respond_to))]
    async fn handle_get_order(&self, id: u64, respond_to: ServiceResponse<Option<OrderWithItems>, OrderError>) {
        debug!("Processing get_order request");

        let Some(order) = self.orders.get(&id) else {
            debug!("Order not found");
            let _ = respond_to.send(Ok(None));
            return;
        };

        let result = self.enrich(&[order]).await.map(|mut enriched| enriched.pop());
        if let Ok(Some(order)) = &result {
            info!(total = order.order.total, items = order.items.len(), "Order found");
        }
        let _ = respond_to.send(result);
    }

    /// **Orchestration Handler** - validates against the catalog, then stores
    ///
    /// 1. Reject empty quantities
    /// 2. Check every referenced product exists via the catalog actor
    /// 3. Store the order and all its items
    ///
    /// Nothing is stored, and no id is consumed, unless every step succeeds.
    #[instrument(
        fields(
            customer = %order.customer_name,
            total = order.total,
            item_count = items.len()
        ),
        skip(self, order, items, respond_to)
    )]
    async fn handle_create_order(
        &mut self,
        order: OrderCreate,
        items: Vec<OrderItemCreate>,
        respond_to: ServiceResponse<OrderWithItems, OrderError>,
    ) {
        info!("Processing create_order request");

        if let Some(item) = items.iter().find(|item| item.quantity == 0) {
            error!(product_id = item.product_id, "Order item with zero quantity");
            send_error!(
                respond_to,
                OrderError::ValidationError(format!("quantity for product {} must be at least 1", item.product_id))
            );
        }

        let product_ids: Vec<u64> = items.iter().map(|item| item.product_id).collect();
        let products = match self.fetch_products(product_ids).await {
            Ok(products) => products,
            Err(e) => {
                error!(error = %e, "Product validation failed");
                send_error!(respond_to, e);
            }
        };
        if let Some(item) = items.iter().find(|item| !products.contains_key(&item.product_id)) {
            error!(product_id = item.product_id, "Product not found");
            send_error!(respond_to, OrderError::InvalidProduct(item.product_id.to_string()));
        }

        if let Some(requested) = order.status.as_deref().filter(|status| *status != OrderStatus::Pending.as_str()) {
            warn!(requested, "Ignoring requested status for new order");
        }

        let order_id = self.next_order_id;
        self.next_order_id += 1;

        let order = Order {
            id: order_id,
            customer_name: order.customer_name,
            customer_email: order.customer_email,
            customer_phone: order.customer_phone.filter(|phone| !phone.trim().is_empty()),
            shipping_address: order.shipping_address,
            total: order.total,
            status: OrderStatus::Pending,
            created_at: Utc::now(),
        };

        let mut lines = Vec::with_capacity(items.len());
        for item in items {
            let item = OrderItem {
                id: self.next_item_id,
                order_id,
                product_id: item.product_id,
                quantity: item.quantity,
                price: item.price,
            };
            self.next_item_id += 1;
            self.order_items.insert(item.id, item.clone());
            // Validated above
            if let Some(product) = products.get(&item.product_id) {
                lines.push(OrderItemWithProduct { item, product: product.clone() });
            }
        }
        self.orders.insert(order_id, order.clone());

        info!(order_id, "Order created successfully");
        let _ = respond_to.send(Ok(OrderWithItems { order, items: lines }));
    }

    #[instrument(fields(order_id = %id, status = %status), skip(self, respond_to))]
    fn handle_update_order_status(&mut self, id: u64, status: OrderStatus, respond_to: ServiceResponse<Order, OrderError>) {
        debug!("Processing update_order_status request");

        let result = match self.orders.get_mut(&id) {
            Some(order) => {
                info!(previous = %order.status, "Order status updated");
                order.status = status;
                Ok(order.clone())
            }
            None => {
                error!("Order not found for status update");
                Err(OrderError::NotFound(id.to_string()))
            }
        };

        let _ = respond_to.send(result);
    }

    /// Joins orders with their items and the current record of each
    /// referenced product, fetched in a single catalog round trip.
    async fn enrich(&self, orders: &[&Order]) -> Result<Vec<OrderWithItems>, OrderError> {
        let mut items_by_order: HashMap<u64, Vec<&OrderItem>> = HashMap::new();
        for item in self.order_items.values() {
            items_by_order.entry(item.order_id).or_default().push(item);
        }

        let wanted: Vec<u64> = orders
            .iter()
            .filter_map(|order| items_by_order.get(&order.id))
            .flatten()
            .map(|item| item.product_id)
            .collect();
        let products = self.fetch_products(wanted).await?;

        orders
            .iter()
            .map(|order| {
                let items = items_by_order
                    .get(&order.id)
                    .map(Vec::as_slice)
                    .unwrap_or_default()
                    .iter()
                    .map(|item| {
                        let product = products
                            .get(&item.product_id)
                            .cloned()
                            .ok_or_else(|| OrderError::InvalidProduct(item.product_id.to_string()))?;
                        Ok(OrderItemWithProduct { item: (*item).clone(), product })
                    })
                    .collect::<Result<Vec<_>, OrderError>>()?;
                Ok(OrderWithItems { order: (*order).clone(), items })
            })
            .collect()
    }

    async fn fetch_products(&self, mut ids: Vec<u64>) -> Result<HashMap<u64, Product>, OrderError> {
        ids.sort_unstable();
        ids.dedup();
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let products = self
            .product_client
            .get_products(ids)
            .await
            .map_err(|e| OrderError::ActorCommunicationError(e.to_string()))?;
        Ok(products.into_iter().map(|product| (product.id, product)).collect())
    }
}
