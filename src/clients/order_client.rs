use tokio::sync::mpsc;
use tracing::{debug, info, instrument};
use crate::domain::{Order, OrderCreate, OrderItemCreate, OrderStatus, OrderWithItems};
use crate::order_actor::{OrderError, OrderRequest};

/// Client for interacting with the Order actor.
#[derive(Clone)]
pub struct OrderClient {
    sender: mpsc::Sender<OrderRequest>,
}

impl OrderClient {
    pub fn new(sender: mpsc::Sender<OrderRequest>) -> Self {
        Self { sender }
    }

    /// Sets the status from its wire name (`pending`, `processing`, ...).
    #[instrument(skip(self))]
    pub async fn set_order_status(&self, id: u64, status: &str) -> Result<Order, OrderError> {
        let status: OrderStatus = status.parse().map_err(OrderError::InvalidStatus)?;
        self.update_order_status(id, status).await
    }

    /// Moves an order one step along pending → processing → shipped → delivered.
    #[instrument(skip(self))]
    pub async fn advance_order_status(&self, id: u64) -> Result<Order, OrderError> {
        let current = self
            .get_order(id)
            .await?
            .ok_or_else(|| OrderError::NotFound(id.to_string()))?
            .order
            .status;

        let next = current.next().ok_or(OrderError::FinalStatus {
            id,
            status: current.to_string(),
        })?;
        info!(from = %current, to = %next, "Advancing order");
        self.update_order_status(id, next).await
    }

    #[instrument(skip(self))]
    pub async fn shutdown(&self) -> Result<(), OrderError> {
        debug!("Sending shutdown request");
        self.sender
            .send(OrderRequest::Shutdown)
            .await
            .map_err(|e| OrderError::ActorCommunicationError(e.to_string()))
    }
}

client_method!(OrderClient => fn list_orders() -> Vec<OrderWithItems> as OrderRequest::ListOrders, Error = OrderError);
client_method!(OrderClient => fn get_order(id: u64) -> Option<OrderWithItems> as OrderRequest::GetOrder, Error = OrderError);
client_method!(OrderClient => fn create_order(order: OrderCreate, items: Vec<OrderItemCreate>) -> OrderWithItems as OrderRequest::CreateOrder, Error = OrderError);
client_method!(OrderClient => fn update_order_status(id: u64, status: OrderStatus) -> Order as OrderRequest::UpdateOrderStatus, Error = OrderError);
