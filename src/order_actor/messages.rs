use tokio::sync::oneshot;
use crate::domain::{Order, OrderCreate, OrderItemCreate, OrderStatus, OrderWithItems};
use super::OrderError;

/// Generic type aliases for service communication
pub type ServiceResult<T, E> = std::result::Result<T, E>;
pub type ServiceResponse<T, E> = oneshot::Sender<ServiceResult<T, E>>;

/// Typed messages for the order actor. Each variant includes parameters
/// and a oneshot channel for responses.
#[derive(Debug)]
pub enum OrderRequest {
    ListOrders {
        respond_to: ServiceResponse<Vec<OrderWithItems>, OrderError>,
    },
    GetOrder {
        id: u64,
        respond_to: ServiceResponse<Option<OrderWithItems>, OrderError>,
    },
    CreateOrder {
        order: OrderCreate,
        items: Vec<OrderItemCreate>,
        respond_to: ServiceResponse<OrderWithItems, OrderError>,
    },
    UpdateOrderStatus {
        id: u64,
        status: OrderStatus,
        respond_to: ServiceResponse<Order, OrderError>,
    },
    Shutdown,
}
