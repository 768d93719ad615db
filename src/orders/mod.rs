//! Order domain: persistence repository and service layer

pub mod repository;
pub mod service;

pub use repository::{NewOrder, OrderRepository};
pub use service::{CreateOrderRequest, OrderService, UpdateOrderStatusRequest};
