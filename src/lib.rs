//! Restaurant Backend — order-management REST API.
//!
//! A single request/response CRUD layer over one `orders` collection,
//! backed by PostgreSQL.
//!
//! # Modules
//!
//! - [`config`] - YAML application configuration
//! - [`logging`] - tracing subscriber setup
//! - [`db`] - PostgreSQL connection pool and schema init
//! - [`models`] - Order entity and status lifecycle
//! - [`error`] - Error taxonomy for order operations
//! - [`orders`] - Order repository and service layer
//! - [`gateway`] - axum HTTP surface

pub mod config;
pub mod db;
pub mod error;
pub mod gateway;
pub mod logging;
pub mod models;
pub mod orders;

// Convenient re-exports at crate root
pub use db::Database;
pub use error::OrderError;
pub use models::{Order, OrderStatus};
pub use orders::{OrderRepository, OrderService};
