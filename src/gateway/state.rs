//! Shared gateway state

use std::sync::Arc;

use crate::db::Database;
use crate::orders::OrderService;

/// Application state shared across handlers.
///
/// The store is injected at construction and reached only through the
/// service; handlers keep no state of their own.
#[derive(Clone)]
pub struct AppState {
    pub orders: OrderService,
}

impl AppState {
    pub fn new(db: Arc<Database>) -> Self {
        Self {
            orders: OrderService::new(db),
        }
    }
}
