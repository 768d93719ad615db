//! Order endpoint handlers
//!
//! Handlers stay thin: extract, delegate to the service, wrap the result in
//! the response envelope. Store failures are mapped with a per-operation
//! context message.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use super::state::AppState;
use super::types::{
    ApiError, Confirmation, ErrorBody, JsonBody, OrderBody, OrderCreated, OrderList, ServiceInfo,
};
use crate::orders::{CreateOrderRequest, UpdateOrderStatusRequest};

/// Service banner
///
/// GET /
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service is up", body = ServiceInfo)
    ),
    tag = "System"
)]
pub async fn root() -> Json<ServiceInfo> {
    Json(ServiceInfo {
        message: "Restaurant Backend API is running!".to_string(),
    })
}

/// Place a new order
///
/// POST /api/orders
#[utoipa::path(
    post,
    path = "/api/orders",
    request_body = CreateOrderRequest,
    responses(
        (status = 201, description = "Order placed", body = OrderCreated),
        (status = 400, description = "Missing required field", body = ErrorBody),
        (status = 500, description = "Store failure", body = ErrorBody)
    ),
    tag = "Orders"
)]
pub async fn create_order(
    State(state): State<Arc<AppState>>,
    JsonBody(req): JsonBody<CreateOrderRequest>,
) -> Result<(StatusCode, Json<OrderCreated>), ApiError> {
    let order = state
        .orders
        .create_order(req)
        .await
        .map_err(|e| ApiError::from_order(e, "Failed to place order"))?;

    tracing::info!("Order {} placed for {}", order.id, order.customer_name);

    let order_id = order.id;
    Ok((
        StatusCode::CREATED,
        Json(OrderCreated {
            success: true,
            message: "Order placed successfully!".to_string(),
            order_id,
            order,
        }),
    ))
}

/// List all orders, most recent first
///
/// GET /api/orders
#[utoipa::path(
    get,
    path = "/api/orders",
    responses(
        (status = 200, description = "All orders with count", body = OrderList),
        (status = 500, description = "Store failure", body = ErrorBody)
    ),
    tag = "Orders"
)]
pub async fn list_orders(
    State(state): State<Arc<AppState>>,
) -> Result<Json<OrderList>, ApiError> {
    let orders = state
        .orders
        .list_orders()
        .await
        .map_err(|e| ApiError::from_order(e, "Failed to fetch orders"))?;

    Ok(Json(OrderList {
        success: true,
        count: orders.len(),
        orders,
    }))
}

/// Get a single order by id
///
/// GET /api/orders/{id}
#[utoipa::path(
    get,
    path = "/api/orders/{id}",
    params(("id" = String, Path, description = "Order id")),
    responses(
        (status = 200, description = "Order details", body = OrderBody),
        (status = 404, description = "Order not found", body = ErrorBody),
        (status = 500, description = "Store failure", body = ErrorBody)
    ),
    tag = "Orders"
)]
pub async fn get_order(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<OrderBody>, ApiError> {
    let order = state
        .orders
        .get_order(&id)
        .await
        .map_err(|e| ApiError::from_order(e, "Failed to fetch order"))?;

    Ok(Json(OrderBody {
        success: true,
        message: None,
        order,
    }))
}

/// Update the status of an existing order
///
/// PUT /api/orders/{id}
///
/// Only `status` is honored; other fields in the payload are ignored.
#[utoipa::path(
    put,
    path = "/api/orders/{id}",
    params(("id" = String, Path, description = "Order id")),
    request_body = UpdateOrderStatusRequest,
    responses(
        (status = 200, description = "Order updated", body = OrderBody),
        (status = 400, description = "Invalid status value", body = ErrorBody),
        (status = 404, description = "Order not found", body = ErrorBody),
        (status = 500, description = "Store failure", body = ErrorBody)
    ),
    tag = "Orders"
)]
pub async fn update_order_status(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    JsonBody(req): JsonBody<UpdateOrderStatusRequest>,
) -> Result<Json<OrderBody>, ApiError> {
    let order = state
        .orders
        .update_order_status(&id, req)
        .await
        .map_err(|e| ApiError::from_order(e, "Failed to update order"))?;

    tracing::info!("Order {} status set to {}", order.id, order.status);

    Ok(Json(OrderBody {
        success: true,
        message: Some("Order updated successfully".to_string()),
        order,
    }))
}

/// Permanently delete an order
///
/// DELETE /api/orders/{id}
#[utoipa::path(
    delete,
    path = "/api/orders/{id}",
    params(("id" = String, Path, description = "Order id")),
    responses(
        (status = 200, description = "Order deleted", body = Confirmation),
        (status = 404, description = "Order not found", body = ErrorBody),
        (status = 500, description = "Store failure", body = ErrorBody)
    ),
    tag = "Orders"
)]
pub async fn delete_order(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Confirmation>, ApiError> {
    state
        .orders
        .delete_order(&id)
        .await
        .map_err(|e| ApiError::from_order(e, "Failed to delete order"))?;

    tracing::info!("Order {} deleted", id);

    Ok(Json(Confirmation {
        success: true,
        message: "Order deleted successfully".to_string(),
    }))
}

/// Catch-all for unmatched routes
pub async fn route_not_found() -> ApiError {
    ApiError::route_not_found()
}
