//! Response envelope types and HTTP error mapping
//!
//! Every JSON body carries a `success` boolean. All failures, 400 through
//! 500, serialize to [`ErrorBody`].

use axum::extract::{FromRequest, Request};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::error::OrderError;
use crate::models::Order;

// ============================================================================
// Success Response Bodies
// ============================================================================

/// Service banner for GET /
#[derive(Debug, Serialize, ToSchema)]
pub struct ServiceInfo {
    #[schema(example = "Restaurant Backend API is running!")]
    pub message: String,
}

/// 201 body for order creation
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderCreated {
    pub success: bool,
    pub message: String,
    pub order_id: Uuid,
    pub order: Order,
}

/// 200 body for the order listing
#[derive(Debug, Serialize, ToSchema)]
pub struct OrderList {
    pub success: bool,
    pub count: usize,
    pub orders: Vec<Order>,
}

/// 200 body carrying a single order (get / update)
#[derive(Debug, Serialize, ToSchema)]
pub struct OrderBody {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub order: Order,
}

/// 200 body for message-only successes (delete)
#[derive(Debug, Serialize, ToSchema)]
pub struct Confirmation {
    pub success: bool,
    pub message: String,
}

// ============================================================================
// Error Mapping
// ============================================================================

/// Stable JSON error shape
///
/// The `error` detail string is present only for store-layer failures.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    #[schema(example = false)]
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// HTTP-facing error: a status code plus the JSON error body.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
    pub detail: Option<String>,
}

impl ApiError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: msg.into(),
            detail: None,
        }
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: msg.into(),
            detail: None,
        }
    }

    pub fn internal(msg: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: msg.into(),
            detail: Some(detail.into()),
        }
    }

    pub fn route_not_found() -> Self {
        Self::not_found("Route not found")
    }

    /// Map a service failure to its HTTP shape.
    ///
    /// `store_msg` is the per-operation context used for store failures,
    /// e.g. "Failed to place order"; validation and not-found errors carry
    /// their own message.
    pub fn from_order(err: OrderError, store_msg: &str) -> Self {
        match err {
            OrderError::Validation(msg) => Self::validation(msg),
            OrderError::NotFound(msg) => Self::not_found(msg),
            OrderError::Store(e) => {
                tracing::error!("{}: {}", store_msg, e);
                Self::internal(store_msg, e.to_string())
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            success: false,
            message: self.message,
            error: self.detail,
        };
        (self.status, Json(body)).into_response()
    }
}

// ============================================================================
// JsonBody: Request Body Extraction with JSON Rejections
// ============================================================================

/// JSON body extractor whose rejection is an [`ApiError`], keeping malformed
/// payloads inside the error envelope instead of axum's plain-text rejection.
#[derive(Debug)]
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: serde::de::DeserializeOwned,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| ApiError::validation(format!("Invalid JSON: {}", e)))?;
        Ok(JsonBody(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_body_shape() {
        let body = ErrorBody {
            success: false,
            message: "Order not found".to_string(),
            error: None,
        };
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["success"], false);
        assert_eq!(value["message"], "Order not found");
        // Detail is omitted, not null
        assert!(value.get("error").is_none());
    }

    #[test]
    fn test_error_body_with_store_detail() {
        let body = ErrorBody {
            success: false,
            message: "Failed to place order".to_string(),
            error: Some("pool timed out".to_string()),
        };
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["error"], "pool timed out");
    }

    #[test]
    fn test_api_error_status_mapping() {
        assert_eq!(
            ApiError::validation("x").status,
            StatusCode::BAD_REQUEST
        );
        assert_eq!(ApiError::not_found("x").status, StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::internal("x", "y").status,
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ApiError::route_not_found().message,
            "Route not found"
        );
    }

    #[test]
    fn test_from_order_maps_taxonomy() {
        let err = ApiError::from_order(
            OrderError::validation("All fields are required"),
            "Failed to place order",
        );
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.message, "All fields are required");
        assert!(err.detail.is_none());

        let err = ApiError::from_order(
            OrderError::not_found("Order not found"),
            "Failed to fetch order",
        );
        assert_eq!(err.status, StatusCode::NOT_FOUND);

        let err = ApiError::from_order(
            OrderError::Store(sqlx::Error::PoolTimedOut),
            "Failed to fetch order",
        );
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.message, "Failed to fetch order");
        assert!(err.detail.is_some());
    }

    #[test]
    fn test_order_created_wire_shape() {
        use crate::models::{Order, OrderStatus};
        use chrono::Utc;

        let now = Utc::now();
        let order = Order {
            id: Uuid::new_v4(),
            customer_name: "Asha".to_string(),
            mobile_number: "555".to_string(),
            food_item: "Pizza".to_string(),
            quantity: 2,
            address: "12 Main St".to_string(),
            order_date: now,
            status: OrderStatus::Pending,
            total_amount: 20.0,
            created_at: now,
            updated_at: now,
        };
        let body = OrderCreated {
            success: true,
            message: "Order placed successfully!".to_string(),
            order_id: order.id,
            order,
        };
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["success"], true);
        assert!(value.get("orderId").is_some());
        assert_eq!(value["order"]["status"], "pending");
        assert_eq!(value["order"]["totalAmount"], 20.0);
    }
}
