//! Order service: request validation and persistence mapping
//!
//! All five operations are stateless with respect to each other; the only
//! shared resource is the injected store. Validation happens here, before
//! any write, so the contract does not depend on store-side checks.

use std::sync::Arc;

use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;

use super::repository::{NewOrder, OrderRepository};
use crate::db::Database;
use crate::error::OrderError;
use crate::models::{Order, OrderStatus};

/// Create order request body (all fields required)
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    #[schema(example = "Asha")]
    pub customer_name: Option<String>,
    #[schema(example = "555-0199")]
    pub mobile_number: Option<String>,
    #[schema(example = "Pizza")]
    pub food_item: Option<String>,
    #[schema(example = 2)]
    pub quantity: Option<i64>,
    #[schema(example = "12 Main St")]
    pub address: Option<String>,
}

/// Update request body.
///
/// Only `status` is honored; any other fields callers send are dropped
/// during deserialization.
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateOrderStatusRequest {
    #[schema(example = "confirmed")]
    pub status: Option<String>,
}

/// Order service over the injected store.
#[derive(Clone)]
pub struct OrderService {
    db: Arc<Database>,
}

impl OrderService {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    /// Validate and persist a new order.
    ///
    /// No partial order is created: validation completes before the insert,
    /// and the store fills in id, orderDate, status and totalAmount.
    pub async fn create_order(&self, req: CreateOrderRequest) -> Result<Order, OrderError> {
        let new = validate_create(req)?;
        let order = OrderRepository::insert(self.db.pool(), &new).await?;
        Ok(order)
    }

    /// All orders, most recently created first.
    pub async fn list_orders(&self) -> Result<Vec<Order>, OrderError> {
        Ok(OrderRepository::list_desc(self.db.pool()).await?)
    }

    pub async fn get_order(&self, id: &str) -> Result<Order, OrderError> {
        let id = parse_order_id(id)?;
        OrderRepository::get(self.db.pool(), id)
            .await?
            .ok_or_else(|| OrderError::not_found("Order not found"))
    }

    /// Persist a new status on an existing order.
    ///
    /// The status value is checked against the five lifecycle stages before
    /// any write; all other fields stay unchanged.
    pub async fn update_order_status(
        &self,
        id: &str,
        req: UpdateOrderStatusRequest,
    ) -> Result<Order, OrderError> {
        let id = parse_order_id(id)?;
        let status = req
            .status
            .as_deref()
            .and_then(OrderStatus::parse)
            .ok_or_else(|| OrderError::validation("Invalid status value"))?;

        OrderRepository::update_status(self.db.pool(), id, status)
            .await?
            .ok_or_else(|| OrderError::not_found("Order not found"))
    }

    /// Permanently remove an order. No soft-delete, no tombstone.
    pub async fn delete_order(&self, id: &str) -> Result<(), OrderError> {
        let id = parse_order_id(id)?;
        if OrderRepository::delete(self.db.pool(), id).await? {
            Ok(())
        } else {
            Err(OrderError::not_found("Order not found"))
        }
    }
}

// Malformed ids resolve the same as a missing row.
fn parse_order_id(id: &str) -> Result<Uuid, OrderError> {
    Uuid::parse_str(id).map_err(|_| OrderError::not_found("Order not found"))
}

/// Check that all five fields are present and truthy; text fields are
/// stored trimmed.
fn validate_create(req: CreateOrderRequest) -> Result<NewOrder, OrderError> {
    let customer_name = required_text(req.customer_name)?;
    let mobile_number = required_text(req.mobile_number)?;
    let food_item = required_text(req.food_item)?;
    let address = required_text(req.address)?;

    let quantity = req
        .quantity
        .and_then(|q| i32::try_from(q).ok())
        .filter(|q| *q >= 1)
        .ok_or_else(|| OrderError::validation("All fields are required"))?;

    Ok(NewOrder {
        customer_name,
        mobile_number,
        food_item,
        quantity,
        address,
    })
}

fn required_text(field: Option<String>) -> Result<String, OrderError> {
    let trimmed = field.as_deref().map(str::trim).unwrap_or_default();
    if trimmed.is_empty() {
        return Err(OrderError::validation("All fields are required"));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_request() -> CreateOrderRequest {
        CreateOrderRequest {
            customer_name: Some("Asha".to_string()),
            mobile_number: Some("555".to_string()),
            food_item: Some("Pizza".to_string()),
            quantity: Some(2),
            address: Some("12 Main St".to_string()),
        }
    }

    #[test]
    fn test_validate_create_success() {
        let new = validate_create(full_request()).unwrap();
        assert_eq!(
            new,
            NewOrder {
                customer_name: "Asha".to_string(),
                mobile_number: "555".to_string(),
                food_item: "Pizza".to_string(),
                quantity: 2,
                address: "12 Main St".to_string(),
            }
        );
    }

    #[test]
    fn test_validate_create_trims_text_fields() {
        let mut req = full_request();
        req.customer_name = Some("  Asha  ".to_string());
        req.address = Some("\t12 Main St\n".to_string());

        let new = validate_create(req).unwrap();
        assert_eq!(new.customer_name, "Asha");
        assert_eq!(new.address, "12 Main St");
    }

    #[test]
    fn test_validate_create_missing_field_fails() {
        for strip in 0..5 {
            let mut req = full_request();
            match strip {
                0 => req.customer_name = None,
                1 => req.mobile_number = None,
                2 => req.food_item = None,
                3 => req.quantity = None,
                _ => req.address = None,
            }
            let err = validate_create(req).unwrap_err();
            assert!(
                matches!(&err, OrderError::Validation(m) if m == "All fields are required"),
                "field {} should be required, got {:?}",
                strip,
                err
            );
        }
    }

    #[test]
    fn test_validate_create_whitespace_only_fails() {
        let mut req = full_request();
        req.food_item = Some("   ".to_string());
        assert!(matches!(
            validate_create(req),
            Err(OrderError::Validation(_))
        ));
    }

    #[test]
    fn test_validate_create_quantity_below_one_fails() {
        for qty in [0, -1] {
            let mut req = full_request();
            req.quantity = Some(qty);
            assert!(
                matches!(validate_create(req), Err(OrderError::Validation(_))),
                "quantity {} must be rejected",
                qty
            );
        }
    }

    #[test]
    fn test_validate_create_quantity_overflow_fails() {
        let mut req = full_request();
        req.quantity = Some(i64::from(i32::MAX) + 1);
        assert!(matches!(
            validate_create(req),
            Err(OrderError::Validation(_))
        ));
    }

    #[test]
    fn test_parse_order_id_malformed_is_not_found() {
        for id in ["not-a-uuid", "", "12345", "zzzzzzzz-zzzz-zzzz-zzzz-zzzzzzzzzzzz"] {
            assert!(
                matches!(parse_order_id(id), Err(OrderError::NotFound(_))),
                "id {:?} should resolve to not-found",
                id
            );
        }
    }

    #[test]
    fn test_parse_order_id_valid_uuid() {
        let id = Uuid::new_v4();
        assert_eq!(parse_order_id(&id.to_string()).unwrap(), id);
    }

    #[test]
    fn test_update_request_ignores_extra_fields() {
        let req: UpdateOrderStatusRequest = serde_json::from_str(
            r#"{"status":"confirmed","customerName":"Mallory","totalAmount":0}"#,
        )
        .unwrap();
        assert_eq!(req.status.as_deref(), Some("confirmed"));
    }

    #[test]
    fn test_update_request_status_optional() {
        let req: UpdateOrderStatusRequest = serde_json::from_str(r#"{}"#).unwrap();
        assert!(req.status.is_none());
    }
}
