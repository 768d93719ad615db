//! OpenAPI / Swagger UI documentation
//!
//! - Swagger UI: `http://localhost:3000/docs`
//! - OpenAPI JSON: `http://localhost:3000/api-docs/openapi.json`

use utoipa::OpenApi;

/// Main API documentation struct
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Restaurant Backend API",
        version = "1.0.0",
        description = "Order-management REST API for a restaurant: place, list, update and delete customer food orders.",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:3000", description = "Development"),
    ),
    paths(
        crate::gateway::handlers::root,
        crate::gateway::handlers::create_order,
        crate::gateway::handlers::list_orders,
        crate::gateway::handlers::get_order,
        crate::gateway::handlers::update_order_status,
        crate::gateway::handlers::delete_order,
    ),
    components(
        schemas(
            crate::models::Order,
            crate::models::OrderStatus,
            crate::orders::CreateOrderRequest,
            crate::orders::UpdateOrderStatusRequest,
            crate::gateway::types::ServiceInfo,
            crate::gateway::types::OrderCreated,
            crate::gateway::types::OrderList,
            crate::gateway::types::OrderBody,
            crate::gateway::types::Confirmation,
            crate::gateway::types::ErrorBody,
        )
    ),
    tags(
        (name = "System", description = "Service banner"),
        (name = "Orders", description = "Order CRUD operations"),
    )
)]
pub struct ApiDoc;
