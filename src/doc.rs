use std::fs;

use utoipa::OpenApi;

use crate::{
    config::ExportConfig,
    dto::{
        orders::{CreateOrderItemRequest, CreateOrderRequest, OrderList, UpdateOrderStatusRequest},
        products::{CreateProductRequest, ProductList, ProductSearchQuery, UpdateProductRequest},
    },
    error::ContractResult,
    models::{Order, OrderItem, OrderStatus, Product},
    response::{ApiResponse, Meta},
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "ecommerce-contracts",
        description = "Order and product records exchanged between clients and services"
    ),
    components(
        schemas(
            OrderStatus,
            Order,
            OrderItem,
            Product,
            CreateOrderRequest,
            CreateOrderItemRequest,
            UpdateOrderStatusRequest,
            CreateProductRequest,
            UpdateProductRequest,
            ProductSearchQuery,
            OrderList,
            ProductList,
            Meta,
            ApiResponse<Order>,
            ApiResponse<OrderList>,
            ApiResponse<Product>,
            ApiResponse<ProductList>
        )
    ),
    tags(
        (name = "Orders", description = "Order records"),
        (name = "Products", description = "Product records"),
    )
)]
pub struct ContractDoc;

pub fn schema_json(pretty: bool) -> ContractResult<String> {
    let doc = ContractDoc::openapi();
    tracing::debug!(
        schemas = doc.components.as_ref().map_or(0, |c| c.schemas.len()),
        "schema document built"
    );
    let json = if pretty {
        serde_json::to_string_pretty(&doc)?
    } else {
        serde_json::to_string(&doc)?
    };
    Ok(json)
}

/// Writes the schema document to the configured file, or returns it when
/// the target is stdout so the caller decides how to print it.
pub fn export(config: &ExportConfig) -> ContractResult<Option<String>> {
    let json = schema_json(config.pretty)?;
    match &config.output {
        Some(path) => {
            fs::write(path, json)?;
            tracing::info!(path = %path.display(), "schema written");
            Ok(None)
        }
        None => Ok(Some(json)),
    }
}
