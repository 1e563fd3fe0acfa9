use std::path::PathBuf;

use ecommerce_contracts::{
    config::ExportConfig,
    doc::{export, schema_json},
};
use serde_json::Value;

#[test]
fn schema_lists_every_record() {
    let json = schema_json(false).unwrap();
    let doc: Value = serde_json::from_str(&json).unwrap();
    let schemas = doc["components"]["schemas"].as_object().unwrap();

    for name in [
        "OrderStatus",
        "Order",
        "OrderItem",
        "Product",
        "CreateOrderRequest",
        "CreateOrderItemRequest",
        "UpdateOrderStatusRequest",
        "CreateProductRequest",
        "UpdateProductRequest",
        "ProductSearchQuery",
        "OrderList",
        "ProductList",
        "Meta",
    ] {
        assert!(schemas.contains_key(name), "missing schema {name}");
    }

    let order = &schemas["Order"]["properties"];
    assert!(order.get("userId").is_some());
    assert!(order.get("totalAmount").is_some());
}

#[test]
fn order_status_schema_is_integer_enum() {
    let doc: Value = serde_json::from_str(&schema_json(true).unwrap()).unwrap();
    let status = &doc["components"]["schemas"]["OrderStatus"];
    assert_eq!(status["type"], "integer");
    let values: Vec<i64> = status["enum"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(Value::as_i64)
        .collect();
    assert_eq!(values, vec![0, 1, 2, 3, 4, 5]);
}

#[test]
fn config_from_vars() {
    let config = ExportConfig::from_vars(None, None).unwrap();
    assert_eq!(
        config,
        ExportConfig {
            output: None,
            pretty: true
        }
    );

    let config =
        ExportConfig::from_vars(Some("-".into()), Some("no".into())).unwrap();
    assert!(config.output.is_none());
    assert!(!config.pretty);

    let config =
        ExportConfig::from_vars(Some("schema.json".into()), Some("TRUE".into())).unwrap();
    assert_eq!(config.output, Some(PathBuf::from("schema.json")));
    assert!(config.pretty);

    assert!(ExportConfig::from_vars(None, Some("maybe".into())).is_err());
}

#[test]
fn export_to_stdout_returns_document() {
    let config = ExportConfig {
        output: None,
        pretty: false,
    };
    let json = export(&config).unwrap().expect("document for stdout");
    assert!(!json.contains('\n'));
    let doc: Value = serde_json::from_str(&json).unwrap();
    assert_eq!(doc["info"]["title"], "ecommerce-contracts");
}

#[test]
fn export_writes_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("contracts.json");
    let config = ExportConfig {
        output: Some(path.clone()),
        pretty: true,
    };

    assert!(export(&config).unwrap().is_none());

    let written = std::fs::read_to_string(&path).unwrap();
    assert_eq!(written, schema_json(true).unwrap());
}
