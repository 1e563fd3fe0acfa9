use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::ContractError;

/// Lifecycle state of an order. Serialized as its ordinal.
///
/// The usual progression is Pending, Confirmed, Processing, Shipped,
/// Delivered, with Cancelled reachable from any non-terminal state. None of
/// that is enforced here; whoever owns order processing decides which moves
/// are legal.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ToSchema,
)]
#[serde(into = "i32", try_from = "i32")]
#[repr(i32)]
pub enum OrderStatus {
    #[default]
    Pending = 0,
    Confirmed = 1,
    Processing = 2,
    Shipped = 3,
    Delivered = 4,
    Cancelled = 5,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 6] = [
        OrderStatus::Pending,
        OrderStatus::Confirmed,
        OrderStatus::Processing,
        OrderStatus::Shipped,
        OrderStatus::Delivered,
        OrderStatus::Cancelled,
    ];

    pub fn ordinal(self) -> i32 {
        self as i32
    }

    pub fn as_str(self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Confirmed => "Confirmed",
            OrderStatus::Processing => "Processing",
            OrderStatus::Shipped => "Shipped",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Cancelled => "Cancelled",
        }
    }
}

impl From<OrderStatus> for i32 {
    fn from(status: OrderStatus) -> Self {
        status.ordinal()
    }
}

impl TryFrom<i32> for OrderStatus {
    type Error = ContractError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        OrderStatus::ALL
            .into_iter()
            .find(|status| status.ordinal() == value)
            .ok_or(ContractError::UnknownStatusOrdinal(value))
    }
}

impl FromStr for OrderStatus {
    type Err = ContractError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        OrderStatus::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| ContractError::UnknownStatusName(s.to_string()))
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: i32,
    pub user_id: i32,
    pub order_date: DateTime<Utc>,
    pub status: OrderStatus,
    /// Expected to equal the sum of item totals. Carried as given.
    pub total_amount: Decimal,
    #[serde(default)]
    pub shipping_address: String,
    #[serde(default)]
    pub items: Vec<OrderItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub id: i32,
    pub product_id: i32,
    #[serde(default)]
    pub product_name: String,
    pub quantity: i32,
    /// Unit price at the time the order was placed.
    pub price: Decimal,
    /// `price * quantity` by convention of the producer; never recomputed.
    pub total: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: i32,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: Decimal,
    #[serde(default)]
    pub category: String,
    pub stock_quantity: i32,
    #[serde(default)]
    pub image_url: String,
    pub created_at: DateTime<Utc>,
    pub is_active: bool,
}
