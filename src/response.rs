use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::dto::products::ProductSearchQuery;

/// Paging details echoed next to a list payload. `total` counts every
/// matching record, not just the ones on this page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Meta {
    pub page: Option<i32>,
    pub page_size: Option<i32>,
    pub total: Option<i64>,
}

impl Meta {
    pub fn new(page: i32, page_size: i32, total: i64) -> Self {
        Self {
            page: Some(page),
            page_size: Some(page_size),
            total: Some(total),
        }
    }

    /// Echoes the page the caller asked for. No clamping is applied.
    pub fn for_search(query: &ProductSearchQuery, total: i64) -> Self {
        Self::new(query.page, query.page_size, total)
    }

    pub fn empty() -> Self {
        Self {
            page: None,
            page_size: None,
            total: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    pub message: String,
    pub data: Option<T>,
    pub meta: Option<Meta>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(message: impl Into<String>, data: T, meta: Option<Meta>) -> Self {
        Self {
            message: message.into(),
            data: Some(data),
            meta,
        }
    }
}
