use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::{IntoParams, ToSchema};

use crate::models::Order;

#[derive(Debug, Default, Deserialize, ToSchema, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct AdminOrderQuery {
    /// Exact status match.
    pub status: Option<String>,
    /// Inclusive lower bound on `createdAt` (RFC 3339 or `YYYY-MM-DD`).
    pub start_date: Option<String>,
    /// Inclusive upper bound on `createdAt` (RFC 3339 or `YYYY-MM-DD`).
    pub end_date: Option<String>,
}

/// Any status value is accepted; non-string values are stored as their JSON text.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateOrderStatusRequest {
    #[schema(value_type = Option<String>)]
    pub status: Option<Value>,
    #[schema(value_type = Option<String>)]
    pub notes: Option<Value>,
}

#[derive(Debug, Default, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderStats {
    pub total: usize,
    pub pending: usize,
    pub processing: usize,
    pub shipped: usize,
    pub delivered: usize,
    pub cancelled: usize,
    pub total_revenue: Decimal,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AdminOrderList {
    pub orders: Vec<Order>,
    pub stats: OrderStats,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    pub total_orders: usize,
    pub total_revenue: Decimal,
    pub total_products: usize,
    pub total_users: usize,
    pub pending_orders: usize,
    pub low_stock_products: usize,
    pub recent_orders: Vec<Order>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct DashboardResponse {
    pub dashboard: Dashboard,
}
