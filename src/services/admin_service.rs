use chrono::Utc;
use rust_decimal::Decimal;

use crate::{
    dto::{
        admin::{
            AdminOrderList, AdminOrderQuery, Dashboard, DashboardResponse, OrderStats,
            UpdateOrderStatusRequest,
        },
        orders::OrderChanged,
    },
    error::{AppError, AppResult},
    models::{Order, OrderStatus, StatusChange},
    routes::params::{non_empty, parse_date_bound, parse_int_prefix, value_as_text},
    state::AppState,
};

const LOW_STOCK_THRESHOLD: i64 = 50;
const RECENT_ORDERS: usize = 10;

/// Lists orders matching every given filter, with statistics over the
/// filtered set. An unparseable date bound matches nothing.
pub async fn list_orders(state: &AppState, query: AdminOrderQuery) -> AppResult<AdminOrderList> {
    let status = non_empty(query.status.as_deref());
    let start = non_empty(query.start_date.as_deref()).map(parse_date_bound);
    let end = non_empty(query.end_date.as_deref()).map(parse_date_bound);

    let orders: Vec<Order> = state
        .orders
        .list()
        .await
        .into_iter()
        .filter(|o| status.is_none_or(|s| o.status == s))
        .filter(|o| start.is_none_or(|bound| bound.is_some_and(|b| o.created_at >= b)))
        .filter(|o| end.is_none_or(|bound| bound.is_some_and(|b| o.created_at <= b)))
        .collect();

    let stats = order_stats(&orders);
    Ok(AdminOrderList { orders, stats })
}

pub fn order_stats(orders: &[Order]) -> OrderStats {
    let count = |status: OrderStatus| orders.iter().filter(|o| o.has_status(status)).count();
    OrderStats {
        total: orders.len(),
        pending: count(OrderStatus::Pending),
        processing: count(OrderStatus::Processing),
        shipped: count(OrderStatus::Shipped),
        delivered: count(OrderStatus::Delivered),
        cancelled: count(OrderStatus::Cancelled),
        total_revenue: revenue(orders),
    }
}

fn revenue(orders: &[Order]) -> Decimal {
    orders.iter().map(|o| o.total).sum()
}

/// Overwrites the status with whatever the caller sent and records it in the
/// order's history. The order is resolved before the body is looked at, so an
/// unknown id is always a 404.
pub async fn update_order_status(
    state: &AppState,
    raw_id: &str,
    payload: UpdateOrderStatusRequest,
) -> AppResult<OrderChanged> {
    let existing = match parse_int_prefix(raw_id) {
        Some(id) => state.orders.find(id).await,
        None => None,
    };
    let existing = match existing {
        Some(o) => o,
        None => return Err(AppError::NotFound("Order not found".into())),
    };

    let status = match payload.status.as_ref().and_then(value_as_text) {
        Some(s) => s,
        None => return Err(AppError::Validation("Status is required".into())),
    };
    let change = StatusChange {
        status,
        notes: payload.notes.as_ref().and_then(value_as_text),
        timestamp: Utc::now(),
    };

    let order = match state.orders.record_status(existing.id, change).await {
        Some(o) => o,
        None => return Err(AppError::NotFound("Order not found".into())),
    };

    tracing::info!(order_id = order.id, status = %order.status, "order status updated");
    Ok(OrderChanged {
        message: "Order status updated successfully".into(),
        order,
    })
}

/// Store-wide figures; nothing here is filtered.
pub async fn dashboard(state: &AppState) -> AppResult<DashboardResponse> {
    let orders = state.orders.list().await;
    let products = state.products.list().await;

    let dashboard = Dashboard {
        total_orders: orders.len(),
        total_revenue: revenue(&orders),
        total_products: products.len(),
        total_users: state.users.count().await,
        pending_orders: orders
            .iter()
            .filter(|o| o.has_status(OrderStatus::Pending))
            .count(),
        low_stock_products: products
            .iter()
            .filter(|p| p.stock < LOW_STOCK_THRESHOLD)
            .count(),
        recent_orders: orders.iter().rev().take(RECENT_ORDERS).cloned().collect(),
    };

    Ok(DashboardResponse { dashboard })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::AppConfig,
        dto::orders::{CreateOrderRequest, OrderLineRequest},
        services::order_service::create_order,
    };
    use chrono::Duration;
    use rstest::rstest;

    async fn state_with_orders(count: usize) -> AppState {
        let state = AppState::in_memory(AppConfig::default());
        for n in 0..count {
            create_order(
                &state,
                CreateOrderRequest {
                    user_id: Some(1),
                    items: Some(vec![OrderLineRequest {
                        product_id: (n % 5) as i64 + 1,
                        quantity: 1,
                    }]),
                },
            )
            .await
            .unwrap();
        }
        state
    }

    fn set_status(status: &str) -> UpdateOrderStatusRequest {
        UpdateOrderStatusRequest {
            status: Some(serde_json::json!(status)),
            notes: None,
        }
    }

    #[tokio::test]
    async fn status_update_accepts_any_string() {
        let state = state_with_orders(1).await;
        let updated = update_order_status(&state, "1", set_status("Lost at sea"))
            .await
            .unwrap();
        assert_eq!(updated.order.status, "Lost at sea");
        assert_eq!(updated.order.status_history.len(), 2);
    }

    #[tokio::test]
    async fn status_update_for_unknown_order_is_not_found() {
        let state = state_with_orders(1).await;
        let err = update_order_status(&state, "7", set_status("Shipped"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn unknown_order_is_not_found_even_without_status() {
        let state = state_with_orders(1).await;
        let err = update_order_status(&state, "99", UpdateOrderStatusRequest::default())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn missing_status_leaves_known_order_untouched() {
        let state = state_with_orders(1).await;
        let err = update_order_status(&state, "1", UpdateOrderStatusRequest::default())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        let order = state.orders.find(1).await.unwrap();
        assert_eq!(order.status, "Pending");
        assert_eq!(order.status_history.len(), 1);
    }

    #[tokio::test]
    async fn stats_cover_only_filtered_orders() {
        let state = state_with_orders(3).await;
        update_order_status(&state, "2", set_status("Shipped"))
            .await
            .unwrap();

        let shipped = list_orders(
            &state,
            AdminOrderQuery {
                status: Some("Shipped".into()),
                ..AdminOrderQuery::default()
            },
        )
        .await
        .unwrap();
        assert_eq!(shipped.orders.len(), 1);
        assert_eq!(
            shipped.stats,
            OrderStats {
                total: 1,
                shipped: 1,
                total_revenue: Decimal::new(2999, 2),
                ..OrderStats::default()
            }
        );
    }

    #[rstest]
    #[case(Some(-1), None, 2)]
    #[case(None, Some(1), 2)]
    #[case(Some(1), None, 0)]
    #[case(None, Some(-1), 0)]
    #[tokio::test]
    async fn date_bounds_are_inclusive_ranges(
        #[case] start_offset_days: Option<i64>,
        #[case] end_offset_days: Option<i64>,
        #[case] expected: usize,
    ) {
        let state = state_with_orders(2).await;
        let bound = |days: i64| (Utc::now() + Duration::days(days)).to_rfc3339();
        let listed = list_orders(
            &state,
            AdminOrderQuery {
                status: None,
                start_date: start_offset_days.map(bound),
                end_date: end_offset_days.map(bound),
            },
        )
        .await
        .unwrap();
        assert_eq!(listed.orders.len(), expected);
    }

    #[tokio::test]
    async fn unparseable_date_matches_nothing() {
        let state = state_with_orders(2).await;
        let listed = list_orders(
            &state,
            AdminOrderQuery {
                start_date: Some("last tuesday".into()),
                ..AdminOrderQuery::default()
            },
        )
        .await
        .unwrap();
        assert!(listed.orders.is_empty());
        assert_eq!(listed.stats.total, 0);
    }

    #[tokio::test]
    async fn dashboard_lists_latest_ten_newest_first() {
        let state = state_with_orders(12).await;
        update_order_status(&state, "12", set_status("Cancelled"))
            .await
            .unwrap();

        let dashboard = dashboard(&state).await.unwrap().dashboard;
        assert_eq!(dashboard.total_orders, 12);
        assert_eq!(dashboard.pending_orders, 11);
        assert_eq!(dashboard.total_products, 5);
        assert_eq!(dashboard.total_users, 0);
        assert_eq!(dashboard.low_stock_products, 1);

        let ids: Vec<i64> = dashboard.recent_orders.iter().map(|o| o.id).collect();
        assert_eq!(ids, (3..=12).rev().collect::<Vec<i64>>());
    }
}
