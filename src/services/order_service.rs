use anyhow::anyhow;
use rust_decimal::Decimal;

use crate::{
    dto::orders::{CreateOrderRequest, OrderChanged, OrderDetail, OrderList, OrderListQuery},
    error::{AppError, AppResult},
    models::OrderItem,
    routes::params::{non_empty, parse_int_prefix},
    state::AppState,
    store::NewOrder,
};

/// Places an order, snapshotting each product's name and price.
///
/// An item naming an unknown product is an internal fault (500), not a client
/// error, and nothing is stored.
pub async fn create_order(
    state: &AppState,
    payload: CreateOrderRequest,
) -> AppResult<OrderChanged> {
    let (Some(user_id), Some(lines)) = (
        payload.user_id.filter(|id| *id != 0),
        payload.items.filter(|items| !items.is_empty()),
    ) else {
        return Err(AppError::Validation("Invalid order data".into()));
    };

    let mut total = Decimal::ZERO;
    let mut items = Vec::with_capacity(lines.len());
    for line in lines {
        let product = state
            .products
            .find(line.product_id)
            .await
            .ok_or_else(|| anyhow!("Product not found"))?;
        let subtotal = product
            .price
            .checked_mul(Decimal::from(line.quantity))
            .ok_or_else(|| anyhow!("subtotal overflow for product {}", product.id))?;
        total = total
            .checked_add(subtotal)
            .ok_or_else(|| anyhow!("order total overflow"))?;
        items.push(OrderItem {
            product_id: product.id,
            product_name: product.name,
            quantity: line.quantity,
            price: product.price,
            subtotal,
        });
    }

    let order = state
        .orders
        .create(NewOrder {
            user_id,
            items,
            total,
        })
        .await;

    tracing::info!(order_id = order.id, user_id, total = %order.total, "order created");
    Ok(OrderChanged {
        message: "Order created successfully".into(),
        order,
    })
}

pub async fn list_orders(state: &AppState, query: OrderListQuery) -> AppResult<OrderList> {
    let orders = state.orders.list().await;
    let orders: Vec<_> = match non_empty(query.user_id.as_deref()) {
        None => orders,
        Some(raw) => {
            let user_id = parse_int_prefix(raw);
            orders
                .into_iter()
                .filter(|o| Some(o.user_id) == user_id)
                .collect()
        }
    };

    Ok(OrderList {
        total: orders.len(),
        orders,
    })
}

pub async fn get_order(state: &AppState, raw_id: &str) -> AppResult<OrderDetail> {
    let order = match parse_int_prefix(raw_id) {
        Some(id) => state.orders.find(id).await,
        None => None,
    };
    let order = match order {
        Some(o) => o,
        None => return Err(AppError::NotFound("Order not found".into())),
    };
    Ok(OrderDetail { order })
}
