use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::{get, patch, post, put},
};

use crate::{
    dto::{
        admin::{AdminOrderList, AdminOrderQuery, DashboardResponse, UpdateOrderStatusRequest},
        orders::OrderChanged,
        products::{CreateProductRequest, ProductChanged, UpdateProductRequest},
    },
    error::AppResult,
    extract::ApiJson,
    response::{Created, ErrorBody},
    services::{admin_service, product_service},
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/orders", get(list_all_orders))
        .route("/orders/{id}/status", patch(update_order_status))
        .route("/dashboard", get(dashboard))
        .route("/products", post(create_product))
        .route("/products/{id}", put(update_product))
}

#[utoipa::path(
    get,
    path = "/api/admin/orders",
    params(AdminOrderQuery),
    responses(
        (status = 200, description = "Filtered orders with statistics", body = AdminOrderList),
    ),
    tag = "Admin"
)]
pub async fn list_all_orders(
    State(state): State<AppState>,
    Query(query): Query<AdminOrderQuery>,
) -> AppResult<Json<AdminOrderList>> {
    let resp = admin_service::list_orders(&state, query).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    patch,
    path = "/api/admin/orders/{id}/status",
    params(
        ("id" = String, Path, description = "Order ID")
    ),
    request_body = UpdateOrderStatusRequest,
    responses(
        (status = 200, description = "Update order status", body = OrderChanged),
        (status = 404, description = "Order not found", body = ErrorBody),
    ),
    tag = "Admin"
)]
pub async fn update_order_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(payload): ApiJson<UpdateOrderStatusRequest>,
) -> AppResult<Json<OrderChanged>> {
    let resp = admin_service::update_order_status(&state, &id, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/admin/dashboard",
    responses(
        (status = 200, description = "Store-wide figures", body = DashboardResponse),
    ),
    tag = "Admin"
)]
pub async fn dashboard(State(state): State<AppState>) -> AppResult<Json<DashboardResponse>> {
    let resp = admin_service::dashboard(&state).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/admin/products",
    request_body = CreateProductRequest,
    responses(
        (status = 201, description = "Create product", body = ProductChanged),
        (status = 400, description = "Missing required fields", body = ErrorBody),
    ),
    tag = "Admin"
)]
pub async fn create_product(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CreateProductRequest>,
) -> AppResult<Created<ProductChanged>> {
    let resp = product_service::create_product(&state, payload).await?;
    Ok(Created(resp))
}

#[utoipa::path(
    put,
    path = "/api/admin/products/{id}",
    params(
        ("id" = String, Path, description = "Product ID")
    ),
    request_body = UpdateProductRequest,
    responses(
        (status = 200, description = "Updated product", body = ProductChanged),
        (status = 404, description = "Product not found", body = ErrorBody),
    ),
    tag = "Admin"
)]
pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(payload): ApiJson<UpdateProductRequest>,
) -> AppResult<Json<ProductChanged>> {
    let resp = product_service::update_product(&state, &id, payload).await?;
    Ok(Json(resp))
}
