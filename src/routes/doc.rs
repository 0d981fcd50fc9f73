use utoipa::{OpenApi, openapi::OpenApi as OpenApiSpec};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::{
        admin::{
            AdminOrderList, AdminOrderQuery, Dashboard, DashboardResponse, OrderStats,
            UpdateOrderStatusRequest,
        },
        auth::{LoginRequest, LoginResponse, RegisterRequest, RegisterResponse, UserProfile},
        orders::{
            CreateOrderRequest, OrderChanged, OrderDetail, OrderLineRequest, OrderList,
            OrderListQuery,
        },
        products::{
            CreateProductRequest, ProductChanged, ProductDetail, ProductList, ProductQuery,
            UpdateProductRequest,
        },
    },
    models::{Order, OrderItem, OrderStatus, Product, Role, StatusChange},
    response::ErrorBody,
    routes::{admin, auth, health, orders, products},
};

#[derive(OpenApi)]
#[openapi(
    info(title = "ProjectX API", description = "Demo e-commerce backend over in-memory collections"),
    paths(
        health::health_check,
        auth::register,
        auth::login,
        products::list_products,
        products::get_product,
        orders::create_order,
        orders::list_orders,
        orders::get_order,
        admin::list_all_orders,
        admin::update_order_status,
        admin::dashboard,
        admin::create_product,
        admin::update_product
    ),
    components(
        schemas(
            Role,
            Product,
            Order,
            OrderItem,
            OrderStatus,
            StatusChange,
            UserProfile,
            RegisterRequest,
            RegisterResponse,
            LoginRequest,
            LoginResponse,
            ProductQuery,
            ProductList,
            ProductDetail,
            ProductChanged,
            CreateProductRequest,
            UpdateProductRequest,
            CreateOrderRequest,
            OrderLineRequest,
            OrderListQuery,
            OrderList,
            OrderDetail,
            OrderChanged,
            AdminOrderQuery,
            AdminOrderList,
            OrderStats,
            UpdateOrderStatusRequest,
            Dashboard,
            DashboardResponse,
            health::HealthData,
            ErrorBody
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Auth", description = "Registration and login"),
        (name = "Products", description = "Catalog browsing"),
        (name = "Orders", description = "Order placement and lookup"),
        (name = "Admin", description = "Order and catalog management"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_every_route() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&str> = doc.paths.paths.keys().map(String::as_str).collect();
        for expected in [
            "/api/health",
            "/api/auth/register",
            "/api/auth/login",
            "/api/products",
            "/api/products/{id}",
            "/api/orders",
            "/api/orders/{id}",
            "/api/admin/orders",
            "/api/admin/orders/{id}/status",
            "/api/admin/dashboard",
            "/api/admin/products",
            "/api/admin/products/{id}",
        ] {
            assert!(paths.contains(&expected), "missing {expected}");
        }
    }
}
