use crate::{
    dto::products::{
        CreateProductRequest, ProductChanged, ProductDetail, ProductList, ProductQuery,
        UpdateProductRequest,
    },
    error::{AppError, AppResult},
    routes::params::{is_truthy, non_empty, parse_int_prefix, value_as_decimal, value_as_int},
    state::AppState,
    store::{NewProduct, ProductPatch},
};

pub async fn list_products(state: &AppState, query: ProductQuery) -> AppResult<ProductList> {
    let category = non_empty(query.category.as_deref());
    let search = non_empty(query.search.as_deref()).map(str::to_lowercase);

    let products: Vec<_> = state
        .products
        .list()
        .await
        .into_iter()
        .filter(|p| category.is_none_or(|c| p.category == c))
        .filter(|p| {
            search
                .as_deref()
                .is_none_or(|s| p.name.to_lowercase().contains(s))
        })
        .collect();

    Ok(ProductList {
        total: products.len(),
        products,
    })
}

pub async fn get_product(state: &AppState, raw_id: &str) -> AppResult<ProductDetail> {
    let product = match parse_int_prefix(raw_id) {
        Some(id) => state.products.find(id).await,
        None => None,
    };
    let product = match product {
        Some(p) => p,
        None => return Err(AppError::NotFound("Product not found".into())),
    };
    Ok(ProductDetail { product })
}

pub async fn create_product(
    state: &AppState,
    payload: CreateProductRequest,
) -> AppResult<ProductChanged> {
    let (Some(name), Some(price), Some(category)) = (
        non_empty(payload.name.as_deref()),
        payload.price.as_ref().filter(|v| is_truthy(v)),
        non_empty(payload.category.as_deref()),
    ) else {
        return Err(AppError::Validation("Missing required fields".into()));
    };
    let price = value_as_decimal(price)
        .ok_or_else(|| AppError::Validation("price must be a number".into()))?;
    let stock = payload.stock.as_ref().and_then(value_as_int).unwrap_or(0);

    let product = state
        .products
        .create(NewProduct {
            name: name.to_string(),
            price,
            stock,
            category: category.to_string(),
        })
        .await;

    tracing::info!(product_id = product.id, "product created");
    Ok(ProductChanged {
        message: "Product created successfully".into(),
        product,
    })
}

/// Applies a partial update. `name`, `price` and `category` only overwrite
/// when truthy, so `price: 0` or `name: ""` leave the stored values alone.
/// `stock` overwrites whenever it parses, including `0`.
pub async fn update_product(
    state: &AppState,
    raw_id: &str,
    payload: UpdateProductRequest,
) -> AppResult<ProductChanged> {
    let patch = ProductPatch {
        name: payload.name.filter(|s| !s.is_empty()),
        price: payload
            .price
            .as_ref()
            .filter(|v| is_truthy(v))
            .and_then(value_as_decimal),
        stock: payload.stock.as_ref().and_then(value_as_int),
        category: payload.category.filter(|s| !s.is_empty()),
    };

    let product = match parse_int_prefix(raw_id) {
        Some(id) => state.products.update(id, patch).await,
        None => None,
    };
    let product = match product {
        Some(p) => p,
        None => return Err(AppError::NotFound("Product not found".into())),
    };

    tracing::info!(product_id = product.id, "product updated");
    Ok(ProductChanged {
        message: "Product updated successfully".into(),
        product,
    })
}
