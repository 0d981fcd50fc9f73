use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::{
    models::{Order, OrderStatus, Product, Role, StatusChange, User},
    store::{
        IdSequence, NewOrder, NewProduct, NewUser, OrderRepository, ProductRepository,
        ProductPatch, StoreError, StoreResult, UserRepository, seed,
    },
};

/// Process-local collections, lost on restart.
#[derive(Clone)]
pub struct MemoryStore {
    pub users: Arc<MemoryUsers>,
    pub products: Arc<MemoryProducts>,
    pub orders: Arc<MemoryOrders>,
}

impl MemoryStore {
    /// A store holding the demo catalog and no users or orders.
    pub fn seeded() -> Self {
        Self {
            users: Arc::new(MemoryUsers::default()),
            products: Arc::new(MemoryProducts::with_products(seed::catalog(Utc::now()))),
            orders: Arc::new(MemoryOrders::default()),
        }
    }
}

#[derive(Debug, Default)]
pub struct MemoryUsers {
    rows: RwLock<Vec<User>>,
    ids: IdSequence,
}

#[async_trait]
impl UserRepository for MemoryUsers {
    async fn create(&self, user: NewUser) -> StoreResult<User> {
        let mut rows = self.rows.write().await;
        if rows.iter().any(|u| u.email == user.email) {
            return Err(StoreError::DuplicateEmail(user.email));
        }
        let user = User {
            id: self.ids.next(),
            email: user.email,
            name: user.name,
            role: Role::Customer,
            created_at: Utc::now(),
        };
        rows.push(user.clone());
        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> Option<User> {
        self.rows
            .read()
            .await
            .iter()
            .find(|u| u.email == email)
            .cloned()
    }

    async fn count(&self) -> usize {
        self.rows.read().await.len()
    }
}

#[derive(Debug, Default)]
pub struct MemoryProducts {
    rows: RwLock<Vec<Product>>,
    ids: IdSequence,
}

impl MemoryProducts {
    pub fn with_products(products: Vec<Product>) -> Self {
        let last = products.iter().map(|p| p.id).max().unwrap_or(0);
        Self {
            rows: RwLock::new(products),
            ids: IdSequence::starting_after(last),
        }
    }
}

#[async_trait]
impl ProductRepository for MemoryProducts {
    async fn list(&self) -> Vec<Product> {
        self.rows.read().await.clone()
    }

    async fn find(&self, id: i64) -> Option<Product> {
        self.rows.read().await.iter().find(|p| p.id == id).cloned()
    }

    async fn create(&self, product: NewProduct) -> Product {
        let mut rows = self.rows.write().await;
        let product = Product {
            id: self.ids.next(),
            name: product.name,
            price: product.price,
            stock: product.stock,
            category: product.category,
            created_at: Utc::now(),
            updated_at: None,
        };
        rows.push(product.clone());
        product
    }

    async fn update(&self, id: i64, patch: ProductPatch) -> Option<Product> {
        let mut rows = self.rows.write().await;
        let product = rows.iter_mut().find(|p| p.id == id)?;
        if let Some(name) = patch.name {
            product.name = name;
        }
        if let Some(price) = patch.price {
            product.price = price;
        }
        if let Some(stock) = patch.stock {
            product.stock = stock;
        }
        if let Some(category) = patch.category {
            product.category = category;
        }
        product.updated_at = Some(Utc::now());
        Some(product.clone())
    }
}

#[derive(Debug, Default)]
pub struct MemoryOrders {
    rows: RwLock<Vec<Order>>,
    ids: IdSequence,
}

#[async_trait]
impl OrderRepository for MemoryOrders {
    async fn list(&self) -> Vec<Order> {
        self.rows.read().await.clone()
    }

    async fn find(&self, id: i64) -> Option<Order> {
        self.rows.read().await.iter().find(|o| o.id == id).cloned()
    }

    async fn create(&self, order: NewOrder) -> Order {
        let mut rows = self.rows.write().await;
        let now = Utc::now();
        let order = Order {
            id: self.ids.next(),
            user_id: order.user_id,
            items: order.items,
            total: order.total,
            status: OrderStatus::Pending.as_str().to_string(),
            created_at: now,
            status_history: vec![StatusChange {
                status: OrderStatus::Pending.as_str().to_string(),
                notes: None,
                timestamp: now,
            }],
        };
        rows.push(order.clone());
        order
    }

    async fn record_status(&self, id: i64, change: StatusChange) -> Option<Order> {
        let mut rows = self.rows.write().await;
        let order = rows.iter_mut().find(|o| o.id == id)?;
        order.status = change.status.clone();
        order.status_history.push(change);
        Some(order.clone())
    }
}
