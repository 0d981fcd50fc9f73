use std::sync::Arc;

use crate::{
    config::AppConfig,
    store::{MemoryStore, OrderRepository, ProductRepository, UserRepository},
};

#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserRepository>,
    pub products: Arc<dyn ProductRepository>,
    pub orders: Arc<dyn OrderRepository>,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(store: MemoryStore, config: AppConfig) -> Self {
        Self {
            users: store.users,
            products: store.products,
            orders: store.orders,
            config: Arc::new(config),
        }
    }

    /// Fresh state over the seeded in-memory store.
    pub fn in_memory(config: AppConfig) -> Self {
        Self::new(MemoryStore::seeded(), config)
    }
}
