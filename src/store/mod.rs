//! Storage seams for users, products and orders.
//!
//! Handlers only see the repository traits; the in-memory implementations in
//! [`memory`] back the running service.

use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use rust_decimal::Decimal;
use thiserror::Error;

use crate::models::{Order, OrderItem, Product, StatusChange, User};

pub mod memory;
pub mod seed;

pub use memory::MemoryStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("email {0} is already registered")]
    DuplicateEmail(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Monotonic id allocator for one collection.
#[derive(Debug, Default)]
pub struct IdSequence(AtomicI64);

impl IdSequence {
    pub fn starting_after(last: i64) -> Self {
        Self(AtomicI64::new(last))
    }

    pub fn next(&self) -> i64 {
        self.0.fetch_add(1, Ordering::SeqCst) + 1
    }
}

#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub name: String,
}

#[derive(Debug, Clone)]
pub struct NewProduct {
    pub name: String,
    pub price: Decimal,
    pub stock: i64,
    pub category: String,
}

/// Fields to overwrite on an existing product; `None` leaves the field as is.
#[derive(Debug, Clone, Default)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub price: Option<Decimal>,
    pub stock: Option<i64>,
    pub category: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewOrder {
    pub user_id: i64,
    pub items: Vec<OrderItem>,
    pub total: Decimal,
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Inserts the user unless the email is already taken.
    async fn create(&self, user: NewUser) -> StoreResult<User>;
    async fn find_by_email(&self, email: &str) -> Option<User>;
    async fn count(&self) -> usize;
}

#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn list(&self) -> Vec<Product>;
    async fn find(&self, id: i64) -> Option<Product>;
    async fn create(&self, product: NewProduct) -> Product;
    /// Applies the patch and stamps `updated_at`; `None` when the id is unknown.
    async fn update(&self, id: i64, patch: ProductPatch) -> Option<Product>;
}

#[async_trait]
pub trait OrderRepository: Send + Sync {
    async fn list(&self) -> Vec<Order>;
    async fn find(&self, id: i64) -> Option<Order>;
    /// Stores a new `Pending` order with a single history entry.
    async fn create(&self, order: NewOrder) -> Order;
    /// Overwrites the status and appends `change` to the history.
    async fn record_status(&self, id: i64, change: StatusChange) -> Option<Order>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_sequence_continues_after_seed() {
        let ids = IdSequence::starting_after(5);
        assert_eq!(ids.next(), 6);
        assert_eq!(ids.next(), 7);
    }

    #[test]
    fn empty_sequence_starts_at_one() {
        let ids = IdSequence::default();
        assert_eq!(ids.next(), 1);
    }
}
