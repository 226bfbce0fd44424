use async_trait::async_trait;
use std::sync::Arc;

use crate::product::{entity::Product, error::ProductError};

/// The authoritative collection of products together with the identity counter.
///
/// Implementations must make `insert` and `list_all` behave as if guarded by one lock: identities are assigned
/// exactly once, starting at 1 and never reused, and a listing never observes a half-applied insert.
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// Stamps a transient product with the next identity and stores it. Fails with [`ProductError::InvalidState`]
    /// without touching the store when `candidate` already carries an identity.
    async fn insert(&self, candidate: Product) -> Result<Product, ProductError>;

    /// Returns a snapshot of all persisted products in ascending identity order.
    async fn list_all(&self) -> Vec<Product>;
}

pub type ProductState = Arc<dyn ProductStore>;
