use async_trait::async_trait;
use catalog_product::{
    product::{entity::Product, error::ProductError},
    state::{ProductState, ProductStore},
};
use std::{collections::BTreeMap, sync::Arc};
use tokio::sync::RwLock;
use tracing::debug;

#[derive(Debug)]
struct Records {
    last_id: u64,
    // Ids are handed out in increasing order, so key order is insertion order.
    map: BTreeMap<u64, Product>,
}

/// Volatile product store. Everything it holds is dropped together with it.
#[derive(Debug)]
pub struct MemStore {
    records: RwLock<Records>,
}

impl Default for MemStore {
    fn default() -> Self {
        Self {
            records: RwLock::new(Records {
                last_id: 0,
                map: BTreeMap::new(),
            }),
        }
    }
}

impl MemStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductStore for MemStore {
    async fn insert(&self, candidate: Product) -> Result<Product, ProductError> {
        if let Some(id) = candidate.id().filter(|_| !candidate.is_transient()) {
            return Err(ProductError::InvalidState(id));
        }

        let mut records = self.records.write().await;

        let id = records.last_id + 1;
        let product = candidate.with_id(id);
        records.map.insert(id, product.clone());
        records.last_id = id;

        debug!("Inserted product `{id}`");

        Ok(product)
    }

    async fn list_all(&self) -> Vec<Product> {
        self.records.read().await.map.values().cloned().collect()
    }
}

/// Creates a fresh, empty store ready to be shared between request handlers.
pub fn product_state() -> ProductState {
    Arc::new(MemStore::new())
}
