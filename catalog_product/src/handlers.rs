use tracing::{debug, info, warn};

use crate::{
    product::{
        entity::{Product, ProductPayload},
        error::ProductError,
    },
    state::ProductState,
};

/// Outcome marker of a successful mutation, translated to a status code by the transport layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceStatus {
    Created,
}

pub async fn handle_create(
    state: &ProductState,
    payload: &ProductPayload,
) -> Result<(Product, ResourceStatus), ProductError> {
    let candidate = payload.validate().inspect_err(|err| warn!("Rejected product: {err}"))?;

    // Store failures are logged where they are turned into a response.
    let product = state.insert(candidate).await?;

    info!(id = product.id(), "Product created");
    debug!("{:#?}", product);

    Ok((product, ResourceStatus::Created))
}

pub async fn handle_list(state: &ProductState) -> Vec<Product> {
    let products = state.list_all().await;
    debug!("Listing {} product(s)", products.len());
    products
}
