use axum::{
    extract::{rejection::JsonRejection, Json, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use catalog_product::{
    handlers::{handle_create, handle_list, ResourceStatus},
    product::entity::{Product, ProductPayload},
    state::ProductState,
};
use tracing::info;

use crate::error::{ApiError, ErrorResponse};

/// Create a product
///
/// Validates the submitted product, assigns it the next identity and stores it for the lifetime of the process.
#[utoipa::path(
    post,
    path = "/api/produtos",
    request_body = ProductPayload,
    tag = "Products",
    responses(
        (status = 201, description = "Product created.", body = Product),
        (status = 400, description = "Invalid or malformed product.", body = ErrorResponse),
        (status = 500, description = "The product could not be stored.", body = ErrorResponse),
    )
)]
#[axum_macros::debug_handler]
pub(crate) async fn create_product(
    State(state): State<ProductState>,
    payload: Result<Json<ProductPayload>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(payload) = payload?;
    info!("Request Body: {:?}", payload);

    let (product, status) = handle_create(&state, &payload).await?;

    let status = match status {
        ResourceStatus::Created => StatusCode::CREATED,
    };

    Ok((status, Json(product)).into_response())
}

/// List all products
///
/// Returns every stored product in the order it was created.
#[utoipa::path(
    get,
    path = "/api/produtos",
    tag = "Products",
    responses(
        (status = 200, description = "All stored products.", body = [Product]),
    )
)]
#[axum_macros::debug_handler]
pub(crate) async fn list_products(State(state): State<ProductState>) -> Json<Vec<Product>> {
    Json(handle_list(&state).await)
}
