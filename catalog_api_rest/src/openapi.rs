use catalog_product::product::{
    entity::{Product, ProductPayload},
    error::{Field, FieldError},
};
use utoipa::OpenApi;

use crate::{error::ErrorResponse, metrics, products};

#[derive(OpenApi)]
#[openapi(
    paths(products::create_product, products::list_products, metrics::health),
    components(schemas(Product, ProductPayload, ErrorResponse, FieldError, Field)),
    tags(
        (name = "Products", description = "In-memory product catalog."),
        (name = "Health", description = "Liveness probe."),
    )
)]
pub(crate) struct ApiDoc;
