use axum::Json;
use serde_json::{json, Value};

#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses(
        (status = 200, description = "The service is up."),
    )
)]
#[axum_macros::debug_handler]
pub(crate) async fn health() -> Json<Value> {
    Json(json!({
        "status": "UP"
    }))
}
