mod error;
mod metrics;
mod openapi;
mod products;

use axum::{routing::get, Json, Router};
use catalog_product::state::ProductState;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

pub use error::{ApiError, ErrorResponse};

pub const PRODUCTS_PATH: &str = "/api/produtos";
pub const OPENAPI_PATH: &str = "/api-docs/openapi.json";

pub fn app(state: ProductState) -> Router {
    Router::new()
        .route(PRODUCTS_PATH, get(products::list_products).post(products::create_product))
        .route("/health", get(metrics::health))
        .route(OPENAPI_PATH, get(|| async { Json(openapi::ApiDoc::openapi()) }))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{self, Request, StatusCode},
        response::Response,
    };
    use catalog_store::in_memory::product_state;
    use serde_json::Value;
    use tower::ServiceExt;

    pub async fn response_json(response: Response) -> (StatusCode, Value) {
        let status = response.status();
        assert_eq!(
            response.headers().get(http::header::CONTENT_TYPE).unwrap(),
            mime::APPLICATION_JSON.as_ref()
        );

        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }

    async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        response_json(response).await
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let (status, body) = get(app(product_state()), "/health").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, serde_json::json!({"status": "UP"}));
    }

    #[tokio::test]
    async fn test_openapi_document_describes_products() {
        let (status, body) = get(app(product_state()), OPENAPI_PATH).await;

        assert_eq!(status, StatusCode::OK);
        assert!(body["paths"][PRODUCTS_PATH]["post"].is_object());
        assert!(body["paths"][PRODUCTS_PATH]["get"].is_object());
        assert!(body["components"]["schemas"]["Product"].is_object());
    }

    #[tokio::test]
    async fn test_every_documented_operation_is_routed() {
        let (_, document) = get(app(product_state()), OPENAPI_PATH).await;
        let paths = document["paths"].as_object().unwrap();

        assert!(paths.contains_key(PRODUCTS_PATH));

        for (path, operations) in paths {
            for method in operations.as_object().unwrap().keys() {
                let request = Request::builder()
                    .method(method.to_uppercase().as_str())
                    .uri(path)
                    .header(http::header::CONTENT_TYPE, mime::APPLICATION_JSON.as_ref())
                    .body(Body::from(r#"{"nome": "Teclado", "preco": 199.9}"#))
                    .unwrap();

                let status = app(product_state()).oneshot(request).await.unwrap().status();

                assert_ne!(status, StatusCode::NOT_FOUND, "{method} {path} is documented but not routed");
                assert_ne!(status, StatusCode::METHOD_NOT_ALLOWED, "{method} {path} is documented but not routed");
            }
        }
    }

    #[tokio::test]
    async fn test_unknown_route_is_not_found() {
        let response = app(product_state())
            .oneshot(Request::builder().uri("/api/clientes").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
