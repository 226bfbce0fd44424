use axum::Router;
use catalog_api_rest::app;
use catalog_product::state::ProductState;
use catalog_shared::{
    config::{ApplicationConfiguration, LogFormat},
    error::SharedError,
};
use catalog_store::in_memory::product_state;
use tower_http::cors::CorsLayer;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let config = match ApplicationConfiguration::new() {
        Ok(config) => config,
        Err(err) => {
            // The subscriber depends on `log_format`, so it is not installed yet.
            eprintln!("{}", SharedError::from(err));
            std::process::exit(1);
        }
    };

    init_tracing(config.log_format);

    if let Err(err) = serve(config).await {
        error!("Server error: {err}");
        std::process::exit(1);
    }
}

fn init_tracing(log_format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = tracing_subscriber::fmt().with_env_filter(filter);

    match log_format {
        LogFormat::Json => subscriber.json().init(),
        LogFormat::Text => subscriber.init(),
    }
}

async fn serve(config: ApplicationConfiguration) -> Result<(), SharedError> {
    let addr = config.socket_addr()?;

    // The store lives exactly as long as the server: nothing survives a restart.
    let router = build_router(&config, product_state());

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|err| SharedError::Generic(format!("cannot bind {addr}: {err}")))?;

    info!("Listening on {addr}");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|err| SharedError::Generic(err.to_string()))
}

fn build_router(config: &ApplicationConfiguration, state: ProductState) -> Router {
    let router = match config.base_path() {
        Some(base_path) => {
            info!("Serving under base path `{base_path}`");
            Router::new().nest(&base_path, app(state))
        }
        None => app(state),
    };

    if config.cors_enabled() {
        info!("CORS enabled");
        router.layer(CorsLayer::permissive())
    } else {
        router
    }
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutting down ..."),
        Err(err) => error!("Failed to listen for the shutdown signal: {err}"),
    }
}
