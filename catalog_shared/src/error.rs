use thiserror::Error;

#[derive(Error, Debug)]
pub enum SharedError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Invalid socket address: {0}")]
    InvalidSocketAddress(String),
    #[error("Error: {0}")]
    Generic(String),
}
