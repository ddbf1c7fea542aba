use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Index not ready: {0}")]
    NotReady(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Catalog unavailable: {0}")]
    Catalog(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
