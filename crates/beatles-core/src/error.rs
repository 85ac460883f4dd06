use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("malformed catalog data: {0}")]
    Catalog(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
