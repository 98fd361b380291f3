//! Error types for mtree

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Cannot build a tree over an empty input sequence")]
    EmptyInput,

    #[error("Tree has not been built")]
    NotBuilt,

    #[error("Tree has already been built")]
    AlreadyBuilt,

    #[error("Element not found in tree: {0:?}")]
    ElementNotFound(String),

    #[error("Unknown hash algorithm: {0:?}")]
    UnknownAlgorithm(String),

    #[error("Hex encoding error: {0}")]
    HexEncoding(#[from] hex::FromHexError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
