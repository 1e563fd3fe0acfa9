use thiserror::Error;

#[derive(Debug, Error)]
pub enum ContractError {
    #[error("Unknown order status ordinal {0}")]
    UnknownStatusOrdinal(i32),

    #[error("Unknown order status name {0:?}")]
    UnknownStatusName(String),

    #[error("Serialization error")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error")]
    Io(#[from] std::io::Error),
}

pub type ContractResult<T> = Result<T, ContractError>;
