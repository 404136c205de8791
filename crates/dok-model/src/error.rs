use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("invalid DOK level {0} (expected 1, 2, 3 or 4)")]
    InvalidDokLevel(i64),
    #[error("unrecognized DOK level: {0:?}")]
    UnknownDokLevel(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
