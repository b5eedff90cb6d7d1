use thiserror::Error;

/// Failure reported by a backend service capability.
///
/// `Unknown` covers failures that carry no usable message; its display
/// string is the fixed placeholder resolvers log in that case.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ServiceError {
    #[error("{0}")]
    Backend(String),

    #[error("Unknown error")]
    Unknown,
}

impl ServiceError {
    pub fn backend(msg: impl Into<String>) -> Self {
        ServiceError::Backend(msg.into())
    }
}

pub type ServiceResult<T> = Result<T, ServiceError>;
