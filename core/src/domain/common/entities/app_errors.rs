use thiserror::Error;

/// Errors crossing the domain boundary. Storage failures are logged at the
/// repository layer and surface as the opaque `InternalServerError`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("internal server error")]
    InternalServerError,

    #[error("resource not found")]
    NotFound,
}
