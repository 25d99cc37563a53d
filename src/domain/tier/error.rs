use crate::error::AppError;

/// An unrecognized tier value reached the catalog boundary. This is a data or
/// programming error and is surfaced loudly instead of being coerced to free.
#[derive(Debug, thiserror::Error)]
#[error("invalid subscription tier: {0}")]
pub struct InvalidTierError(pub String);

impl From<InvalidTierError> for AppError {
    fn from(err: InvalidTierError) -> Self {
        AppError::BadRequest(err.to_string())
    }
}
