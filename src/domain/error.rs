use thiserror::Error;

/// Outcome of a single todo operation. The `Display` strings are the exact
/// messages clients see; backend detail never reaches the wire.
#[derive(Debug, Error)]
pub enum TodoError {
    #[error("Body is required")]
    BodyRequired,
    #[error("Invalid ID")]
    InvalidId,
    #[error("Todo not found")]
    NotFound,
    #[error(transparent)]
    Backend(#[from] anyhow::Error),
}
