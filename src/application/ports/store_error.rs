/// Failures surfaced by repository adapters. Constraint violations are
/// classified here so use cases never inspect raw database error codes.
#[derive(thiserror::Error, Debug)]
pub enum StoreError {
    #[error("unique constraint violated")]
    UniqueViolation,
    #[error("foreign key constraint violated")]
    ForeignKeyViolation,
    #[error("store call timed out")]
    Timeout,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;
