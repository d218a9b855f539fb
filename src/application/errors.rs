use std::fmt;

use crate::application::ports::store_error::StoreError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

/// Every rule a request broke, collected before anything touches the store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(pub Vec<FieldError>);

impl ValidationErrors {
    pub fn push_all(&mut self, field: &'static str, messages: Vec<&'static str>) {
        self.0
            .extend(messages.into_iter().map(|message| FieldError { field, message }));
    }

    pub fn single(field: &'static str, message: &'static str) -> Self {
        Self(vec![FieldError { field, message }])
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_result(self) -> Result<(), ServiceError> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(ServiceError::Validation(self))
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self
            .0
            .iter()
            .map(|e| e.message)
            .collect::<Vec<_>>()
            .join("; ");
        f.write_str(&joined)
    }
}

#[derive(thiserror::Error, Debug)]
pub enum ServiceError {
    #[error("validation failed: {0}")]
    Validation(ValidationErrors),
    #[error("username is already taken")]
    DuplicateUsername,
    #[error("invalid username or password")]
    AuthFailed,
    #[error("users cannot follow themselves")]
    SelfFollow,
    #[error("already following this user")]
    DuplicateEdge,
    #[error("not following this user")]
    EdgeNotFound,
    #[error("{0} not found")]
    NotFound(&'static str),
    #[error("internal error")]
    Internal(#[source] anyhow::Error),
}

impl From<StoreError> for ServiceError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Other(e) => ServiceError::Internal(e),
            other => ServiceError::Internal(anyhow::Error::new(other)),
        }
    }
}

impl From<anyhow::Error> for ServiceError {
    fn from(err: anyhow::Error) -> Self {
        ServiceError::Internal(err)
    }
}

pub type ServiceResult<T> = Result<T, ServiceError>;
