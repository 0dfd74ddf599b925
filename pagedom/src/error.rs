use thiserror::Error;

/// Errors returned by document writes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomError {
    #[error("no element with id `{0}`")]
    NotFound(String),
}
