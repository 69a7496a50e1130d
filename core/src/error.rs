use crate::DocId;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, SearchError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// Malformed or duplicate id, invalid characters in a word, bad minus-word syntax, empty ratings.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("index {index} is out of range for {len} documents")]
    OutOfRange { index: usize, len: usize },
    #[error("document {0} not found")]
    NotFound(DocId),
}

impl SearchError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self { SearchError::InvalidArgument(msg.into()) }
}
