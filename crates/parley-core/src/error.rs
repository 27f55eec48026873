//! Error types for `parley-core`.
//!
//! Every variant is terminal per request: nothing here is ever retried. The
//! HTTP layer translates the taxonomy into status codes (400 for payload
//! errors, 404 for the not-found family, 403 for ownership violations).

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("payload is missing required field: {0}")]
  MissingField(&'static str),

  #[error("payload field is not a string: {0}")]
  InvalidType(&'static str),

  #[error("thread not found: {0}")]
  ThreadNotFound(String),

  #[error("comment not found: {0}")]
  CommentNotFound(String),

  #[error("reply not found: {0}")]
  ReplyNotFound(String),

  #[error("not the owner of {0}")]
  NotOwner(String),

  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl Error {
  /// Wrap a storage-adapter error. Use cases surface adapter failures
  /// unchanged; only the boxing happens here.
  pub fn store(e: impl std::error::Error + Send + Sync + 'static) -> Self {
    Self::Store(Box::new(e))
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
