//! API error type and [`axum::response::IntoResponse`] implementation.
//!
//! The core taxonomy maps onto status codes here; the body is always
//! `{ "status": "fail", "message": ... }`.

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use parley_core::Error as CoreError;
use serde_json::json;
use thiserror::Error;

/// An error returned by an API handler.
#[derive(Debug, Error)]
pub enum ApiError {
  /// No token, a malformed header, or a token that fails verification.
  #[error("missing authentication")]
  MissingAuthentication,

  #[error(transparent)]
  Core(#[from] CoreError),
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let status = match &self {
      ApiError::MissingAuthentication => StatusCode::UNAUTHORIZED,
      ApiError::Core(e) => match e {
        CoreError::MissingField(_) | CoreError::InvalidType(_) => {
          StatusCode::BAD_REQUEST
        }
        CoreError::ThreadNotFound(_)
        | CoreError::CommentNotFound(_)
        | CoreError::ReplyNotFound(_) => StatusCode::NOT_FOUND,
        CoreError::NotOwner(_) => StatusCode::FORBIDDEN,
        CoreError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
      },
    };

    let message = self.to_string();
    (status, Json(json!({ "status": "fail", "message": message })))
      .into_response()
  }
}
