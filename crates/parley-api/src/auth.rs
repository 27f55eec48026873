//! JWT bearer-token verification and the authenticated-user extractor.
//!
//! Token issuance endpoints live outside this system; this module only
//! verifies HS256 bearer tokens and exposes an issuing helper for the
//! server's `--issue-token` mode and for tests.

use axum::{extract::FromRequestParts, http::header, http::request::Parts};
use chrono::Utc;
use jsonwebtoken::{
  DecodingKey, EncodingKey, Header, Validation, decode, encode,
};
use serde::{Deserialize, Serialize};

use crate::{AppState, error::ApiError};

/// Claims carried by a Parley bearer token.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
  /// The authenticated user id (`user-…`).
  pub sub:      String,
  pub username: String,
  pub exp:      u64,
  pub iat:      u64,
}

/// HS256 key pair derived from the configured secret.
pub struct AuthKeys {
  encoding: EncodingKey,
  decoding: DecodingKey,
}

impl AuthKeys {
  pub fn from_secret(secret: &str) -> Self {
    Self {
      encoding: EncodingKey::from_secret(secret.as_bytes()),
      decoding: DecodingKey::from_secret(secret.as_bytes()),
    }
  }

  /// Issue a token valid for 24 hours.
  pub fn issue(
    &self,
    user_id: &str,
    username: &str,
  ) -> Result<String, jsonwebtoken::errors::Error> {
    let now = Utc::now().timestamp() as u64;
    let claims = Claims {
      sub:      user_id.to_string(),
      username: username.to_string(),
      exp:      now + 24 * 60 * 60,
      iat:      now,
    };
    encode(&Header::default(), &claims, &self.encoding)
  }

  /// Verify a token and return its claims. Default validation: HS256 with
  /// expiry checking.
  pub fn verify(
    &self,
    token: &str,
  ) -> Result<Claims, jsonwebtoken::errors::Error> {
    let data = decode::<Claims>(token, &self.decoding, &Validation::default())?;
    Ok(data.claims)
  }
}

/// The authenticated identity, extracted from the `Authorization: Bearer`
/// header. Its presence in a handler signature makes the route require auth.
#[derive(Debug, Clone)]
pub struct AuthUser {
  pub id:       String,
  pub username: String,
}

impl<S> FromRequestParts<AppState<S>> for AuthUser
where
  S: Send + Sync,
{
  type Rejection = ApiError;

  async fn from_request_parts(
    parts: &mut Parts,
    state: &AppState<S>,
  ) -> Result<Self, Self::Rejection> {
    let header_val = parts
      .headers
      .get(header::AUTHORIZATION)
      .and_then(|v| v.to_str().ok())
      .ok_or(ApiError::MissingAuthentication)?;

    let token = header_val
      .strip_prefix("Bearer ")
      .ok_or(ApiError::MissingAuthentication)?;

    let claims = state
      .auth
      .verify(token)
      .map_err(|_| ApiError::MissingAuthentication)?;

    Ok(AuthUser { id: claims.sub, username: claims.username })
  }
}
