//! JSON REST API for Parley.
//!
//! Exposes an axum [`Router`] backed by any [`parley_core::store::ForumStore`].
//! Mutating routes require a bearer token verified against the configured
//! secret; reading a thread is open.
//!
//! Responses follow a fixed envelope: `{ "status": "success", "data": … }`
//! on success and `{ "status": "fail", "message": … }` on failure.

pub mod auth;
pub mod comments;
pub mod error;
pub mod replies;
pub mod threads;

use std::{path::PathBuf, sync::Arc};

use axum::{
  Router,
  routing::{get, post},
};
use parley_core::store::ForumStore;
use serde::Deserialize;
use serde_json::{Map, Value};
use tower_http::trace::TraceLayer;

pub use error::ApiError;

use crate::auth::AuthKeys;

/// Server configuration, loaded from `config.toml` and `PARLEY_*`
/// environment variables.
#[derive(Debug, Deserialize)]
pub struct ServerConfig {
  #[serde(default = "default_host")]
  pub host:       String,
  #[serde(default = "default_port")]
  pub port:       u16,
  /// Path of the SQLite database file.
  #[serde(default = "default_store_path")]
  pub store_path: PathBuf,
  /// HS256 secret used to verify bearer tokens.
  pub jwt_secret: String,
}

fn default_host() -> String { "127.0.0.1".to_string() }
fn default_port() -> u16 { 5000 }
fn default_store_path() -> PathBuf { PathBuf::from("parley.db") }

/// Shared state handed to every handler.
pub struct AppState<S> {
  pub store: Arc<S>,
  pub auth:  Arc<AuthKeys>,
}

impl<S> Clone for AppState<S> {
  fn clone(&self) -> Self {
    Self { store: Arc::clone(&self.store), auth: Arc::clone(&self.auth) }
  }
}

impl<S> AppState<S> {
  pub fn new(store: S, auth: AuthKeys) -> Self {
    Self { store: Arc::new(store), auth: Arc::new(auth) }
  }
}

/// Merge route-derived fields into a request body before validation.
///
/// A non-object body (array, string, `null`) is replaced by an empty map so
/// the validators report the missing fields rather than the merge failing.
fn extend_bag(body: Value, extra: &[(&str, &str)]) -> Value {
  let mut map = match body {
    Value::Object(map) => map,
    _ => Map::new(),
  };
  for (key, value) in extra {
    map.insert((*key).to_string(), Value::String((*value).to_string()));
  }
  Value::Object(map)
}

/// Build a fully-materialised API router for `state`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S>(state: AppState<S>) -> Router<()>
where
  S: ForumStore + Clone + Send + Sync + 'static,
{
  Router::new()
    // Threads
    .route("/threads", post(threads::create::<S>))
    .route("/threads/{thread_id}", get(threads::get_one::<S>))
    // Comments
    .route("/threads/{thread_id}/comments", post(comments::create::<S>))
    .route(
      "/threads/{thread_id}/comments/{comment_id}",
      axum::routing::delete(comments::remove::<S>),
    )
    // Replies
    .route(
      "/threads/{thread_id}/comments/{comment_id}/replies",
      post(replies::create::<S>),
    )
    .route(
      "/threads/{thread_id}/comments/{comment_id}/replies/{reply_id}",
      axum::routing::delete(replies::remove::<S>),
    )
    .layer(TraceLayer::new_for_http())
    .with_state(state)
}
