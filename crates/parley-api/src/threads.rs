//! Handlers for `/threads` endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `POST` | `/threads` | Auth required; body `{"title","body"}` |
//! | `GET`  | `/threads/:id` | Open; returns the aggregated tree |

use axum::{
  Json,
  extract::{Path, State},
  http::StatusCode,
  response::IntoResponse,
};
use parley_core::{store::ForumStore, usecase};
use serde_json::{Value, json};

use crate::{AppState, auth::AuthUser, error::ApiError, extend_bag};

/// `POST /threads` — body: `{"title":"...","body":"..."}`
pub async fn create<S>(
  State(state): State<AppState<S>>,
  user: AuthUser,
  Json(body): Json<Value>,
) -> Result<impl IntoResponse, ApiError>
where
  S: ForumStore + Clone + Send + Sync + 'static,
{
  let payload = extend_bag(body, &[("owner", &user.id)]);
  let added = usecase::add_thread(state.store.as_ref(), &payload).await?;

  Ok((
    StatusCode::CREATED,
    Json(json!({
      "status": "success",
      "data": { "addedThread": added },
    })),
  ))
}

/// `GET /threads/:thread_id` — no auth; soft-deleted content arrives
/// redacted, replies nested.
pub async fn get_one<S>(
  State(state): State<AppState<S>>,
  Path(thread_id): Path<String>,
) -> Result<Json<Value>, ApiError>
where
  S: ForumStore + Clone + Send + Sync + 'static,
{
  let view =
    usecase::read_thread(state.store.as_ref(), &json!({ "id": thread_id }))
      .await?;

  Ok(Json(json!({
    "status": "success",
    "data": { "thread": view },
  })))
}
