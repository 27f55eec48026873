//! Handlers for `/threads/:threadId/comments` endpoints.
//!
//! | Method   | Path | Notes |
//! |----------|------|-------|
//! | `POST`   | `/threads/:threadId/comments` | Auth; body `{"content"}` |
//! | `DELETE` | `/threads/:threadId/comments/:commentId` | Auth + ownership |

use axum::{
  Json,
  extract::{Path, State},
  http::StatusCode,
  response::IntoResponse,
};
use parley_core::{store::ForumStore, usecase};
use serde_json::{Value, json};

use crate::{AppState, auth::AuthUser, error::ApiError, extend_bag};

/// `POST /threads/:thread_id/comments` — body: `{"content":"..."}`
pub async fn create<S>(
  State(state): State<AppState<S>>,
  Path(thread_id): Path<String>,
  user: AuthUser,
  Json(body): Json<Value>,
) -> Result<impl IntoResponse, ApiError>
where
  S: ForumStore + Clone + Send + Sync + 'static,
{
  let payload =
    extend_bag(body, &[("thread", &thread_id), ("owner", &user.id)]);
  let added = usecase::add_comment(state.store.as_ref(), &payload).await?;

  Ok((
    StatusCode::CREATED,
    Json(json!({
      "status": "success",
      "data": { "addedComment": added },
    })),
  ))
}

/// `DELETE /threads/:thread_id/comments/:comment_id` — soft delete, owner
/// only.
pub async fn remove<S>(
  State(state): State<AppState<S>>,
  Path((thread_id, comment_id)): Path<(String, String)>,
  user: AuthUser,
) -> Result<Json<Value>, ApiError>
where
  S: ForumStore + Clone + Send + Sync + 'static,
{
  let payload = json!({
    "thread":  thread_id,
    "comment": comment_id,
    "owner":   user.id,
  });
  usecase::delete_comment(state.store.as_ref(), &payload).await?;

  Ok(Json(json!({ "status": "success" })))
}
