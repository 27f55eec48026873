//! Storage capability traits, one per aggregate.
//!
//! The traits are implemented by storage backends (e.g.
//! `parley-store-sqlite`). Use cases and the HTTP layer depend on these
//! abstractions, never on a concrete backend. The backend assigns ids
//! (opaque strings prefixed by entity type) and timestamps.
//!
//! All methods return `Send` futures so the traits can be used in
//! multi-threaded async runtimes (e.g. tokio with `axum`).

use std::future::Future;

use crate::{
  comment::{AddComment, AddedComment, CommentRecord, CommentRow, DeleteComment},
  reply::{AddReply, AddedReply, DeleteReply, ReplyRecord, ReplyRow},
  thread::{AddThread, AddedThread, ThreadHead, ThreadRecord},
  user::{NewUser, UserRecord},
};

// ─── Threads ─────────────────────────────────────────────────────────────────

pub trait ThreadStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Persist a validated thread and return the creation acknowledgement.
  fn add_thread(
    &self,
    input: AddThread,
  ) -> impl Future<Output = Result<AddedThread, Self::Error>> + Send + '_;

  /// Fetch a thread row by id. Returns `None` if not found.
  fn find_thread<'a>(
    &'a self,
    id: &'a str,
  ) -> impl Future<Output = Result<Option<ThreadRecord>, Self::Error>> + Send + 'a;

  /// Fetch thread metadata for the client view, with the owner's username
  /// joined in. Returns `None` if not found.
  fn read_thread<'a>(
    &'a self,
    id: &'a str,
  ) -> impl Future<Output = Result<Option<ThreadHead>, Self::Error>> + Send + 'a;
}

// ─── Comments ────────────────────────────────────────────────────────────────

pub trait CommentStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Persist a validated comment and return the creation acknowledgement.
  fn add_comment(
    &self,
    input: AddComment,
  ) -> impl Future<Output = Result<AddedComment, Self::Error>> + Send + '_;

  /// Fetch a comment row by id. Returns `None` if not found.
  fn find_comment<'a>(
    &'a self,
    id: &'a str,
  ) -> impl Future<Output = Result<Option<CommentRecord>, Self::Error>> + Send + 'a;

  /// Whether the comment exists under the given thread with the given owner.
  fn comment_owned_by<'a>(
    &'a self,
    locator: &'a DeleteComment,
  ) -> impl Future<Output = Result<bool, Self::Error>> + Send + 'a;

  /// Flip `is_delete` on and bump `updated_at`. Returns `false` when the id
  /// matched no row. One-way: there is no un-delete.
  fn soft_delete_comment<'a>(
    &'a self,
    id: &'a str,
  ) -> impl Future<Output = Result<bool, Self::Error>> + Send + 'a;

  /// All comments under a thread, ordered by creation date ascending,
  /// usernames joined, `is_delete` included raw.
  fn read_comments<'a>(
    &'a self,
    thread_id: &'a str,
  ) -> impl Future<Output = Result<Vec<CommentRow>, Self::Error>> + Send + 'a;
}

// ─── Replies ─────────────────────────────────────────────────────────────────

pub trait ReplyStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Persist a validated reply and return the creation acknowledgement.
  fn add_reply(
    &self,
    input: AddReply,
  ) -> impl Future<Output = Result<AddedReply, Self::Error>> + Send + '_;

  /// Fetch a reply row by id. Returns `None` if not found.
  fn find_reply<'a>(
    &'a self,
    id: &'a str,
  ) -> impl Future<Output = Result<Option<ReplyRecord>, Self::Error>> + Send + 'a;

  /// Whether the reply exists under the given thread and comment with the
  /// given owner.
  fn reply_owned_by<'a>(
    &'a self,
    locator: &'a DeleteReply,
  ) -> impl Future<Output = Result<bool, Self::Error>> + Send + 'a;

  /// Flip `is_delete` on and bump `updated_at`. Returns `false` when the id
  /// matched no row.
  fn soft_delete_reply<'a>(
    &'a self,
    id: &'a str,
  ) -> impl Future<Output = Result<bool, Self::Error>> + Send + 'a;

  /// All replies under a thread (across all of its comments), ordered by
  /// creation date ascending, usernames joined, `is_delete` included raw.
  fn read_replies<'a>(
    &'a self,
    thread_id: &'a str,
  ) -> impl Future<Output = Result<Vec<ReplyRow>, Self::Error>> + Send + 'a;
}

// ─── Users ───────────────────────────────────────────────────────────────────

pub trait UserStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Persist a user and return the stored record (with the assigned id).
  fn add_user(
    &self,
    input: NewUser,
  ) -> impl Future<Output = Result<UserRecord, Self::Error>> + Send + '_;

  /// Fetch a user row by id. Returns `None` if not found.
  fn find_user<'a>(
    &'a self,
    id: &'a str,
  ) -> impl Future<Output = Result<Option<UserRecord>, Self::Error>> + Send + 'a;
}

// ─── Blanket alias ───────────────────────────────────────────────────────────

/// A backend providing all four aggregates. Implemented automatically.
pub trait ForumStore: ThreadStore + CommentStore + ReplyStore + UserStore {}

impl<T> ForumStore for T where
  T: ThreadStore + CommentStore + ReplyStore + UserStore
{
}
