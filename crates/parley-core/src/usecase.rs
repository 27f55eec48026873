//! Use cases — one business operation each.
//!
//! Every function validates its property bag, composes storage calls in a
//! fixed order (existence checks before mutation), and surfaces failures
//! unchanged. Nothing here retries; every error is terminal per request.

use serde_json::Value;

use crate::{
  Error, Result,
  aggregate::{self, ThreadView},
  comment::{AddComment, AddedComment, CommentRow, DeleteComment, ReadComment},
  reply::{AddReply, AddedReply, DeleteReply, ReadReply, ReplyRow},
  store::{CommentStore, ReplyStore, ThreadStore},
  thread::{AddThread, AddedThread, ReadThread},
};

// ─── Writes ──────────────────────────────────────────────────────────────────

/// Validate and persist a new thread. The handler resolves `owner` from the
/// authenticated identity before building the bag.
pub async fn add_thread<S>(store: &S, payload: &Value) -> Result<AddedThread>
where
  S: ThreadStore,
{
  let input = AddThread::parse(payload)?;
  store.add_thread(input).await.map_err(Error::store)
}

/// Validate, check the thread exists, persist the comment.
pub async fn add_comment<S>(store: &S, payload: &Value) -> Result<AddedComment>
where
  S: ThreadStore + CommentStore,
{
  let input = AddComment::parse(payload)?;

  store
    .find_thread(&input.thread)
    .await
    .map_err(Error::store)?
    .ok_or_else(|| Error::ThreadNotFound(input.thread.clone()))?;

  store.add_comment(input).await.map_err(Error::store)
}

/// Validate, check the thread exists, check the comment exists and belongs
/// to that thread, persist the reply.
pub async fn add_reply<S>(store: &S, payload: &Value) -> Result<AddedReply>
where
  S: ThreadStore + CommentStore + ReplyStore,
{
  let input = AddReply::parse(payload)?;

  store
    .find_thread(&input.thread)
    .await
    .map_err(Error::store)?
    .ok_or_else(|| Error::ThreadNotFound(input.thread.clone()))?;

  let comment = store
    .find_comment(&input.comment)
    .await
    .map_err(Error::store)?
    .ok_or_else(|| Error::CommentNotFound(input.comment.clone()))?;

  // A reply must target a comment under the same thread.
  if comment.thread != input.thread {
    return Err(Error::CommentNotFound(input.comment.clone()));
  }

  store.add_reply(input).await.map_err(Error::store)
}

/// Validate, check thread and comment exist, check ownership, soft-delete.
pub async fn delete_comment<S>(store: &S, payload: &Value) -> Result<()>
where
  S: ThreadStore + CommentStore,
{
  let input = DeleteComment::parse(payload)?;

  store
    .find_thread(&input.thread)
    .await
    .map_err(Error::store)?
    .ok_or_else(|| Error::ThreadNotFound(input.thread.clone()))?;

  store
    .find_comment(&input.comment)
    .await
    .map_err(Error::store)?
    .ok_or_else(|| Error::CommentNotFound(input.comment.clone()))?;

  if !store.comment_owned_by(&input).await.map_err(Error::store)? {
    return Err(Error::NotOwner(input.comment.clone()));
  }

  if !store
    .soft_delete_comment(&input.comment)
    .await
    .map_err(Error::store)?
  {
    return Err(Error::CommentNotFound(input.comment));
  }

  Ok(())
}

/// Validate, check thread, comment, and reply exist, check ownership,
/// soft-delete.
pub async fn delete_reply<S>(store: &S, payload: &Value) -> Result<()>
where
  S: ThreadStore + CommentStore + ReplyStore,
{
  let input = DeleteReply::parse(payload)?;

  store
    .find_thread(&input.thread)
    .await
    .map_err(Error::store)?
    .ok_or_else(|| Error::ThreadNotFound(input.thread.clone()))?;

  store
    .find_comment(&input.comment)
    .await
    .map_err(Error::store)?
    .ok_or_else(|| Error::CommentNotFound(input.comment.clone()))?;

  store
    .find_reply(&input.reply)
    .await
    .map_err(Error::store)?
    .ok_or_else(|| Error::ReplyNotFound(input.reply.clone()))?;

  if !store.reply_owned_by(&input).await.map_err(Error::store)? {
    return Err(Error::NotOwner(input.reply.clone()));
  }

  if !store
    .soft_delete_reply(&input.reply)
    .await
    .map_err(Error::store)?
  {
    return Err(Error::ReplyNotFound(input.reply));
  }

  Ok(())
}

// ─── Reads ───────────────────────────────────────────────────────────────────

/// Raw comment rows for a thread, `is_delete` included. Redaction happens in
/// the aggregation step, not here.
pub async fn read_comments<S>(
  store: &S,
  payload: &Value,
) -> Result<Vec<CommentRow>>
where
  S: CommentStore,
{
  let read = ReadComment::parse(payload)?;
  store.read_comments(&read.id).await.map_err(Error::store)
}

/// Raw reply rows for a thread, `is_delete` and comment back-references
/// included.
pub async fn read_replies<S>(store: &S, payload: &Value) -> Result<Vec<ReplyRow>>
where
  S: ReplyStore,
{
  let read = ReadReply::parse(payload)?;
  store.read_replies(&read.id).await.map_err(Error::store)
}

/// Fetch the thread head plus the flat comment and reply lists, then run the
/// aggregation algorithm to produce the nested client view.
///
/// The three reads are sequential and independent; a comment deleted between
/// the comment read and the reply read is accepted staleness.
pub async fn read_thread<S>(store: &S, payload: &Value) -> Result<ThreadView>
where
  S: ThreadStore + CommentStore + ReplyStore,
{
  let read = ReadThread::parse(payload)?;

  let head = store
    .read_thread(&read.id)
    .await
    .map_err(Error::store)?
    .ok_or_else(|| Error::ThreadNotFound(read.id.clone()))?;

  let comments = store.read_comments(&read.id).await.map_err(Error::store)?;
  let replies = store.read_replies(&read.id).await.map_err(Error::store)?;

  Ok(aggregate::assemble_thread(head, comments, replies))
}
