//! Thread aggregation — assembling flat comment and reply rows into the
//! nested client-facing tree.
//!
//! The three inputs come from independent reads keyed by the same thread id,
//! with no shared transaction; read skew between them is accepted. Ordering
//! is whatever storage returned (ascending by creation date) and is
//! preserved untouched here. The whole module is pure and allocation-only:
//! inputs are consumed, never mutated in place.

use serde::{Deserialize, Serialize};

use crate::{
  comment::CommentRow,
  reply::ReplyRow,
  thread::ThreadHead,
};

/// Placeholder shown in place of a soft-deleted comment's content.
pub const COMMENT_DELETED: &str = "**komentar telah dihapus**";

/// Placeholder shown in place of a soft-deleted reply's content.
pub const REPLY_DELETED: &str = "**balasan telah dihapus**";

// ─── Output tree ─────────────────────────────────────────────────────────────

/// A reply as it appears nested under its comment. The owning comment id is
/// implied by the nesting and stripped from the node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReplyNode {
  pub id:       String,
  pub username: Option<String>,
  pub date:     chrono::DateTime<chrono::Utc>,
  pub content:  String,
}

/// A comment in the assembled tree.
///
/// `replies` is `None` when the thread has no replies anywhere — the field
/// is then omitted from the serialised output entirely. When any reply
/// exists in the thread, every comment carries a list (possibly empty).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommentNode {
  pub id:       String,
  pub username: Option<String>,
  pub date:     chrono::DateTime<chrono::Utc>,
  pub content:  String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub replies:  Option<Vec<ReplyNode>>,
}

/// The assembled read model for one thread — never stored, always derived.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThreadView {
  pub id:       String,
  pub title:    String,
  pub body:     String,
  pub date:     chrono::DateTime<chrono::Utc>,
  pub username: Option<String>,
  pub comments: Vec<CommentNode>,
}

// ─── Redaction ───────────────────────────────────────────────────────────────

/// Consume a comment row into an output node, redacting deleted content.
///
/// The `is_delete` flag is consumed here and never reaches the output.
/// Idempotent over content: a placeholder stays a placeholder.
fn redact_comment(row: CommentRow) -> CommentNode {
  let content = if row.is_delete {
    COMMENT_DELETED.to_string()
  } else {
    row.content
  };

  CommentNode {
    id: row.id,
    username: row.username,
    date: row.date,
    content,
    replies: None,
  }
}

/// Consume a reply row into its owning comment id and an output node,
/// redacting deleted content and stripping the back-reference.
fn redact_reply(row: ReplyRow) -> (String, ReplyNode) {
  let content = if row.is_delete {
    REPLY_DELETED.to_string()
  } else {
    row.content
  };

  let node = ReplyNode {
    id: row.id,
    username: row.username,
    date: row.date,
    content,
  };

  (row.comment, node)
}

// ─── Assembly ────────────────────────────────────────────────────────────────

/// Combine the three independent reads into one nested tree.
///
/// Replies attach to the comment whose id equals their `comment` field,
/// preserving relative order on both levels. A reply referencing an unknown
/// comment is dropped with a warning. When the thread has no replies at all,
/// comments are emitted flat with no `replies` key — the shape the HTTP
/// surface has always produced.
pub fn assemble_thread(
  head: ThreadHead,
  comments: Vec<CommentRow>,
  replies: Vec<ReplyRow>,
) -> ThreadView {
  let has_replies = !replies.is_empty();

  let mut nodes: Vec<CommentNode> =
    comments.into_iter().map(redact_comment).collect();

  if has_replies {
    for node in &mut nodes {
      node.replies = Some(Vec::new());
    }

    for row in replies {
      let (comment_id, reply) = redact_reply(row);
      match nodes.iter_mut().find(|c| c.id == comment_id) {
        Some(comment) => {
          if let Some(list) = comment.replies.as_mut() {
            list.push(reply);
          }
        }
        None => {
          tracing::warn!(
            reply = %reply.id,
            comment = %comment_id,
            "dropping reply whose comment is not in this thread"
          );
        }
      }
    }
  }

  ThreadView {
    id: head.id,
    title: head.title,
    body: head.body,
    date: head.date,
    username: head.username,
    comments: nodes,
  }
}
