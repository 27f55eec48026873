//! Reply — a reply to a comment. One level of nesting only.
//!
//! Same soft-delete lifecycle as comments; additionally carries the owning
//! comment id, which the aggregation step strips once the reply is nested.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{Result, payload::require_str};

/// A persisted reply row, as seen by write-side existence checks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReplyRecord {
  pub id:         String,
  pub thread:     String,
  pub comment:    String,
  pub content:    String,
  pub owner:      String,
  pub date:       DateTime<Utc>,
  pub updated_at: DateTime<Utc>,
  pub is_delete:  bool,
}

/// A reply as returned by the read-side query: username joined in, deletion
/// flag still raw, owning comment id still attached.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReplyRow {
  pub id:        String,
  pub comment:   String,
  pub username:  Option<String>,
  pub date:      DateTime<Utc>,
  pub content:   String,
  pub is_delete: bool,
}

/// Acknowledgement returned after persisting a reply.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddedReply {
  pub id:      String,
  pub content: String,
  pub owner:   String,
}

// ─── Validators ──────────────────────────────────────────────────────────────

/// Validated input for the add-reply operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddReply {
  pub content: String,
  pub thread:  String,
  pub comment: String,
  pub owner:   String,
}

impl AddReply {
  pub fn parse(bag: &Value) -> Result<Self> {
    Ok(Self {
      content: require_str(bag, "content")?,
      thread:  require_str(bag, "thread")?,
      comment: require_str(bag, "comment")?,
      owner:   require_str(bag, "owner")?,
    })
  }
}

/// Validated input for the delete-reply operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteReply {
  pub thread:  String,
  pub comment: String,
  pub reply:   String,
  pub owner:   String,
}

impl DeleteReply {
  pub fn parse(bag: &Value) -> Result<Self> {
    Ok(Self {
      thread:  require_str(bag, "thread")?,
      comment: require_str(bag, "comment")?,
      reply:   require_str(bag, "reply")?,
      owner:   require_str(bag, "owner")?,
    })
  }
}

/// Validated input for the read-replies operation; `id` is the thread id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadReply {
  pub id: String,
}

impl ReadReply {
  pub fn parse(bag: &Value) -> Result<Self> {
    Ok(Self { id: require_str(bag, "id")? })
  }
}

#[cfg(test)]
mod tests {
  use serde_json::json;

  use super::*;
  use crate::Error;

  #[test]
  fn add_reply_accepts_a_complete_payload() {
    let bag = json!({
      "content": "sebuah balasan",
      "thread":  "thread-123",
      "comment": "comment-123",
      "owner":   "user-123",
    });

    let add = AddReply::parse(&bag).unwrap();
    assert_eq!(add.comment, "comment-123");
  }

  #[test]
  fn add_reply_rejects_missing_comment() {
    let bag = json!({
      "content": "sebuah balasan",
      "thread":  "thread-123",
      "owner":   "user-123",
    });
    assert!(matches!(
      AddReply::parse(&bag),
      Err(Error::MissingField("comment"))
    ));
  }

  #[test]
  fn delete_reply_requires_the_reply_id() {
    let bag = json!({
      "thread":  "thread-123",
      "comment": "comment-123",
      "owner":   "user-123",
    });
    assert!(matches!(
      DeleteReply::parse(&bag),
      Err(Error::MissingField("reply"))
    ));
  }

  #[test]
  fn delete_reply_rejects_non_string_reply() {
    let bag = json!({
      "thread":  "thread-123",
      "comment": "comment-123",
      "reply":   true,
      "owner":   "user-123",
    });
    assert!(matches!(
      DeleteReply::parse(&bag),
      Err(Error::InvalidType("reply"))
    ));
  }
}
