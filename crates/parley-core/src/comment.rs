//! Comment — a reply to a thread.
//!
//! Comments are soft-deleted: the row stays, `is_delete` flips to true, and
//! the read side redacts the content. The flag never reverts.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{Result, payload::require_str};

/// A persisted comment row, as seen by write-side existence checks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentRecord {
  pub id:         String,
  pub thread:     String,
  pub content:    String,
  pub owner:      String,
  pub date:       DateTime<Utc>,
  pub updated_at: DateTime<Utc>,
  pub is_delete:  bool,
}

/// A comment as returned by the read-side query: username joined in,
/// deletion flag still raw. Redaction happens in [`crate::aggregate`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentRow {
  pub id:        String,
  pub username:  Option<String>,
  pub date:      DateTime<Utc>,
  pub content:   String,
  pub is_delete: bool,
}

/// Acknowledgement returned after persisting a comment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddedComment {
  pub id:      String,
  pub content: String,
  pub owner:   String,
}

// ─── Validators ──────────────────────────────────────────────────────────────

/// Validated input for the add-comment operation. The handler attaches
/// `owner` to the bag from the authenticated identity before validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddComment {
  pub content: String,
  pub thread:  String,
  pub owner:   String,
}

impl AddComment {
  pub fn parse(bag: &Value) -> Result<Self> {
    Ok(Self {
      content: require_str(bag, "content")?,
      thread:  require_str(bag, "thread")?,
      owner:   require_str(bag, "owner")?,
    })
  }
}

/// Validated input for the delete-comment operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteComment {
  pub thread:  String,
  pub comment: String,
  pub owner:   String,
}

impl DeleteComment {
  pub fn parse(bag: &Value) -> Result<Self> {
    Ok(Self {
      thread:  require_str(bag, "thread")?,
      comment: require_str(bag, "comment")?,
      owner:   require_str(bag, "owner")?,
    })
  }
}

/// Validated input for the read-comments operation; `id` is the thread id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadComment {
  pub id: String,
}

impl ReadComment {
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
  fn add_comment_accepts_a_complete_payload() {
    let bag = json!({
      "content": "sebuah comment",
      "thread":  "thread-123",
      "owner":   "user-123",
    });

    let add = AddComment::parse(&bag).unwrap();
    assert_eq!(add.content, "sebuah comment");
    assert_eq!(add.thread, "thread-123");
    assert_eq!(add.owner, "user-123");
  }

  #[test]
  fn add_comment_rejects_missing_content() {
    let bag = json!({ "thread": "thread-123", "owner": "user-123" });
    assert!(matches!(
      AddComment::parse(&bag),
      Err(Error::MissingField("content"))
    ));
  }

  #[test]
  fn add_comment_rejects_non_string_content() {
    let bag = json!({ "content": [], "thread": "thread-123", "owner": "user-123" });
    assert!(matches!(
      AddComment::parse(&bag),
      Err(Error::InvalidType("content"))
    ));
  }

  #[test]
  fn delete_comment_requires_every_field() {
    let bag = json!({ "thread": "thread-123", "owner": "user-123" });
    assert!(matches!(
      DeleteComment::parse(&bag),
      Err(Error::MissingField("comment"))
    ));

    let bag = json!({
      "thread":  "thread-123",
      "comment": "comment-123",
      "owner":   "user-123",
    });
    let del = DeleteComment::parse(&bag).unwrap();
    assert_eq!(del.comment, "comment-123");
  }
}
