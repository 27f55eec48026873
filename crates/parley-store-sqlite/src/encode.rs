//! Encoding and decoding helpers between Rust domain types and the plain-text
//! representations stored in SQLite columns.
//!
//! Timestamps are stored as RFC 3339 strings (lexicographic order matches
//! chronological order for a fixed UTC offset, which the read-side ORDER BY
//! relies on). Ids are opaque strings prefixed by entity type. The deletion
//! flag is stored as INTEGER 0/1.

use chrono::{DateTime, Utc};
use parley_core::{
  comment::{CommentRecord, CommentRow},
  reply::{ReplyRecord, ReplyRow},
  thread::{ThreadHead, ThreadRecord},
};
use uuid::Uuid;

use crate::{Error, Result};

// ─── Ids ─────────────────────────────────────────────────────────────────────

/// Mint an opaque entity id: `<prefix>-<uuid4>`.
pub fn new_id(prefix: &str) -> String {
  format!("{prefix}-{}", Uuid::new_v4())
}

// ─── DateTime<Utc> ───────────────────────────────────────────────────────────

pub fn encode_dt(dt: DateTime<Utc>) -> String { dt.to_rfc3339() }

pub fn decode_dt(s: &str) -> Result<DateTime<Utc>> {
  DateTime::parse_from_rfc3339(s)
    .map(|dt| dt.with_timezone(&Utc))
    .map_err(|e| Error::DateParse(e.to_string()))
}

// ─── Row types ───────────────────────────────────────────────────────────────

/// Raw strings read directly from a `threads` row.
pub struct RawThread {
  pub id:    String,
  pub title: String,
  pub body:  String,
  pub owner: String,
  pub date:  String,
}

impl RawThread {
  pub fn into_record(self) -> Result<ThreadRecord> {
    Ok(ThreadRecord {
      id:    self.id,
      title: self.title,
      body:  self.body,
      owner: self.owner,
      date:  decode_dt(&self.date)?,
    })
  }
}

/// A `threads` row joined with `users` for the client view.
pub struct RawThreadHead {
  pub id:       String,
  pub title:    String,
  pub body:     String,
  pub date:     String,
  pub username: Option<String>,
}

impl RawThreadHead {
  pub fn into_head(self) -> Result<ThreadHead> {
    Ok(ThreadHead {
      id:       self.id,
      title:    self.title,
      body:     self.body,
      date:     decode_dt(&self.date)?,
      username: self.username,
    })
  }
}

/// Raw strings read directly from a `comments` row.
pub struct RawComment {
  pub id:         String,
  pub thread:     String,
  pub content:    String,
  pub owner:      String,
  pub date:       String,
  pub updated_at: String,
  pub is_delete:  i64,
}

impl RawComment {
  pub fn into_record(self) -> Result<CommentRecord> {
    Ok(CommentRecord {
      id:         self.id,
      thread:     self.thread,
      content:    self.content,
      owner:      self.owner,
      date:       decode_dt(&self.date)?,
      updated_at: decode_dt(&self.updated_at)?,
      is_delete:  self.is_delete != 0,
    })
  }
}

/// A `comments` row joined with `users` for the read side.
pub struct RawCommentRow {
  pub id:        String,
  pub username:  Option<String>,
  pub date:      String,
  pub content:   String,
  pub is_delete: i64,
}

impl RawCommentRow {
  pub fn into_row(self) -> Result<CommentRow> {
    Ok(CommentRow {
      id:        self.id,
      username:  self.username,
      date:      decode_dt(&self.date)?,
      content:   self.content,
      is_delete: self.is_delete != 0,
    })
  }
}

/// Raw strings read directly from a `replies` row.
pub struct RawReply {
  pub id:         String,
  pub thread:     String,
  pub comment:    String,
  pub content:    String,
  pub owner:      String,
  pub date:       String,
  pub updated_at: String,
  pub is_delete:  i64,
}

impl RawReply {
  pub fn into_record(self) -> Result<ReplyRecord> {
    Ok(ReplyRecord {
      id:         self.id,
      thread:     self.thread,
      comment:    self.comment,
      content:    self.content,
      owner:      self.owner,
      date:       decode_dt(&self.date)?,
      updated_at: decode_dt(&self.updated_at)?,
      is_delete:  self.is_delete != 0,
    })
  }
}

/// A `replies` row joined with `users` for the read side.
pub struct RawReplyRow {
  pub id:        String,
  pub comment:   String,
  pub username:  Option<String>,
  pub date:      String,
  pub content:   String,
  pub is_delete: i64,
}

impl RawReplyRow {
  pub fn into_row(self) -> Result<ReplyRow> {
    Ok(ReplyRow {
      id:        self.id,
      comment:   self.comment,
      username:  self.username,
      date:      decode_dt(&self.date)?,
      content:   self.content,
      is_delete: self.is_delete != 0,
    })
  }
}
