//! Thread — the top-level discussion topic.
//!
//! Threads are immutable after creation: there is no update or delete
//! operation, so no soft-delete flag either.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{Result, payload::require_str};

/// A persisted thread row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThreadRecord {
  pub id:    String,
  pub title: String,
  pub body:  String,
  pub owner: String,
  pub date:  DateTime<Utc>,
}

/// Thread metadata as read for the client view — `owner` already resolved to
/// a display name by the storage join.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThreadHead {
  pub id:       String,
  pub title:    String,
  pub body:     String,
  pub date:     DateTime<Utc>,
  pub username: Option<String>,
}

/// Acknowledgement returned after persisting a thread.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddedThread {
  pub id:    String,
  pub title: String,
  pub owner: String,
}

// ─── Validators ──────────────────────────────────────────────────────────────

/// Validated input for the add-thread operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddThread {
  pub title: String,
  pub body:  String,
  pub owner: String,
}

impl AddThread {
  pub fn parse(bag: &Value) -> Result<Self> {
    Ok(Self {
      title: require_str(bag, "title")?,
      body:  require_str(bag, "body")?,
      owner: require_str(bag, "owner")?,
    })
  }
}

/// Validated input for the read-thread operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadThread {
  pub id: String,
}

impl ReadThread {
  pub fn parse(bag: &Value) -> Result<Self> {
    Ok(Self { id: require_str(bag, "id")? })
  }
}
