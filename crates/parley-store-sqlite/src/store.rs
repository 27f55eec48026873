//! [`SqliteStore`] — the SQLite implementation of the forum store traits.

use std::path::Path;

use chrono::Utc;
use rusqlite::OptionalExtension as _;

use parley_core::{
  comment::{AddComment, AddedComment, CommentRecord, CommentRow, DeleteComment},
  reply::{AddReply, AddedReply, DeleteReply, ReplyRecord, ReplyRow},
  store::{CommentStore, ReplyStore, ThreadStore, UserStore},
  thread::{AddThread, AddedThread, ThreadHead, ThreadRecord},
  user::{NewUser, UserRecord},
};

use crate::{
  Error, Result,
  encode::{
    RawComment, RawCommentRow, RawReply, RawReplyRow, RawThread, RawThreadHead,
    encode_dt, new_id,
  },
  schema::SCHEMA,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A Parley forum store backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  /// Soft-delete one row of `table` by id: flip `is_delete`, bump
  /// `updated_at`. Returns `false` when the id matched nothing.
  async fn soft_delete(&self, table: &'static str, id: &str) -> Result<bool> {
    let id = id.to_owned();
    let updated_at = encode_dt(Utc::now());

    let changed = self
      .conn
      .call(move |conn| {
        let n = conn.execute(
          &format!(
            "UPDATE {table} SET updated_at = ?1, is_delete = 1 WHERE id = ?2"
          ),
          rusqlite::params![updated_at, id],
        )?;
        Ok(n)
      })
      .await?;

    Ok(changed > 0)
  }
}

// ─── ThreadStore impl ────────────────────────────────────────────────────────

impl ThreadStore for SqliteStore {
  type Error = Error;

  async fn add_thread(&self, input: AddThread) -> Result<AddedThread> {
    let added = AddedThread {
      id:    new_id("thread"),
      title: input.title,
      owner: input.owner,
    };

    let id = added.id.clone();
    let title = added.title.clone();
    let body = input.body;
    let owner = added.owner.clone();
    let date = encode_dt(Utc::now());

    self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO threads (id, title, body, owner, date)
           VALUES (?1, ?2, ?3, ?4, ?5)",
          rusqlite::params![id, title, body, owner, date],
        )?;
        Ok(())
      })
      .await?;

    Ok(added)
  }

  async fn find_thread(&self, id: &str) -> Result<Option<ThreadRecord>> {
    let id = id.to_owned();

    let raw: Option<RawThread> = self
      .conn
      .call(move |conn| {
        Ok(conn
          .query_row(
            "SELECT id, title, body, owner, date FROM threads WHERE id = ?1",
            rusqlite::params![id],
            |row| {
              Ok(RawThread {
                id:    row.get(0)?,
                title: row.get(1)?,
                body:  row.get(2)?,
                owner: row.get(3)?,
                date:  row.get(4)?,
              })
            },
          )
          .optional()?)
      })
      .await?;

    raw.map(RawThread::into_record).transpose()
  }

  async fn read_thread(&self, id: &str) -> Result<Option<ThreadHead>> {
    let id = id.to_owned();

    let raw: Option<RawThreadHead> = self
      .conn
      .call(move |conn| {
        Ok(conn
          .query_row(
            "SELECT threads.id, threads.title, threads.body, threads.date,
                    users.username
             FROM threads
             LEFT JOIN users ON users.id = threads.owner
             WHERE threads.id = ?1",
            rusqlite::params![id],
            |row| {
              Ok(RawThreadHead {
                id:       row.get(0)?,
                title:    row.get(1)?,
                body:     row.get(2)?,
                date:     row.get(3)?,
                username: row.get(4)?,
              })
            },
          )
          .optional()?)
      })
      .await?;

    raw.map(RawThreadHead::into_head).transpose()
  }
}

// ─── CommentStore impl ───────────────────────────────────────────────────────

impl CommentStore for SqliteStore {
  type Error = Error;

  async fn add_comment(&self, input: AddComment) -> Result<AddedComment> {
    let added = AddedComment {
      id:      new_id("comment"),
      content: input.content,
      owner:   input.owner,
    };

    let id = added.id.clone();
    let thread = input.thread;
    let content = added.content.clone();
    let owner = added.owner.clone();
    let date = encode_dt(Utc::now());

    self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO comments (id, thread, content, owner, date, updated_at, is_delete)
           VALUES (?1, ?2, ?3, ?4, ?5, ?5, 0)",
          rusqlite::params![id, thread, content, owner, date],
        )?;
        Ok(())
      })
      .await?;

    Ok(added)
  }

  async fn find_comment(&self, id: &str) -> Result<Option<CommentRecord>> {
    let id = id.to_owned();

    let raw: Option<RawComment> = self
      .conn
      .call(move |conn| {
        Ok(conn
          .query_row(
            "SELECT id, thread, content, owner, date, updated_at, is_delete
             FROM comments WHERE id = ?1",
            rusqlite::params![id],
            |row| {
              Ok(RawComment {
                id:         row.get(0)?,
                thread:     row.get(1)?,
                content:    row.get(2)?,
                owner:      row.get(3)?,
                date:       row.get(4)?,
                updated_at: row.get(5)?,
                is_delete:  row.get(6)?,
              })
            },
          )
          .optional()?)
      })
      .await?;

    raw.map(RawComment::into_record).transpose()
  }

  async fn comment_owned_by(&self, locator: &DeleteComment) -> Result<bool> {
    let id = locator.comment.clone();
    let thread = locator.thread.clone();
    let owner = locator.owner.clone();

    let owned = self
      .conn
      .call(move |conn| {
        let hit: Option<bool> = conn
          .query_row(
            "SELECT 1 FROM comments WHERE id = ?1 AND thread = ?2 AND owner = ?3",
            rusqlite::params![id, thread, owner],
            |_| Ok(true),
          )
          .optional()?;
        Ok(hit.unwrap_or(false))
      })
      .await?;

    Ok(owned)
  }

  async fn soft_delete_comment(&self, id: &str) -> Result<bool> {
    self.soft_delete("comments", id).await
  }

  async fn read_comments(&self, thread_id: &str) -> Result<Vec<CommentRow>> {
    let thread_id = thread_id.to_owned();

    let raws: Vec<RawCommentRow> = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(
          "SELECT comments.id, users.username, comments.date,
                  comments.content, comments.is_delete
           FROM comments
           LEFT JOIN users ON users.id = comments.owner
           WHERE comments.thread = ?1
           ORDER BY comments.date ASC",
        )?;

        let rows = stmt
          .query_map(rusqlite::params![thread_id], |row| {
            Ok(RawCommentRow {
              id:        row.get(0)?,
              username:  row.get(1)?,
              date:      row.get(2)?,
              content:   row.get(3)?,
              is_delete: row.get(4)?,
            })
          })?
          .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawCommentRow::into_row).collect()
  }
}

// ─── ReplyStore impl ─────────────────────────────────────────────────────────

impl ReplyStore for SqliteStore {
  type Error = Error;

  async fn add_reply(&self, input: AddReply) -> Result<AddedReply> {
    let added = AddedReply {
      id:      new_id("reply"),
      content: input.content,
      owner:   input.owner,
    };

    let id = added.id.clone();
    let thread = input.thread;
    let comment = input.comment;
    let content = added.content.clone();
    let owner = added.owner.clone();
    let date = encode_dt(Utc::now());

    self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO replies (id, thread, comment, content, owner, date, updated_at, is_delete)
           VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?6, 0)",
          rusqlite::params![id, thread, comment, content, owner, date],
        )?;
        Ok(())
      })
      .await?;

    Ok(added)
  }

  async fn find_reply(&self, id: &str) -> Result<Option<ReplyRecord>> {
    let id = id.to_owned();

    let raw: Option<RawReply> = self
      .conn
      .call(move |conn| {
        Ok(conn
          .query_row(
            "SELECT id, thread, comment, content, owner, date, updated_at, is_delete
             FROM replies WHERE id = ?1",
            rusqlite::params![id],
            |row| {
              Ok(RawReply {
                id:         row.get(0)?,
                thread:     row.get(1)?,
                comment:    row.get(2)?,
                content:    row.get(3)?,
                owner:      row.get(4)?,
                date:       row.get(5)?,
                updated_at: row.get(6)?,
                is_delete:  row.get(7)?,
              })
            },
          )
          .optional()?)
      })
      .await?;

    raw.map(RawReply::into_record).transpose()
  }

  async fn reply_owned_by(&self, locator: &DeleteReply) -> Result<bool> {
    let id = locator.reply.clone();
    let thread = locator.thread.clone();
    let comment = locator.comment.clone();
    let owner = locator.owner.clone();

    let owned = self
      .conn
      .call(move |conn| {
        let hit: Option<bool> = conn
          .query_row(
            "SELECT 1 FROM replies
             WHERE id = ?1 AND thread = ?2 AND comment = ?3 AND owner = ?4",
            rusqlite::params![id, thread, comment, owner],
            |_| Ok(true),
          )
          .optional()?;
        Ok(hit.unwrap_or(false))
      })
      .await?;

    Ok(owned)
  }

  async fn soft_delete_reply(&self, id: &str) -> Result<bool> {
    self.soft_delete("replies", id).await
  }

  async fn read_replies(&self, thread_id: &str) -> Result<Vec<ReplyRow>> {
    let thread_id = thread_id.to_owned();

    let raws: Vec<RawReplyRow> = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(
          "SELECT replies.id, replies.comment, users.username, replies.date,
                  replies.content, replies.is_delete
           FROM replies
           LEFT JOIN users ON users.id = replies.owner
           WHERE replies.thread = ?1
           ORDER BY replies.date ASC",
        )?;

        let rows = stmt
          .query_map(rusqlite::params![thread_id], |row| {
            Ok(RawReplyRow {
              id:        row.get(0)?,
              comment:   row.get(1)?,
              username:  row.get(2)?,
              date:      row.get(3)?,
              content:   row.get(4)?,
              is_delete: row.get(5)?,
            })
          })?
          .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawReplyRow::into_row).collect()
  }
}

// ─── UserStore impl ──────────────────────────────────────────────────────────

impl UserStore for SqliteStore {
  type Error = Error;

  async fn add_user(&self, input: NewUser) -> Result<UserRecord> {
    let user = UserRecord {
      id:       new_id("user"),
      username: input.username,
      password: input.password,
      fullname: input.fullname,
    };

    let id = user.id.clone();
    let username = user.username.clone();
    let password = user.password.clone();
    let fullname = user.fullname.clone();

    self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO users (id, username, password, fullname)
           VALUES (?1, ?2, ?3, ?4)",
          rusqlite::params![id, username, password, fullname],
        )?;
        Ok(())
      })
      .await?;

    Ok(user)
  }

  async fn find_user(&self, id: &str) -> Result<Option<UserRecord>> {
    let id = id.to_owned();

    let user = self
      .conn
      .call(move |conn| {
        Ok(conn
          .query_row(
            "SELECT id, username, password, fullname FROM users WHERE id = ?1",
            rusqlite::params![id],
            |row| {
              Ok(UserRecord {
                id:       row.get(0)?,
                username: row.get(1)?,
                password: row.get(2)?,
                fullname: row.get(3)?,
              })
            },
          )
          .optional()?)
      })
      .await?;

    Ok(user)
  }
}
