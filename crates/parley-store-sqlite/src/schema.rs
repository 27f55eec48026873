//! SQL schema for the Parley SQLite store.
//!
//! Executed once at connection startup. Future migrations will be gated on
//! the `PRAGMA user_version` number.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;
PRAGMA foreign_keys = ON;

CREATE TABLE IF NOT EXISTS users (
    id       TEXT PRIMARY KEY,
    username TEXT NOT NULL UNIQUE,
    password TEXT NOT NULL,   -- opaque hash; hashing happens elsewhere
    fullname TEXT NOT NULL
);

-- Threads are immutable after insert: no UPDATE is ever issued.
CREATE TABLE IF NOT EXISTS threads (
    id    TEXT PRIMARY KEY,
    title TEXT NOT NULL,
    body  TEXT NOT NULL,
    owner TEXT NOT NULL,
    date  TEXT NOT NULL       -- ISO 8601 UTC; server-assigned
);

-- Comments and replies are soft-deleted: rows are never removed, is_delete
-- flips 0 -> 1 exactly once and updated_at tracks that mutation.
CREATE TABLE IF NOT EXISTS comments (
    id         TEXT PRIMARY KEY,
    thread     TEXT NOT NULL REFERENCES threads(id),
    content    TEXT NOT NULL,
    owner      TEXT NOT NULL,
    date       TEXT NOT NULL,
    updated_at TEXT NOT NULL,
    is_delete  INTEGER NOT NULL DEFAULT 0
);

CREATE TABLE IF NOT EXISTS replies (
    id         TEXT PRIMARY KEY,
    thread     TEXT NOT NULL REFERENCES threads(id),
    comment    TEXT NOT NULL REFERENCES comments(id),
    content    TEXT NOT NULL,
    owner      TEXT NOT NULL,
    date       TEXT NOT NULL,
    updated_at TEXT NOT NULL,
    is_delete  INTEGER NOT NULL DEFAULT 0
);

CREATE INDEX IF NOT EXISTS comments_thread_idx ON comments(thread);
CREATE INDEX IF NOT EXISTS replies_thread_idx  ON replies(thread);
CREATE INDEX IF NOT EXISTS replies_comment_idx ON replies(comment);

PRAGMA user_version = 1;
";
