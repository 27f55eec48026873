//! Integration tests for `SqliteStore` against an in-memory database.

use parley_core::{
  comment::{AddComment, DeleteComment},
  reply::{AddReply, DeleteReply},
  store::{CommentStore, ReplyStore, ThreadStore, UserStore},
  thread::AddThread,
  user::NewUser,
};

use crate::SqliteStore;

async fn store() -> SqliteStore {
  SqliteStore::open_in_memory().await.expect("in-memory store")
}

async fn seed_user(s: &SqliteStore, username: &str) -> String {
  s.add_user(NewUser {
    username: username.to_string(),
    password: "hashed".to_string(),
    fullname: "Dicoding Indonesia".to_string(),
  })
  .await
  .unwrap()
  .id
}

async fn seed_thread(s: &SqliteStore, owner: &str) -> String {
  s.add_thread(AddThread {
    title: "sebuah thread".to_string(),
    body:  "sebuah body thread".to_string(),
    owner: owner.to_string(),
  })
  .await
  .unwrap()
  .id
}

fn comment_input(thread: &str, owner: &str, content: &str) -> AddComment {
  AddComment {
    content: content.to_string(),
    thread:  thread.to_string(),
    owner:   owner.to_string(),
  }
}

// ─── Threads ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn add_thread_assigns_a_prefixed_id() {
  let s = store().await;
  let owner = seed_user(&s, "dicoding").await;

  let added = s
    .add_thread(AddThread {
      title: "sebuah thread".to_string(),
      body:  "sebuah body thread".to_string(),
      owner: owner.clone(),
    })
    .await
    .unwrap();

  assert!(added.id.starts_with("thread-"));
  assert_eq!(added.title, "sebuah thread");
  assert_eq!(added.owner, owner);

  let record = s.find_thread(&added.id).await.unwrap().unwrap();
  assert_eq!(record.body, "sebuah body thread");
}

#[tokio::test]
async fn find_thread_missing_returns_none() {
  let s = store().await;
  assert!(s.find_thread("thread-404").await.unwrap().is_none());
}

#[tokio::test]
async fn read_thread_joins_the_owner_username() {
  let s = store().await;
  let owner = seed_user(&s, "dicoding").await;
  let thread = seed_thread(&s, &owner).await;

  let head = s.read_thread(&thread).await.unwrap().unwrap();
  assert_eq!(head.username.as_deref(), Some("dicoding"));
  assert_eq!(head.title, "sebuah thread");
}

#[tokio::test]
async fn read_thread_tolerates_a_missing_user_row() {
  let s = store().await;
  let thread = seed_thread(&s, "user-unknown").await;

  let head = s.read_thread(&thread).await.unwrap().unwrap();
  assert!(head.username.is_none());
}

// ─── Comments ────────────────────────────────────────────────────────────────

#[tokio::test]
async fn add_and_find_comment() {
  let s = store().await;
  let owner = seed_user(&s, "dicoding").await;
  let thread = seed_thread(&s, &owner).await;

  let added = s
    .add_comment(comment_input(&thread, &owner, "sebuah comment"))
    .await
    .unwrap();
  assert!(added.id.starts_with("comment-"));

  let record = s.find_comment(&added.id).await.unwrap().unwrap();
  assert_eq!(record.thread, thread);
  assert_eq!(record.content, "sebuah comment");
  assert!(!record.is_delete);
  assert_eq!(record.updated_at, record.date);
}

#[tokio::test]
async fn soft_delete_comment_flips_the_flag_and_keeps_the_row() {
  let s = store().await;
  let owner = seed_user(&s, "dicoding").await;
  let thread = seed_thread(&s, &owner).await;
  let added = s
    .add_comment(comment_input(&thread, &owner, "sebuah comment"))
    .await
    .unwrap();

  assert!(s.soft_delete_comment(&added.id).await.unwrap());

  let record = s.find_comment(&added.id).await.unwrap().unwrap();
  assert!(record.is_delete);
  // Content is untouched in storage; redaction is a read-side concern.
  assert_eq!(record.content, "sebuah comment");
  assert!(record.updated_at >= record.date);
}

#[tokio::test]
async fn soft_delete_unknown_comment_reports_no_match() {
  let s = store().await;
  assert!(!s.soft_delete_comment("comment-404").await.unwrap());
}

#[tokio::test]
async fn comment_owned_by_matches_only_the_full_locator() {
  let s = store().await;
  let owner = seed_user(&s, "dicoding").await;
  let other = seed_user(&s, "johndoe").await;
  let thread = seed_thread(&s, &owner).await;
  let added = s
    .add_comment(comment_input(&thread, &owner, "sebuah comment"))
    .await
    .unwrap();

  let mine = DeleteComment {
    thread:  thread.clone(),
    comment: added.id.clone(),
    owner:   owner.clone(),
  };
  assert!(s.comment_owned_by(&mine).await.unwrap());

  let theirs = DeleteComment { owner: other, ..mine.clone() };
  assert!(!s.comment_owned_by(&theirs).await.unwrap());

  let wrong_thread = DeleteComment {
    thread: "thread-404".to_string(),
    ..mine
  };
  assert!(!s.comment_owned_by(&wrong_thread).await.unwrap());
}

#[tokio::test]
async fn read_comments_orders_by_date_and_keeps_the_flag() {
  let s = store().await;
  let owner = seed_user(&s, "dicoding").await;
  let thread = seed_thread(&s, &owner).await;

  let first = s
    .add_comment(comment_input(&thread, &owner, "first"))
    .await
    .unwrap();
  let second = s
    .add_comment(comment_input(&thread, &owner, "second"))
    .await
    .unwrap();
  s.soft_delete_comment(&first.id).await.unwrap();

  let rows = s.read_comments(&thread).await.unwrap();
  assert_eq!(rows.len(), 2);
  assert_eq!(rows[0].id, first.id);
  assert_eq!(rows[1].id, second.id);
  assert!(rows[0].is_delete);
  assert!(!rows[1].is_delete);
  assert_eq!(rows[0].username.as_deref(), Some("dicoding"));
}

#[tokio::test]
async fn read_comments_is_scoped_to_the_thread() {
  let s = store().await;
  let owner = seed_user(&s, "dicoding").await;
  let thread_a = seed_thread(&s, &owner).await;
  let thread_b = seed_thread(&s, &owner).await;

  s.add_comment(comment_input(&thread_a, &owner, "in a"))
    .await
    .unwrap();

  assert_eq!(s.read_comments(&thread_a).await.unwrap().len(), 1);
  assert!(s.read_comments(&thread_b).await.unwrap().is_empty());
}

// ─── Replies ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn add_reply_and_read_back_with_comment_reference() {
  let s = store().await;
  let owner = seed_user(&s, "dicoding").await;
  let thread = seed_thread(&s, &owner).await;
  let comment = s
    .add_comment(comment_input(&thread, &owner, "sebuah comment"))
    .await
    .unwrap();

  let added = s
    .add_reply(AddReply {
      content: "sebuah balasan".to_string(),
      thread:  thread.clone(),
      comment: comment.id.clone(),
      owner:   owner.clone(),
    })
    .await
    .unwrap();
  assert!(added.id.starts_with("reply-"));

  let rows = s.read_replies(&thread).await.unwrap();
  assert_eq!(rows.len(), 1);
  assert_eq!(rows[0].comment, comment.id);
  assert_eq!(rows[0].content, "sebuah balasan");
  assert!(!rows[0].is_delete);
}

#[tokio::test]
async fn reply_ownership_and_soft_delete() {
  let s = store().await;
  let owner = seed_user(&s, "dicoding").await;
  let other = seed_user(&s, "johndoe").await;
  let thread = seed_thread(&s, &owner).await;
  let comment = s
    .add_comment(comment_input(&thread, &owner, "sebuah comment"))
    .await
    .unwrap();
  let reply = s
    .add_reply(AddReply {
      content: "sebuah balasan".to_string(),
      thread:  thread.clone(),
      comment: comment.id.clone(),
      owner:   owner.clone(),
    })
    .await
    .unwrap();

  let mine = DeleteReply {
    thread:  thread.clone(),
    comment: comment.id.clone(),
    reply:   reply.id.clone(),
    owner:   owner.clone(),
  };
  assert!(s.reply_owned_by(&mine).await.unwrap());

  let theirs = DeleteReply { owner: other, ..mine };
  assert!(!s.reply_owned_by(&theirs).await.unwrap());

  assert!(s.soft_delete_reply(&reply.id).await.unwrap());
  let record = s.find_reply(&reply.id).await.unwrap().unwrap();
  assert!(record.is_delete);
}

// ─── Users ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn add_and_find_user() {
  let s = store().await;
  let id = seed_user(&s, "dicoding").await;
  assert!(id.starts_with("user-"));

  let user = s.find_user(&id).await.unwrap().unwrap();
  assert_eq!(user.username, "dicoding");
  assert_eq!(user.fullname, "Dicoding Indonesia");

  assert!(s.find_user("user-404").await.unwrap().is_none());
}
