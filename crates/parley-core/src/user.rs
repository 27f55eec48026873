//! User — collaborator entity.
//!
//! Registration and credential handling live outside this system; users are
//! persisted only so read-side joins can resolve owner ids to display names.

use serde::{Deserialize, Serialize};

/// A persisted user row. `password` is an opaque hash supplied by the
/// caller; this crate never hashes or verifies anything.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRecord {
  pub id:       String,
  pub username: String,
  pub password: String,
  pub fullname: String,
}

/// Input to [`crate::store::UserStore::add_user`]. The store assigns the id.
#[derive(Debug, Clone)]
pub struct NewUser {
  pub username: String,
  pub password: String,
  pub fullname: String,
}
