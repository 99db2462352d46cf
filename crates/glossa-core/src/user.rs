//! Application users.
//!
//! `supervisor_id` is a back-reference for lookup, not an ownership edge.
//! The storage layer cannot express "no cycles" declaratively, so the access
//! layer walks the chain on every supervisor change.

use serde::{Deserialize, Serialize};

use crate::{Error, Result, reference::Role};

/// A row in the `users` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
  pub id:            i64,
  pub username:      String,
  pub role_id:       i64,
  /// Short code used to generate external document labels. Required for
  /// supervisors, absent otherwise.
  pub badge:         Option<String>,
  pub supervisor_id: Option<i64>,
}

/// Input to [`crate::store::CorpusStore::add_user`].
#[derive(Debug, Clone, Deserialize)]
pub struct NewUser {
  pub username:      String,
  pub role_id:       i64,
  pub badge:         Option<String>,
  pub supervisor_id: Option<i64>,
}

impl NewUser {
  /// Conditional requirement the schema cannot express: supervisors must
  /// carry a badge.
  pub fn validate(&self, role: Role) -> Result<()> {
    if role == Role::Supervisor && self.badge.is_none() {
      return Err(Error::MissingRequiredField("badge"));
    }
    Ok(())
  }
}
