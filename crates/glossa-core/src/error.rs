//! The domain error taxonomy for `glossa-core`.
//!
//! Storage backends classify raw engine failures (unique, foreign-key,
//! not-null constraint violations) into these variants at the statement
//! boundary, so callers never see engine error text.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  /// A unique constraint rejected an insert or rename.
  #[error("duplicate label: {0:?}")]
  DuplicateLabel(String),

  /// A foreign key pointed at a row that does not exist.
  #[error("a {0} row references a missing row")]
  MissingReference(&'static str),

  /// A delete was rejected because other rows still reference the target.
  #[error("{0} row is still referenced and cannot be deleted")]
  ReferencedRowInUse(&'static str),

  /// A required field was absent (not-null violation, or a conditional
  /// requirement the schema cannot express — e.g. supervisor badges).
  #[error("missing required field: {0}")]
  MissingRequiredField(&'static str),

  #[error("user not found: {0}")]
  UserNotFound(i64),

  #[error("project not found: {0}")]
  ProjectNotFound(i64),

  #[error("speaker not found: {0}")]
  SpeakerNotFound(i64),

  #[error("document not found: {0}")]
  DocNotFound(i64),

  /// Generic not-found for reference-table rows.
  #[error("{table} row not found: {id}")]
  RowNotFound { table: &'static str, id: i64 },

  /// Assigning this supervisor would close a cycle in the supervisor chain.
  #[error("user {0} would appear in their own supervisor chain")]
  SupervisorCycle(i64),

  /// The proposed supervisor's role does not permit supervision.
  #[error("user {0} has a role that does not permit supervision")]
  SupervisorNotEligible(i64),

  /// A label outside the fixed vocabulary (roles, brackets) was read back.
  #[error("unknown label: {0:?}")]
  UnknownLabel(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
