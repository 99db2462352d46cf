//! Error type for `glossa-store-sqlite` and constraint classification.
//!
//! Unique and foreign-key violations come out of SQLite as
//! `SQLITE_CONSTRAINT_*` extended result codes; the helpers here translate
//! them into the domain taxonomy at the statement boundary so callers never
//! match on engine error text. Not-null violations need no mapping — every
//! NOT NULL column is a non-`Option` field in the domain types.

use glossa_core::store::StoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error(transparent)]
  Domain(#[from] glossa_core::Error),

  #[error("database error: {0}")]
  Database(#[from] tokio_rusqlite::Error),

  #[error("date/time parse error: {0}")]
  DateParse(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

impl StoreError for Error {
  fn as_domain(&self) -> Option<&glossa_core::Error> {
    match self {
      Self::Domain(e) => Some(e),
      _ => None,
    }
  }
}

/// The extended result code of a constraint failure, if that is what `e` is.
fn constraint_code(e: &tokio_rusqlite::Error) -> Option<i32> {
  match e {
    tokio_rusqlite::Error::Rusqlite(rusqlite::Error::SqliteFailure(f, _)) => {
      Some(f.extended_code)
    }
    _ => None,
  }
}

/// Classify a failed insert or update against `table`. `label` is the value
/// covered by the table's unique constraint, for the duplicate message.
pub(crate) fn write_err(
  e: tokio_rusqlite::Error,
  table: &'static str,
  label: &str,
) -> Error {
  match constraint_code(&e) {
    Some(rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE)
    | Some(rusqlite::ffi::SQLITE_CONSTRAINT_PRIMARYKEY) => {
      glossa_core::Error::DuplicateLabel(label.to_owned()).into()
    }
    Some(rusqlite::ffi::SQLITE_CONSTRAINT_FOREIGNKEY) => {
      glossa_core::Error::MissingReference(table).into()
    }
    _ => e.into(),
  }
}

/// Classify a failed delete from `table`: a foreign-key failure here means
/// the row is still referenced (`ON DELETE RESTRICT`).
pub(crate) fn delete_err(e: tokio_rusqlite::Error, table: &'static str) -> Error {
  match constraint_code(&e) {
    Some(rusqlite::ffi::SQLITE_CONSTRAINT_FOREIGNKEY) => {
      glossa_core::Error::ReferencedRowInUse(table).into()
    }
    _ => e.into(),
  }
}
