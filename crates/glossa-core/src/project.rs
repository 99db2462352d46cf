//! Projects and corpora — the two grouping entities documents hang off.

use serde::{Deserialize, Serialize};

/// A research project. Its badge prefixes external document labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
  pub id:    i64,
  pub label: String,
  pub badge: String,
}

/// Input to [`crate::store::CorpusStore::add_project`].
#[derive(Debug, Clone, Deserialize)]
pub struct NewProject {
  pub label: String,
  pub badge: String,
}

/// A published corpus a finished document may be assigned to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Corpus {
  pub id:    i64,
  pub label: String,
}
