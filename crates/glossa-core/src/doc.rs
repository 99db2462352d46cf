//! Documents and speaker participation.
//!
//! A document is one unit of recorded/transcribed speech. Its workflow state
//! lives entirely in three nullable columns: `assigned_to_id`,
//! `assigned_by_id` and the tri-state `done` flag — NULL means unassigned,
//! false in progress, true complete.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A row in the `docs` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Doc {
  pub id:             i64,
  pub project_id:     i64,
  pub corpus_id:      Option<i64>,
  pub assigned_to_id: Option<i64>,
  pub assigned_by_id: Option<i64>,
  pub done:           Option<bool>,
  /// Recording date. Age brackets in the derived views are computed against
  /// this, never against the current date.
  pub date:           DateTime<Utc>,
  pub place_id:       i64,
}

/// Input to [`crate::store::CorpusStore::add_doc`]. Documents are created
/// unassigned; assignment and completion are separate operations.
#[derive(Debug, Clone, Deserialize)]
pub struct NewDoc {
  pub project_id: i64,
  pub corpus_id:  Option<i64>,
  pub date:       DateTime<Utc>,
  pub place_id:   i64,
}

/// The external label of a document: project badge plus the zero-padded row
/// id. The database never stores these; they are derived on demand.
pub fn document_label(badge: &str, doc_id: i64) -> String {
  format!("{badge}{doc_id:03}")
}

// ─── Participation ───────────────────────────────────────────────────────────

/// A row in the `doc2speaker` join table: one speaker's participation in one
/// document. `words` may be unknown until the transcript is tokenized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participation {
  pub id:         i64,
  pub doc_id:     i64,
  pub speaker_id: i64,
  pub words:      Option<i64>,
}

/// Input to [`crate::store::CorpusStore::add_participation`].
#[derive(Debug, Clone, Deserialize)]
pub struct NewParticipation {
  pub doc_id:     i64,
  pub speaker_id: i64,
  pub words:      Option<i64>,
}

#[cfg(test)]
mod tests {
  use super::document_label;

  #[test]
  fn label_pads_short_ids() {
    assert_eq!(document_label("12A", 1), "12A001");
    assert_eq!(document_label("12A", 29), "12A029");
  }

  #[test]
  fn label_keeps_long_ids() {
    assert_eq!(document_label("B", 1234), "B1234");
  }
}
