//! Speakers — research subjects recorded in one or more documents.

use serde::{Deserialize, Serialize};

/// A row in the `speakers` table. All demographic columns reference the
/// reference tables by id; labels are only resolved in the derived views.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Speaker {
  pub id:           i64,
  /// The user who recruited and owns this speaker's records.
  pub user_id:      i64,
  pub project_id:   i64,
  pub nickname:     String,
  pub gender_id:    i64,
  pub education_id: i64,
  pub place_id:     i64,
  /// Year of birth.
  pub year:         i64,
}

/// Input to [`crate::store::CorpusStore::add_speaker`].
#[derive(Debug, Clone, Deserialize)]
pub struct NewSpeaker {
  pub user_id:      i64,
  pub project_id:   i64,
  pub nickname:     String,
  pub gender_id:    i64,
  pub education_id: i64,
  pub place_id:     i64,
  pub year:         i64,
}
