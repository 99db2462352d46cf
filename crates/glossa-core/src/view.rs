//! Row types for the derived views.
//!
//! The views are plain SQL views, recomputed on every read — nothing here is
//! ever stored. The two categorical brackets are computed inside
//! `view_doc2speaker` and decoded into the enums below.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

// ─── Brackets ────────────────────────────────────────────────────────────────

/// Speaker age relative to the *document* date: strictly less than 35 years
/// between recording year and birth year is "younger", everything else —
/// including exactly 35 — is "older".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgeBracket {
  Younger,
  Older,
}

impl AgeBracket {
  pub fn from_label(label: &str) -> Result<Self> {
    match label {
      "younger" => Ok(Self::Younger),
      "older" => Ok(Self::Older),
      other => Err(Error::UnknownLabel(other.to_owned())),
    }
  }
}

/// Binary collapse of the four-valued education scale: the highest tier
/// ("VŠ", university) is "higher", everything else "lower".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EducationBracket {
  Higher,
  Lower,
}

impl EducationBracket {
  pub fn from_label(label: &str) -> Result<Self> {
    match label {
      "higher" => Ok(Self::Higher),
      "lower" => Ok(Self::Lower),
      other => Err(Error::UnknownLabel(other.to_owned())),
    }
  }
}

// ─── view_geo ────────────────────────────────────────────────────────────────

/// One row of `view_geo`: a place resolved to its owning region.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeoEntry {
  pub place_id: i64,
  pub place:    String,
  pub region:   String,
}

// ─── view_speakers ───────────────────────────────────────────────────────────

/// One row of `view_speakers`: a speaker with every reference id resolved to
/// its label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeakerProfile {
  pub id:        i64,
  /// Username of the owning user.
  pub user:      String,
  pub project:   String,
  pub nickname:  String,
  pub gender:    String,
  pub education: String,
  pub place:     String,
  pub region:    String,
  pub year:      i64,
}

// ─── view_docs ───────────────────────────────────────────────────────────────

/// One row of `view_docs`: a document with labels resolved and assignment
/// usernames joined in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocOverview {
  pub id:          i64,
  pub project:     String,
  pub badge:       String,
  pub corpus:      Option<String>,
  pub assigned_to: Option<String>,
  pub assigned_by: Option<String>,
  pub done:        Option<bool>,
  pub date:        DateTime<Utc>,
  pub place:       String,
  pub region:      String,
}

// ─── view_doc2speaker ────────────────────────────────────────────────────────

/// One row of `view_doc2speaker`: a participation combining the document's
/// project/corpus/place/region with the speaker's demographics, plus the two
/// derived brackets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParticipationRow {
  pub id:             i64,
  pub doc_id:         i64,
  pub speaker_id:     i64,
  pub words:          Option<i64>,
  pub nickname:       String,
  pub gender:         String,
  /// Education bracket, not the raw label.
  pub education:      EducationBracket,
  /// Age bracket relative to the document date.
  pub age:            AgeBracket,
  pub speaker_place:  String,
  pub speaker_region: String,
  pub project:        String,
  pub corpus:         Option<String>,
  pub doc_place:      String,
  pub doc_region:     String,
  pub date:           DateTime<Utc>,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn bracket_labels_roundtrip() {
    assert_eq!(AgeBracket::from_label("younger").unwrap(), AgeBracket::Younger);
    assert_eq!(AgeBracket::from_label("older").unwrap(), AgeBracket::Older);
    assert_eq!(
      EducationBracket::from_label("higher").unwrap(),
      EducationBracket::Higher
    );
    assert!(matches!(
      AgeBracket::from_label("mladší"),
      Err(Error::UnknownLabel(_))
    ));
  }
}
