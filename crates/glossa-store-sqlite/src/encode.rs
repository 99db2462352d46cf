//! Decoding helpers between SQLite rows and domain types.
//!
//! Timestamps are stored as RFC 3339 strings; everything else maps directly
//! onto SQLite's integer and text types. Only rows with fallible decoding
//! (timestamps, bracket labels) get an intermediate `Raw*` struct — the rest
//! are built straight from the row in the query closure.

use chrono::{DateTime, Utc};
use glossa_core::{
  doc::Doc,
  view::{AgeBracket, DocOverview, EducationBracket, ParticipationRow},
};

use crate::{Error, Result};

// ─── DateTime<Utc> ───────────────────────────────────────────────────────────

pub fn encode_dt(dt: DateTime<Utc>) -> String { dt.to_rfc3339() }

pub fn decode_dt(s: &str) -> Result<DateTime<Utc>> {
  DateTime::parse_from_rfc3339(s)
    .map(|dt| dt.with_timezone(&Utc))
    .map_err(|e| Error::DateParse(e.to_string()))
}

// ─── Row types ───────────────────────────────────────────────────────────────

/// A `docs` row before the date string is parsed.
pub struct RawDoc {
  pub id:             i64,
  pub project_id:     i64,
  pub corpus_id:      Option<i64>,
  pub assigned_to_id: Option<i64>,
  pub assigned_by_id: Option<i64>,
  pub done:           Option<bool>,
  pub date:           String,
  pub place_id:       i64,
}

impl RawDoc {
  pub fn into_doc(self) -> Result<Doc> {
    Ok(Doc {
      id:             self.id,
      project_id:     self.project_id,
      corpus_id:      self.corpus_id,
      assigned_to_id: self.assigned_to_id,
      assigned_by_id: self.assigned_by_id,
      done:           self.done,
      date:           decode_dt(&self.date)?,
      place_id:       self.place_id,
    })
  }
}

/// A `view_docs` row before the date string is parsed.
pub struct RawDocOverview {
  pub id:          i64,
  pub project:     String,
  pub badge:       String,
  pub corpus:      Option<String>,
  pub assigned_to: Option<String>,
  pub assigned_by: Option<String>,
  pub done:        Option<bool>,
  pub date:        String,
  pub place:       String,
  pub region:      String,
}

impl RawDocOverview {
  pub fn into_overview(self) -> Result<DocOverview> {
    Ok(DocOverview {
      id:          self.id,
      project:     self.project,
      badge:       self.badge,
      corpus:      self.corpus,
      assigned_to: self.assigned_to,
      assigned_by: self.assigned_by,
      done:        self.done,
      date:        decode_dt(&self.date)?,
      place:       self.place,
      region:      self.region,
    })
  }
}

/// A `view_doc2speaker` row before dates and bracket labels are decoded.
pub struct RawParticipationRow {
  pub id:             i64,
  pub doc_id:         i64,
  pub speaker_id:     i64,
  pub words:          Option<i64>,
  pub nickname:       String,
  pub gender:         String,
  pub education:      String,
  pub age:            String,
  pub speaker_place:  String,
  pub speaker_region: String,
  pub project:        String,
  pub corpus:         Option<String>,
  pub doc_place:      String,
  pub doc_region:     String,
  pub date:           String,
}

impl RawParticipationRow {
  pub fn into_row(self) -> Result<ParticipationRow> {
    Ok(ParticipationRow {
      id:             self.id,
      doc_id:         self.doc_id,
      speaker_id:     self.speaker_id,
      words:          self.words,
      nickname:       self.nickname,
      gender:         self.gender,
      education:      EducationBracket::from_label(&self.education)
        .map_err(Error::Domain)?,
      age:            AgeBracket::from_label(&self.age).map_err(Error::Domain)?,
      speaker_place:  self.speaker_place,
      speaker_region: self.speaker_region,
      project:        self.project,
      corpus:         self.corpus,
      doc_place:      self.doc_place,
      doc_region:     self.doc_region,
      date:           decode_dt(&self.date)?,
    })
  }
}
