//! Reference data — the small label tables everything else points at.
//!
//! Rows are seeded at bootstrap and referenced immutably afterwards: label
//! and id changes cascade to referents, deletion is rejected while referents
//! exist. Places are the one reference table with structure of its own
//! (every place belongs to exactly one region).

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

// ─── Label tables ────────────────────────────────────────────────────────────

/// Which of the flat label tables an operation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReferenceKind {
  Roles,
  Genders,
  Educations,
  Regions,
}

impl ReferenceKind {
  /// The backing table name. Part of the persisted schema contract.
  pub fn table(self) -> &'static str {
    match self {
      Self::Roles => "enum_roles",
      Self::Genders => "enum_genders",
      Self::Educations => "enum_educations",
      Self::Regions => "enum_regions",
    }
  }
}

/// A row in one of the flat label tables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefEntry {
  pub id:    i64,
  pub label: String,
}

// ─── Roles ───────────────────────────────────────────────────────────────────

/// The fixed role vocabulary. Stored as labels in `enum_roles`; the variants
/// here carry the authorization semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
  /// Sees own data only.
  Regular,
  /// Sees own data plus direct supervisees'.
  Supervisor,
  /// Sees all data.
  Admin,
}

impl Role {
  pub fn as_label(self) -> &'static str {
    match self {
      Self::Regular => "regular",
      Self::Supervisor => "supervisor",
      Self::Admin => "admin",
    }
  }

  pub fn from_label(label: &str) -> Result<Self> {
    match label {
      "regular" => Ok(Self::Regular),
      "supervisor" => Ok(Self::Supervisor),
      "admin" => Ok(Self::Admin),
      other => Err(Error::UnknownLabel(other.to_owned())),
    }
  }

  /// Whether users with this role may appear as someone's supervisor.
  pub fn can_supervise(self) -> bool {
    matches!(self, Self::Supervisor | Self::Admin)
  }
}

// ─── Places ──────────────────────────────────────────────────────────────────

/// A recording locality, always inside exactly one region.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Place {
  pub id:        i64,
  pub label:     String,
  pub region_id: i64,
}

/// Input to [`crate::store::CorpusStore::add_place`].
#[derive(Debug, Clone, Deserialize)]
pub struct NewPlace {
  pub label:     String,
  pub region_id: i64,
}
