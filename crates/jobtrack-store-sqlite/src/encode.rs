//! Encoding and decoding helpers between Rust domain types and the plain-text
//! representations stored in SQLite columns.
//!
//! All timestamps are stored as RFC 3339 strings.

use chrono::{DateTime, Utc};
use jobtrack_core::record::ApplicationRecord;

use crate::{Error, Result};

// ─── DateTime<Utc> ───────────────────────────────────────────────────────────

pub fn encode_dt(dt: DateTime<Utc>) -> String { dt.to_rfc3339() }

pub fn decode_dt(s: &str) -> Result<DateTime<Utc>> {
  DateTime::parse_from_rfc3339(s)
    .map(|dt| dt.with_timezone(&Utc))
    .map_err(|e| Error::DateParse(e.to_string()))
}

// ─── Row shape ───────────────────────────────────────────────────────────────

/// An application row as read straight out of SQLite, before timestamp
/// parsing.
pub struct RawApplication {
  pub id:         i64,
  pub position:   String,
  pub company:    String,
  pub status:     String,
  pub created_at: String,
  pub updated_at: String,
}

impl RawApplication {
  pub fn into_record(self) -> Result<ApplicationRecord> {
    Ok(ApplicationRecord {
      id:         self.id,
      position:   self.position,
      company:    self.company,
      status:     self.status,
      created_at: decode_dt(&self.created_at)?,
      updated_at: decode_dt(&self.updated_at)?,
    })
  }
}
