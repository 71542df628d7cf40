//! Typed request input.
//!
//! The transport layer deserialises request bodies into [`ApplicationDraft`]
//! — every field optional, so an absent field survives parsing — and
//! [`ApplicationDraft::validate`] turns it into a [`NewApplication`] or a
//! structured rejection. No storage call ever sees an unvalidated draft.

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// The raw body shape accepted by create and update.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApplicationDraft {
  pub position: Option<String>,
  pub company:  Option<String>,
  pub status:   Option<String>,
}

/// A validated application payload: all three fields present and non-blank.
#[derive(Debug, Clone, Serialize)]
pub struct NewApplication {
  pub position: String,
  pub company:  String,
  pub status:   String,
}

impl ApplicationDraft {
  /// Validate into a [`NewApplication`], reporting every missing field at
  /// once rather than the first one found.
  ///
  /// A field counts as missing when it is absent or blank after trimming.
  /// Values are stored as given; trimming is only applied for the check.
  pub fn validate(self) -> Result<NewApplication> {
    fn take(
      value:   Option<String>,
      name:    &'static str,
      missing: &mut Vec<&'static str>,
    ) -> String {
      match value {
        Some(v) if !v.trim().is_empty() => v,
        _ => {
          missing.push(name);
          String::new()
        }
      }
    }

    let mut missing = Vec::new();
    let position = take(self.position, "position", &mut missing);
    let company  = take(self.company, "company", &mut missing);
    let status   = take(self.status, "status", &mut missing);

    if !missing.is_empty() {
      return Err(Error::MissingFields(missing));
    }

    Ok(NewApplication { position, company, status })
  }
}
