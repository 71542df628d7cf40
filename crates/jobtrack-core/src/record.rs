//! ApplicationRecord — a single job-application entry.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Status values offered by the client UI.
///
/// The server deliberately does not restrict `status` to this set — any
/// non-empty string is accepted and persisted. This is the client-side
/// vocabulary only.
pub const STATUS_OPTIONS: [&str; 4] = ["Applied", "Interview", "Offer", "Rejected"];

/// A single job-application entry.
///
/// `id` and both timestamps are server-assigned. `created_at` never changes
/// after creation; `updated_at` equals `created_at` at creation and is
/// refreshed on every update, so `created_at <= updated_at` always holds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationRecord {
  pub id:         i64,
  pub position:   String,
  pub company:    String,
  pub status:     String,
  pub created_at: DateTime<Utc>,
  pub updated_at: DateTime<Utc>,
}
