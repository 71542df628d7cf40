//! [`SqliteStore`] — the SQLite implementation of [`ApplicationStore`].

use std::path::Path;

use chrono::Utc;
use rusqlite::OptionalExtension as _;

use jobtrack_core::{
  draft::NewApplication,
  record::ApplicationRecord,
  store::ApplicationStore,
};

use crate::{
  encode::{RawApplication, encode_dt},
  schema::SCHEMA,
  Error, Result,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A jobtrack application store backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted. The handle
/// is constructed once at process start and shared by every request handler;
/// concurrent statements queue onto one dedicated database thread.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}

// ─── ApplicationStore impl ───────────────────────────────────────────────────

impl ApplicationStore for SqliteStore {
  type Error = Error;

  async fn list_all(&self) -> Result<Vec<ApplicationRecord>> {
    let raws: Vec<RawApplication> = self
      .conn
      .call(|conn| {
        // `id DESC` breaks ties between rows created within the same
        // timestamp resolution, keeping the order deterministic.
        let mut stmt = conn.prepare(
          "SELECT id, position, company, status, created_at, updated_at
           FROM applications
           ORDER BY created_at DESC, id DESC",
        )?;
        let rows = stmt
          .query_map([], |row| {
            Ok(RawApplication {
              id:         row.get(0)?,
              position:   row.get(1)?,
              company:    row.get(2)?,
              status:     row.get(3)?,
              created_at: row.get(4)?,
              updated_at: row.get(5)?,
            })
          })?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawApplication::into_record).collect()
  }

  async fn get(&self, id: i64) -> Result<Option<ApplicationRecord>> {
    let raw: Option<RawApplication> = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              "SELECT id, position, company, status, created_at, updated_at
               FROM applications WHERE id = ?1",
              rusqlite::params![id],
              |row| {
                Ok(RawApplication {
                  id:         row.get(0)?,
                  position:   row.get(1)?,
                  company:    row.get(2)?,
                  status:     row.get(3)?,
                  created_at: row.get(4)?,
                  updated_at: row.get(5)?,
                })
              },
            )
            .optional()?,
        )
      })
      .await?;

    raw.map(RawApplication::into_record).transpose()
  }

  async fn create(&self, input: NewApplication) -> Result<ApplicationRecord> {
    // One instant for both columns: created_at == updated_at at creation.
    let now    = Utc::now();
    let at_str = encode_dt(now);

    let NewApplication { position, company, status } = input;
    let position_db = position.clone();
    let company_db  = company.clone();
    let status_db   = status.clone();

    let id = self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO applications (position, company, status, created_at, updated_at)
           VALUES (?1, ?2, ?3, ?4, ?4)",
          rusqlite::params![position_db, company_db, status_db, at_str],
        )?;
        Ok(conn.last_insert_rowid())
      })
      .await?;

    Ok(ApplicationRecord {
      id,
      position,
      company,
      status,
      created_at: now,
      updated_at: now,
    })
  }

  async fn update(&self, id: i64, input: NewApplication) -> Result<bool> {
    let at_str = encode_dt(Utc::now());
    let NewApplication { position, company, status } = input;

    let affected = self
      .conn
      .call(move |conn| {
        Ok(conn.execute(
          "UPDATE applications
           SET position = ?1, company = ?2, status = ?3, updated_at = ?4
           WHERE id = ?5",
          rusqlite::params![position, company, status, at_str, id],
        )?)
      })
      .await?;

    Ok(affected > 0)
  }

  async fn delete(&self, id: i64) -> Result<bool> {
    let affected = self
      .conn
      .call(move |conn| {
        Ok(conn.execute(
          "DELETE FROM applications WHERE id = ?1",
          rusqlite::params![id],
        )?)
      })
      .await?;

    Ok(affected > 0)
  }
}
