//! Handlers for the `/applications` endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`    | `/applications` | Full collection, most recently created first |
//! | `GET`    | `/applications/:id` | 404 if not found |
//! | `POST`   | `/applications` | Body: `{"position","company","status"}`; 400 if any missing/empty |
//! | `PUT`    | `/applications/:id` | Same body and validation; 404 if not found |
//! | `DELETE` | `/applications/:id` | 404 if not found |

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, State},
  http::StatusCode,
  response::IntoResponse,
};
use jobtrack_core::{
  draft::ApplicationDraft,
  record::ApplicationRecord,
  store::ApplicationStore,
};
use serde::Serialize;
use serde_json::json;

use crate::error::ApiError;

// ─── List ─────────────────────────────────────────────────────────────────────

/// `GET /applications` — the full collection, ordered by creation time descending.
pub async fn list<S>(
  State(store): State<Arc<S>>,
) -> Result<Json<Vec<ApplicationRecord>>, ApiError>
where
  S: ApplicationStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let records = store
    .list_all()
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  Ok(Json(records))
}

// ─── Get one ──────────────────────────────────────────────────────────────────

/// `GET /applications/:id`
pub async fn get_one<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<i64>,
) -> Result<Json<ApplicationRecord>, ApiError>
where
  S: ApplicationStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let record = store
    .get(id)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?
    .ok_or_else(|| ApiError::NotFound(format!("application {id} not found")))?;
  Ok(Json(record))
}

// ─── Create ───────────────────────────────────────────────────────────────────

/// Success body for `POST /applications` — the assigned id plus the stored fields.
#[derive(Debug, Serialize)]
pub struct CreatedBody {
  pub id:       i64,
  pub position: String,
  pub company:  String,
  pub status:   String,
}

/// `POST /applications` — body: `{"position","company","status"}`; returns 201.
pub async fn create<S>(
  State(store): State<Arc<S>>,
  Json(draft): Json<ApplicationDraft>,
) -> Result<impl IntoResponse, ApiError>
where
  S: ApplicationStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let input = draft
    .validate()
    .map_err(|e| ApiError::BadRequest(e.to_string()))?;

  let record = store
    .create(input)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;

  Ok((
    StatusCode::CREATED,
    Json(CreatedBody {
      id:       record.id,
      position: record.position,
      company:  record.company,
      status:   record.status,
    }),
  ))
}

// ─── Update ───────────────────────────────────────────────────────────────────

/// `PUT /applications/:id` — same body and validation as create; refreshes `updated_at`.
pub async fn update_one<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<i64>,
  Json(draft): Json<ApplicationDraft>,
) -> Result<Json<serde_json::Value>, ApiError>
where
  S: ApplicationStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let input = draft
    .validate()
    .map_err(|e| ApiError::BadRequest(e.to_string()))?;

  let matched = store
    .update(id, input)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;

  if !matched {
    return Err(ApiError::NotFound(format!("application {id} not found")));
  }
  Ok(Json(json!({ "message": "Application updated successfully" })))
}

// ─── Delete ───────────────────────────────────────────────────────────────────

/// `DELETE /applications/:id` — hard delete, no tombstone.
pub async fn delete_one<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<i64>,
) -> Result<Json<serde_json::Value>, ApiError>
where
  S: ApplicationStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let matched = store
    .delete(id)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;

  if !matched {
    return Err(ApiError::NotFound(format!("application {id} not found")));
  }
  Ok(Json(json!({ "message": "Application deleted successfully" })))
}
