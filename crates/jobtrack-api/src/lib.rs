//! JSON REST API for jobtrack.
//!
//! Exposes an axum [`Router`] backed by any
//! [`jobtrack_core::store::ApplicationStore`]. Transport concerns (CORS,
//! request tracing, TLS) are the caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! .nest("/api", jobtrack_api::api_router(Arc::new(store)))
//! ```

pub mod applications;
pub mod error;

use std::sync::Arc;

use axum::{Router, routing::get};
use jobtrack_core::store::ApplicationStore;

pub use error::ApiError;

/// Build a fully-materialised API router for `store`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S>(store: Arc<S>) -> Router<()>
where
  S: ApplicationStore + Clone + Send + Sync + 'static,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  Router::new()
    .route(
      "/applications",
      get(applications::list::<S>).post(applications::create::<S>),
    )
    .route(
      "/applications/{id}",
      get(applications::get_one::<S>)
        .put(applications::update_one::<S>)
        .delete(applications::delete_one::<S>),
    )
    .with_state(store)
}

// ─── Integration tests ────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;

  use axum::{
    body::Body,
    http::{Request, StatusCode, header},
  };
  use jobtrack_store_sqlite::SqliteStore;
  use serde_json::{Value, json};
  use tower::ServiceExt as _;

  async fn app() -> Router {
    let store = SqliteStore::open_in_memory().await.unwrap();
    Router::new().nest("/api", api_router(Arc::new(store)))
  }

  /// Fire one request at the router and return `(status, parsed body)`.
  async fn request(
    app:    &Router,
    method: &str,
    uri:    &str,
    body:   Option<Value>,
  ) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
      Some(v) => {
        builder = builder.header(header::CONTENT_TYPE, "application/json");
        Body::from(v.to_string())
      }
      None => Body::empty(),
    };

    let resp = app
      .clone()
      .oneshot(builder.body(body).unwrap())
      .await
      .unwrap();
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
      .await
      .unwrap();
    let value = if bytes.is_empty() {
      Value::Null
    } else {
      serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
  }

  fn engineer_at(company: &str) -> Value {
    json!({ "position": "Engineer", "company": company, "status": "Applied" })
  }

  // ── Full lifecycle ──────────────────────────────────────────────────────────

  #[tokio::test]
  async fn create_read_update_delete_lifecycle() {
    let app = app().await;

    // POST assigns an id and echoes the stored fields.
    let (status, body) =
      request(&app, "POST", "/api/applications", Some(engineer_at("Acme")))
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["position"], "Engineer");
    assert_eq!(body["company"], "Acme");
    assert_eq!(body["status"], "Applied");
    let id = body["id"].as_i64().unwrap();

    // The new record leads the collection.
    let (status, body) = request(&app, "GET", "/api/applications", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["id"].as_i64().unwrap(), id);

    // PUT replaces the mutable fields.
    let (status, body) = request(
      &app,
      "PUT",
      &format!("/api/applications/{id}"),
      Some(json!({
        "position": "Engineer",
        "company": "Acme",
        "status": "Interview",
      })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Application updated successfully");

    let (status, body) =
      request(&app, "GET", &format!("/api/applications/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "Interview");

    // DELETE removes the row; a follow-up GET is a 404.
    let (status, body) =
      request(&app, "DELETE", &format!("/api/applications/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Application deleted successfully");

    let (status, _) =
      request(&app, "GET", &format!("/api/applications/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
  }

  // ── List ────────────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn list_empty_collection_returns_empty_array() {
    let app = app().await;
    let (status, body) = request(&app, "GET", "/api/applications", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
  }

  #[tokio::test]
  async fn list_orders_newest_first() {
    let app = app().await;
    for company in ["First", "Second", "Third"] {
      let (status, _) =
        request(&app, "POST", "/api/applications", Some(engineer_at(company)))
          .await;
      assert_eq!(status, StatusCode::CREATED);
    }

    let (_, body) = request(&app, "GET", "/api/applications", None).await;
    let companies: Vec<&str> = body
      .as_array()
      .unwrap()
      .iter()
      .map(|r| r["company"].as_str().unwrap())
      .collect();
    assert_eq!(companies, vec!["Third", "Second", "First"]);
  }

  #[tokio::test]
  async fn timestamps_are_equal_at_creation() {
    let app = app().await;
    let (_, body) =
      request(&app, "POST", "/api/applications", Some(engineer_at("Acme")))
        .await;
    let id = body["id"].as_i64().unwrap();

    let (_, record) =
      request(&app, "GET", &format!("/api/applications/{id}"), None).await;
    assert_eq!(record["created_at"], record["updated_at"]);
  }

  // ── Validation ──────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn create_with_missing_field_returns_400_and_stores_nothing() {
    let app = app().await;

    let (status, body) = request(
      &app,
      "POST",
      "/api/applications",
      Some(json!({ "position": "Engineer", "status": "Applied" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("company"));

    // The rejected draft never reached storage.
    let (_, body) = request(&app, "GET", "/api/applications", None).await;
    assert_eq!(body, json!([]));
  }

  #[tokio::test]
  async fn create_with_empty_field_returns_400() {
    let app = app().await;
    let (status, body) = request(
      &app,
      "POST",
      "/api/applications",
      Some(json!({ "position": "", "company": "Acme", "status": "Applied" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("position"));
  }

  #[tokio::test]
  async fn update_with_missing_field_returns_400() {
    let app = app().await;
    let (_, body) =
      request(&app, "POST", "/api/applications", Some(engineer_at("Acme")))
        .await;
    let id = body["id"].as_i64().unwrap();

    let (status, _) = request(
      &app,
      "PUT",
      &format!("/api/applications/{id}"),
      Some(json!({ "position": "Engineer" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
  }

  #[tokio::test]
  async fn arbitrary_status_string_is_accepted() {
    // The UI vocabulary is advisory; the server persists any non-empty
    // status.
    let app = app().await;
    let (status, body) = request(
      &app,
      "POST",
      "/api/applications",
      Some(json!({
        "position": "Engineer",
        "company": "Acme",
        "status": "Ghosted",
      })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["status"], "Ghosted");
  }

  // ── Not found ───────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn get_missing_returns_404_with_error_body() {
    let app = app().await;
    let (status, body) =
      request(&app, "GET", "/api/applications/999", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].is_string());
  }

  #[tokio::test]
  async fn update_missing_returns_404() {
    let app = app().await;
    let (status, body) = request(
      &app,
      "PUT",
      "/api/applications/999",
      Some(engineer_at("Acme")),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].is_string());
  }

  #[tokio::test]
  async fn repeated_delete_returns_404_not_500() {
    let app = app().await;
    let (_, body) =
      request(&app, "POST", "/api/applications", Some(engineer_at("Acme")))
        .await;
    let id = body["id"].as_i64().unwrap();

    let (status, _) =
      request(&app, "DELETE", &format!("/api/applications/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) =
      request(&app, "DELETE", &format!("/api/applications/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].is_string());
  }
}
