//! Async HTTP client wrapping the jobtrack JSON API.

use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use jobtrack_core::{draft::NewApplication, record::ApplicationRecord};
use reqwest::Client;
use serde::Deserialize;

/// Connection settings for the jobtrack API.
#[derive(Debug, Clone)]
pub struct ApiConfig {
  pub base_url: String,
}

/// Error body returned by the server on any non-2xx response.
#[derive(Debug, Deserialize)]
struct ErrorBody {
  error: String,
}

/// Async HTTP client for the jobtrack JSON REST API.
///
/// Cheap to clone — the inner [`reqwest::Client`] is `Arc`-based.
#[derive(Clone)]
pub struct ApiClient {
  client: Client,
  config: ApiConfig,
}

impl ApiClient {
  pub fn new(config: ApiConfig) -> Result<Self> {
    let client = Client::builder()
      .timeout(Duration::from_secs(30))
      .build()
      .context("failed to build HTTP client")?;
    Ok(Self { client, config })
  }

  fn url(&self, path: &str) -> String {
    format!(
      "{}/api/applications{}",
      self.config.base_url.trim_end_matches('/'),
      path
    )
  }

  /// Turn a non-2xx response into the server's error string, falling back to
  /// the HTTP status when the body is not the expected shape.
  async fn error_for(verb: &str, resp: reqwest::Response) -> anyhow::Error {
    let status = resp.status();
    match resp.json::<ErrorBody>().await {
      Ok(body) => anyhow!("{}", body.error),
      Err(_) => anyhow!("{verb} → {status}"),
    }
  }

  /// `GET /api/applications`
  pub async fn list_applications(&self) -> Result<Vec<ApplicationRecord>> {
    let resp = self
      .client
      .get(self.url(""))
      .send()
      .await
      .context("GET /applications failed")?;

    if !resp.status().is_success() {
      return Err(Self::error_for("GET /applications", resp).await);
    }
    resp.json().await.context("deserialising applications")
  }

  /// `POST /api/applications`
  pub async fn create_application(&self, input: &NewApplication) -> Result<()> {
    let resp = self
      .client
      .post(self.url(""))
      .json(input)
      .send()
      .await
      .context("POST /applications failed")?;

    if !resp.status().is_success() {
      return Err(Self::error_for("POST /applications", resp).await);
    }
    Ok(())
  }

  /// `PUT /api/applications/{id}`
  pub async fn update_application(
    &self,
    id: i64,
    input: &NewApplication,
  ) -> Result<()> {
    let resp = self
      .client
      .put(self.url(&format!("/{id}")))
      .json(input)
      .send()
      .await
      .context("PUT /applications failed")?;

    if !resp.status().is_success() {
      return Err(Self::error_for("PUT /applications", resp).await);
    }
    Ok(())
  }

  /// `DELETE /api/applications/{id}`
  pub async fn delete_application(&self, id: i64) -> Result<()> {
    let resp = self
      .client
      .delete(self.url(&format!("/{id}")))
      .send()
      .await
      .context("DELETE /applications failed")?;

    if !resp.status().is_success() {
      return Err(Self::error_for("DELETE /applications", resp).await);
    }
    Ok(())
  }
}
