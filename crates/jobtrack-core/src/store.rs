//! The `ApplicationStore` trait.
//!
//! The trait is implemented by storage backends (e.g.
//! `jobtrack-store-sqlite`). Higher layers (`jobtrack-api`, `jobtrack-cli`
//! tests) depend on this abstraction, not on any concrete backend.

use std::future::Future;

use crate::{draft::NewApplication, record::ApplicationRecord};

/// Abstraction over a jobtrack application store backend.
///
/// Every mutation is a single atomic statement against one row — there are
/// no cross-record invariants to preserve, so no multi-statement
/// transactions. `update` and `delete` report whether a row matched instead
/// of failing, so a missing id surfaces as not-found rather than as a
/// storage error, and a repeated delete is a clean `false`.
///
/// All methods return `Send` futures so the trait can be used in
/// multi-threaded async runtimes (e.g. tokio with `axum`).
pub trait ApplicationStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// All records, most recently created first.
  fn list_all(
    &self,
  ) -> impl Future<Output = Result<Vec<ApplicationRecord>, Self::Error>> + Send + '_;

  /// Retrieve a record by id. Returns `None` if no row matches.
  fn get(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<Option<ApplicationRecord>, Self::Error>> + Send + '_;

  /// Persist a new record. The store assigns the `id` and both timestamps;
  /// `created_at == updated_at` on the returned record.
  fn create(
    &self,
    input: NewApplication,
  ) -> impl Future<Output = Result<ApplicationRecord, Self::Error>> + Send + '_;

  /// Replace the three mutable fields of the row matching `id` and refresh
  /// `updated_at`. Returns `false` if no row matched.
  fn update(
    &self,
    id: i64,
    input: NewApplication,
  ) -> impl Future<Output = Result<bool, Self::Error>> + Send + '_;

  /// Hard-delete the row matching `id`. Returns `false` if no row matched.
  fn delete(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<bool, Self::Error>> + Send + '_;
}
