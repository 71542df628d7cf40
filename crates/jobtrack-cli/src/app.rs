//! Application state machine and event dispatcher.
//!
//! The record list is a disposable cache of the server's collection: it is
//! replaced wholesale by [`App::load_all`] after every successful mutation,
//! never patched locally, so displayed timestamps are always
//! server-authoritative.

use std::sync::Arc;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use jobtrack_core::{
  draft::NewApplication,
  record::{ApplicationRecord, STATUS_OPTIONS},
};

use crate::client::ApiClient;

// ─── Form ─────────────────────────────────────────────────────────────────────

/// Which form field currently has keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
  Position,
  Company,
  Status,
}

/// In-progress contents of the create/edit modal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
  /// `Some(id)` when editing an existing record, `None` when creating.
  pub editing:    Option<i64>,
  pub position:   String,
  pub company:    String,
  /// Index into [`STATUS_OPTIONS`].
  pub status_idx: usize,
  pub focus:      FormField,
}

impl FormState {
  /// Empty form with the default status, for creating a new record.
  pub fn for_create() -> Self {
    Self {
      editing:    None,
      position:   String::new(),
      company:    String::new(),
      status_idx: 0,
      focus:      FormField::Position,
    }
  }

  /// Form pre-filled from an existing record.
  ///
  /// A status outside the UI vocabulary (possible when another client wrote
  /// it) falls back to the first option.
  pub fn for_edit(record: &ApplicationRecord) -> Self {
    Self {
      editing:    Some(record.id),
      position:   record.position.clone(),
      company:    record.company.clone(),
      status_idx: STATUS_OPTIONS
        .iter()
        .position(|s| *s == record.status)
        .unwrap_or(0),
      focus:      FormField::Position,
    }
  }

  /// The currently-selected status option.
  pub fn status(&self) -> &'static str { STATUS_OPTIONS[self.status_idx] }

  fn to_input(&self) -> NewApplication {
    NewApplication {
      position: self.position.clone(),
      company:  self.company.clone(),
      status:   self.status().to_string(),
    }
  }

  fn next_field(&mut self) {
    self.focus = match self.focus {
      FormField::Position => FormField::Company,
      FormField::Company => FormField::Status,
      FormField::Status => FormField::Position,
    };
  }

  fn prev_field(&mut self) {
    self.focus = match self.focus {
      FormField::Position => FormField::Status,
      FormField::Company => FormField::Position,
      FormField::Status => FormField::Company,
    };
  }
}

// ─── Modal ────────────────────────────────────────────────────────────────────

/// Modal overlay state: `Closed → Form → Closed` via open / cancel /
/// successful submit, plus a delete-confirmation prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Modal {
  Closed,
  Form(FormState),
  ConfirmDelete(i64),
}

// ─── App ──────────────────────────────────────────────────────────────────────

/// Top-level application state.
pub struct App {
  /// Cached collection, most recently created first.
  pub applications: Vec<ApplicationRecord>,

  /// Set when a full load fails; rendered in place of the table when no
  /// earlier cache is available.
  pub load_error: Option<String>,

  /// True until the first load completes (success or failure).
  pub loading: bool,

  /// Modal overlay state.
  pub modal: Modal,

  /// Cursor position within the table.
  pub table_cursor: usize,

  /// One-line status / error message shown in the status bar.
  pub status_msg: String,

  /// Shared HTTP client.
  pub client: Arc<ApiClient>,
}

impl App {
  /// Create an [`App`] with an empty record list.
  pub fn new(client: ApiClient) -> Self {
    Self {
      applications: Vec::new(),
      load_error: None,
      loading: true,
      modal: Modal::Closed,
      table_cursor: 0,
      status_msg: String::new(),
      client: Arc::new(client),
    }
  }

  // ── Data loading ──────────────────────────────────────────────────────────

  /// Fetch the full collection and replace the local cache.
  ///
  /// On success any error state is cleared. On failure the previous cache
  /// (possibly empty) stays in place and the error is surfaced instead.
  pub async fn load_all(&mut self) {
    self.status_msg = "Loading…".into();
    match self.client.list_applications().await {
      Ok(records) => {
        self.applications = records;
        self.load_error = None;
        self.status_msg = String::new();
        if self.table_cursor >= self.applications.len() {
          self.table_cursor = self.applications.len().saturating_sub(1);
        }
      }
      Err(e) => {
        self.load_error = Some(e.to_string());
        self.status_msg = format!("Error: {e}");
      }
    }
    self.loading = false;
  }

  /// The record under the table cursor, if any.
  pub fn cursor_record(&self) -> Option<&ApplicationRecord> {
    self.applications.get(self.table_cursor)
  }

  // ── Modal transitions ─────────────────────────────────────────────────────

  /// Open the modal with an empty form. No server traffic.
  pub fn open_create_form(&mut self) {
    self.modal = Modal::Form(FormState::for_create());
  }

  /// Open the modal pre-filled from `record`. No server traffic.
  pub fn open_edit_form(&mut self, record: &ApplicationRecord) {
    self.modal = Modal::Form(FormState::for_edit(record));
  }

  /// Close the modal, discarding any entered values.
  pub fn close_modal(&mut self) { self.modal = Modal::Closed; }

  // ── Mutations ─────────────────────────────────────────────────────────────

  /// Submit the open form: update when editing, create otherwise.
  ///
  /// On success the modal closes and the collection is reloaded in full —
  /// never merged locally. On failure the form stays open with the entered
  /// values intact and the server's error string lands in the status bar,
  /// so the action can be retried without re-typing.
  pub async fn submit(&mut self) {
    let Modal::Form(form) = &self.modal else { return };
    let input = form.to_input();

    let result = match form.editing {
      Some(id) => self.client.update_application(id, &input).await,
      None => self.client.create_application(&input).await,
    };

    match result {
      Ok(()) => {
        self.modal = Modal::Closed;
        self.load_all().await;
      }
      Err(e) => {
        self.status_msg = format!("Error: {e}");
      }
    }
  }

  /// Ask for confirmation before deleting the record under the cursor.
  pub fn request_delete(&mut self) {
    if let Some(record) = self.cursor_record() {
      self.modal = Modal::ConfirmDelete(record.id);
    }
  }

  /// Delete `id` after the user has confirmed.
  ///
  /// On failure the cache is left untouched and the error is surfaced in
  /// the status bar.
  pub async fn confirm_delete(&mut self, id: i64) {
    self.modal = Modal::Closed;
    match self.client.delete_application(id).await {
      Ok(()) => self.load_all().await,
      Err(e) => self.status_msg = format!("Error: {e}"),
    }
  }

  // ── Key handling ──────────────────────────────────────────────────────────

  /// Process a key event. Returns `true` to continue, `false` to quit.
  pub async fn handle_key(&mut self, key: KeyEvent) -> bool {
    // Global: Ctrl-C quits from anywhere.
    if key.modifiers.contains(KeyModifiers::CONTROL)
      && key.code == KeyCode::Char('c')
    {
      return false;
    }

    match &self.modal {
      Modal::Closed => self.handle_table_key(key).await,
      Modal::Form(_) => {
        self.handle_form_key(key).await;
        true
      }
      Modal::ConfirmDelete(id) => {
        let id = *id;
        self.handle_confirm_key(key, id).await;
        true
      }
    }
  }

  async fn handle_table_key(&mut self, key: KeyEvent) -> bool {
    match key.code {
      // Quit
      KeyCode::Char('q') => return false,

      // Navigation
      KeyCode::Down | KeyCode::Char('j') => {
        if !self.applications.is_empty()
          && self.table_cursor + 1 < self.applications.len()
        {
          self.table_cursor += 1;
        }
      }
      KeyCode::Up | KeyCode::Char('k') => {
        if self.table_cursor > 0 {
          self.table_cursor -= 1;
        }
      }

      // Mutations
      KeyCode::Char('a') => self.open_create_form(),
      KeyCode::Enter | KeyCode::Char('e') => {
        if let Some(record) = self.cursor_record().cloned() {
          self.open_edit_form(&record);
        }
      }
      KeyCode::Char('d') => self.request_delete(),

      // Manual refresh
      KeyCode::Char('r') => self.load_all().await,

      _ => {}
    }
    true
  }

  async fn handle_form_key(&mut self, key: KeyEvent) {
    // Cancel and submit change the modal itself; everything else edits the
    // form in place.
    match key.code {
      KeyCode::Esc => {
        self.close_modal();
        return;
      }
      KeyCode::Enter => {
        self.submit().await;
        return;
      }
      _ => {}
    }

    let Modal::Form(form) = &mut self.modal else { return };
    match key.code {
      KeyCode::Tab => form.next_field(),
      KeyCode::BackTab => form.prev_field(),

      KeyCode::Char(c) => match form.focus {
        FormField::Position => form.position.push(c),
        FormField::Company => form.company.push(c),
        FormField::Status => {}
      },
      KeyCode::Backspace => match form.focus {
        FormField::Position => {
          form.position.pop();
        }
        FormField::Company => {
          form.company.pop();
        }
        FormField::Status => {}
      },

      KeyCode::Left if form.focus == FormField::Status => {
        form.status_idx =
          (form.status_idx + STATUS_OPTIONS.len() - 1) % STATUS_OPTIONS.len();
      }
      KeyCode::Right if form.focus == FormField::Status => {
        form.status_idx = (form.status_idx + 1) % STATUS_OPTIONS.len();
      }

      _ => {}
    }
  }

  async fn handle_confirm_key(&mut self, key: KeyEvent, id: i64) {
    match key.code {
      KeyCode::Char('y') | KeyCode::Char('Y') => self.confirm_delete(id).await,
      KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
        self.close_modal()
      }
      _ => {}
    }
  }
}

// ─── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;

  use jobtrack_store_sqlite::SqliteStore;
  use tokio::net::TcpListener;

  use crate::client::{ApiClient, ApiConfig};

  /// Spin up the real API router on an ephemeral port and return an [`App`]
  /// pointed at it.
  async fn app_against_live_server() -> App {
    let store = SqliteStore::open_in_memory().await.unwrap();
    let router = axum::Router::new()
      .nest("/api", jobtrack_api::api_router(Arc::new(store)));

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
      axum::serve(listener, router).await.unwrap();
    });

    let client = ApiClient::new(ApiConfig {
      base_url: format!("http://{addr}"),
    })
    .unwrap();
    App::new(client)
  }

  fn fill_create_form(app: &mut App, position: &str, company: &str) {
    app.open_create_form();
    if let Modal::Form(form) = &mut app.modal {
      form.position = position.into();
      form.company = company.into();
    }
  }

  // ── Modal state machine ─────────────────────────────────────────────────────

  #[tokio::test]
  async fn create_form_opens_with_defaults() {
    let app = {
      let mut app = app_against_live_server().await;
      app.open_create_form();
      app
    };

    let Modal::Form(form) = &app.modal else { panic!("form not open") };
    assert_eq!(form.editing, None);
    assert!(form.position.is_empty());
    assert!(form.company.is_empty());
    assert_eq!(form.status(), "Applied");
  }

  #[tokio::test]
  async fn cancel_discards_entered_values() {
    let mut app = app_against_live_server().await;
    fill_create_form(&mut app, "Engineer", "Acme");

    app.close_modal();
    assert_eq!(app.modal, Modal::Closed);

    // Re-opening starts from defaults again.
    app.open_create_form();
    let Modal::Form(form) = &app.modal else { panic!("form not open") };
    assert!(form.position.is_empty());
  }

  // ── Load / submit synchronization ───────────────────────────────────────────

  #[tokio::test]
  async fn load_replaces_cache_and_clears_error() {
    let mut app = app_against_live_server().await;
    app.load_error = Some("stale".into());

    app.load_all().await;
    assert!(app.applications.is_empty());
    assert_eq!(app.load_error, None);
    assert!(!app.loading);
  }

  #[tokio::test]
  async fn submit_create_closes_modal_and_reloads() {
    let mut app = app_against_live_server().await;
    app.load_all().await;

    fill_create_form(&mut app, "Engineer", "Acme");
    app.submit().await;

    assert_eq!(app.modal, Modal::Closed);
    assert_eq!(app.applications.len(), 1);
    assert_eq!(app.applications[0].position, "Engineer");
    // Timestamps come from the server, never guessed locally.
    assert_eq!(
      app.applications[0].created_at,
      app.applications[0].updated_at
    );
  }

  #[tokio::test]
  async fn rejected_submit_keeps_form_open_with_values() {
    let mut app = app_against_live_server().await;
    app.load_all().await;

    // Company left blank: the server rejects the draft with a 400.
    fill_create_form(&mut app, "Engineer", "");
    app.submit().await;

    let Modal::Form(form) = &app.modal else { panic!("form closed") };
    assert_eq!(form.position, "Engineer");
    assert!(app.status_msg.contains("company"), "msg: {}", app.status_msg);
    assert!(app.applications.is_empty());
  }

  #[tokio::test]
  async fn edit_prefills_and_update_roundtrips() {
    let mut app = app_against_live_server().await;
    app.load_all().await;

    fill_create_form(&mut app, "Engineer", "Acme");
    app.submit().await;

    let record = app.cursor_record().cloned().unwrap();
    app.open_edit_form(&record);
    {
      let Modal::Form(form) = &mut app.modal else { panic!("form not open") };
      assert_eq!(form.editing, Some(record.id));
      assert_eq!(form.position, "Engineer");
      // Applied → Interview.
      form.status_idx = 1;
    }
    app.submit().await;

    assert_eq!(app.modal, Modal::Closed);
    assert_eq!(app.applications[0].status, "Interview");
    assert!(app.applications[0].updated_at >= app.applications[0].created_at);
  }

  // ── Delete confirmation ─────────────────────────────────────────────────────

  #[tokio::test]
  async fn delete_requires_confirmation() {
    let mut app = app_against_live_server().await;
    app.load_all().await;

    fill_create_form(&mut app, "Engineer", "Acme");
    app.submit().await;
    let id = app.applications[0].id;

    // Declining leaves the record alone.
    app.request_delete();
    assert_eq!(app.modal, Modal::ConfirmDelete(id));
    app.close_modal();
    assert_eq!(app.applications.len(), 1);

    // Confirming deletes and reloads.
    app.request_delete();
    app.confirm_delete(id).await;
    assert_eq!(app.modal, Modal::Closed);
    assert!(app.applications.is_empty());
  }

  // ── Failure handling ────────────────────────────────────────────────────────

  #[tokio::test]
  async fn failed_load_keeps_previous_cache() {
    let mut app = app_against_live_server().await;
    app.load_all().await;

    fill_create_form(&mut app, "Engineer", "Acme");
    app.submit().await;
    assert_eq!(app.applications.len(), 1);

    // Point the app at a dead port; the reload fails but the cache
    // survives.
    app.client = Arc::new(
      ApiClient::new(ApiConfig {
        base_url: "http://127.0.0.1:1".into(),
      })
      .unwrap(),
    );
    app.load_all().await;

    assert_eq!(app.applications.len(), 1);
    assert!(app.load_error.is_some());
  }
}
