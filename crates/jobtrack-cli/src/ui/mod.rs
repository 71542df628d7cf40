//! TUI rendering — table, modal overlays, status bar.

pub mod form;
pub mod table;

use ratatui::{
  Frame,
  layout::{Constraint, Direction, Layout, Rect},
  style::{Color, Modifier, Style},
  text::{Line, Span},
  widgets::{Block, Paragraph},
};

use crate::app::{App, Modal};

// ─── Root draw ────────────────────────────────────────────────────────────────

/// Main draw function called each frame.
pub fn draw(f: &mut Frame, app: &App) {
  let area = f.area();

  // Vertical stack: header, body, status bar.
  let rows = Layout::default()
    .direction(Direction::Vertical)
    .constraints([
      Constraint::Length(1), // header
      Constraint::Min(0),    // body
      Constraint::Length(1), // status bar
    ])
    .split(area);

  draw_header(f, rows[0]);
  draw_body(f, rows[1], app);
  draw_status(f, rows[2], app);

  // Modal overlays render on top of the table.
  match &app.modal {
    Modal::Closed => {}
    Modal::Form(form) => form::draw_form(f, area, form),
    Modal::ConfirmDelete(_) => form::draw_confirm(f, area),
  }
}

// ─── Header ───────────────────────────────────────────────────────────────────

fn draw_header(f: &mut Frame, area: Rect) {
  let line = Line::from(Span::styled(
    " jobtrack  [a] add  [q] quit",
    Style::default()
      .fg(Color::White)
      .add_modifier(Modifier::BOLD),
  ));

  let block = Block::default().style(Style::default().bg(Color::DarkGray));
  let inner = block.inner(area);
  f.render_widget(block, area);
  f.render_widget(Paragraph::new(line), inner);
}

// ─── Body ─────────────────────────────────────────────────────────────────────

fn draw_body(f: &mut Frame, area: Rect, app: &App) {
  if app.loading {
    draw_notice(f, area, "Loading…", Color::DarkGray);
    return;
  }

  // A failed load with nothing cached blocks the table entirely; with a
  // previous cache the stale table stays visible and the error lives in the
  // status bar.
  if app.applications.is_empty() {
    if let Some(err) = &app.load_error {
      draw_notice(f, area, err, Color::Red);
    } else {
      draw_notice(
        f,
        area,
        "No applications found. Start applying!",
        Color::DarkGray,
      );
    }
    return;
  }

  table::draw(f, area, app);
}

fn draw_notice(f: &mut Frame, area: Rect, message: &str, color: Color) {
  let rows = Layout::default()
    .direction(Direction::Vertical)
    .constraints([
      Constraint::Percentage(40),
      Constraint::Length(1),
      Constraint::Min(0),
    ])
    .split(area);

  f.render_widget(
    Paragraph::new(Line::from(Span::styled(
      message.to_string(),
      Style::default().fg(color),
    )))
    .centered(),
    rows[1],
  );
}

// ─── Status bar ───────────────────────────────────────────────────────────────

fn draw_status(f: &mut Frame, area: Rect, app: &App) {
  let (mode_label, hints) = match &app.modal {
    Modal::Closed => (
      "LIST",
      "↑↓/jk navigate  a add  e edit  d delete  r reload  q quit",
    ),
    Modal::Form(form) if form.editing.is_some() => {
      ("EDIT", "Tab field  ←→ status  Enter save  Esc cancel")
    }
    Modal::Form(_) => ("ADD", "Tab field  ←→ status  Enter save  Esc cancel"),
    Modal::ConfirmDelete(_) => ("CONFIRM", "y delete  n cancel"),
  };

  let status = if app.status_msg.is_empty() {
    hints.to_string()
  } else {
    app.status_msg.clone()
  };

  let mode_span = Span::styled(
    format!(" {mode_label} "),
    Style::default()
      .fg(Color::Black)
      .bg(Color::Cyan)
      .add_modifier(Modifier::BOLD),
  );
  let hint_span = Span::styled(
    format!("  {status}"),
    Style::default().fg(Color::DarkGray),
  );

  let line = Line::from(vec![mode_span, hint_span]);
  f.render_widget(
    Paragraph::new(line).style(Style::default().bg(Color::Black)),
    area,
  );
}
