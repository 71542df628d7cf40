//! Modal form and delete-confirmation overlays.

use ratatui::{
  Frame,
  layout::{Constraint, Direction, Layout, Rect},
  style::{Color, Modifier, Style},
  text::{Line, Span},
  widgets::{Block, Borders, Clear, Paragraph},
};

use crate::app::{FormField, FormState};

/// Centre a `width`×`height` rect inside `area`.
fn centered(area: Rect, width: u16, height: u16) -> Rect {
  let width = width.min(area.width);
  let height = height.min(area.height);
  Rect {
    x: area.x + (area.width - width) / 2,
    y: area.y + (area.height - height) / 2,
    width,
    height,
  }
}

// ─── Create / edit form ───────────────────────────────────────────────────────

/// Render the create/edit modal over the table.
pub fn draw_form(f: &mut Frame, area: Rect, form: &FormState) {
  let title = if form.editing.is_some() {
    " Edit Application "
  } else {
    " Add Application "
  };

  let rect = centered(area, 46, 8);
  f.render_widget(Clear, rect);

  let block = Block::default()
    .title(title)
    .borders(Borders::ALL)
    .border_style(Style::default().fg(Color::Blue));
  let inner = block.inner(rect);
  f.render_widget(block, rect);

  let rows = Layout::default()
    .direction(Direction::Vertical)
    .constraints([
      Constraint::Length(1), // position
      Constraint::Length(1), // company
      Constraint::Length(1), // status
      Constraint::Length(1), // spacer
      Constraint::Length(1), // hints
    ])
    .split(inner);

  draw_text_field(
    f,
    rows[0],
    "Position",
    &form.position,
    form.focus == FormField::Position,
  );
  draw_text_field(
    f,
    rows[1],
    "Company",
    &form.company,
    form.focus == FormField::Company,
  );
  draw_status_field(f, rows[2], form);

  f.render_widget(
    Paragraph::new(Line::from(Span::styled(
      " Tab next field  Enter save  Esc cancel",
      Style::default().fg(Color::DarkGray),
    ))),
    rows[4],
  );
}

fn label_style(focused: bool) -> Style {
  if focused {
    Style::default()
      .fg(Color::Yellow)
      .add_modifier(Modifier::BOLD)
  } else {
    Style::default().fg(Color::DarkGray)
  }
}

fn draw_text_field(
  f:       &mut Frame,
  area:    Rect,
  label:   &str,
  value:   &str,
  focused: bool,
) {
  let cursor = if focused { "_" } else { "" };
  let line = Line::from(vec![
    Span::styled(format!(" {label:<9}"), label_style(focused)),
    Span::raw(format!("{value}{cursor}")),
  ]);
  f.render_widget(Paragraph::new(line), area);
}

fn draw_status_field(f: &mut Frame, area: Rect, form: &FormState) {
  let focused = form.focus == FormField::Status;
  let line = Line::from(vec![
    Span::styled(" Status   ".to_string(), label_style(focused)),
    Span::raw("◂ "),
    Span::styled(
      form.status(),
      Style::default().add_modifier(Modifier::BOLD),
    ),
    Span::raw(" ▸"),
  ]);
  f.render_widget(Paragraph::new(line), area);
}

// ─── Delete confirmation ──────────────────────────────────────────────────────

/// Render the delete-confirmation prompt.
pub fn draw_confirm(f: &mut Frame, area: Rect) {
  let rect = centered(area, 36, 4);
  f.render_widget(Clear, rect);

  let block = Block::default()
    .title(" Delete ")
    .borders(Borders::ALL)
    .border_style(Style::default().fg(Color::Red));
  let inner = block.inner(rect);
  f.render_widget(block, rect);

  let lines = vec![
    Line::from("Delete this application?"),
    Line::from(Span::styled(
      "[y] delete  [n] cancel",
      Style::default().fg(Color::DarkGray),
    )),
  ];
  f.render_widget(Paragraph::new(lines).centered(), inner);
}
