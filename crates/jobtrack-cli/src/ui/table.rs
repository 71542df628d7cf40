//! Applications table — the main pane.

use chrono::{DateTime, Local, Utc};
use ratatui::{
  Frame,
  layout::{Constraint, Rect},
  style::{Color, Modifier, Style},
  text::Span,
  widgets::{Block, Borders, Cell, Row, Table, TableState},
};

use crate::app::App;

/// Badge color for a status value; statuses outside the UI vocabulary fall
/// back to gray.
fn status_color(status: &str) -> Color {
  match status {
    "Applied" => Color::Blue,
    "Interview" => Color::Yellow,
    "Offer" => Color::Green,
    "Rejected" => Color::Red,
    _ => Color::Gray,
  }
}

/// Server timestamps are UTC; render them in the viewer's local timezone.
fn fmt_local(dt: &DateTime<Utc>) -> String {
  dt.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string()
}

/// Render the applications table into `area`.
pub fn draw(f: &mut Frame, area: Rect, app: &App) {
  let title = format!(" Applications ({}) ", app.applications.len());

  let block = Block::default()
    .title(title)
    .borders(Borders::ALL)
    .border_style(Style::default().fg(Color::DarkGray));

  let header = Row::new(["Position", "Company", "Status", "Created", "Updated"])
    .style(
      Style::default()
        .fg(Color::DarkGray)
        .add_modifier(Modifier::BOLD),
    );

  let rows: Vec<Row> = app
    .applications
    .iter()
    .map(|r| {
      Row::new(vec![
        Cell::from(r.position.clone()),
        Cell::from(r.company.clone()),
        Cell::from(Span::styled(
          r.status.clone(),
          Style::default().fg(status_color(&r.status)),
        )),
        Cell::from(fmt_local(&r.created_at)),
        Cell::from(fmt_local(&r.updated_at)),
      ])
    })
    .collect();

  let mut state = TableState::default();
  state.select(if app.applications.is_empty() {
    None
  } else {
    Some(app.table_cursor)
  });

  let table = Table::new(
    rows,
    [
      Constraint::Percentage(30),
      Constraint::Percentage(25),
      Constraint::Length(12),
      Constraint::Length(17),
      Constraint::Length(17),
    ],
  )
  .header(header)
  .block(block)
  .row_highlight_style(
    Style::default()
      .bg(Color::Blue)
      .fg(Color::White)
      .add_modifier(Modifier::BOLD),
  );

  f.render_stateful_widget(table, area, &mut state);
}
