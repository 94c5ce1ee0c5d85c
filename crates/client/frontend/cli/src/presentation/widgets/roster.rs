//! Roster table listing every townsfolk in the current act.

use client_frontend_core::view_model::RosterRow;
use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Row, Table, TableState},
};

use crate::presentation::theme::RatatuiTheme;

pub fn render(
    frame: &mut Frame,
    area: Rect,
    rows: &[RosterRow],
    cursor: usize,
    theme: &RatatuiTheme,
) {
    let header = Row::new(["Type", "X", "Y", "Dialogue"])
        .style(Style::default().add_modifier(Modifier::BOLD));

    let body = rows.iter().map(|row| {
        let dialogue_style = if row.is_custom {
            Style::default().fg(Color::LightCyan)
        } else {
            Style::default().fg(Color::Gray)
        };
        Row::new([
            Cell::from(row.name),
            Cell::from(row.position.x.to_string()),
            Cell::from(row.position.y.to_string()),
            Cell::from(row.dialogue.as_str()).style(dialogue_style),
        ])
    });

    let table = Table::new(
        body,
        [
            Constraint::Length(11),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(10),
        ],
    )
    .header(header)
    .row_highlight_style(theme.highlight())
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!("Roster ({})", rows.len())),
    );

    let mut state = TableState::default();
    if !rows.is_empty() {
        state.select(Some(cursor.min(rows.len() - 1)));
    }
    frame.render_stateful_widget(table, area, &mut state);
}
