//! Palette and population summary sidebar.

use client_frontend_core::view_model::{PaletteEntry, SummaryRow};
use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::presentation::theme::RatatuiTheme;

pub fn render(frame: &mut Frame, area: Rect, entries: &[PaletteEntry], theme: &RatatuiTheme) {
    let lines: Vec<Line> = entries
        .iter()
        .map(|entry| {
            let (glyph, glyph_style) = theme.render_entity(entry.type_id);
            let label_style = if entry.selected {
                theme.highlight()
            } else {
                Style::default()
            };
            Line::from(vec![
                Span::raw(format!("{} ", entry.hotkey)),
                Span::styled(glyph.to_string(), glyph_style),
                Span::styled(format!(" {}", entry.name), label_style),
            ])
        })
        .collect();

    let paragraph =
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Palette"));
    frame.render_widget(paragraph, area);
}

pub fn render_summary(frame: &mut Frame, area: Rect, rows: &[SummaryRow], theme: &RatatuiTheme) {
    let lines: Vec<Line> = if rows.is_empty() {
        vec![Line::from("(empty)")]
    } else {
        rows.iter()
            .map(|row| {
                Line::from(vec![
                    Span::styled(
                        format!("{:<11}", row.name),
                        Style::default().fg(theme.type_color(row.type_id)),
                    ),
                    Span::raw(format!("{:>3}", row.count)),
                ])
            })
            .collect()
    };

    let paragraph =
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Population"));
    frame.render_widget(paragraph, area);
}
