//! Status message panel.

use client_frontend_core::MessageEntry;
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::presentation::theme::RatatuiTheme;

/// Render `entries` (newest first) oldest-at-top.
pub fn render(frame: &mut Frame, area: Rect, entries: &[MessageEntry], theme: &RatatuiTheme) {
    let lines: Vec<Line> = entries
        .iter()
        .rev()
        .map(|entry| {
            Line::from(Span::styled(
                entry.text.as_str(),
                theme.style_message(entry.level),
            ))
        })
        .collect();

    let paragraph =
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Messages"));
    frame.render_widget(paragraph, area);
}
