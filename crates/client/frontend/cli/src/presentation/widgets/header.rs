//! Header widget displaying act, mode and palette selection.

use client_frontend_core::view_model::ViewModel;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use town_core::Mode;

use crate::presentation::theme::RatatuiTheme;

/// Render the header panel.
pub fn render(frame: &mut Frame, area: Rect, view_model: &ViewModel, theme: &RatatuiTheme) {
    let header = &view_model.header;

    let mode_style = match header.mode {
        Mode::Build => Style::default().fg(Color::LightGreen),
        Mode::Play => Style::default().fg(Color::Magenta),
    }
    .add_modifier(Modifier::BOLD);

    let mut spans = vec![
        Span::styled(header.act.to_string(), Style::default().fg(Color::Yellow)),
        Span::raw(" | Mode: "),
        Span::styled(header.mode.to_string(), mode_style),
        Span::raw(" | Placing: "),
        Span::styled(
            header.selected.name(),
            Style::default().fg(theme.type_color(header.selected)),
        ),
        Span::raw(" | Townsfolk: "),
        Span::styled(
            header.population.to_string(),
            Style::default().fg(Color::Cyan),
        ),
        Span::raw(format!(" | Player: {}", header.player)),
    ];
    if header.placing_player {
        spans.push(Span::styled(
            " [SET PLAYER START]",
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        ));
    }

    let paragraph = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL).title("Town Builder"));

    frame.render_widget(paragraph, area);
}
