//! Dialogue box: who is talking in play mode, or the inline line editor.

use client_frontend_core::view_model::DialogueView;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::state::DialogueEdit;

pub fn render(
    frame: &mut Frame,
    area: Rect,
    dialogue: Option<&DialogueView>,
    editing: Option<&DialogueEdit>,
) {
    let (title, line) = match (editing, dialogue) {
        (Some(edit), _) => (
            format!("Edit dialogue {}", edit.id),
            Line::from(vec![
                Span::raw(edit.buffer.as_str()),
                Span::styled("_", Style::default().add_modifier(Modifier::SLOW_BLINK)),
            ]),
        ),
        (None, Some(dialogue)) => (
            dialogue.speaker.to_string(),
            Line::from(Span::styled(
                dialogue.text.as_str(),
                Style::default().fg(Color::White),
            )),
        ),
        (None, None) => (
            "Dialogue".to_string(),
            Line::from(Span::styled(
                "Walk next to someone to hear them.",
                Style::default().fg(Color::DarkGray),
            )),
        ),
    };

    let paragraph = Paragraph::new(line)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title(title));
    frame.render_widget(paragraph, area);
}
