//! Ratatui styling for the town editor.
//!
//! Catalog colours are hex strings; terminals that support truecolor get
//! them as-is, anything unparsable falls back to white.

use client_frontend_core::MessageLevel;
use ratatui::style::{Color, Modifier, Style};
use town_core::TypeId;

/// Ratatui-specific theme for the CLI.
#[derive(Clone, Copy, Debug, Default)]
pub struct RatatuiTheme;

impl RatatuiTheme {
    pub fn new() -> Self {
        Self
    }

    /// Map glyph for a townsfolk type.
    pub fn glyph(&self, type_id: TypeId) -> char {
        const GLYPHS: [char; TypeId::COUNT] = ['K', 'S', 'V', 'M', 'G', 'Q', 'E', 'A', 'X'];
        GLYPHS[type_id.index()]
    }

    pub fn type_color(&self, type_id: TypeId) -> Color {
        type_id
            .entity_type()
            .rgb()
            .map(|(r, g, b)| Color::Rgb(r, g, b))
            .unwrap_or(Color::White)
    }

    pub fn render_entity(&self, type_id: TypeId) -> (char, Style) {
        (
            self.glyph(type_id),
            Style::default()
                .fg(self.type_color(type_id))
                .add_modifier(Modifier::BOLD),
        )
    }

    pub fn render_player(&self, dimmed: bool) -> (char, Style) {
        let style = Style::default().fg(Color::Yellow);
        let style = if dimmed {
            style.add_modifier(Modifier::DIM)
        } else {
            style.add_modifier(Modifier::BOLD)
        };
        ('@', style)
    }

    pub fn render_empty(&self) -> (char, Style) {
        ('.', Style::default().fg(Color::DarkGray))
    }

    pub fn cursor(&self, base: Style) -> Style {
        base.bg(Color::DarkGray)
    }

    pub fn style_message(&self, level: MessageLevel) -> Style {
        match level {
            MessageLevel::Info => Style::default().fg(Color::White),
            MessageLevel::Warning => Style::default().fg(Color::Yellow),
            MessageLevel::Error => Style::default().fg(Color::LightRed),
        }
    }

    pub fn highlight(&self) -> Style {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_colors_become_rgb() {
        let theme = RatatuiTheme::new();
        let queen = TypeId::from_name("Queen").unwrap();
        assert_eq!(theme.type_color(queen), Color::Rgb(0xFF, 0xD7, 0x00));
    }

    #[test]
    fn every_type_has_a_distinct_glyph() {
        let theme = RatatuiTheme::new();
        let mut glyphs: Vec<_> = TypeId::all().map(|t| theme.glyph(t)).collect();
        glyphs.sort_unstable();
        glyphs.dedup();
        assert_eq!(glyphs.len(), TypeId::COUNT);
    }
}
