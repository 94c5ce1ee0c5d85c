//! Map panel: the 40x15 town grid with townsfolk, player and cursor.

use client_frontend_core::view_model::ViewModel;
use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use town_core::{GridDimensions, Mode, Position};

use crate::presentation::theme::RatatuiTheme;

/// Where the grid was drawn, used to turn mouse positions into fractions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MapSurface {
    pub x: u16,
    pub y: u16,
    /// Terminal columns per grid cell.
    pub cell_width: u16,
    pub grid_width: u32,
    pub grid_height: u32,
}

impl MapSurface {
    /// Lays the grid out inside `inner`, using two columns per cell when
    /// there is room so cells look roughly square.
    pub fn fit(inner: Rect, grid_width: u32, grid_height: u32) -> Self {
        let cell_width = if u32::from(inner.width) >= grid_width * 2 {
            2
        } else {
            1
        };
        Self {
            x: inner.x,
            y: inner.y,
            cell_width,
            grid_width,
            grid_height,
        }
    }

    /// Pointer position as fractions of the drawn grid. Values outside
    /// `[0, 1)` mean the pointer missed the grid.
    pub fn fraction(&self, column: u16, row: u16) -> (f64, f64) {
        let surface_width = f64::from(self.cell_width) * self.grid_width as f64;
        let frac_x = (f64::from(column) - f64::from(self.x)) / surface_width;
        let frac_y = (f64::from(row) - f64::from(self.y)) / self.grid_height as f64;
        (frac_x, frac_y)
    }
}

/// Pointer fractions at the centre of `position`, as if it were clicked.
pub fn cell_centre(grid: GridDimensions, position: Position) -> (f64, f64) {
    (
        (f64::from(position.x) + 0.5) / f64::from(grid.width),
        (f64::from(position.y) + 0.5) / f64::from(grid.height),
    )
}

pub struct MapContext<'a> {
    pub view_model: &'a ViewModel,
    /// Keyboard cursor, drawn in build mode only.
    pub cursor: Option<Position>,
}

/// Render the map panel and return where the grid landed.
pub fn render(
    frame: &mut Frame,
    area: Rect,
    ctx: &MapContext,
    theme: &RatatuiTheme,
) -> MapSurface {
    let header = &ctx.view_model.header;
    let map = &ctx.view_model.map;

    let title = match (header.mode, header.placing_player) {
        (Mode::Build, true) => format!(" {} | click to set player start ", header.act),
        _ => format!(" {} | {} ", header.act, header.mode),
    };
    let block = Block::default().borders(Borders::ALL).title(title);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let surface = MapSurface::fit(inner, map.width, map.height);
    let pad = " ".repeat(usize::from(surface.cell_width.saturating_sub(1)));

    let mut lines = Vec::with_capacity(map.height as usize);
    for y in 0..map.height as i32 {
        let mut spans = Vec::with_capacity(map.width as usize);
        for x in 0..map.width as i32 {
            let position = Position::new(x, y);
            let (glyph, mut style) = cell_glyph(ctx, position, theme);
            if ctx.cursor == Some(position) {
                style = theme.cursor(style);
            }
            spans.push(Span::styled(format!("{glyph}{pad}"), style));
        }
        lines.push(Line::from(spans));
    }

    frame.render_widget(Paragraph::new(lines), inner);
    surface
}

fn cell_glyph(ctx: &MapContext, position: Position, theme: &RatatuiTheme) -> (char, Style) {
    let map = &ctx.view_model.map;
    if let Some(player) = map.player.as_ref().filter(|p| p.position == position) {
        return theme.render_player(player.dimmed);
    }
    match map.marker_at(position) {
        Some(marker) => theme.render_entity(marker.type_id),
        None => theme.render_empty(),
    }
}
