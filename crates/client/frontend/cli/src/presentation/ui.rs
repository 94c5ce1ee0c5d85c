//! UI rendering entry point composing all widgets.
use anyhow::Result;
use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::{
    input::InputMode,
    presentation::{
        terminal::Tui,
        theme::RatatuiTheme,
        widgets::{self, map::MapSurface},
    },
    state::AppState,
};
use client_frontend_core::{MessageLog, ViewModel};
use town_core::Mode;

const DIALOGUE_PANEL_HEIGHT: u16 = 4;
const SIDEBAR_WIDTH: u16 = 22;
const PALETTE_HEIGHT: u16 = 11;

/// Rendering context containing all state and configuration needed for UI rendering.
pub struct RenderContext<'a> {
    pub view_model: &'a ViewModel,
    pub messages: &'a MessageLog,
    pub app_state: &'a AppState,
    pub input_mode: InputMode,
    pub message_panel_height: u16,
}

/// Screen regions the input handlers need after a frame is drawn.
#[derive(Clone, Copy, Debug)]
pub struct FrameLayout {
    pub map_panel: Rect,
    pub map_surface: MapSurface,
}

/// Render the terminal UI from a [`ViewModel`] snapshot.
pub fn render(terminal: &mut Tui, ctx: &RenderContext) -> Result<FrameLayout> {
    let theme = RatatuiTheme::new();
    let mut layout = None;

    terminal.draw(|frame| {
        layout = Some(render_editor(frame, ctx, &theme));
    })?;

    layout.ok_or_else(|| anyhow::anyhow!("terminal draw produced no frame"))
}

fn render_editor(
    frame: &mut ratatui::Frame,
    ctx: &RenderContext,
    theme: &RatatuiTheme,
) -> FrameLayout {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                        // Header
            Constraint::Min(0),                           // Body
            Constraint::Length(DIALOGUE_PANEL_HEIGHT),    // Dialogue box
            Constraint::Length(ctx.message_panel_height), // Messages
            Constraint::Length(1),                        // Footer
        ])
        .split(frame.area());

    let map_width = ctx.view_model.map.width as u16 * 2 + 2;
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(SIDEBAR_WIDTH),
            Constraint::Length(map_width),
            Constraint::Min(30),
        ])
        .split(rows[1]);

    let sidebar = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(PALETTE_HEIGHT), Constraint::Min(0)])
        .split(columns[0]);

    widgets::header::render(frame, rows[0], ctx.view_model, theme);

    widgets::palette::render(frame, sidebar[0], &ctx.view_model.palette, theme);
    widgets::palette::render_summary(frame, sidebar[1], &ctx.view_model.summary, theme);

    let cursor = (ctx.view_model.header.mode == Mode::Build && !ctx.app_state.is_editing())
        .then_some(ctx.app_state.map_cursor);
    let map_ctx = widgets::map::MapContext {
        view_model: ctx.view_model,
        cursor,
    };
    let map_surface = widgets::map::render(frame, columns[1], &map_ctx, theme);

    widgets::roster::render(
        frame,
        columns[2],
        &ctx.view_model.roster,
        ctx.app_state.roster_cursor,
        theme,
    );

    widgets::dialogue_box::render(
        frame,
        rows[2],
        ctx.view_model.dialogue.as_ref(),
        ctx.app_state.editing(),
    );

    let recent: Vec<_> = ctx
        .messages
        .recent(ctx.message_panel_height.saturating_sub(2) as usize)
        .cloned()
        .collect();
    widgets::messages::render(frame, rows[3], &recent, theme);

    widgets::footer::render(frame, rows[4], ctx.input_mode);

    FrameLayout {
        map_panel: columns[1],
        map_surface,
    }
}
