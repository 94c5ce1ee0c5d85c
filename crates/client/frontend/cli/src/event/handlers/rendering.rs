//! Rendering handlers.

use anyhow::Result;

use super::super::EventLoop;
use crate::presentation::{terminal::Tui, ui};
use client_frontend_core::ViewModel;

impl EventLoop {
    /// Render a fresh snapshot of the editor and remember the map layout.
    pub(in crate::event) fn render(&mut self, terminal: &mut Tui) -> Result<()> {
        let view_model = ViewModel::build(&self.editor);

        let ctx = ui::RenderContext {
            view_model: &view_model,
            messages: &self.messages,
            app_state: &self.app_state,
            input_mode: self.app_state.input_mode(self.editor.mode()),
            message_panel_height: self.cli_config.ui.message_panel_height,
        };

        let layout = ui::render(terminal, &ctx)?;
        self.app_state.map_panel = Some(layout.map_panel);
        self.app_state.map_surface = Some(layout.map_surface);
        Ok(())
    }
}
