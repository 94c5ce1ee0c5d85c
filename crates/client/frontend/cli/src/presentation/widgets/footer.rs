//! Key hint footer.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    widgets::Paragraph,
};

use crate::input::InputMode;

pub fn render(frame: &mut Frame, area: Rect, mode: InputMode) {
    let hints = match mode {
        InputMode::Build => {
            "1-9 type | click/space place | p player | arrows cursor | j/k roster | \
             enter edit | r random | x delete | c clear | tab/F1-F3 act | e export | \
             i import | m play | q quit"
        }
        InputMode::Play => "arrows/wasd move | tab/F1-F3 act | m build | q quit",
        InputMode::Editing => "type to edit | enter save | esc cancel",
    };

    frame.render_widget(
        Paragraph::new(hints).style(Style::default().fg(Color::DarkGray)),
        area,
    );
}
