//! Terminal rendering: setup/teardown, theme and widgets.
pub mod terminal;
pub mod theme;
pub mod ui;
pub mod widgets;
