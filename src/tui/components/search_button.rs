//! # SearchButton Component
//!
//! The "Search" button next to the input. It can take focus (Tab) but
//! pressing it does nothing beyond a log line; lookups are driven by typing.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Paragraph};

use crate::tui::component::Component;

pub const LABEL: &str = "Search";

pub struct SearchButton {
    /// Whether the button has focus (Prop)
    pub focused: bool,
}

impl Component for SearchButton {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let style = if self.focused {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Green)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        let button = Paragraph::new(LABEL)
            .alignment(Alignment::Center)
            .style(style)
            .block(Block::bordered().border_type(BorderType::Rounded));
        frame.render_widget(button, area);
    }
}
