//! # TitleBar Component
//!
//! Top line: the tool name on the left and a short key hint on the right.
//! Purely presentational; both strings are props.

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::Paragraph;

pub const TITLE: &str = "NPM SEARCH TOOL";

pub struct TitleBar {
    pub title: String,
    pub hint: String,
}

impl TitleBar {
    pub fn new(title: String, hint: String) -> Self {
        Self { title, hint }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let hint_width = self.hint.chars().count() as u16;
        let [title_area, hint_area] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(hint_width)]).areas(area);

        frame.render_widget(
            Span::styled(self.title.as_str(), Style::default().add_modifier(Modifier::BOLD)),
            title_area,
        );
        frame.render_widget(
            Paragraph::new(self.hint.as_str()).style(Style::default().add_modifier(Modifier::DIM)),
            hint_area,
        );
    }
}
