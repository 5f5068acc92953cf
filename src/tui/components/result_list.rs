//! # ResultList Component
//!
//! Draws a `ResultsView`: the loading indicator, the fixed error message,
//! and the suggestion rows (name, description, version, link).
//!
//! Stateless: the parent builds the view with `core::view::render_results`
//! every frame and hands it over as a prop.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, List, ListItem};

use crate::core::view::{LOADING_INDICATOR, ResultsView, SuggestionRow};
use crate::tui::component::Component;

pub struct ResultList {
    pub view: ResultsView,
}

impl ResultList {
    pub fn new(view: ResultsView) -> Self {
        Self { view }
    }
}

fn row_item(row: &SuggestionRow) -> ListItem<'static> {
    let mut lines = vec![Line::from(vec![
        Span::styled(
            row.name.clone(),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(row.version.clone(), Style::default().fg(Color::Yellow)),
    ])];
    if !row.description.is_empty() {
        lines.push(Line::from(Span::raw(format!("  {}", row.description))));
    }
    lines.push(Line::from(Span::styled(
        format!("  {}", row.link),
        Style::default()
            .fg(Color::Blue)
            .add_modifier(Modifier::UNDERLINED),
    )));
    ListItem::new(lines)
}

impl Component for ResultList {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut items = Vec::new();

        if self.view.loading {
            items.push(ListItem::new(Span::styled(
                LOADING_INDICATOR,
                Style::default().fg(Color::DarkGray),
            )));
        }
        if let Some(message) = self.view.error {
            items.push(ListItem::new(Span::styled(
                message,
                Style::default().fg(Color::Red),
            )));
        }
        items.extend(self.view.rows.iter().map(row_item));

        let list = List::new(items).block(Block::bordered().title("suggestions"));
        frame.render_widget(list, area);
    }
}
