//! # SearchInput Component
//!
//! Single-line text field holding the raw query.
//!
//! ## Responsibilities
//!
//! - Capture typed and pasted text
//! - Handle editing (backspace, delete, cursor movement)
//! - Emit `InputEvent::Changed` with the full raw value after every edit
//!
//! No validation or trimming: whatever is in the buffer is what gets
//! searched for. The `focused` flag is a prop owned by the parent.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

pub const PLACEHOLDER: &str = "Search Packages";

/// High-level events emitted by the SearchInput
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// The buffer changed; carries the new raw value.
    Changed(String),
}

pub struct SearchInput {
    /// Text buffer (Internal State)
    pub buffer: String,
    /// Whether the field has focus (Prop)
    pub focused: bool,
    /// Cursor byte offset into `buffer`, always on a char boundary
    cursor: usize,
}

impl Default for SearchInput {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchInput {
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
            focused: true,
            cursor: 0,
        }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    fn changed(&self) -> Option<InputEvent> {
        Some(InputEvent::Changed(self.buffer.clone()))
    }

    /// Byte offset where the visible slice starts so that the cursor stays
    /// inside a field `width` columns wide.
    fn visible_start(&self, width: usize) -> usize {
        if width == 0 {
            return self.cursor;
        }
        let mut start = 0;
        while start < self.cursor && self.buffer[start..self.cursor].width() >= width {
            start = next_char_boundary(&self.buffer, start);
        }
        start
    }
}

impl Component for SearchInput {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let border_style = if self.focused {
            Style::default().fg(Color::Green)
        } else {
            Style::default().add_modifier(Modifier::DIM)
        };
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title("npm");

        let inner_width = area.width.saturating_sub(2) as usize;
        let start = self.visible_start(inner_width);

        let paragraph = if self.buffer.is_empty() {
            Paragraph::new(PLACEHOLDER).style(Style::default().fg(Color::DarkGray))
        } else {
            Paragraph::new(&self.buffer[start..])
        };
        frame.render_widget(paragraph.block(block), area);

        if self.focused {
            let offset = self.buffer[start..self.cursor].width() as u16;
            frame.set_cursor_position((area.x + 1 + offset, area.y + 1));
        }
    }
}

impl EventHandler for SearchInput {
    type Event = InputEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) => {
                self.buffer.insert(self.cursor, *c);
                self.cursor += c.len_utf8();
                self.changed()
            }
            TuiEvent::Paste(text) => {
                let single_line: String = text.chars().filter(|c| !matches!(c, '\n' | '\r')).collect();
                if single_line.is_empty() {
                    return None;
                }
                self.buffer.insert_str(self.cursor, &single_line);
                self.cursor += single_line.len();
                self.changed()
            }
            TuiEvent::Backspace => {
                if self.cursor == 0 {
                    return None;
                }
                let prev = prev_char_boundary(&self.buffer, self.cursor);
                self.buffer.drain(prev..self.cursor);
                self.cursor = prev;
                self.changed()
            }
            TuiEvent::Delete => {
                if self.cursor >= self.buffer.len() {
                    return None;
                }
                let next = next_char_boundary(&self.buffer, self.cursor);
                self.buffer.drain(self.cursor..next);
                self.changed()
            }
            TuiEvent::CursorLeft => {
                self.cursor = prev_char_boundary(&self.buffer, self.cursor);
                None
            }
            TuiEvent::CursorRight => {
                self.cursor = next_char_boundary(&self.buffer, self.cursor);
                None
            }
            TuiEvent::CursorHome => {
                self.cursor = 0;
                None
            }
            TuiEvent::CursorEnd => {
                self.cursor = self.buffer.len();
                None
            }
            _ => None,
        }
    }
}

/// Find the byte offset of the previous character boundary before `pos` in `text`.
fn prev_char_boundary(text: &str, pos: usize) -> usize {
    text[..pos]
        .char_indices()
        .next_back()
        .map(|(i, _)| i)
        .unwrap_or(0)
}

/// Find the byte offset of the next character boundary after `pos` in `text`.
fn next_char_boundary(text: &str, pos: usize) -> usize {
    text[pos..]
        .char_indices()
        .nth(1)
        .map(|(i, _)| pos + i)
        .unwrap_or(text.len())
}
