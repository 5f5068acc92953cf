use crate::core::state::SearchState;
use crate::core::view::render_results;
use crate::tui::component::Component;
use crate::tui::components::{ResultList, SearchButton, TitleBar};
use crate::tui::components::title_bar::TITLE;
use crate::tui::{Focus, TuiState};

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};

const KEY_HINT: &str = "Tab focus · Esc quit";
const BUTTON_WIDTH: u16 = 12;

/// Splits the frame into title, input row and result region.
pub fn layout(area: Rect) -> [Rect; 3] {
    use Constraint::{Length, Min};
    Layout::vertical([Length(1), Length(3), Min(0)]).areas(area)
}

pub fn draw_ui(frame: &mut Frame, state: &SearchState, tui: &mut TuiState) {
    use Constraint::{Length, Min};
    let [title_area, input_row, results_area] = layout(frame.area());
    let [input_area, button_area] = Layout::horizontal([Min(0), Length(BUTTON_WIDTH)]).areas(input_row);

    TitleBar::new(TITLE.to_string(), KEY_HINT.to_string()).render(frame, title_area);

    tui.input.focused = tui.focus == Focus::Input;
    tui.input.render(frame, input_area);

    SearchButton {
        focused: tui.focus == Focus::Button,
    }
    .render(frame, button_area);

    ResultList::new(render_results(state)).render(frame, results_area);
}
