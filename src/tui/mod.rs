//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Event Flow
//!
//! ```text
//! keystroke ─▶ SearchInput ─▶ Action::QueryChanged ─▶ update() ─▶ Effect::Dispatch
//!                                                                    │
//!           Debouncer (500 ms quiet window) ◀────────────────────────┘
//!                 │
//!                 ▼
//!         SuggestionFetcher ─▶ FetchStarted / FetchSucceeded / FetchFailed
//!                 │                         (mpsc channel)
//!                 ▼
//!            event loop ─▶ update() ─▶ redraw
//! ```
//!
//! The loop redraws only after an event or a background action arrives.

mod component;
pub mod components;
pub mod event;
pub mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};
use std::time::Duration;

use crossterm::event::{
    DisableBracketedPaste, DisableFocusChange, EnableBracketedPaste, EnableFocusChange,
};
use crossterm::execute;

use crate::api::{NpmsClient, SuggestionClient, SuggestionFetcher};
use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::debounce::{Debouncer, QUIET_WINDOW};
use crate::core::state::SearchState;
use crate::tui::component::EventHandler;
use crate::tui::components::{InputEvent, SearchInput};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

const POLL_TIMEOUT: Duration = Duration::from_millis(100);

/// Which element of the widget holds focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Input,
    Button,
    /// The terminal window itself lost focus.
    Outside,
}

/// TUI-specific presentation state (not part of core search logic)
pub struct TuiState {
    pub input: SearchInput,
    pub focus: Focus,
    /// Where focus returns when the terminal regains it.
    resume_focus: Focus,
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            input: SearchInput::new(),
            focus: Focus::Input, // User expects to type immediately
            resume_focus: Focus::Input,
        }
    }

    /// Moves focus, returning `Action::Blur` when it leaves the input.
    fn move_focus(&mut self, to: Focus) -> Option<Action> {
        let from = std::mem::replace(&mut self.focus, to);
        (from == Focus::Input && to != Focus::Input).then_some(Action::Blur)
    }
}

/// Routes one terminal event, returning the core action it produces.
pub fn route_event(tui: &mut TuiState, event: &TuiEvent) -> Option<Action> {
    match event {
        TuiEvent::Quit => Some(Action::Quit),
        TuiEvent::Resize => None,
        TuiEvent::FocusNext | TuiEvent::FocusPrev => {
            let next = match tui.focus {
                Focus::Input => Focus::Button,
                Focus::Button | Focus::Outside => Focus::Input,
            };
            tui.move_focus(next)
        }
        TuiEvent::FocusLost => {
            if tui.focus != Focus::Outside {
                tui.resume_focus = tui.focus;
            }
            tui.move_focus(Focus::Outside)
        }
        TuiEvent::FocusGained => {
            // Regaining focus does not re-show hidden results
            if tui.focus == Focus::Outside {
                tui.focus = tui.resume_focus;
            }
            None
        }
        TuiEvent::Submit => {
            if tui.focus == Focus::Button {
                debug!("Search button pressed");
            }
            None
        }
        edit => {
            // Typing anywhere returns focus to the input
            tui.focus = Focus::Input;
            tui.input
                .handle_event(edit)
                .map(|InputEvent::Changed(raw)| Action::QueryChanged(raw))
        }
    }
}

/// Applies an action and performs its effect. Returns true on quit.
pub fn apply_action(
    state: &mut SearchState,
    debouncer: &mut Debouncer<String>,
    action: Action,
) -> bool {
    match update(state, action) {
        Effect::Dispatch(query) => {
            debug!("Dispatching query {:?}", query);
            debouncer.dispatch(query);
            false
        }
        Effect::Quit => true,
        Effect::None => false,
    }
}

/// Wraps a fetcher in the standard quiet-window debouncer.
pub fn debounced_fetcher(fetcher: SuggestionFetcher) -> Debouncer<String> {
    Debouncer::new(QUIET_WINDOW, move |query: String| {
        let fetcher = fetcher.clone();
        async move { fetcher.fetch(query).await }
    })
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableBracketedPaste, EnableFocusChange)?;
        info!("Terminal modes enabled (bracketed paste, focus change)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableFocusChange, DisableBracketedPaste);
    }
}

/// Runs the interactive widget. Must be called from within a multi-threaded
/// tokio runtime; lookups run on worker threads while this loop blocks on
/// terminal input.
pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let client: Arc<dyn SuggestionClient> = Arc::new(NpmsClient::new(Some(config.endpoint.clone())));
    info!(
        "Using {} endpoint {} ({:?})",
        client.name(),
        config.endpoint,
        config.response_ordering
    );

    // Channel for actions from background lookups
    let (tx, rx) = mpsc::channel();
    let mut debouncer = debounced_fetcher(SuggestionFetcher::new(client, tx));

    let mut state = SearchState::new(config.response_ordering);
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = match TerminalModeGuard::new() {
        Ok(guard) => Some(guard),
        Err(e) => {
            warn!("Failed to enable terminal modes, blur on focus loss disabled: {}", e);
            None
        }
    };
    let mut needs_redraw = true;

    let result = loop {
        if needs_redraw {
            if let Err(e) = terminal.draw(|f| ui::draw_ui(f, &state, &mut tui)) {
                break Err(e);
            }
            needs_redraw = false;
        }

        // Process first event + drain ALL pending events before next draw
        let first_event = poll_event_timeout(POLL_TIMEOUT);
        if first_event.is_some() {
            needs_redraw = true;
        }
        let mut should_quit = false;
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            if let Some(action) = route_event(&mut tui, &event) {
                debug!("Event loop action: {:?}", action);
                should_quit |= apply_action(&mut state, &mut debouncer, action);
            }
        }
        if should_quit {
            break Ok(());
        }

        // Handle background lookup actions
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            if apply_action(&mut state, &mut debouncer, action) {
                warn!("Background action requested quit; ignoring");
            }
        }
    };

    debouncer.cancel();
    ratatui::restore();
    info!("Exiting");
    result
}
