/*
 *   Copyright (c) 2026 R3BL LLC
 *   All rights reserved.
 *
 *   Licensed under the Apache License, Version 2.0 (the "License");
 *   you may not use this file except in compliance with the License.
 *   You may obtain a copy of the License at
 *
 *   http://www.apache.org/licenses/LICENSE-2.0
 *
 *   Unless required by applicable law or agreed to in writing, software
 *   distributed under the License is distributed on an "AS IS" BASIS,
 *   WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *   See the License for the specific language governing permissions and
 *   limitations under the License.
 */

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tokio::time::Instant;

use crate::{DEBUG_SEARCH_BOX_MOD, DisplayData, EventLoopResult, KeyOutcome, SearchBoxModel,
            SearchBoxState};

/// Terminal events, narrowed down to what the search box reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchBoxInput {
    Focus,
    Blur,
    ToggleFocus,
    Char(char),
    Backspace,
    ArrowDown,
    ArrowUp,
    Enter,
    Escape,
    /// Ctrl+C or Ctrl+D.
    Exit,
    Resize(u16),
    Other,
}

impl From<Event> for SearchBoxInput {
    fn from(event: Event) -> Self {
        match event {
            Event::Key(key_event) => Self::from(key_event),
            Event::FocusGained => Self::Focus,
            Event::FocusLost => Self::Blur,
            Event::Resize(columns, _rows) => Self::Resize(columns),
            _ => Self::Other,
        }
    }
}

impl From<KeyEvent> for SearchBoxInput {
    fn from(key_event: KeyEvent) -> Self {
        if key_event.kind == KeyEventKind::Release {
            return Self::Other;
        }

        let KeyEvent {
            code, modifiers, ..
        } = key_event;

        if modifiers.contains(KeyModifiers::CONTROL) {
            return match code {
                KeyCode::Char('c' | 'd') => Self::Exit,
                _ => Self::Other,
            };
        }

        match code {
            KeyCode::Char(ch) if !modifiers.contains(KeyModifiers::ALT) => Self::Char(ch),
            KeyCode::Backspace => Self::Backspace,
            KeyCode::Down => Self::ArrowDown,
            KeyCode::Up => Self::ArrowUp,
            KeyCode::Enter => Self::Enter,
            KeyCode::Esc => Self::Escape,
            KeyCode::Tab | KeyCode::BackTab => Self::ToggleFocus,
            _ => Self::Other,
        }
    }
}

/// Applies one input to the model, and tells the event loop what to do next.
///
/// - While the list is loading, only exiting and resizing do anything.
/// - Enter while the list is closed submits the query, along with the item that was
///   last picked with Enter (if the query hasn't been edited since).
/// - Escape closes the list. Escape while the list is already closed exits.
pub fn keypress_handler<T: DisplayData + Clone>(
    model: &mut SearchBoxModel<T>,
    input: SearchBoxInput,
    now: Instant,
) -> EventLoopResult<T> {
    DEBUG_SEARCH_BOX_MOD.then(|| {
        // % is Display, ? is Debug.
        tracing::debug!(
            message = "keypress_handler",
            input = ?input,
            is_open = %model.state.is_open(),
            selected_index = ?model.state.selected_index(),
        );
    });

    match input {
        SearchBoxInput::Exit => return EventLoopResult::ExitWithoutResult,
        SearchBoxInput::Resize(columns) => {
            model.terminal_width = columns;
            return EventLoopResult::ContinueAndRerender;
        }
        _ if model.is_loading => {
            return match input {
                SearchBoxInput::Escape => EventLoopResult::ExitWithoutResult,
                _ => EventLoopResult::Continue,
            };
        }
        _ => {}
    }

    match input {
        SearchBoxInput::Focus => model.transition(SearchBoxState::on_focus),
        SearchBoxInput::Blur => model.transition(SearchBoxState::on_blur),
        SearchBoxInput::ToggleFocus => {
            if model.state.is_open() {
                model.transition(SearchBoxState::on_blur);
            } else {
                model.transition(SearchBoxState::on_focus);
            }
        }
        SearchBoxInput::Char(ch) => {
            model.maybe_picked = None;
            model.transition(|state| state.on_input_char(ch, now));
        }
        SearchBoxInput::Backspace => {
            model.maybe_picked = None;
            model.transition(|state| state.on_backspace(now));
        }
        SearchBoxInput::ArrowDown => {
            model.transition(SearchBoxState::on_arrow_down);
        }
        SearchBoxInput::ArrowUp => {
            model.transition(SearchBoxState::on_arrow_up);
        }
        SearchBoxInput::Enter => {
            let maybe_selected_item = model.state.selected_item().cloned();
            match model.transition(|state| state.on_enter(now)) {
                KeyOutcome::Handled => {
                    if maybe_selected_item.is_some() {
                        model.maybe_picked = maybe_selected_item;
                    }
                }
                KeyOutcome::Ignored => {
                    return EventLoopResult::ExitWithResult {
                        query: model.state.query().to_string(),
                        maybe_item: model.maybe_picked.clone(),
                    };
                }
            }
        }
        SearchBoxInput::Escape => {
            if !model.state.is_open() {
                return EventLoopResult::ExitWithoutResult;
            }
            model.transition(SearchBoxState::on_blur);
        }
        SearchBoxInput::Other => return EventLoopResult::Continue,
        SearchBoxInput::Exit | SearchBoxInput::Resize(_) => {}
    }

    EventLoopResult::ContinueAndRerender
}
