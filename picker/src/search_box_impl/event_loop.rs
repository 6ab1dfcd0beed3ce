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

use std::{io, pin::Pin};

use crossterm::event::Event;
use futures_util::StreamExt as _;
use miette::IntoDiagnostic;
use tokio::time::{Instant, sleep_until};

use crate::{DEBUG_SEARCH_BOX_MOD, DisplayData, DisplayEntry, FetchTask, FunctionComponent,
            ListViewport, LoadOutcome, SearchBoxConfig, SearchBoxInput, SearchBoxState,
            apply_scroll_effect, keypress_handler, list_viewport_for};

/// Stream of terminal events. Real terminals provide
/// [`crossterm::event::EventStream`], tests provide a canned stream.
pub type PinnedInputStream<T> = Pin<Box<dyn futures_core::Stream<Item = T>>>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventLoopResult<T> {
    Continue,
    ContinueAndRerender,
    ExitWithResult { query: String, maybe_item: Option<T> },
    ExitWithoutResult,
}

/// Everything the event loop and the painter need: the controller state, plus the
/// terminal side of things (scroll position, width, and whether the fetch is still in
/// flight).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchBoxModel<T: DisplayData = DisplayEntry> {
    pub state: SearchBoxState<T>,
    pub viewport: ListViewport,
    pub config: SearchBoxConfig,
    pub is_loading: bool,
    pub terminal_width: u16,
    /// The item that Enter last copied into the query.
    pub maybe_picked: Option<T>,
}

impl<T: DisplayData> SearchBoxModel<T> {
    #[must_use]
    pub fn new(config: SearchBoxConfig, terminal_width: u16) -> Self {
        Self {
            state: SearchBoxState::new(config.debounce),
            viewport: list_viewport_for(config.max_visible_options),
            config,
            is_loading: true,
            terminal_width,
            maybe_picked: None,
        }
    }

    /// Runs a state transition, followed by the scroll into view effect.
    pub fn transition<R>(&mut self, f: impl FnOnce(&mut SearchBoxState<T>) -> R) -> R {
        let before = self.state.selected_index();
        let it = f(&mut self.state);
        let after = self.state.selected_index();
        apply_scroll_effect(&mut self.viewport, before, after);
        self.viewport.clamp_to(self.state.filtered_len());
        it
    }

    /// The fetch is done. The list gets focus right away, so it is open and ready for
    /// typing.
    pub fn apply_load_outcome(&mut self, outcome: LoadOutcome<T>) {
        self.is_loading = false;
        self.transition(|state| {
            state.apply_load_outcome(outcome);
            state.on_focus();
        });
    }
}

/// Runs until the user submits or cancels, or the input stream ends. The caller owns
/// the terminal (raw mode, cursor visibility), this only paints.
///
/// Three things can wake the loop up:
/// 1. An input event.
/// 2. The fetch completing.
/// 3. The debounce deadline of a pending filter.
///
/// # Errors
///
/// Returns an error if reading input, or painting, fails.
pub async fn enter_event_loop_async(
    model: &mut SearchBoxModel,
    function_component: &mut impl FunctionComponent<SearchBoxModel>,
    input_stream: &mut PinnedInputStream<io::Result<Event>>,
    fetch_task: &mut FetchTask,
) -> miette::Result<EventLoopResult<DisplayEntry>> {
    function_component.allocate_viewport_height_space(model)?;
    function_component.render(model)?;

    let return_this = loop {
        let maybe_deadline = model.state.pending_filter_deadline();
        let is_fetch_pending = fetch_task.is_pending();

        let event_loop_result = tokio::select! {
            maybe_event = input_stream.next() => {
                match maybe_event {
                    Some(Ok(event)) => {
                        keypress_handler(model, SearchBoxInput::from(event), Instant::now())
                    }
                    Some(Err(error)) => {
                        function_component.clear_viewport(model)?;
                        return Err(error).into_diagnostic();
                    }
                    None => EventLoopResult::ExitWithoutResult,
                }
            }

            maybe_outcome = fetch_task.wait_for_outcome(), if is_fetch_pending => {
                match maybe_outcome {
                    Some(outcome) => {
                        model.apply_load_outcome(outcome);
                        EventLoopResult::ContinueAndRerender
                    }
                    None => EventLoopResult::Continue,
                }
            }

            _ = sleep_until(maybe_deadline.unwrap_or_else(Instant::now)),
                if maybe_deadline.is_some() =>
            {
                let now = Instant::now();
                if model.transition(|state| state.tick(now)) {
                    EventLoopResult::ContinueAndRerender
                } else {
                    EventLoopResult::Continue
                }
            }
        };

        DEBUG_SEARCH_BOX_MOD.then(|| {
            // % is Display, ? is Debug.
            tracing::debug!(
                message = "event loop",
                result = ?event_loop_result,
                query = %model.state.query(),
            );
        });

        match event_loop_result {
            EventLoopResult::Continue => {}
            EventLoopResult::ContinueAndRerender => function_component.render(model)?,
            EventLoopResult::ExitWithResult { .. } | EventLoopResult::ExitWithoutResult => {
                function_component.clear_viewport(model)?;
                break event_loop_result;
            }
        }
    };

    fetch_task.cancel();

    Ok(return_this)
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use crossterm::event::KeyCode;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{DEFAULT_DEBOUNCE, SearchBoxComponent, StyleSheet,
                test_fixtures::{FakePeopleSource, fake_fetch_error,
                                gen_input_stream_with_delay, key, sample_fetched_people,
                                typed}};

    fn component() -> SearchBoxComponent<Vec<u8>> {
        SearchBoxComponent::new(Vec::new(), StyleSheet::no_color_style())
    }

    fn painted(component: &SearchBoxComponent<Vec<u8>>) -> String {
        strip_ansi_escapes::strip_str(String::from_utf8_lossy(&component.output_device).as_ref())
    }

    /// Every event is preceded by a short pause, shorter than the debounce delay.
    fn quick(events: Vec<Event>) -> Vec<(Duration, Event)> {
        events
            .into_iter()
            .map(|event| (Duration::from_millis(10), event))
            .collect()
    }

    #[tokio::test(start_paused = true)]
    async fn test_type_filter_and_pick() {
        let mut fetch_task = FetchTask::spawn(FakePeopleSource::Succeed(sample_fetched_people()));
        let mut model = SearchBoxModel::new(SearchBoxConfig::default(), 80);
        let mut component = component();

        // The list is sorted by the time `jo` is typed: John Doe, John Hancock, Logan Doe.
        let mut events = quick(typed("jo"));
        events.push((DEFAULT_DEBOUNCE * 2, key(KeyCode::Down)));
        events.push((Duration::from_millis(10), key(KeyCode::Enter)));
        events.push((Duration::from_millis(10), key(KeyCode::Enter)));
        let mut input_stream = gen_input_stream_with_delay(events);

        let result = enter_event_loop_async(
            &mut model,
            &mut component,
            &mut input_stream,
            &mut fetch_task,
        )
        .await
        .unwrap();

        let EventLoopResult::ExitWithResult { query, maybe_item } = result else {
            panic!("expected a result, got {result:?}");
        };
        assert_eq!(query, "John Hancock");
        assert_eq!(maybe_item.map(|it| it.id), Some("3".to_string()));
        assert!(painted(&component).contains("John Hancock"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_fetch_failure_is_shown() {
        let mut fetch_task = FetchTask::spawn(FakePeopleSource::Fail);
        let mut model = SearchBoxModel::new(SearchBoxConfig::default(), 80);
        let mut component = component();

        let events = vec![(Duration::from_millis(50), key(KeyCode::Esc))];
        let mut input_stream = gen_input_stream_with_delay(events);

        let result = enter_event_loop_async(
            &mut model,
            &mut component,
            &mut input_stream,
            &mut fetch_task,
        )
        .await
        .unwrap();

        assert_eq!(result, EventLoopResult::ExitWithoutResult);
        assert_eq!(model.state.source_list().len(), 0);
        let expected = fake_fetch_error().to_string();
        assert_eq!(model.state.load_error(), Some(expected.as_str()));
        assert!(painted(&component).contains(&expected));
    }

    #[tokio::test(start_paused = true)]
    async fn test_exit_while_loading_cancels_fetch() {
        let mut fetch_task = FetchTask::spawn(FakePeopleSource::Hang);
        let mut model = SearchBoxModel::<DisplayEntry>::new(SearchBoxConfig::default(), 80);
        let mut component = component();

        let events = vec![(Duration::from_millis(50), crate::test_fixtures::ctrl('c'))];
        let mut input_stream = gen_input_stream_with_delay(events);

        let result = enter_event_loop_async(
            &mut model,
            &mut component,
            &mut input_stream,
            &mut fetch_task,
        )
        .await
        .unwrap();

        assert_eq!(result, EventLoopResult::ExitWithoutResult);
        assert!(model.is_loading);
        assert!(!fetch_task.is_pending());
        assert!(painted(&component).contains("Loading..."));
    }

    #[tokio::test(start_paused = true)]
    async fn test_filter_waits_for_typing_to_pause() {
        let mut fetch_task = FetchTask::spawn(FakePeopleSource::Succeed(sample_fetched_people()));
        let mut model = SearchBoxModel::new(SearchBoxConfig::default(), 80);
        let mut component = component();

        // The list loads, then `zzz` is typed, and the stream ends before the debounce
        // deadline.
        let mut events = vec![(Duration::from_millis(50), key(KeyCode::Char('z')))];
        events.extend(quick(typed("zz")));
        let mut input_stream = gen_input_stream_with_delay(events);

        enter_event_loop_async(&mut model, &mut component, &mut input_stream, &mut fetch_task)
            .await
            .unwrap();

        assert_eq!(model.state.query(), "zzz");
        assert_eq!(model.state.filtered_len(), 3);
        assert!(model.state.pending_filter_deadline().is_some());
    }

    #[tokio::test(start_paused = true)]
    async fn test_input_stream_ending_exits() {
        let mut fetch_task = FetchTask::spawn(FakePeopleSource::Succeed(sample_fetched_people()));
        let mut model = SearchBoxModel::new(SearchBoxConfig::default(), 80);
        let mut component = component();
        let mut input_stream = gen_input_stream_with_delay(vec![]);

        let result =
            enter_event_loop_async(&mut model, &mut component, &mut input_stream, &mut fetch_task)
                .await
                .unwrap();

        assert_eq!(result, EventLoopResult::ExitWithoutResult);
    }
}
