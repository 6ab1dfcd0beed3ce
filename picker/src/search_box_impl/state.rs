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

use std::time::Duration;

use tokio::time::Instant;

use crate::{DEBUG_SEARCH_BOX_MOD, Debouncer, DisplayData, DisplayEntry, LoadOutcome,
            filter_indices, remove_whitespace};

/// What the caller should do with the key event that was just handled.
/// - [`KeyOutcome::Handled`]: the key was consumed, and its default behavior must be
///   suppressed (eg: arrow keys should not move the caret).
/// - [`KeyOutcome::Ignored`]: the state did not react, the key falls through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    Ignored,
    Handled,
}

/// The one state object of the search box. It is only mutated through the named
/// transitions below, each of which leaves these invariants intact:
///
/// 1. When the list is closed or the filtered list is empty, nothing is selected.
/// 2. When the list is open and the filtered list has items, the selection is a valid
///    index into the filtered list. It defaults to the first item whenever the list
///    opens or the filtered list is recomputed.
///
/// Filtering is debounced. [`Self::on_type`] updates the query right away, but the
/// filtered list is only recomputed by [`Self::tick`] once the typing has paused for
/// the debounce delay. The owner of this state waits for
/// [`Self::pending_filter_deadline`] and then calls [`Self::tick`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchBoxState<T: DisplayData = DisplayEntry> {
    source_list: Vec<T>,
    query: String,
    /// Indices into `source_list`, in their original order.
    filtered_indices: Vec<usize>,
    is_open: bool,
    selected_index: Option<usize>,
    debouncer: Debouncer<String>,
    maybe_load_error: Option<String>,
}

impl<T: DisplayData> SearchBoxState<T> {
    #[must_use]
    pub fn new(debounce: Duration) -> Self {
        Self {
            source_list: vec![],
            query: String::new(),
            filtered_indices: vec![],
            is_open: false,
            selected_index: None,
            debouncer: Debouncer::new(debounce),
            maybe_load_error: None,
        }
    }

    /// New data has arrived. The filtered list is rebuilt against the current query
    /// immediately, there is no point waiting for a debounce here.
    pub fn set_source_list(&mut self, source_list: Vec<T>) {
        self.source_list = source_list;
        self.maybe_load_error = None;
        self.debouncer.cancel();
        let query = self.query.clone();
        self.apply_filter(&query);
    }

    /// The fetch failed. The list is cleared, and the message is kept verbatim so it
    /// can be shown. The search box stays usable against the empty list.
    pub fn set_fetch_error(&mut self, message: impl Into<String>) {
        self.set_source_list(vec![]);
        self.maybe_load_error = Some(message.into());
    }

    pub fn apply_load_outcome(&mut self, outcome: LoadOutcome<T>) {
        match outcome.error {
            Some(message) => self.set_fetch_error(message),
            None => self.set_source_list(outcome.list),
        }
    }

    pub fn on_focus(&mut self) { self.set_open(true); }

    pub fn on_blur(&mut self) { self.set_open(false); }

    /// The query is replaced right away (so the textbox reflects it) and the list
    /// opens. Filtering waits for the debounce delay, measured from `now`.
    pub fn on_type(&mut self, query: impl Into<String>, now: Instant) {
        self.query = query.into();
        self.schedule_filter(now);
        self.set_open(true);
    }

    pub fn on_input_char(&mut self, ch: char, now: Instant) {
        let mut query = self.query.clone();
        query.push(ch);
        self.on_type(query, now);
    }

    pub fn on_backspace(&mut self, now: Instant) {
        let mut query = self.query.clone();
        query.pop();
        self.on_type(query, now);
    }

    pub fn on_arrow_down(&mut self) -> KeyOutcome {
        if !self.is_open {
            return KeyOutcome::Ignored;
        }
        let len = self.filtered_indices.len();
        if let Some(index) = self.selected_index {
            self.selected_index = Some((index + 1) % len);
        }
        KeyOutcome::Handled
    }

    pub fn on_arrow_up(&mut self) -> KeyOutcome {
        if !self.is_open {
            return KeyOutcome::Ignored;
        }
        let len = self.filtered_indices.len();
        if let Some(index) = self.selected_index {
            self.selected_index = Some(if index == 0 { len - 1 } else { index - 1 });
        }
        KeyOutcome::Handled
    }

    /// Closes the list. If an option was highlighted, its name becomes the query. The
    /// new query goes through the usual debounce path, and does not reopen the list.
    pub fn on_enter(&mut self, now: Instant) -> KeyOutcome {
        if !self.is_open {
            return KeyOutcome::Ignored;
        }

        let maybe_picked_name = self.selected_item().map(|it| it.name().to_string());
        self.set_open(false);

        if let Some(name) = maybe_picked_name {
            self.query = name;
            self.schedule_filter(now);
        }

        KeyOutcome::Handled
    }

    /// Applies the pending filter if its debounce deadline has been reached. Returns
    /// `true` if the filtered list was recomputed. Every run resets the selection, even
    /// when the query matches the previous one.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.debouncer.take_if_due(now) {
            Some(query) => {
                self.apply_filter(&query);
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub fn pending_filter_deadline(&self) -> Option<Instant> { self.debouncer.deadline() }

    #[must_use]
    pub fn query(&self) -> &str { &self.query }

    #[must_use]
    pub fn is_open(&self) -> bool { self.is_open }

    /// `None` means nothing is highlighted.
    #[must_use]
    pub fn selected_index(&self) -> Option<usize> { self.selected_index }

    #[must_use]
    pub fn source_list(&self) -> &[T] { &self.source_list }

    pub fn filtered_list(&self) -> impl Iterator<Item = &T> + '_ {
        self.filtered_indices
            .iter()
            .map(|index| &self.source_list[*index])
    }

    #[must_use]
    pub fn filtered_len(&self) -> usize { self.filtered_indices.len() }

    #[must_use]
    pub fn selected_item(&self) -> Option<&T> {
        let index = self.selected_index?;
        let source_index = self.filtered_indices.get(index)?;
        self.source_list.get(*source_index)
    }

    #[must_use]
    pub fn load_error(&self) -> Option<&str> { self.maybe_load_error.as_deref() }

    fn schedule_filter(&mut self, now: Instant) {
        let status = self.debouncer.schedule(now, self.query.clone());
        DEBUG_SEARCH_BOX_MOD.then(|| {
            // % is Display, ? is Debug.
            tracing::debug!(
                message = "schedule filter",
                query = %self.query,
                status = ?status,
            );
        });
    }

    fn apply_filter(&mut self, query: &str) {
        let stripped = remove_whitespace(query);
        self.filtered_indices = filter_indices(&self.source_list, &stripped);
        self.sync_selection();

        DEBUG_SEARCH_BOX_MOD.then(|| {
            // % is Display, ? is Debug.
            tracing::debug!(
                message = "apply filter",
                query = %query,
                filtered_len = %self.filtered_indices.len(),
            );
        });
    }

    fn set_open(&mut self, is_open: bool) {
        if self.is_open != is_open {
            self.is_open = is_open;
            self.sync_selection();
        }
    }

    /// Runs on every change to `is_open` or the filtered list.
    fn sync_selection(&mut self) {
        self.selected_index = if self.is_open && !self.filtered_indices.is_empty() {
            Some(0)
        } else {
            None
        };
    }
}
