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

use std::{fmt::{Display, Formatter},
          io::{self, IsTerminal as _, Stdout, Write, stdout}};

use crossterm::{cursor::{Hide, Show},
                event::{Event, EventStream},
                execute,
                terminal::{disable_raw_mode, enable_raw_mode}};
use miette::IntoDiagnostic as _;

use crate::{DEFAULT_TERMINAL_WIDTH, DisplayData, DisplayEntry, EventLoopResult, FetchTask,
            PeopleSource, PinnedInputStream, SearchBoxComponent, SearchBoxConfig,
            SearchBoxModel, StyleSheet, cancelled_msg, enter_event_loop_async, picked_msg,
            submitted_without_match_msg, terminal_not_interactive_msg};

/// How the user left the search box.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchBoxResult<T = DisplayEntry> {
    /// The query was submitted. `maybe_item` is the option that was picked with Enter,
    /// unless the query was edited afterward.
    Picked {
        query: String,
        maybe_item: Option<T>,
    },
    Cancelled,
    /// Nothing was shown, because there is no terminal to interact with (eg: running
    /// under `cargo test`, or with stdin piped).
    TerminalNotInteractive,
}

impl<T: DisplayData> Display for SearchBoxResult<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchBoxResult::Picked {
                maybe_item: Some(item),
                ..
            } => write!(f, "{}", picked_msg(item.name())),
            SearchBoxResult::Picked {
                query,
                maybe_item: None,
            } => write!(f, "{}", submitted_without_match_msg(query)),
            SearchBoxResult::Cancelled => write!(f, "{}", cancelled_msg()),
            SearchBoxResult::TerminalNotInteractive => {
                write!(f, "{}", terminal_not_interactive_msg())
            }
        }
    }
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum TTYResult {
    IsInteractive,
    IsNotInteractive,
}

/// The search box needs to read keys from stdin and paint to stdout.
#[must_use]
pub fn is_interactive_terminal() -> TTYResult {
    if io::stdin().is_terminal() && io::stdout().is_terminal() {
        TTYResult::IsInteractive
    } else {
        TTYResult::IsNotInteractive
    }
}

/// The IO devices that [`search_box`] uses: stdout, and crossterm's async event stream.
#[allow(missing_debug_implementations)]
pub struct DefaultIoDevices {
    pub output_device: Stdout,
    pub input_stream: PinnedInputStream<io::Result<Event>>,
}

impl Default for DefaultIoDevices {
    fn default() -> Self {
        DefaultIoDevices {
            output_device: stdout(),
            input_stream: Box::pin(EventStream::new()),
        }
    }
}

/// Shows a search box below the cursor, loads the list of people from `source` in the
/// background, and returns once the user submits or cancels.
///
/// If the terminal is not interactive this returns
/// [`SearchBoxResult::TerminalNotInteractive`] right away, so it won't block in CI/CD
/// environments.
///
/// # Errors
///
/// Returns an error if the terminal can't be put into raw mode, or if reading input
/// or painting fails. A failed fetch is not an error, it is shown in the search box.
pub async fn search_box(
    source: impl PeopleSource,
    config: SearchBoxConfig,
    style_sheet: StyleSheet,
) -> miette::Result<SearchBoxResult> {
    if let TTYResult::IsNotInteractive = is_interactive_terminal() {
        return Ok(SearchBoxResult::TerminalNotInteractive);
    }

    let terminal_width = crossterm::terminal::size()
        .map(|(columns, _rows)| columns)
        .unwrap_or(DEFAULT_TERMINAL_WIDTH);

    let mut io_devices = DefaultIoDevices::default();

    enable_raw_mode().into_diagnostic()?;

    let result = match execute!(io_devices.output_device, Hide).into_diagnostic() {
        Ok(()) => {
            search_box_with_io(
                source,
                config,
                style_sheet,
                terminal_width,
                &mut io_devices.output_device,
                &mut io_devices.input_stream,
            )
            .await
        }
        Err(error) => Err(error),
    };

    // Restore the terminal even if hiding the cursor or the event loop failed.
    let restore_result = restore_terminal(&mut io_devices.output_device, disable_raw_mode);

    let search_box_result = result?;
    restore_result?;
    Ok(search_box_result)
}

/// Shows the cursor and leaves raw mode. Both steps always run, and the first error is
/// returned.
fn restore_terminal(
    output_device: &mut impl Write,
    disable_raw_mode: impl FnOnce() -> io::Result<()>,
) -> miette::Result<()> {
    let show_result = execute!(output_device, Show).into_diagnostic();
    let raw_mode_result = disable_raw_mode().into_diagnostic();
    show_result?;
    raw_mode_result
}

/// Same as [`search_box`], but with the IO devices supplied by the caller, and without
/// touching the terminal's modes. This is what tests drive.
///
/// # Errors
///
/// Returns an error if reading input or painting fails.
pub async fn search_box_with_io(
    source: impl PeopleSource,
    config: SearchBoxConfig,
    style_sheet: StyleSheet,
    terminal_width: u16,
    output_device: impl Write,
    input_stream: &mut PinnedInputStream<io::Result<Event>>,
) -> miette::Result<SearchBoxResult> {
    let mut fetch_task = FetchTask::spawn(source);
    let mut model = SearchBoxModel::new(config, terminal_width);
    let mut component = SearchBoxComponent::new(output_device, style_sheet);

    let event_loop_result =
        enter_event_loop_async(&mut model, &mut component, input_stream, &mut fetch_task)
            .await?;

    Ok(match event_loop_result {
        EventLoopResult::ExitWithResult { query, maybe_item } => {
            SearchBoxResult::Picked { query, maybe_item }
        }
        EventLoopResult::ExitWithoutResult
        | EventLoopResult::Continue
        | EventLoopResult::ContinueAndRerender => SearchBoxResult::Cancelled,
    })
}
