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

use std::io::Write;

use crossterm::{cursor::{MoveToColumn, MoveToNextLine, MoveToPreviousLine},
                queue,
                style::{ContentStyle, Print, PrintStyledContent, StyledContent},
                terminal::{Clear, ClearType}};
use miette::IntoDiagnostic;
use smallvec::{SmallVec, smallvec};
use unicode_segmentation::UnicodeSegmentation as _;
use unicode_width::UnicodeWidthStr as _;

use crate::{DEBUG_SEARCH_BOX_MOD, DisplayData, ListViewport, LOADING, OPTION_ROW_HEIGHT,
            OptionRow, SearchBoxModel, SearchBoxView, StyleSheet, glyphs, render_view};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledSpan {
    pub text: String,
    pub style: ContentStyle,
}

impl StyledSpan {
    pub fn new(text: impl Into<String>, style: ContentStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }
}

/// One terminal row. Most rows have only a handful of spans.
pub type StyledLine = SmallVec<[StyledSpan; 4]>;

/// Paints a model onto an output device, in place, below the cursor. Every render
/// paints exactly [`FunctionComponent::calculate_viewport_height`] rows, and puts the
/// cursor back where it started.
pub trait FunctionComponent<S> {
    type OutputDevice: Write;

    fn get_output_device(&mut self) -> &mut Self::OutputDevice;

    fn calculate_viewport_height(&self, state: &S) -> u16;

    /// # Errors
    ///
    /// Returns an error if writing to the output device fails.
    fn render(&mut self, state: &S) -> miette::Result<()>;

    /// Scrolls the terminal if needed, so that the rows below the cursor exist before
    /// the first render moves over them.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the output device fails.
    fn allocate_viewport_height_space(&mut self, state: &S) -> miette::Result<()> {
        let viewport_height = self.calculate_viewport_height(state);
        let output_device = self.get_output_device();

        for _ in 0..viewport_height {
            queue!(output_device, Print("\r\n")).into_diagnostic()?;
        }

        // Move the cursor back up.
        queue!(output_device, MoveToPreviousLine(viewport_height)).into_diagnostic()?;
        output_device.flush().into_diagnostic()?;
        Ok(())
    }

    /// # Errors
    ///
    /// Returns an error if writing to the output device fails.
    fn clear_viewport(&mut self, state: &S) -> miette::Result<()> {
        let viewport_height = self.calculate_viewport_height(state);
        let output_device = self.get_output_device();

        for _ in 0..viewport_height {
            queue!(
                output_device,
                Clear(ClearType::CurrentLine),
                MoveToNextLine(1)
            )
            .into_diagnostic()?;
        }

        // Move the cursor back up.
        queue!(output_device, MoveToPreviousLine(viewport_height)).into_diagnostic()?;
        output_device.flush().into_diagnostic()?;
        Ok(())
    }
}

/// Paints the search box with crossterm commands.
#[derive(Debug)]
pub struct SearchBoxComponent<W: Write> {
    pub output_device: W,
    pub style_sheet: StyleSheet,
}

impl<W: Write> SearchBoxComponent<W> {
    pub fn new(output_device: W, style_sheet: StyleSheet) -> Self {
        Self {
            output_device,
            style_sheet,
        }
    }
}

impl<W: Write, T: DisplayData> FunctionComponent<SearchBoxModel<T>> for SearchBoxComponent<W> {
    type OutputDevice = W;

    fn get_output_device(&mut self) -> &mut W { &mut self.output_device }

    /// The textbox row, the list viewport, and the error row.
    fn calculate_viewport_height(&self, state: &SearchBoxModel<T>) -> u16 {
        let height = 1 + state.viewport.client_height + 1;
        u16::try_from(height).unwrap_or(u16::MAX)
    }

    fn render(&mut self, state: &SearchBoxModel<T>) -> miette::Result<()> {
        let view = render_view(&state.state, &state.config);
        let lines = render_lines(
            &view,
            &state.viewport,
            &self.style_sheet,
            state.terminal_width,
            state.is_loading,
        );
        let viewport_height = self.calculate_viewport_height(state);

        DEBUG_SEARCH_BOX_MOD.then(|| {
            // % is Display, ? is Debug.
            tracing::debug!(
                message = "render",
                query = %view.textbox.value,
                is_open = %view.textbox.aria_expanded,
                lines = %lines.len(),
            );
        });

        let output_device = &mut self.output_device;
        for row in 0..usize::from(viewport_height) {
            queue!(output_device, MoveToColumn(0), Clear(ClearType::CurrentLine))
                .into_diagnostic()?;
            if let Some(line) = lines.get(row) {
                for span in line {
                    queue!(
                        output_device,
                        PrintStyledContent(StyledContent::new(span.style, span.text.as_str()))
                    )
                    .into_diagnostic()?;
                }
            }
            queue!(output_device, MoveToNextLine(1)).into_diagnostic()?;
        }

        // Move the cursor back up.
        queue!(output_device, MoveToPreviousLine(viewport_height)).into_diagnostic()?;
        output_device.flush().into_diagnostic()?;
        Ok(())
    }
}

/// Turns the view into rows of styled text, without touching the terminal.
///
/// 1. The textbox, with the expand indicator on the right.
/// 2. If the list is open, the options in the viewport's window. Each option takes
///    [`OPTION_ROW_HEIGHT`] rows: the initials and the name, then the email below it.
/// 3. The error message, if the fetch failed.
///
/// Every row is truncated to `width` display columns.
#[must_use]
pub fn render_lines(
    view: &SearchBoxView<'_>,
    viewport: &ListViewport,
    style_sheet: &StyleSheet,
    width: u16,
    is_loading: bool,
) -> Vec<StyledLine> {
    let mut lines: Vec<StyledLine> = vec![];

    // Textbox.
    let mut textbox_line: StyledLine = smallvec![StyledSpan::new(
        format!("{} ", glyphs::PROMPT),
        style_sheet.textbox_style
    )];
    if is_loading {
        textbox_line.push(StyledSpan::new(LOADING, style_sheet.muted_style));
    } else {
        if view.textbox.value.is_empty() {
            textbox_line.push(StyledSpan::new(
                view.textbox.placeholder,
                style_sheet.placeholder_style,
            ));
        } else {
            textbox_line.push(StyledSpan::new(
                view.textbox.value,
                style_sheet.textbox_style,
            ));
        }
        textbox_line.push(StyledSpan::new(glyphs::CARET, style_sheet.textbox_style));
        textbox_line.push(StyledSpan::new(
            format!(" {}", view.indicator.glyph()),
            style_sheet.muted_style,
        ));
    }
    lines.push(textbox_line);

    // Option list.
    if view.listbox.visible && !is_loading {
        let option_rows = &view.listbox.rows;
        for row in &option_rows[viewport.visible_option_range(option_rows.len())] {
            match row {
                OptionRow::Placeholder(text) => {
                    lines.push(smallvec![StyledSpan::new(
                        format!("  {text}"),
                        style_sheet.muted_style
                    )]);
                }
                OptionRow::Item(option) => {
                    let (marker, name_style) = if option.aria_selected {
                        (glyphs::SELECTED_MARKER, style_sheet.selected_style)
                    } else {
                        (" ", style_sheet.unselected_style)
                    };
                    lines.push(smallvec![
                        StyledSpan::new(format!("{marker} "), name_style),
                        StyledSpan::new(
                            format!(" {:<2} ", option.initials),
                            style_sheet.initials_style
                        ),
                        StyledSpan::new(format!(" {}", option.name), name_style),
                    ]);
                    // Lines up with the name above.
                    lines.push(smallvec![StyledSpan::new(
                        format!("{:7}{}", "", option.email),
                        style_sheet.muted_style
                    )]);
                }
            }
        }
    }

    // Error.
    if let Some(error) = view.maybe_error {
        lines.push(smallvec![StyledSpan::new(
            format!("{} {error}", glyphs::ERROR),
            style_sheet.error_style
        )]);
    }

    lines
        .into_iter()
        .map(|line| truncate_line(line, usize::from(width)))
        .collect()
}

/// Keeps the first `max_width` display columns of the line, never splitting a
/// grapheme cluster.
#[must_use]
pub fn truncate_line(line: StyledLine, max_width: usize) -> StyledLine {
    let mut remaining = max_width;
    let mut it = StyledLine::new();

    for span in line {
        if remaining == 0 {
            break;
        }
        let span_width = span.text.width();
        if span_width <= remaining {
            remaining -= span_width;
            it.push(span);
            continue;
        }
        let mut text = String::new();
        for grapheme in span.text.graphemes(true) {
            let grapheme_width = grapheme.width();
            if grapheme_width > remaining {
                break;
            }
            remaining -= grapheme_width;
            text.push_str(grapheme);
        }
        it.push(StyledSpan::new(text, span.style));
        remaining = 0;
    }

    it
}

/// Rows that an open list takes up, used to size the viewport.
#[must_use]
pub fn list_viewport_for(max_visible_options: usize) -> ListViewport {
    ListViewport::new(max_visible_options, OPTION_ROW_HEIGHT)
}
