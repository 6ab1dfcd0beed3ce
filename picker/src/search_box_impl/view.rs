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

use strum_macros::{AsRefStr, Display};

use crate::{DisplayData, ITEM_LIST_ID, LIST_IS_EMPTY, NO_MATCHING_ITEMS, SearchBoxConfig,
            SearchBoxState, glyphs};

/// Accessibility roles, as understood by screen readers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum Role {
    Combobox,
    Listbox,
    Option,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, AsRefStr)]
pub enum ExpandIndicator {
    #[strum(to_string = "expand_less")]
    ExpandLess,
    #[strum(to_string = "expand_more")]
    ExpandMore,
}

impl ExpandIndicator {
    #[must_use]
    pub fn from_is_open(is_open: bool) -> Self {
        if is_open {
            Self::ExpandLess
        } else {
            Self::ExpandMore
        }
    }

    #[must_use]
    pub fn glyph(&self) -> &'static str {
        match self {
            Self::ExpandLess => glyphs::EXPAND_LESS,
            Self::ExpandMore => glyphs::EXPAND_MORE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextboxView<'a> {
    pub role: Role,
    pub value: &'a str,
    pub placeholder: &'a str,
    pub aria_label: &'a str,
    /// Also used for `aria-owns`.
    pub aria_controls: &'a str,
    pub aria_expanded: bool,
    pub aria_autocomplete: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionView<'a> {
    pub role: Role,
    pub id: &'a str,
    pub aria_label: &'a str,
    pub aria_selected: bool,
    pub initials: String,
    pub name: &'a str,
    pub email: &'a str,
}

/// A row of the list. Placeholder rows have no role, so they can't be selected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionRow<'a> {
    Item(OptionView<'a>),
    Placeholder(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListboxView<'a> {
    pub role: Role,
    pub id: &'static str,
    pub aria_label: &'a str,
    pub visible: bool,
    pub rows: Vec<OptionRow<'a>>,
}

/// Everything the painter needs, derived from the state and nothing else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchBoxView<'a> {
    pub textbox: TextboxView<'a>,
    pub indicator: ExpandIndicator,
    pub listbox: ListboxView<'a>,
    pub maybe_error: Option<&'a str>,
}

#[must_use]
pub fn render_view<'a, T: DisplayData>(
    state: &'a SearchBoxState<T>,
    config: &'a SearchBoxConfig,
) -> SearchBoxView<'a> {
    let is_open = state.is_open();

    let textbox = TextboxView {
        role: Role::Combobox,
        value: state.query(),
        placeholder: &config.placeholder,
        aria_label: &config.placeholder,
        aria_controls: ITEM_LIST_ID,
        aria_expanded: is_open,
        aria_autocomplete: "list",
    };

    let rows = if state.source_list().is_empty() {
        vec![OptionRow::Placeholder(LIST_IS_EMPTY)]
    } else if state.filtered_len() == 0 {
        vec![OptionRow::Placeholder(NO_MATCHING_ITEMS)]
    } else {
        state
            .filtered_list()
            .enumerate()
            .map(|(index, item)| {
                OptionRow::Item(OptionView {
                    role: Role::Option,
                    id: item.id(),
                    aria_label: item.name(),
                    aria_selected: state.selected_index() == Some(index),
                    initials: item.initials(),
                    name: item.name(),
                    email: item.email(),
                })
            })
            .collect()
    };

    SearchBoxView {
        textbox,
        indicator: ExpandIndicator::from_is_open(is_open),
        listbox: ListboxView {
            role: Role::Listbox,
            id: ITEM_LIST_ID,
            aria_label: &config.list_aria_label,
            visible: is_open,
            rows,
        },
        maybe_error: state.load_error(),
    }
}
