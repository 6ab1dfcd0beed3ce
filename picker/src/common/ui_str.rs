// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

pub const DEFAULT_PLACEHOLDER: &str = "Choose Manager";
pub const DEFAULT_LIST_ARIA_LABEL: &str = "Manager List";

pub const NO_MATCHING_ITEMS: &str = "No matching items";
pub const LIST_IS_EMPTY: &str = "List is empty";
pub const LOADING: &str = "Loading...";

pub mod glyphs {
    pub const PROMPT: &str = "❯";
    pub const CARET: &str = "▏";
    pub const EXPAND_LESS: &str = "▴";
    pub const EXPAND_MORE: &str = "▾";
    pub const SELECTED_MARKER: &str = "▸";
    pub const ERROR: &str = "✗";
}

#[must_use]
pub fn picked_msg(name: &str) -> String { format!("You picked: {name}") }

#[must_use]
pub fn submitted_without_match_msg(query: &str) -> String {
    format!("Nobody matches {query:?}")
}

#[must_use]
pub fn cancelled_msg() -> String { "Nothing picked".to_string() }

#[must_use]
pub fn terminal_not_interactive_msg() -> String {
    "The terminal is not interactive, so there is nothing to pick from".to_string()
}

#[must_use]
pub fn unrecoverable_error_msg(report: &miette::Report) -> String {
    format!("Could not run picker due to the following problem.\n{report:?}")
}
