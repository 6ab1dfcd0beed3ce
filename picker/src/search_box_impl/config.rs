// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::time::Duration;

use crate::{DEFAULT_DEBOUNCE, DEFAULT_LIST_ARIA_LABEL, DEFAULT_MAX_VISIBLE_OPTIONS,
            DEFAULT_PLACEHOLDER};

/// Configuration for one search box.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchBoxConfig {
    /// Shown in the empty textbox, and used as the textbox's accessible label.
    pub placeholder: String,
    pub list_aria_label: String,
    /// How long typing has to pause before the list is filtered.
    pub debounce: Duration,
    /// How many options fit in the list before it scrolls.
    pub max_visible_options: usize,
}

impl Default for SearchBoxConfig {
    fn default() -> Self {
        Self {
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            list_aria_label: DEFAULT_LIST_ARIA_LABEL.to_string(),
            debounce: DEFAULT_DEBOUNCE,
            max_visible_options: DEFAULT_MAX_VISIBLE_OPTIONS,
        }
    }
}
