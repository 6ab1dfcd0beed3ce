// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::time::Duration;

/// The list of managers that the `picker` binary loads when no `--url` is given.
pub const DEFAULT_API_URL: &str = "https://gist.githubusercontent.com/daviferreira/41238222ac31fe36348544ee1d4a9a5e/raw/5dc996407f6c9a6630bfcec56eee22d4bc54b518/employees.json";

pub const DEFAULT_DEBOUNCE_MS: u64 = 300;
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(DEFAULT_DEBOUNCE_MS);

/// How many options are visible at once before the list has to scroll.
pub const DEFAULT_MAX_VISIBLE_OPTIONS: usize = 5;

/// Each option is painted over two rows: the name, and the email below it.
pub const OPTION_ROW_HEIGHT: usize = 2;

/// The textbox points at the option list using this id (`aria-controls`).
pub const ITEM_LIST_ID: &str = "itemList";

pub const LOG_FILE_NAME: &str = "log.txt";

/// Used when the terminal can't report its size.
pub const DEFAULT_TERMINAL_WIDTH: u16 = 80;
