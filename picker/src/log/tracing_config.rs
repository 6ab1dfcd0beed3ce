// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use tracing_core::LevelFilter;

/// The picker owns the terminal while it runs, so log output only ever goes to a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TracingConfig {
    pub log_file_path: String,
    pub level_filter: LevelFilter,
}

impl TracingConfig {
    #[must_use]
    pub fn new_file(path: impl Into<String>, level_filter: LevelFilter) -> Self {
        Self {
            log_file_path: path.into(),
            level_filter,
        }
    }

    #[must_use]
    pub fn get_level_filter(&self) -> LevelFilter { self.level_filter }

    #[must_use]
    pub fn get_log_file_path(&self) -> &str { &self.log_file_path }
}
