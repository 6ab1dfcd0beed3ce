// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach.
pub mod constants;
pub mod ui_str;

// Re-export.
pub use constants::*;
pub use ui_str::*;

/// Type alias for results that are reported to the user via [miette].
pub type CommonResult<T> = miette::Result<T>;
