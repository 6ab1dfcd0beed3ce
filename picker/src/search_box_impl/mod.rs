// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod config;
pub mod debounce;
pub mod event_loop;
pub mod filter;
pub mod function_component;
pub mod keypress;
pub mod state;
pub mod style;
pub mod view;
pub mod viewport;

// Re-export.
pub use config::*;
pub use debounce::*;
pub use event_loop::*;
pub use filter::*;
pub use function_component::*;
pub use keypress::*;
pub use state::*;
pub use style::*;
pub use view::*;
pub use viewport::*;
