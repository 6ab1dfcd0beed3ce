// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Everything needed to turn the remote employees document into a sorted list of
//! [`DisplayEntry`] items: the HTTP fetch, its cancellable task wrapper, and the adapter.

// Attach sources.
pub mod adapter;
pub mod display_data;
pub mod fetch_error;
pub mod fetch_task;
pub mod fetcher;
pub mod http_client;
pub mod locale_cmp;

// Re-export.
pub use adapter::*;
pub use display_data::*;
pub use fetch_error::*;
pub use fetch_task::*;
pub use fetcher::*;
pub use http_client::*;
pub use locale_cmp::*;
