// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Fixtures shared by the tests in this crate.

// Attach sources.
pub mod http_fixtures;
pub mod input_fixtures;
pub mod people_fixtures;

// Re-export.
pub use http_fixtures::*;
pub use input_fixtures::*;
pub use people_fixtures::*;

use std::path::PathBuf;

/// Creates a fresh folder under the OS temp folder. The name includes the process id
/// and a counter, so tests running in parallel don't collide.
pub fn create_temp_dir(prefix: &str) -> PathBuf {
    use std::sync::atomic::{AtomicUsize, Ordering};
    static COUNTER: AtomicUsize = AtomicUsize::new(0);

    let count = COUNTER.fetch_add(1, Ordering::Relaxed);
    let dir = std::env::temp_dir().join(format!(
        "r3bl_picker_{prefix}_{}_{count}",
        std::process::id()
    ));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}
