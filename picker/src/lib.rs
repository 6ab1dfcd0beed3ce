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

//! # r3bl_picker
//!
//! A searchable people picker (a "combobox") for the terminal. It downloads a list of
//! employees from a JSON endpoint, lets you filter it by typing, and pick one using the
//! keyboard.
//!
//! # How it fits together
//!
//! Data flows one way:
//!
//! ```text
//! fetch (people) -> adapt (people) -> SearchBoxState.source_list -> filtered view -> paint
//! ```
//!
//! Keyboard events flow the other way, into [`SearchBoxState`], which is one explicit
//! state object that is only mutated through named transitions:
//! [`SearchBoxState::on_focus`], [`SearchBoxState::on_blur`],
//! [`SearchBoxState::on_type`], [`SearchBoxState::on_arrow_down`],
//! [`SearchBoxState::on_arrow_up`] and [`SearchBoxState::on_enter`].
//!
//! - Filtering is debounced (300ms by default). Only the trailing edge of a burst of
//!   keystrokes recomputes the filtered list. See [`Debouncer`].
//! - Whenever the highlighted option changes, the option list is scrolled with a
//!   minimal scroll rule. See [`ListViewport`].
//! - The initial fetch runs on a tokio task and is cancelled when the widget goes away.
//!   See [`FetchTask`].
//!
//! # Run the picker binary target
//!
//! - `cargo run --bin picker` downloads the default list of managers.
//! - `picker --url <URL>` uses a different endpoint.
//! - `picker -l` writes log output to `log.txt`.

// https://github.com/rust-lang/rust-clippy
// https://rust-lang.github.io/rust-clippy/master/index.html
#![warn(clippy::all)]
#![warn(rust_2018_idioms)]
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

pub const DEBUG_SEARCH_BOX_MOD: bool = false;
pub const DEBUG_FETCH_MOD: bool = false;

// Attach sources.
pub mod cli_arg;
pub mod common;
pub mod log;
pub mod people;
pub mod search_box_api;
pub mod search_box_impl;

#[cfg(test)]
pub mod test_fixtures;

// Re-export.
pub use cli_arg::*;
pub use common::*;
pub use people::*;
pub use search_box_api::*;
pub use search_box_impl::*;
