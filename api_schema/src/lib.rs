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

//! Schema for the employees document that `r3bl_picker` downloads.
//!
//! The document is shaped as `{ data: Employee[], included: (Account | Employee)[] }`.
//! Each employee points at its account via `relationships.account.data.id`, and the
//! account carries the email address. Anything in `included` that is not an account
//! or an employee (eg: `companies`) is tolerated and ignored.
//!
//! These types only describe the wire format. Turning them into display ready records
//! is the job of the adapter in `r3bl_picker`.

// Attach sources.
pub mod api_response;

// Re-export.
pub use api_response::*;
