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

use std::borrow::Cow;

use unicode_segmentation::UnicodeSegmentation as _;

/// The capability that the search box needs from the items it displays. Anything that
/// has an id, a display name, a first / last name pair, and an email can be shown in the
/// list, and searched.
pub trait DisplayData {
    fn id(&self) -> &str;
    fn name(&self) -> &str;
    fn first_name(&self) -> &str;
    fn last_name(&self) -> &str;
    fn email(&self) -> &str;

    /// Lowercase concatenation of first and last name. The query has its whitespace
    /// stripped before it is matched against this key, the key itself is left alone.
    fn search_key(&self) -> Cow<'_, str> {
        Cow::Owned(create_search_key(self.first_name(), self.last_name()))
    }

    /// First letter of the first name and first letter of the last name, uppercased.
    fn initials(&self) -> String {
        let mut it = String::new();
        for part in [self.first_name(), self.last_name()] {
            if let Some(grapheme) = part.graphemes(true).next() {
                it.push_str(&grapheme.to_uppercase());
            }
        }
        it
    }
}

#[must_use]
pub fn create_search_key(first_name: &str, last_name: &str) -> String {
    let mut it = String::with_capacity(first_name.len() + last_name.len());
    it.push_str(first_name);
    it.push_str(last_name);
    it.to_lowercase()
}

/// A display ready employee. Created by [`crate::adapt`] and never mutated afterward.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DisplayEntry {
    pub id: String,
    pub name: String,
    pub first_name: String,
    pub last_name: String,
    /// Empty when the employee has no matching account.
    pub email: String,
    search_key: String,
}

impl DisplayEntry {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        let first_name = first_name.into();
        let last_name = last_name.into();
        let search_key = create_search_key(&first_name, &last_name);
        Self {
            id: id.into(),
            name: name.into(),
            first_name,
            last_name,
            email: email.into(),
            search_key,
        }
    }
}

impl DisplayData for DisplayEntry {
    fn id(&self) -> &str { &self.id }

    fn name(&self) -> &str { &self.name }

    fn first_name(&self) -> &str { &self.first_name }

    fn last_name(&self) -> &str { &self.last_name }

    fn email(&self) -> &str { &self.email }

    fn search_key(&self) -> Cow<'_, str> { Cow::Borrowed(&self.search_key) }
}
