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

use crossterm::style::{Attribute, Attributes, Color, ContentStyle};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleSheet {
    pub textbox_style: ContentStyle,
    pub placeholder_style: ContentStyle,
    pub unselected_style: ContentStyle,
    pub selected_style: ContentStyle,
    pub initials_style: ContentStyle,
    /// Emails and placeholder rows.
    pub muted_style: ContentStyle,
    pub error_style: ContentStyle,
}

fn rgb(r: u8, g: u8, b: u8) -> Option<Color> { Some(Color::Rgb { r, g, b }) }

fn bold() -> Attributes { Attributes::from(Attribute::Bold) }

impl Default for StyleSheet {
    fn default() -> Self {
        let textbox_style = ContentStyle {
            foreground_color: rgb(171, 204, 242),
            ..ContentStyle::default()
        };
        let placeholder_style = ContentStyle {
            foreground_color: rgb(90, 90, 90),
            attributes: Attributes::from(Attribute::Italic),
            ..ContentStyle::default()
        };
        let unselected_style = ContentStyle::default();
        let selected_style = ContentStyle {
            foreground_color: rgb(9, 238, 211),
            background_color: rgb(72, 34, 97),
            attributes: bold(),
            ..ContentStyle::default()
        };
        let initials_style = ContentStyle {
            foreground_color: rgb(14, 17, 23),
            background_color: rgb(171, 204, 242),
            attributes: bold(),
            ..ContentStyle::default()
        };
        let muted_style = ContentStyle {
            foreground_color: rgb(128, 128, 128),
            ..ContentStyle::default()
        };
        let error_style = ContentStyle {
            foreground_color: rgb(255, 95, 95),
            ..ContentStyle::default()
        };
        StyleSheet {
            textbox_style,
            placeholder_style,
            unselected_style,
            selected_style,
            initials_style,
            muted_style,
            error_style,
        }
    }
}

impl StyleSheet {
    #[must_use]
    pub fn sea_foam_style() -> Self {
        let selected_style = ContentStyle {
            foreground_color: rgb(122, 255, 255),
            background_color: rgb(0, 64, 64),
            attributes: bold(),
            ..ContentStyle::default()
        };
        let initials_style = ContentStyle {
            foreground_color: rgb(0, 64, 64),
            background_color: rgb(122, 255, 255),
            attributes: bold(),
            ..ContentStyle::default()
        };
        StyleSheet {
            selected_style,
            initials_style,
            ..StyleSheet::default()
        }
    }

    /// No colors or attributes at all, for terminals that can't show them.
    #[must_use]
    pub fn no_color_style() -> Self {
        let plain = ContentStyle::default();
        StyleSheet {
            textbox_style: plain,
            placeholder_style: plain,
            unselected_style: plain,
            selected_style: ContentStyle {
                attributes: Attributes::from(Attribute::Reverse),
                ..plain
            },
            initials_style: plain,
            muted_style: plain,
            error_style: plain,
        }
    }
}
