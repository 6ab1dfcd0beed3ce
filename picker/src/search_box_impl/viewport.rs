// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::ops::Range;

use crate::DEBUG_SEARCH_BOX_MOD;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollAdjustment {
    ScrolledUp,
    ScrolledDown,
    Unchanged,
}

/// The scrollable window over the option list. Every option has the same height, so
/// option `i` spans `[i * option_height, (i + 1) * option_height)`. All values are in
/// rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListViewport {
    pub scroll_top: usize,
    pub client_height: usize,
    pub option_height: usize,
}

impl ListViewport {
    #[must_use]
    pub fn new(max_visible_options: usize, option_height: usize) -> Self {
        Self {
            scroll_top: 0,
            client_height: max_visible_options * option_height,
            option_height,
        }
    }

    /// Minimal scroll. Only moves when the option is not already fully visible, and then
    /// only as far as needed to bring its top edge (scrolling up) or its bottom edge
    /// (scrolling down) to the matching edge of the viewport.
    pub fn scroll_into_view(&mut self, index: usize) -> ScrollAdjustment {
        let option_top = index * self.option_height;
        let option_bottom = option_top + self.option_height;

        if option_top < self.scroll_top {
            self.scroll_top = option_top;
            ScrollAdjustment::ScrolledUp
        } else if option_bottom > self.scroll_top + self.client_height {
            self.scroll_top = option_bottom.saturating_sub(self.client_height);
            ScrollAdjustment::ScrolledDown
        } else {
            ScrollAdjustment::Unchanged
        }
    }

    /// Keeps the viewport from hanging past the end of a list that just got shorter.
    pub fn clamp_to(&mut self, option_count: usize) {
        let max_scroll_top = (option_count * self.option_height).saturating_sub(self.client_height);
        self.scroll_top = self.scroll_top.min(max_scroll_top);
    }

    /// The options that are at least partially visible.
    #[must_use]
    pub fn visible_option_range(&self, option_count: usize) -> Range<usize> {
        if self.option_height == 0 {
            return 0..0;
        }
        let start = (self.scroll_top / self.option_height).min(option_count);
        let end = (self.scroll_top + self.client_height)
            .div_ceil(self.option_height)
            .min(option_count);
        start..end
    }
}

/// Runs after a state transition. Scrolls only when the selection changed to an actual
/// option, never when it was cleared.
pub fn apply_scroll_effect(
    viewport: &mut ListViewport,
    before: Option<usize>,
    after: Option<usize>,
) -> ScrollAdjustment {
    let Some(index) = after else {
        return ScrollAdjustment::Unchanged;
    };
    if before == after {
        return ScrollAdjustment::Unchanged;
    }

    let adjustment = viewport.scroll_into_view(index);

    DEBUG_SEARCH_BOX_MOD.then(|| {
        // % is Display, ? is Debug.
        tracing::debug!(
            message = "scroll into view",
            index = %index,
            adjustment = ?adjustment,
            scroll_top = %viewport.scroll_top,
        );
    });

    adjustment
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;

    /// Two options of height 100 fit in the viewport.
    fn viewport() -> ListViewport {
        ListViewport {
            scroll_top: 0,
            client_height: 200,
            option_height: 100,
        }
    }

    #[test]
    fn test_visible_options_do_not_scroll() {
        let mut it = viewport();
        assert_eq!(it.scroll_into_view(0), ScrollAdjustment::Unchanged);
        assert_eq!(it.scroll_into_view(1), ScrollAdjustment::Unchanged);
        assert_eq!(it.scroll_top, 0);
    }

    #[test]
    fn test_scroll_down_then_back_up() {
        let mut it = viewport();

        assert_eq!(it.scroll_into_view(2), ScrollAdjustment::ScrolledDown);
        assert_eq!(it.scroll_top, 100);

        assert_eq!(it.scroll_into_view(1), ScrollAdjustment::Unchanged);
        assert_eq!(it.scroll_top, 100);

        assert_eq!(it.scroll_into_view(0), ScrollAdjustment::ScrolledUp);
        assert_eq!(it.scroll_top, 0);
    }

    #[test]
    fn test_wrap_to_last_scrolls_to_bottom() {
        let mut it = viewport();
        assert_eq!(it.scroll_into_view(9), ScrollAdjustment::ScrolledDown);
        assert_eq!(it.scroll_top, 800);
        assert_eq!(it.visible_option_range(10), 8..10);
    }

    #[test]
    fn test_no_scroll_when_selection_is_cleared() {
        let mut it = viewport();
        it.scroll_top = 300;
        assert_eq!(
            apply_scroll_effect(&mut it, Some(3), None),
            ScrollAdjustment::Unchanged
        );
        assert_eq!(it.scroll_top, 300);
    }

    #[test]
    fn test_scroll_effect_only_on_change() {
        let mut it = viewport();
        it.scroll_top = 300;
        assert_eq!(
            apply_scroll_effect(&mut it, Some(0), Some(0)),
            ScrollAdjustment::Unchanged
        );
        assert_eq!(
            apply_scroll_effect(&mut it, None, Some(0)),
            ScrollAdjustment::ScrolledUp
        );
        assert_eq!(it.scroll_top, 0);
    }

    #[test_case(0, 10, 0..2)]
    #[test_case(100, 10, 1..3)]
    #[test_case(150, 10, 1..4 ; "partially visible options count")]
    #[test_case(0, 1, 0..1 ; "short list")]
    #[test_case(0, 0, 0..0 ; "empty list")]
    fn test_visible_option_range(scroll_top: usize, count: usize, expected: Range<usize>) {
        let it = ListViewport {
            scroll_top,
            ..viewport()
        };
        assert_eq!(it.visible_option_range(count), expected);
    }

    #[test]
    fn test_clamp_to_shorter_list() {
        let mut it = viewport();
        it.scroll_into_view(9);
        it.clamp_to(3);
        assert_eq!(it.scroll_top, 100);
        it.clamp_to(1);
        assert_eq!(it.scroll_top, 0);
    }
}
