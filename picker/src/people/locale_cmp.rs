// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::cmp::Ordering;

use unicode_normalization::{UnicodeNormalization, char::is_combining_mark};

/// Compares two display names the way a person would expect them to be sorted, rather
/// than by code point. This follows the levels of the default collation order:
///
/// 1. Primary: base letters only. Case and accents are ignored, so `"alice"` sorts
///    before `"Bob"`, and `"Émile"` sorts with the other `e` names, before `"Eve"`.
/// 2. Secondary: accents. When two names only differ by accents, the unaccented one
///    comes first (`"Eve"` before `"Ève"`).
/// 3. Tertiary: case. The lowercase one comes first (`"a"` before `"A"`).
///
/// Whitespace and punctuation are not ignored, so `"John Doe"` sorts before `"Johnny"`.
#[must_use]
pub fn locale_compare(lhs: &str, rhs: &str) -> Ordering {
    base_letters(lhs)
        .cmp(base_letters(rhs))
        .then_with(|| decomposed(lhs).cmp(decomposed(rhs)))
        .then_with(|| compare_case(lhs, rhs))
}

/// Lowercase canonical decomposition (NFD).
fn decomposed(it: &str) -> impl Iterator<Item = char> + '_ {
    it.nfd().flat_map(char::to_lowercase)
}

/// [`decomposed`] with the combining marks (accents) dropped.
fn base_letters(it: &str) -> impl Iterator<Item = char> + '_ {
    decomposed(it).filter(|ch| !is_combining_mark(*ch))
}

fn compare_case(lhs: &str, rhs: &str) -> Ordering {
    for (l, r) in lhs.nfd().zip(rhs.nfd()) {
        if l == r {
            continue;
        }
        return match (l.is_lowercase(), r.is_lowercase()) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            _ => l.cmp(&r),
        };
    }
    lhs.nfd().count().cmp(&rhs.nfd().count())
}
