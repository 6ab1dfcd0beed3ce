// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::DisplayData;

/// Removes every whitespace character, not just leading and trailing ones.
#[must_use]
pub fn remove_whitespace(query: &str) -> String {
    query.chars().filter(|it| !it.is_whitespace()).collect()
}

/// Returns the indices of the items in `source_list` that match `query`, in their
/// original order.
///
/// - Whitespace is stripped from the query. If nothing is left, every item matches.
/// - Otherwise an item matches when its [`DisplayData::search_key`] contains the
///   stripped query as a substring, ignoring case. The query is taken literally, there
///   is no fuzzy matching and no ranking.
#[must_use]
pub fn filter_indices<T: DisplayData>(source_list: &[T], query: &str) -> Vec<usize> {
    let needle = remove_whitespace(query).to_lowercase();

    if needle.is_empty() {
        return (0..source_list.len()).collect();
    }

    source_list
        .iter()
        .enumerate()
        .filter(|(_, item)| item.search_key().to_lowercase().contains(&needle))
        .map(|(index, _)| index)
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;
    use crate::test_fixtures::sample_entries;

    fn names(query: &str) -> Vec<String> {
        let list = sample_entries();
        filter_indices(&list, query)
            .into_iter()
            .map(|index| list[index].name.clone())
            .collect()
    }

    #[test_case("John", &["John Doe", "John Hancock"] ; "first name")]
    #[test_case("NdO", &["John Doe", "Logan Doe"] ; "mixed case across first and last")]
    #[test_case("zzz", &[] ; "no match")]
    #[test_case("invalid input", &[] ; "no match with spaces")]
    #[test_case("john doe", &["John Doe"] ; "spaces are stripped")]
    #[test_case("", &["John Doe", "Logan Doe", "John Hancock"] ; "empty")]
    #[test_case("  \t ", &["John Doe", "Logan Doe", "John Hancock"] ; "blank-ish")]
    #[test_case("n.d", &[] ; "query is literal not a pattern")]
    fn test_filter(query: &str, expected: &[&str]) {
        assert_eq!(names(query), expected);
    }

    #[test]
    fn test_filtered_is_ordered_subset() {
        let list = sample_entries();
        for query in ["o", "do", "h", "an", "x"] {
            let indices = filter_indices(&list, query);
            assert!(indices.windows(2).all(|it| it[0] < it[1]));
            assert!(indices.iter().all(|it| *it < list.len()));
        }
    }

    #[test]
    fn test_remove_whitespace() {
        assert_eq!(remove_whitespace(" a b\tc\n"), "abc");
    }
}
