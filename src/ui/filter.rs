//! Case-insensitive substring filtering over an entry's searchable fields.
//!
//! This is deliberately not a fuzzy or ranked matcher: an entry either passes
//! or it doesn't, and passing entries keep their original relative order. A
//! blank (or whitespace-only) query matches everything.

use crate::model::types::SearchFields;

/// True when the query matches at least one field of `entry`.
///
/// The query is trimmed and lower-cased once; fields are lower-cased as they
/// are visited. An empty trimmed query matches unconditionally.
pub fn matches<T: SearchFields>(entry: &T, query: &str) -> bool {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    let mut hit = false;
    entry.for_each_field(&mut |field| {
        if !hit && field.to_lowercase().contains(&needle) {
            hit = true;
        }
    });
    hit
}

/// Indices of entries passing the filter, in input order.
///
/// Returning positions instead of clones keeps the unfiltered position of
/// every visible entry available to callers (the command registry and pointer
/// handling both need it).
pub fn filter_indices<T: SearchFields>(entries: &[T], query: &str) -> Vec<usize> {
    if query.trim().is_empty() {
        return (0..entries.len()).collect();
    }
    entries
        .iter()
        .enumerate()
        .filter(|(_, entry)| matches(*entry, query))
        .map(|(idx, _)| idx)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::types::Item;

    fn items() -> Vec<Item> {
        [
            "frontend-app",
            "backend-api",
            "mobile-app",
            "data-pipeline",
            "ml-service",
        ]
        .into_iter()
        .map(|name| Item::new(name, "7 days ago"))
        .collect()
    }

    // ==================== matches tests ====================

    #[test]
    fn empty_query_matches_everything() {
        let item = Item::new("frontend-app", "");
        assert!(matches(&item, ""));
        assert!(matches(&item, "   "));
    }

    #[test]
    fn match_is_case_insensitive() {
        let item = Item::new("Frontend-App", "");
        assert!(matches(&item, "frontend"));
        assert!(matches(&item, "FRONTEND"));
        assert!(matches(&item, "End-A"));
    }

    #[test]
    fn query_is_trimmed_before_matching() {
        let item = Item::new("mobile-app", "");
        assert!(matches(&item, "  app  "));
    }

    #[test]
    fn non_matching_query_fails() {
        let item = Item::new("mobile-app", "");
        assert!(!matches(&item, "xyz"));
    }

    // ==================== filter_indices tests ====================

    #[test]
    fn empty_query_is_identity() {
        let items = items();
        assert_eq!(filter_indices(&items, ""), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn filter_preserves_input_order() {
        let items = items();
        // "app" matches frontend-app (0) and mobile-app (2), in that order.
        assert_eq!(filter_indices(&items, "app"), vec![0, 2]);
    }

    #[test]
    fn filter_result_is_subsequence_of_input() {
        let items = items();
        for query in ["a", "app", "api", "e", ""] {
            let passed = filter_indices(&items, query);
            assert!(passed.windows(2).all(|w| w[0] < w[1]), "query {query:?}");
            assert!(passed.iter().all(|&i| i < items.len()));
        }
    }

    #[test]
    fn no_match_yields_empty() {
        let items = items();
        assert!(filter_indices(&items, "zzz").is_empty());
    }

    #[test]
    fn filter_on_empty_collection() {
        let items: Vec<Item> = Vec::new();
        assert!(filter_indices(&items, "").is_empty());
        assert!(filter_indices(&items, "app").is_empty());
    }
}
