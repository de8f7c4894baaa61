//! Algebraic properties of the pure engines: circular index arithmetic,
//! order-preserving filtering, and bounded scroll-follow.

use proptest::prelude::*;

use review_select::ui::{filter, scroll, selection};
use review_select::{Item, ItemBounds, Viewport};

fn items_strategy() -> impl Strategy<Value = Vec<Item>> {
    prop::collection::vec("[a-z][a-z0-9-]{0,12}", 0..24).prop_map(|names| {
        names
            .into_iter()
            .enumerate()
            // Distinct ids even when generated names collide.
            .map(|(i, name)| Item::new(format!("{name}-{i}"), "7 days ago"))
            .collect()
    })
}

proptest! {
    // ==================== selection ====================

    #[test]
    fn next_then_previous_round_trips(n in 1usize..64, i in 0usize..64) {
        let i = i % n;
        prop_assert_eq!(selection::previous(selection::next(i, n), n), i);
        prop_assert_eq!(selection::next(selection::previous(i, n), n), i);
    }

    #[test]
    fn empty_collection_always_yields_zero(i in 0usize..1000) {
        prop_assert_eq!(selection::next(i, 0), 0);
        prop_assert_eq!(selection::previous(i, 0), 0);
        prop_assert_eq!(selection::clamp(i, 0), 0);
        prop_assert_eq!(selection::set_index(i, 0), 0);
    }

    #[test]
    fn moves_stay_in_bounds(n in 0usize..64, i in 0usize..1000, delta in -100i32..100) {
        let moved = selection::step(i, n, delta);
        if n == 0 {
            prop_assert_eq!(moved, 0);
        } else {
            prop_assert!(moved < n);
        }
    }

    // ==================== filter ====================

    #[test]
    fn empty_query_is_identity(items in items_strategy()) {
        let passed = filter::filter_indices(&items, "");
        let expected: Vec<usize> = (0..items.len()).collect();
        prop_assert_eq!(passed, expected);
    }

    #[test]
    fn filtered_is_ordered_subsequence(items in items_strategy(), query in "[a-z0-9-]{0,6}") {
        let passed = filter::filter_indices(&items, &query);
        prop_assert!(passed.windows(2).all(|w| w[0] < w[1]));
        prop_assert!(passed.iter().all(|&i| i < items.len()));
    }

    #[test]
    fn every_passing_item_contains_query(items in items_strategy(), query in "[a-z]{1,4}") {
        let needle = query.to_lowercase();
        for idx in filter::filter_indices(&items, &query) {
            prop_assert!(items[idx].name.to_lowercase().contains(&needle));
        }
    }

    // ==================== scroll ====================

    #[test]
    fn follow_stays_within_scroll_bounds(
        content_height in 0u32..200,
        viewport_height in 1u32..50,
        offset in 0u32..200,
        item_top in 0u32..200,
        item_height in 1u32..10,
    ) {
        let max_scroll = content_height.saturating_sub(viewport_height);
        let offset = offset.min(max_scroll);
        let viewport = Viewport {
            top: offset,
            height: viewport_height,
            content_height,
            scroll_offset: offset,
        };
        let item = ItemBounds { top: item_top, height: item_height };
        let target = scroll::follow(item, viewport);
        prop_assert!(target <= max_scroll);
    }

    #[test]
    fn follow_never_moves_a_visible_item(
        viewport_height in 2u32..50,
        offset in 0u32..100,
        slack in 0u32..50,
    ) {
        // Item placed fully inside the window.
        let content_height = offset + viewport_height + slack;
        let item = ItemBounds { top: offset, height: 1 };
        let viewport = Viewport {
            top: offset,
            height: viewport_height,
            content_height,
            scroll_offset: offset,
        };
        prop_assert_eq!(scroll::follow(item, viewport), offset);
    }
}
