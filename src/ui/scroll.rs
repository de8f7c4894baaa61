//! Viewport-follow scrolling.
//!
//! Minimal-motion policy: scroll just enough to reveal the selected row's
//! hidden edge, never center it, never move when it is already fully visible.
//! The result is always inside `[0, max_scroll]`.

use crate::render::{ItemBounds, Viewport};

/// New scroll offset keeping `item` fully inside `viewport`.
///
/// Returns the unchanged `viewport.scroll_offset` when the item is already
/// visible; callers compare against the current offset to decide whether a
/// renderer call is needed at all.
pub fn follow(item: ItemBounds, viewport: Viewport) -> u32 {
    if item.top < viewport.top {
        // Hidden above: scroll up by exactly the overshoot.
        let delta = viewport.top - item.top;
        viewport.scroll_offset.saturating_sub(delta)
    } else if item.bottom() > viewport.bottom() {
        // Hidden below: scroll down by exactly the overshoot, capped.
        let delta = item.bottom() - viewport.bottom();
        (viewport.scroll_offset + delta).min(viewport.max_scroll())
    } else {
        viewport.scroll_offset
    }
}
