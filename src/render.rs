//! Renderer collaborator interface.
//!
//! The core consumes this trait; it never implements real drawing. The
//! renderer owns layout, so the core queries geometry on demand and treats an
//! absent answer as "not laid out yet" (a no-op, not an error). A headless
//! implementation for tests and script replay lives in [`crate::harness`].

/// The two navigable surfaces. Each has its own query, filtered set, and
/// selection index; focus targets are the surfaces' filter inputs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SurfaceId {
    MainList,
    Palette,
}

/// A rendered row's vertical extent, in content coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ItemBounds {
    pub top: u32,
    pub height: u32,
}

impl ItemBounds {
    /// Exclusive bottom edge.
    pub fn bottom(&self) -> u32 {
        self.top + self.height
    }
}

/// A surface's scroll window, queried from the renderer per computation and
/// never stored by the core.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Viewport {
    /// Top edge of the visible window, in content coordinates.
    pub top: u32,
    pub height: u32,
    pub content_height: u32,
    /// Current scroll position.
    pub scroll_offset: u32,
}

impl Viewport {
    /// Exclusive bottom edge of the visible window.
    pub fn bottom(&self) -> u32 {
        self.top + self.height
    }

    /// Largest valid scroll offset.
    pub fn max_scroll(&self) -> u32 {
        self.content_height.saturating_sub(self.height)
    }
}

/// What the core needs from the host renderer.
pub trait Renderer {
    /// Move input focus to the surface's filter input.
    fn focus(&mut self, surface: SurfaceId);

    /// Vertical extent of the row rendering `item_id`, or `None` when the
    /// row is not (yet) laid out.
    fn item_bounds(&self, surface: SurfaceId, item_id: &str) -> Option<ItemBounds>;

    /// Current scroll window of the surface.
    fn viewport(&self, surface: SurfaceId) -> Viewport;

    /// Scroll the surface to `offset`. Callers pass values already clamped to
    /// `[0, max_scroll]`.
    fn set_scroll_offset(&mut self, surface: SurfaceId, offset: u32);
}
