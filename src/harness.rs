//! Headless renderer for tests and script replay.
//!
//! Implements [`Renderer`] over a fake fixed-row-height layout: each surface
//! is a column of rows, one per visible entry, in display order. A driver
//! calls [`HeadlessRenderer::render`] after each event, the way a real
//! renderer would redraw from the state snapshot; geometry queries answer
//! from the last rendered frame, so a row the renderer has not seen yet
//! reports no bounds.

use std::collections::HashMap;

use crate::render::{ItemBounds, Renderer, SurfaceId, Viewport};
use crate::ui::app::App;

/// Recording fake: fixed row height, configurable viewport height, and logs
/// of every focus and scroll call for assertions.
#[derive(Debug)]
pub struct HeadlessRenderer {
    row_height: u32,
    viewport_height: u32,
    rows: HashMap<SurfaceId, Vec<String>>,
    offsets: HashMap<SurfaceId, u32>,
    focused: Option<SurfaceId>,
    focus_log: Vec<SurfaceId>,
    scroll_log: Vec<(SurfaceId, u32)>,
}

impl HeadlessRenderer {
    /// Viewport height is in rows here (row height 1).
    pub fn new(viewport_height: u32) -> Self {
        Self::with_row_height(viewport_height, 1)
    }

    /// Viewport height in layout units with taller rows.
    pub fn with_row_height(viewport_height: u32, row_height: u32) -> Self {
        Self {
            row_height: row_height.max(1),
            viewport_height: viewport_height.max(1),
            rows: HashMap::new(),
            offsets: HashMap::new(),
            focused: None,
            focus_log: Vec::new(),
            scroll_log: Vec::new(),
        }
    }

    /// Redraw both surfaces from the state snapshot.
    pub fn render(&mut self, app: &App) {
        let list_rows = app
            .list
            .filtered()
            .iter()
            .filter_map(|&idx| app.list.items().get(idx))
            .map(|item| item.id.clone())
            .collect();
        self.rows.insert(SurfaceId::MainList, list_rows);

        let palette_rows = if app.palette.open {
            app.palette
                .filtered()
                .iter()
                .filter_map(|&idx| app.palette.commands().get(idx))
                .map(|cmd| cmd.id.clone())
                .collect()
        } else {
            Vec::new()
        };
        self.rows.insert(SurfaceId::Palette, palette_rows);
    }

    pub fn focused(&self) -> Option<SurfaceId> {
        self.focused
    }

    pub fn scroll_offset(&self, surface: SurfaceId) -> u32 {
        self.offsets.get(&surface).copied().unwrap_or(0)
    }

    pub fn focus_log(&self) -> &[SurfaceId] {
        &self.focus_log
    }

    pub fn scroll_log(&self) -> &[(SurfaceId, u32)] {
        &self.scroll_log
    }
}

impl Renderer for HeadlessRenderer {
    fn focus(&mut self, surface: SurfaceId) {
        self.focused = Some(surface);
        self.focus_log.push(surface);
    }

    fn item_bounds(&self, surface: SurfaceId, item_id: &str) -> Option<ItemBounds> {
        let position = self
            .rows
            .get(&surface)?
            .iter()
            .position(|id| id == item_id)?;
        Some(ItemBounds {
            top: position as u32 * self.row_height,
            height: self.row_height,
        })
    }

    fn viewport(&self, surface: SurfaceId) -> Viewport {
        let offset = self.scroll_offset(surface);
        let row_count = self.rows.get(&surface).map_or(0, Vec::len) as u32;
        Viewport {
            top: offset,
            height: self.viewport_height,
            content_height: row_count * self.row_height,
            scroll_offset: offset,
        }
    }

    fn set_scroll_offset(&mut self, surface: SurfaceId, offset: u32) {
        self.offsets.insert(surface, offset);
        self.scroll_log.push((surface, offset));
    }
}
