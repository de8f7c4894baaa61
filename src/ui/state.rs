//! Per-surface list state.
//!
//! Both structs are owned exclusively by the controller in
//! [`crate::ui::app`]; everything else reads them through it. The shared
//! invariant: `selected` indexes the *filtered* view and satisfies
//! `0 <= selected < filtered.len()` whenever the view is non-empty, else it
//! is pinned to `0` and inert.

use crate::model::types::{Command, Item};
use crate::ui::{filter, selection};

/// The main list: the full item collection plus its query and cursor.
/// Created once at startup and mutated only via controller operations.
#[derive(Clone, Debug)]
pub struct ListState {
    items: Vec<Item>,
    pub query: String,
    pub selected: usize,
    filtered: Vec<usize>,
}

impl ListState {
    pub fn new(mut items: Vec<Item>) -> Self {
        for item in &mut items {
            item.ensure_id();
        }
        let filtered = (0..items.len()).collect();
        Self {
            items,
            query: String::new(),
            selected: 0,
            filtered,
        }
    }

    /// Full unfiltered collection, read-only.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Unfiltered positions of the visible items, in display order.
    pub fn filtered(&self) -> &[usize] {
        &self.filtered
    }

    pub fn visible_count(&self) -> usize {
        self.filtered.len()
    }

    /// Recompute the filtered view for the current query and clamp the
    /// cursor so a shrinking filter never leaves it dangling.
    pub fn refilter(&mut self) {
        self.filtered = filter::filter_indices(&self.items, &self.query);
        self.selected = selection::clamp(self.selected, self.filtered.len());
    }

    /// The item under the cursor, if the filtered view is non-empty.
    pub fn selected_item(&self) -> Option<&Item> {
        self.filtered
            .get(self.selected)
            .and_then(|&idx| self.items.get(idx))
    }

    /// Visible item at a filtered position (pointer clicks).
    pub fn visible_item(&self, position: usize) -> Option<&Item> {
        self.filtered
            .get(position)
            .and_then(|&idx| self.items.get(idx))
    }
}

/// The palette overlay: rebuilt from scratch on every open, discarded on
/// commit or cancel. Nothing survives across openings.
#[derive(Clone, Debug, Default)]
pub struct PaletteState {
    pub open: bool,
    pub query: String,
    pub selected: usize,
    commands: Vec<Command>,
    filtered: Vec<usize>,
}

impl PaletteState {
    pub fn closed() -> Self {
        Self::default()
    }

    /// Open (or re-open) with a fresh command set. Idempotent: a second open
    /// without an intervening close resets identically.
    pub fn reset_open(&mut self, commands: Vec<Command>) {
        self.open = true;
        self.query.clear();
        self.selected = 0;
        self.filtered = (0..commands.len()).collect();
        self.commands = commands;
    }

    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    pub fn filtered(&self) -> &[usize] {
        &self.filtered
    }

    pub fn visible_count(&self) -> usize {
        self.filtered.len()
    }

    /// Recompute the filtered view and clamp the cursor, same contract as
    /// [`ListState::refilter`].
    pub fn refilter(&mut self) {
        self.filtered = filter::filter_indices(&self.commands, &self.query);
        self.selected = selection::clamp(self.selected, self.filtered.len());
    }

    pub fn selected_command(&self) -> Option<&Command> {
        self.filtered
            .get(self.selected)
            .and_then(|&idx| self.commands.get(idx))
    }
}
