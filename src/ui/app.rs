//! Modal controller: the top-level state machine over both surfaces.
//!
//! # Interaction Contract
//!
//! | Trigger            | Normal state                   | PaletteOpen state                     |
//! |--------------------|--------------------------------|---------------------------------------|
//! | Ctrl+K / Cmd+K     | Open palette (fresh reset)     | Re-open palette (fresh reset)         |
//! | Esc                | Not consumed                   | Close palette, refocus main filter    |
//! | Up / k             | Select previous (wraps)        | Palette select previous (wraps)       |
//! | Down / j           | Select next (wraps)            | Palette select next (wraps)           |
//! | Enter              | Not consumed                   | Execute selected command, then close  |
//! | Click on row       | Set main selection             | Set palette selection                 |
//! | Text input         | Main query → refilter          | Palette query → refilter              |
//!
//! Dispatch priority: global hotkey, then the active surface's keys, then
//! unhandled (falls through to the focused text input). While the palette is
//! open no navigation key reaches the main list.
//!
//! Every message runs one ordered pipeline to completion before the next
//! event is accepted: mutate query/index → refilter → clamp → scroll-sync.
//! `App` owns [`ListState`] and [`PaletteState`] exclusively; the filter,
//! selection, and scroll modules are pure functions it composes.

use tracing::debug;

use crate::model::types::{CommandAction, Item};
use crate::render::{Renderer, SurfaceId};
use crate::ui::commands::build_commands;
use crate::ui::keys::{Key, KeyEvent};
use crate::ui::scroll;
use crate::ui::selection;
use crate::ui::state::{ListState, PaletteState};

/// Which surface owns keyboard input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Normal,
    PaletteOpen,
}

/// One state transition. Decoded from an input event, applied by
/// [`App::update`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppMsg {
    // -- Command palette --------------------------------------------------
    /// Open (or re-open) the palette with a freshly built command set.
    PaletteOpened,
    /// Cancel the palette, discarding its state.
    PaletteClosed,
    /// Update the palette search query.
    PaletteQueryChanged(String),
    /// Move the palette selection (wraps).
    PaletteSelectionMoved { delta: i32 },
    /// Execute the selected command and close; no-op when nothing matches.
    PaletteCommitted,

    // -- Main list --------------------------------------------------------
    /// Update the main list's search query.
    QueryChanged(String),
    /// Move the main selection (wraps).
    SelectionMoved { delta: i32 },

    // -- Pointer ----------------------------------------------------------
    /// Click on a rendered row: set that surface's selection to the row's
    /// filtered position.
    ItemClicked { surface: SurfaceId, position: usize },
}

/// Single source of truth for both surfaces. All mutation flows through
/// [`App::update`] on the one event-processing turn; there is no other
/// writer.
#[derive(Clone, Debug)]
pub struct App {
    pub list: ListState,
    pub palette: PaletteState,
}

impl App {
    pub fn new(items: Vec<Item>) -> Self {
        Self {
            list: ListState::new(items),
            palette: PaletteState::closed(),
        }
    }

    pub fn mode(&self) -> Mode {
        if self.palette.open {
            Mode::PaletteOpen
        } else {
            Mode::Normal
        }
    }

    /// Surface currently owning text input.
    pub fn active_surface(&self) -> SurfaceId {
        match self.mode() {
            Mode::Normal => SurfaceId::MainList,
            Mode::PaletteOpen => SurfaceId::Palette,
        }
    }

    /// Initial focus handoff, called once after startup.
    pub fn bootstrap(&self, renderer: &mut dyn Renderer) {
        renderer.focus(SurfaceId::MainList);
    }

    /// Decode a keystroke into at most one message, consuming the event when
    /// the core handles it. Pure with respect to state; the caller feeds the
    /// result to [`App::update`].
    pub fn dispatch_key(&self, event: &mut KeyEvent) -> Option<AppMsg> {
        // The open hotkey is intercepted in every state.
        if (event.ctrl || event.meta) && event.key == Key::Char('k') {
            event.consume();
            return Some(AppMsg::PaletteOpened);
        }

        if self.palette.open {
            let visible = self.palette.visible_count();
            return match event.key {
                Key::Escape => {
                    event.consume();
                    Some(AppMsg::PaletteClosed)
                }
                Key::Up | Key::Char('k') if visible > 0 => {
                    event.consume();
                    Some(AppMsg::PaletteSelectionMoved { delta: -1 })
                }
                Key::Down | Key::Char('j') if visible > 0 => {
                    event.consume();
                    Some(AppMsg::PaletteSelectionMoved { delta: 1 })
                }
                // Enter is always consumed while the palette is open; the
                // commit itself no-ops when nothing is selectable.
                Key::Enter => {
                    event.consume();
                    Some(AppMsg::PaletteCommitted)
                }
                _ => None,
            };
        }

        // Normal state: navigation is inert on an empty filtered list.
        if self.list.visible_count() == 0 {
            return None;
        }
        match event.key {
            Key::Up | Key::Char('k') => {
                event.consume();
                Some(AppMsg::SelectionMoved { delta: -1 })
            }
            Key::Down | Key::Char('j') => {
                event.consume();
                Some(AppMsg::SelectionMoved { delta: 1 })
            }
            _ => None,
        }
    }

    /// Decode and apply a keystroke in one call.
    pub fn handle_key(&mut self, event: &mut KeyEvent, renderer: &mut dyn Renderer) {
        if let Some(msg) = self.dispatch_key(event) {
            self.update(msg, renderer);
        }
    }

    /// Route text input to whichever surface owns focus.
    pub fn input_changed(&mut self, text: impl Into<String>, renderer: &mut dyn Renderer) {
        let msg = match self.mode() {
            Mode::Normal => AppMsg::QueryChanged(text.into()),
            Mode::PaletteOpen => AppMsg::PaletteQueryChanged(text.into()),
        };
        self.update(msg, renderer);
    }

    /// Apply one state transition, synchronously, including any renderer
    /// effects (focus, scroll).
    pub fn update(&mut self, msg: AppMsg, renderer: &mut dyn Renderer) {
        match msg {
            // -- Command palette ----------------------------------------------
            AppMsg::PaletteOpened => {
                let commands = build_commands(&self.list);
                debug!(commands = commands.len(), "palette.open");
                self.palette.reset_open(commands);
                renderer.set_scroll_offset(SurfaceId::Palette, 0);
                renderer.focus(SurfaceId::Palette);
            }
            AppMsg::PaletteClosed => {
                debug!("palette.cancel");
                self.palette = PaletteState::closed();
                renderer.focus(SurfaceId::MainList);
            }
            AppMsg::PaletteQueryChanged(q) => {
                if !self.palette.open {
                    return;
                }
                self.palette.query = q;
                self.palette.refilter();
                debug!(
                    query = %self.palette.query,
                    visible = self.palette.visible_count(),
                    "palette.filter"
                );
                self.sync_scroll(SurfaceId::Palette, renderer);
            }
            AppMsg::PaletteSelectionMoved { delta } => {
                if !self.palette.open {
                    return;
                }
                self.palette.selected =
                    selection::step(self.palette.selected, self.palette.visible_count(), delta);
                self.sync_scroll(SurfaceId::Palette, renderer);
            }
            AppMsg::PaletteCommitted => {
                if !self.palette.open {
                    return;
                }
                let Some(command) = self.palette.selected_command() else {
                    // Nothing to execute; the palette stays open.
                    debug!("palette.commit.noop");
                    return;
                };
                let id = command.id.clone();
                let action = command.action.clone();
                debug!(command = %id, "palette.commit");
                self.palette = PaletteState::closed();
                renderer.focus(SurfaceId::MainList);
                self.apply_action(action, renderer);
            }

            // -- Main list ----------------------------------------------------
            AppMsg::QueryChanged(q) => {
                self.list.query = q;
                self.list.refilter();
                debug!(
                    query = %self.list.query,
                    visible = self.list.visible_count(),
                    "list.filter"
                );
                self.sync_scroll(SurfaceId::MainList, renderer);
            }
            AppMsg::SelectionMoved { delta } => {
                self.list.selected =
                    selection::step(self.list.selected, self.list.visible_count(), delta);
                debug!(selected = self.list.selected, "list.select");
                self.sync_scroll(SurfaceId::MainList, renderer);
            }

            // -- Pointer ------------------------------------------------------
            AppMsg::ItemClicked { surface, position } => match surface {
                SurfaceId::MainList => {
                    self.list.selected = selection::set_index(position, self.list.visible_count());
                    self.sync_scroll(SurfaceId::MainList, renderer);
                }
                SurfaceId::Palette => {
                    if !self.palette.open {
                        return;
                    }
                    self.palette.selected =
                        selection::set_index(position, self.palette.visible_count());
                    self.sync_scroll(SurfaceId::Palette, renderer);
                }
            },
        }
    }

    fn apply_action(&mut self, action: CommandAction, renderer: &mut dyn Renderer) {
        match action {
            CommandAction::FocusFilter => renderer.focus(SurfaceId::MainList),
            CommandAction::ClearFilter => {
                self.list.query.clear();
                self.list.refilter();
                self.sync_scroll(SurfaceId::MainList, renderer);
            }
            CommandAction::SelectPrevious => {
                self.list.selected =
                    selection::previous(self.list.selected, self.list.visible_count());
                self.sync_scroll(SurfaceId::MainList, renderer);
            }
            CommandAction::SelectNext => {
                self.list.selected = selection::next(self.list.selected, self.list.visible_count());
                self.sync_scroll(SurfaceId::MainList, renderer);
            }
            CommandAction::SwitchToItem { index } => {
                // Targets the unfiltered position: clear the filter first so
                // the filtered and unfiltered views coincide, then clamp.
                self.list.query.clear();
                self.list.refilter();
                self.list.selected = selection::set_index(index, self.list.visible_count());
                self.sync_scroll(SurfaceId::MainList, renderer);
            }
        }
    }

    /// Recompute the surface's scroll offset so the selected row stays
    /// visible. Missing bounds mean the renderer has not laid the row out
    /// yet; that is a no-op this turn.
    fn sync_scroll(&self, surface: SurfaceId, renderer: &mut dyn Renderer) {
        let item_id = match surface {
            SurfaceId::MainList => self.list.selected_item().map(|item| item.id.clone()),
            SurfaceId::Palette => self.palette.selected_command().map(|cmd| cmd.id.clone()),
        };
        let Some(item_id) = item_id else { return };
        let Some(bounds) = renderer.item_bounds(surface, &item_id) else {
            return;
        };
        let viewport = renderer.viewport(surface);
        let target = scroll::follow(bounds, viewport);
        if target != viewport.scroll_offset {
            renderer.set_scroll_offset(surface, target);
        }
    }
}
