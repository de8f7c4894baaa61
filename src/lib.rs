//! Filterable project list with a modal command palette.
//!
//! The crate is the selection/filtering/scroll-sync engine plus the modal
//! focus-state machine shared by the main list and the palette overlay.
//! Rendering is a consumed collaborator behind [`render::Renderer`]; a
//! headless implementation for tests and script replay lives in [`harness`].

pub mod catalog;
pub mod harness;
pub mod model;
pub mod render;
pub mod ui;

pub use model::types::{Command, CommandAction, CommandGroup, Item};
pub use render::{ItemBounds, Renderer, SurfaceId, Viewport};
pub use ui::app::{App, AppMsg, Mode};
pub use ui::keys::{Key, KeyEvent};
