//! Command registry: derives the palette's command set from the main list.
//!
//! Pure and deterministic. Rebuilt (never mutated in place) every time the
//! palette opens or list state affecting it changes.
//!
//! Catalog order:
//! 1. Static navigation commands (focus filter, clear filter).
//! 2. "Select Previous/Next" — only when the filtered main list is
//!    non-empty; navigating an empty list is meaningless.
//! 3. One "Switch to <item>" command per *unfiltered* item. Each targets the
//!    item's position in the unfiltered collection, so the command stays
//!    valid no matter how the main filter changes afterwards.

use crate::model::types::{Command, CommandAction, CommandGroup, Item};
use crate::ui::state::ListState;

/// Build the palette command set for the current list state.
pub fn build_commands(list: &ListState) -> Vec<Command> {
    catalog(list.items(), list.visible_count())
}

fn catalog(items: &[Item], visible_count: usize) -> Vec<Command> {
    let mut commands = vec![
        Command {
            id: "focus-project-search".into(),
            title: "Focus Project Search".into(),
            description: "Jump to the project filter input".into(),
            shortcut: "Ctrl+F".into(),
            group: CommandGroup::Navigation,
            action: CommandAction::FocusFilter,
        },
        Command {
            id: "clear-project-filter".into(),
            title: "Clear Project Filter".into(),
            description: "Show every project".into(),
            shortcut: "Esc".into(),
            group: CommandGroup::Navigation,
            action: CommandAction::ClearFilter,
        },
    ];

    if visible_count > 0 {
        commands.push(Command {
            id: "select-previous-project".into(),
            title: "Select Previous Project".into(),
            description: "Move highlight up in the project list".into(),
            shortcut: "Up".into(),
            group: CommandGroup::Navigation,
            action: CommandAction::SelectPrevious,
        });
        commands.push(Command {
            id: "select-next-project".into(),
            title: "Select Next Project".into(),
            description: "Move highlight down in the project list".into(),
            shortcut: "Down".into(),
            group: CommandGroup::Navigation,
            action: CommandAction::SelectNext,
        });
    }

    for (index, item) in items.iter().enumerate() {
        commands.push(Command {
            id: item.id.clone(),
            title: format!("Switch to {}", item.name),
            description: format!("Last updated {}", item.updated),
            shortcut: "Enter".into(),
            group: CommandGroup::Projects,
            action: CommandAction::SwitchToItem { index },
        });
    }

    commands
}
