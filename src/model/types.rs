//! Normalized entity structs shared by both surfaces.
//!
//! `Item` is the main-list entry; `Command` is the palette entry. Both expose
//! their searchable text through [`SearchFields`] so the filter engine stays
//! generic over the surface it serves.

use serde::{Deserialize, Serialize};

/// An entry in the main list. Supplied externally at startup; the core never
/// mutates it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Item {
    /// Stable unique identifier, used to locate the rendered row.
    #[serde(default)]
    pub id: String,
    pub name: String,
    /// Human-readable freshness label, e.g. "7 days ago".
    #[serde(default)]
    pub updated: String,
}

impl Item {
    pub fn new(name: impl Into<String>, updated: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            id: format!("project-{name}"),
            name,
            updated: updated.into(),
        }
    }

    /// Backfill a missing id after deserialization.
    pub fn ensure_id(&mut self) {
        if self.id.is_empty() {
            self.id = format!("project-{}", self.name);
        }
    }
}

/// Categorical grouping for palette commands. Used for section headers only;
/// grouping never affects index order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CommandGroup {
    Navigation,
    Projects,
}

impl CommandGroup {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Navigation => "Navigation",
            Self::Projects => "Projects",
        }
    }
}

/// The operation a palette command performs when committed. Each variant maps
/// to one controller transition; the controller applies them synchronously.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CommandAction {
    /// Focus the main list's filter input.
    FocusFilter,
    /// Clear the main list's query, showing every item.
    ClearFilter,
    /// Move the main selection up (circular).
    SelectPrevious,
    /// Move the main selection down (circular).
    SelectNext,
    /// Clear the main filter and select the item at this position in the
    /// unfiltered collection.
    SwitchToItem { index: usize },
}

/// Render-ready descriptor for a palette command.
#[derive(Clone, Debug)]
pub struct Command {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Shortcut hint text, display-only.
    pub shortcut: String,
    pub group: CommandGroup,
    pub action: CommandAction,
}

/// Searchable text fields of a list entry, visited in a fixed order.
///
/// The filter engine matches the query against each field the entry yields;
/// an entry passes when any field contains the query.
pub trait SearchFields {
    fn for_each_field(&self, visit: &mut dyn FnMut(&str));
}

impl SearchFields for Item {
    // The main list filters on the name only.
    fn for_each_field(&self, visit: &mut dyn FnMut(&str)) {
        visit(&self.name);
    }
}

impl SearchFields for Command {
    fn for_each_field(&self, visit: &mut dyn FnMut(&str)) {
        visit(&self.title);
        visit(&self.description);
        visit(self.group.label());
        visit(&self.shortcut);
    }
}
