//! State machine for a filter select widget.
//!
//! A custom dropdown: a button showing the current selection, a menu whose
//! first row is the "all" default, an open/closed flag, and a change
//! notification fired when the selection moves. Rendering is left to the
//! caller; interactive mode draws the rows as a numbered menu.

use serde::{Deserialize, Serialize};

/// Change notification emitted when the selection moves.
///
/// `value` is `None` when the widget was reset to its "all" default. The
/// caller is expected to re-apply the filter and re-render on every change.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SelectChange {
    pub value: Option<String>,
}

/// One visible menu row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuRow<'a> {
    pub label: &'a str,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterSelect {
    default_label: String,
    options: Vec<String>,
    /// Index into `options`; `None` selects the default row.
    selected: Option<usize>,
    open: bool,
}

impl FilterSelect {
    #[must_use]
    pub fn new(default_label: impl Into<String>, options: Vec<String>) -> Self {
        Self {
            default_label: default_label.into(),
            options,
            selected: None,
            open: false,
        }
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Flip the menu open or closed.
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Currently selected option value; `None` means the "all" default.
    #[must_use]
    pub fn selected_value(&self) -> Option<&str> {
        self.selected.map(|idx| self.options[idx].as_str())
    }

    /// Text shown on the closed widget's button.
    #[must_use]
    pub fn button_label(&self) -> &str {
        self.selected_value().unwrap_or(&self.default_label)
    }

    /// Menu rows in display order: the default row first, then each option.
    pub fn menu_rows(&self) -> impl Iterator<Item = MenuRow<'_>> {
        let selected = self.selected;
        std::iter::once(MenuRow {
            label: self.default_label.as_str(),
            selected: selected.is_none(),
        })
        .chain(self.options.iter().enumerate().map(move |(idx, label)| {
            MenuRow {
                label: label.as_str(),
                selected: selected == Some(idx),
            }
        }))
    }

    /// Choose a menu row by display index.
    ///
    /// Row 0 resets to the default; rows past the end are ignored, like a
    /// click landing outside every option. A successful choice updates the
    /// selection, closes the menu, and returns the change notification.
    pub fn choose(&mut self, row: usize) -> Option<SelectChange> {
        if row > self.options.len() {
            return None;
        }

        self.selected = row.checked_sub(1);
        self.open = false;
        Some(SelectChange {
            value: self.selected_value().map(str::to_string),
        })
    }

    /// Reset to the default row without touching the open flag.
    ///
    /// This is the clear-button path; it fires a change notification even if
    /// the widget was already on the default.
    pub fn clear(&mut self) -> SelectChange {
        self.selected = None;
        SelectChange { value: None }
    }
}
