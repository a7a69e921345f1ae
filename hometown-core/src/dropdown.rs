use crate::catalog::{Catalog, MenuId};
use tracing::trace;

/// Which dropdown, and which submenu inside it, is showing.
///
/// A submenu can only be open inside an open dropdown, so there is no
/// state for "submenu open, menu closed".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DropdownState {
    #[default]
    Closed,
    MenuOpen(MenuId),
    SubmenuOpen { menu: MenuId, submenu: usize },
}

/// What the user clicked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// A top-level trigger in the navbar row
    Trigger(MenuId),
    /// Row `n` of the open dropdown
    Row(usize),
    /// Row `n` of the open side submenu
    SubRow(usize),
}

impl DropdownState {
    pub fn open_menu(&self) -> Option<MenuId> {
        match *self {
            DropdownState::Closed => None,
            DropdownState::MenuOpen(menu) | DropdownState::SubmenuOpen { menu, .. } => Some(menu),
        }
    }

    pub fn open_submenu(&self) -> Option<usize> {
        match *self {
            DropdownState::SubmenuOpen { submenu, .. } => Some(submenu),
            _ => None,
        }
    }

    pub fn is_open(&self, menu: MenuId) -> bool {
        self.open_menu() == Some(menu)
    }

    /// Apply one click. Every (state, target) pair has a defined successor;
    /// clicks that land on plain links leave the state untouched.
    pub fn click(self, target: ClickTarget, catalog: &Catalog) -> DropdownState {
        let next = match (self, target) {
            (state, ClickTarget::Trigger(menu)) => {
                if state.is_open(menu) {
                    DropdownState::Closed
                } else {
                    DropdownState::MenuOpen(menu)
                }
            }
            (DropdownState::Closed, _) => DropdownState::Closed,
            (state, ClickTarget::SubRow(_)) => state,
            (DropdownState::MenuOpen(menu), ClickTarget::Row(row)) => {
                select_row(self, menu, None, row, catalog)
            }
            (DropdownState::SubmenuOpen { menu, submenu }, ClickTarget::Row(row)) => {
                select_row(self, menu, Some(submenu), row, catalog)
            }
        };

        trace!(from = ?self, to = ?next, ?target, "dropdown transition");
        next
    }
}

fn select_row(
    current: DropdownState,
    menu: MenuId,
    open: Option<usize>,
    row: usize,
    catalog: &Catalog,
) -> DropdownState {
    match catalog.items(menu).get(row) {
        Some(item) if item.has_children() => {
            if open == Some(row) {
                DropdownState::MenuOpen(menu)
            } else {
                DropdownState::SubmenuOpen { menu, submenu: row }
            }
        }
        // Leaf rows are plain links, out-of-range rows hit nothing
        _ => current,
    }
}
