use crate::catalog::{Catalog, MenuId, MenuItem, SubMenuItem};
use crate::config::StorefrontConfig;
use crate::dropdown::{ClickTarget, DropdownState};
use tracing::debug;

/// Navbar model: the injected catalog plus the dropdown state it drives.
pub struct Navbar {
    catalog: &'static Catalog,
    config: StorefrontConfig,
    state: DropdownState,
}

impl Navbar {
    pub fn new(catalog: &'static Catalog, config: StorefrontConfig) -> Self {
        Self {
            catalog,
            config,
            state: DropdownState::Closed,
        }
    }

    pub fn catalog(&self) -> &'static Catalog {
        self.catalog
    }

    pub fn config(&self) -> &StorefrontConfig {
        &self.config
    }

    pub fn state(&self) -> DropdownState {
        self.state
    }

    /// Apply a click and return the link it followed, if any.
    /// Branch rows only toggle their submenu; leaf rows and submenu rows
    /// are links.
    pub fn click(&mut self, target: ClickTarget) -> Option<&'static str> {
        let link = self.link_for(target);
        self.state = self.state.click(target, self.catalog);

        debug!(?target, state = ?self.state, "navbar click");
        if let Some(href) = link {
            debug!(href, "following link");
        }
        link
    }

    /// Click a row by its title. Same transition as [`Navbar::click`], but
    /// a branch row also follows its own link while toggling its submenu.
    pub fn follow(&mut self, target: ClickTarget) -> Option<&'static str> {
        let link = self.href_of(target);
        if self.click(target).is_none() && link.is_some() {
            debug!(href = link, "following branch link");
        }
        link
    }

    /// The link a target carries, branch rows included
    pub fn href_of(&self, target: ClickTarget) -> Option<&'static str> {
        match target {
            ClickTarget::Trigger(_) => None,
            ClickTarget::Row(row) => self.open_items().get(row).map(|item| item.href()),
            ClickTarget::SubRow(row) => self.open_children().get(row).map(|sub| sub.href),
        }
    }

    pub fn close(&mut self) {
        self.state = DropdownState::Closed;
    }

    pub fn is_open(&self, menu: MenuId) -> bool {
        self.state.is_open(menu)
    }

    /// Trigger indicator, flipped while the dropdown is open
    pub fn chevron(&self, menu: MenuId) -> &'static str {
        if self.is_open(menu) { "▲" } else { "▼" }
    }

    /// Rows of the open dropdown, empty when closed
    pub fn open_items(&self) -> &'static [MenuItem] {
        self.state
            .open_menu()
            .map(|menu| self.catalog.items(menu))
            .unwrap_or(&[])
    }

    /// Rows of the open side submenu, empty when none is open
    pub fn open_children(&self) -> &'static [SubMenuItem] {
        self.state
            .open_submenu()
            .and_then(|row| self.open_items().get(row))
            .map(|item| item.children())
            .unwrap_or(&[])
    }

    fn link_for(&self, target: ClickTarget) -> Option<&'static str> {
        match target {
            ClickTarget::Row(row)
                if self.open_items().get(row).is_some_and(|item| item.has_children()) =>
            {
                None
            }
            _ => self.href_of(target),
        }
    }
}
