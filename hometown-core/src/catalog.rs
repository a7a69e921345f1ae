// Category taxonomy of the storefront

use crate::error::{Result, StorefrontError};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Identifier of one top-level dropdown in the navbar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MenuId {
    Furniture,
    Kitchen,
    Decor,
    Furnishing,
    Interiors,
    Clearance,
}

impl MenuId {
    /// All menus, in the order their triggers appear in the navbar
    pub const ALL: [MenuId; 6] = [
        MenuId::Furniture,
        MenuId::Kitchen,
        MenuId::Decor,
        MenuId::Furnishing,
        MenuId::Interiors,
        MenuId::Clearance,
    ];

    pub fn key(self) -> &'static str {
        match self {
            MenuId::Furniture => "furniture",
            MenuId::Kitchen => "kitchen",
            MenuId::Decor => "decor",
            MenuId::Furnishing => "furnishing",
            MenuId::Interiors => "interiors",
            MenuId::Clearance => "clearance",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuId::Furniture => "Furniture",
            MenuId::Kitchen => "Kitchen & Dining",
            MenuId::Decor => "Home Decor",
            MenuId::Furnishing => "Home Furnishing",
            MenuId::Interiors => "Interiors",
            MenuId::Clearance => "Clearance Sale",
        }
    }

    /// Position of the trigger in the navbar row
    pub fn index(self) -> usize {
        match self {
            MenuId::Furniture => 0,
            MenuId::Kitchen => 1,
            MenuId::Decor => 2,
            MenuId::Furnishing => 3,
            MenuId::Interiors => 4,
            MenuId::Clearance => 5,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

impl fmt::Display for MenuId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for MenuId {
    type Err = StorefrontError;

    fn from_str(s: &str) -> Result<Self> {
        let key = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|id| id.key() == key)
            .ok_or_else(|| StorefrontError::UnknownMenu(s.to_string()))
    }
}

/// Leaf entry nested one level under a [`MenuItem`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SubMenuItem {
    pub name: &'static str,
    pub href: &'static str,
}

/// A row of a dropdown: either a plain link or a link that expands
/// into a side submenu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    Leaf {
        title: &'static str,
        href: &'static str,
    },
    Branch {
        title: &'static str,
        href: &'static str,
        children: &'static [SubMenuItem],
    },
}

impl MenuItem {
    pub fn title(&self) -> &'static str {
        match self {
            MenuItem::Leaf { title, .. } | MenuItem::Branch { title, .. } => *title,
        }
    }

    pub fn href(&self) -> &'static str {
        match self {
            MenuItem::Leaf { href, .. } | MenuItem::Branch { href, .. } => *href,
        }
    }

    pub fn children(&self) -> &'static [SubMenuItem] {
        match self {
            MenuItem::Leaf { .. } => &[],
            MenuItem::Branch { children, .. } => *children,
        }
    }

    pub fn has_children(&self) -> bool {
        matches!(self, MenuItem::Branch { .. })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Menu {
    pub id: MenuId,
    pub items: &'static [MenuItem],
}

/// Where a route sits in the taxonomy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Breadcrumb {
    pub menu: MenuId,
    pub item: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_item: Option<&'static str>,
    pub href: &'static str,
}

impl fmt::Display for Breadcrumb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} › {}", self.menu.label(), self.item)?;
        if let Some(sub_item) = self.sub_item {
            write!(f, " › {}", sub_item)?;
        }
        Ok(())
    }
}

/// The full set of dropdown menus. Immutable once built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Catalog {
    menus: &'static [Menu],
}

impl Catalog {
    pub const fn new(menus: &'static [Menu]) -> Self {
        Self { menus }
    }

    /// The HomeTown category tables
    pub fn storefront() -> &'static Catalog {
        &STOREFRONT
    }

    pub fn menus(&self) -> &'static [Menu] {
        self.menus
    }

    pub fn menu(&self, id: MenuId) -> Option<&'static Menu> {
        self.menus.iter().find(|menu| menu.id == id)
    }

    /// Rows of the dropdown for `id`; empty when the catalog has no such menu
    pub fn items(&self, id: MenuId) -> &'static [MenuItem] {
        self.menu(id).map(|menu| menu.items).unwrap_or(&[])
    }

    /// Every link target, in navbar order: each item followed by its children
    pub fn routes(&self) -> Vec<Breadcrumb> {
        let mut routes = Vec::new();
        for menu in self.menus {
            for item in menu.items {
                routes.push(Breadcrumb {
                    menu: menu.id,
                    item: item.title(),
                    sub_item: None,
                    href: item.href(),
                });
                for child in item.children() {
                    routes.push(Breadcrumb {
                        menu: menu.id,
                        item: item.title(),
                        sub_item: Some(child.name),
                        href: child.href,
                    });
                }
            }
        }
        routes
    }

    /// Map a link target back to its place in the taxonomy.
    /// A single trailing slash is ignored.
    pub fn resolve(&self, path: &str) -> Result<Breadcrumb> {
        let trimmed = path.trim();
        let normalized = match trimmed.strip_suffix('/') {
            Some(stripped) if !stripped.is_empty() => stripped,
            _ => trimmed,
        };

        self.routes()
            .into_iter()
            .find(|route| route.href == normalized)
            .ok_or_else(|| StorefrontError::UnknownRoute(path.to_string()))
    }
}

const LIVING_ROOM: &[SubMenuItem] = &[
    SubMenuItem { name: "Sofas", href: "/furniture/living-room/sofas" },
    SubMenuItem { name: "Loungers", href: "/furniture/living-room/loungers" },
    SubMenuItem { name: "Recliners", href: "/furniture/living-room/recliners" },
    SubMenuItem { name: "Accent Chairs", href: "/furniture/living-room/accent-chairs" },
    SubMenuItem { name: "Center Tables", href: "/furniture/living-room/center-tables" },
    SubMenuItem { name: "End Tables", href: "/furniture/living-room/end-tables" },
    SubMenuItem { name: "TV Units", href: "/furniture/living-room/tv-units" },
    SubMenuItem { name: "Storage Cabinets", href: "/furniture/living-room/storage-cabinets" },
];

const COOKWARE: &[SubMenuItem] = &[
    SubMenuItem { name: "Pans", href: "/kitchen/cookware/pans" },
    SubMenuItem { name: "Pots", href: "/kitchen/cookware/pots" },
    SubMenuItem { name: "Pressure Cookers", href: "/kitchen/cookware/pressure-cookers" },
];

const KITCHEN_STORAGE: &[SubMenuItem] = &[
    SubMenuItem { name: "Containers", href: "/kitchen/storage/containers" },
    SubMenuItem { name: "Racks", href: "/kitchen/storage/racks" },
];

const FURNITURE_MENU: &[MenuItem] = &[
    MenuItem::Branch {
        title: "Living Room Furniture",
        href: "/furniture/living-room",
        children: LIVING_ROOM,
    },
    MenuItem::Leaf { title: "Bar Furniture", href: "/furniture/bar" },
    MenuItem::Leaf { title: "Dining & Kitchen Furniture", href: "/furniture/dining-kitchen" },
    MenuItem::Leaf { title: "Study & Office Furniture", href: "/furniture/study-office" },
    MenuItem::Leaf { title: "Shoe Racks", href: "/furniture/shoe-racks" },
    MenuItem::Leaf { title: "Bedroom Furniture", href: "/furniture/bedroom" },
    MenuItem::Leaf { title: "Mattresses", href: "/furniture/mattresses" },
    MenuItem::Leaf { title: "Accent Furniture", href: "/furniture/accent" },
    MenuItem::Leaf { title: "Kids Furniture", href: "/furniture/kids" },
];

const KITCHEN_MENU: &[MenuItem] = &[
    MenuItem::Branch {
        title: "Cookware",
        href: "/kitchen/cookware",
        children: COOKWARE,
    },
    MenuItem::Branch {
        title: "Storage & Organization",
        href: "/kitchen/storage",
        children: KITCHEN_STORAGE,
    },
    MenuItem::Leaf { title: "Kitchen Gadgets", href: "/kitchen/gadgets" },
    MenuItem::Leaf { title: "Dinnerware", href: "/kitchen/dinnerware" },
    MenuItem::Leaf { title: "Serveware", href: "/kitchen/serveware" },
    MenuItem::Leaf { title: "Drinkware", href: "/kitchen/drinkware" },
    MenuItem::Leaf { title: "Table Linen", href: "/kitchen/linen" },
];

const DECOR_MENU: &[MenuItem] = &[
    MenuItem::Leaf { title: "Room Decor", href: "/decor/room-decor" },
    MenuItem::Leaf { title: "Candle Holders", href: "/decor/candle-holders" },
    MenuItem::Leaf { title: "Garden", href: "/decor/garden" },
    MenuItem::Leaf { title: "Clocks", href: "/decor/clocks" },
    MenuItem::Leaf { title: "Candles & Fragrances", href: "/decor/candles-fragrances" },
];

const FURNISHING_MENU: &[MenuItem] = &[
    MenuItem::Leaf { title: "Cushions & Fillers", href: "/furnishing/cushions-fillers" },
    MenuItem::Leaf { title: "Curtains", href: "/furnishing/curtains" },
    MenuItem::Leaf { title: "Bed Linen", href: "/furnishing/bed-linen" },
    MenuItem::Leaf { title: "Pillows", href: "/furnishing/pillows" },
    MenuItem::Leaf { title: "Floor Coverings", href: "/furnishing/floor-coverings" },
    MenuItem::Leaf { title: "Bath", href: "/furnishing/bath" },
];

const INTERIORS_MENU: &[MenuItem] = &[
    MenuItem::Leaf { title: "Modular Kitchen", href: "/interiors/kitchen" },
    MenuItem::Leaf { title: "Wardrobes", href: "/interiors/wardrobes" },
    MenuItem::Leaf { title: "Full Home Interiors", href: "/interiors/full-home" },
];

const CLEARANCE_MENU: &[MenuItem] = &[
    MenuItem::Leaf { title: "Furniture", href: "/clearance/furniture" },
    MenuItem::Leaf { title: "Homeware", href: "/clearance/homeware" },
];

static STOREFRONT: Catalog = Catalog::new(&[
    Menu { id: MenuId::Furniture, items: FURNITURE_MENU },
    Menu { id: MenuId::Kitchen, items: KITCHEN_MENU },
    Menu { id: MenuId::Decor, items: DECOR_MENU },
    Menu { id: MenuId::Furnishing, items: FURNISHING_MENU },
    Menu { id: MenuId::Interiors, items: INTERIORS_MENU },
    Menu { id: MenuId::Clearance, items: CLEARANCE_MENU },
]);
