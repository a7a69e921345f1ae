// Tests for the category tables and route lookup

use hometown_core::catalog::{Catalog, MenuId};
use hometown_core::error::StorefrontError;
use std::collections::HashSet;

// ============================================================================
// MenuId Tests
// ============================================================================

#[test]
fn test_menu_order_and_labels() {
    let labels: Vec<&str> = MenuId::ALL.iter().map(|id| id.label()).collect();
    assert_eq!(
        labels,
        vec![
            "Furniture",
            "Kitchen & Dining",
            "Home Decor",
            "Home Furnishing",
            "Interiors",
            "Clearance Sale",
        ]
    );
}

#[test]
fn test_menu_index_round_trips() {
    for (idx, id) in MenuId::ALL.into_iter().enumerate() {
        assert_eq!(id.index(), idx);
        assert_eq!(MenuId::from_index(idx), Some(id));
    }
    assert_eq!(MenuId::from_index(6), None);
}

#[test]
fn test_menu_id_from_str() {
    assert_eq!("furniture".parse::<MenuId>().unwrap(), MenuId::Furniture);
    assert_eq!("Kitchen".parse::<MenuId>().unwrap(), MenuId::Kitchen);
    assert_eq!(" CLEARANCE ".parse::<MenuId>().unwrap(), MenuId::Clearance);
}

#[test]
fn test_menu_id_from_str_unknown() {
    let err = "garage".parse::<MenuId>().unwrap_err();
    assert!(matches!(err, StorefrontError::UnknownMenu(ref name) if name == "garage"));
    assert!(err.to_string().contains("garage"));
}

// ============================================================================
// Storefront Table Tests
// ============================================================================

#[test]
fn test_storefront_has_six_menus_in_navbar_order() {
    let ids: Vec<MenuId> = Catalog::storefront().menus().iter().map(|m| m.id).collect();
    assert_eq!(ids, MenuId::ALL.to_vec());
}

#[test]
fn test_storefront_item_counts() {
    let catalog = Catalog::storefront();
    assert_eq!(catalog.items(MenuId::Furniture).len(), 9);
    assert_eq!(catalog.items(MenuId::Kitchen).len(), 7);
    assert_eq!(catalog.items(MenuId::Decor).len(), 5);
    assert_eq!(catalog.items(MenuId::Furnishing).len(), 6);
    assert_eq!(catalog.items(MenuId::Interiors).len(), 3);
    assert_eq!(catalog.items(MenuId::Clearance).len(), 2);
}

#[test]
fn test_living_room_submenu() {
    let living_room = Catalog::storefront().items(MenuId::Furniture)[0];
    assert_eq!(living_room.title(), "Living Room Furniture");
    assert_eq!(living_room.href(), "/furniture/living-room");
    assert!(living_room.has_children());

    let names: Vec<&str> = living_room.children().iter().map(|c| c.name).collect();
    assert_eq!(
        names,
        vec![
            "Sofas",
            "Loungers",
            "Recliners",
            "Accent Chairs",
            "Center Tables",
            "End Tables",
            "TV Units",
            "Storage Cabinets",
        ]
    );
    assert_eq!(living_room.children()[0].href, "/furniture/living-room/sofas");
}

#[test]
fn test_only_expected_rows_have_children() {
    let branches: Vec<&str> = Catalog::storefront()
        .menus()
        .iter()
        .flat_map(|menu| menu.items.iter())
        .filter(|item| item.has_children())
        .map(|item| item.title())
        .collect();
    assert_eq!(
        branches,
        vec!["Living Room Furniture", "Cookware", "Storage & Organization"]
    );
}

#[test]
fn test_leaf_has_no_children() {
    let bar = Catalog::storefront().items(MenuId::Furniture)[1];
    assert_eq!(bar.title(), "Bar Furniture");
    assert!(!bar.has_children());
    assert!(bar.children().is_empty());
}

// ============================================================================
// Route Tests
// ============================================================================

#[test]
fn test_routes_are_unique_and_complete() {
    let routes = Catalog::storefront().routes();
    // 32 rows plus 13 submenu entries
    assert_eq!(routes.len(), 45);

    let unique: HashSet<&str> = routes.iter().map(|r| r.href).collect();
    assert_eq!(unique.len(), routes.len());
    assert!(routes.iter().all(|r| r.href.starts_with('/')));
}

#[test]
fn test_routes_keep_navbar_order() {
    let routes = Catalog::storefront().routes();
    assert_eq!(routes[0].href, "/furniture/living-room");
    assert_eq!(routes[1].href, "/furniture/living-room/sofas");
    assert_eq!(routes[8].href, "/furniture/living-room/storage-cabinets");
    assert_eq!(routes[9].href, "/furniture/bar");
    assert_eq!(routes.last().unwrap().href, "/clearance/homeware");
}

#[test]
fn test_resolve_item() {
    let crumb = Catalog::storefront().resolve("/kitchen/linen").unwrap();
    assert_eq!(crumb.menu, MenuId::Kitchen);
    assert_eq!(crumb.item, "Table Linen");
    assert_eq!(crumb.sub_item, None);
    assert_eq!(crumb.to_string(), "Kitchen & Dining › Table Linen");
}

#[test]
fn test_resolve_sub_item() {
    let crumb = Catalog::storefront()
        .resolve("/kitchen/cookware/pressure-cookers")
        .unwrap();
    assert_eq!(crumb.item, "Cookware");
    assert_eq!(crumb.sub_item, Some("Pressure Cookers"));
    assert_eq!(
        crumb.to_string(),
        "Kitchen & Dining › Cookware › Pressure Cookers"
    );
}

#[test]
fn test_resolve_ignores_trailing_slash() {
    let crumb = Catalog::storefront().resolve("/decor/clocks/").unwrap();
    assert_eq!(crumb.item, "Clocks");
}

#[test]
fn test_resolve_unknown_route() {
    let result = Catalog::storefront().resolve("/garage/tools");
    assert!(matches!(result, Err(StorefrontError::UnknownRoute(_))));
}

#[test]
fn test_resolve_root_is_not_a_category() {
    assert!(Catalog::storefront().resolve("/").is_err());
}
