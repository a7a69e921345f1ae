// Tests for the navbar model

use hometown_core::{Catalog, ClickTarget, DropdownState, MenuId, Navbar, StorefrontConfig};

fn navbar() -> Navbar {
    Navbar::new(Catalog::storefront(), StorefrontConfig::default())
}

#[test]
fn test_new_navbar_is_closed() {
    let navbar = navbar();
    assert_eq!(navbar.state(), DropdownState::Closed);
    assert!(navbar.open_items().is_empty());
    assert!(navbar.open_children().is_empty());
    for id in MenuId::ALL {
        assert_eq!(navbar.chevron(id), "▼");
    }
}

#[test]
fn test_trigger_click_follows_no_link() {
    let mut navbar = navbar();
    assert_eq!(navbar.click(ClickTarget::Trigger(MenuId::Decor)), None);
    assert_eq!(navbar.chevron(MenuId::Decor), "▲");
    assert_eq!(navbar.open_items().len(), 5);
}

#[test]
fn test_leaf_row_follows_link_without_state_change() {
    let mut navbar = navbar();
    navbar.click(ClickTarget::Trigger(MenuId::Furniture));
    let before = navbar.state();

    assert_eq!(navbar.click(ClickTarget::Row(6)), Some("/furniture/mattresses"));
    assert_eq!(navbar.state(), before);
}

#[test]
fn test_branch_row_toggles_submenu_without_link() {
    let mut navbar = navbar();
    navbar.click(ClickTarget::Trigger(MenuId::Furniture));

    assert_eq!(navbar.click(ClickTarget::Row(0)), None);
    assert_eq!(navbar.open_children().len(), 8);
    assert_eq!(navbar.open_children()[6].name, "TV Units");

    assert_eq!(navbar.click(ClickTarget::Row(0)), None);
    assert!(navbar.open_children().is_empty());
}

#[test]
fn test_sub_row_follows_link() {
    let mut navbar = navbar();
    navbar.click(ClickTarget::Trigger(MenuId::Kitchen));
    navbar.click(ClickTarget::Row(1));

    assert_eq!(
        navbar.click(ClickTarget::SubRow(1)),
        Some("/kitchen/storage/racks")
    );
    assert_eq!(navbar.state().open_submenu(), Some(1));
    assert_eq!(navbar.click(ClickTarget::SubRow(5)), None);
}

#[test]
fn test_rows_while_closed_follow_nothing() {
    let mut navbar = navbar();
    assert_eq!(navbar.click(ClickTarget::Row(1)), None);
    assert_eq!(navbar.click(ClickTarget::SubRow(0)), None);
    assert_eq!(navbar.state(), DropdownState::Closed);
}

#[test]
fn test_close_clears_menu_and_submenu() {
    let mut navbar = navbar();
    navbar.click(ClickTarget::Trigger(MenuId::Kitchen));
    navbar.click(ClickTarget::Row(0));
    navbar.close();
    assert_eq!(navbar.state(), DropdownState::Closed);
}

#[test]
fn test_config_is_injected() {
    let navbar = Navbar::new(
        Catalog::storefront(),
        StorefrontConfig::default().with_title("HomeTown Outlet"),
    );
    assert_eq!(navbar.config().title, "HomeTown Outlet");
    assert_eq!(navbar.config().wishlist_count, 0);
    assert_eq!(navbar.config().logo, "/logoanimatio.gif");
}

#[test]
fn test_follow_branch_row_links_and_toggles() {
    let mut navbar = navbar();
    navbar.click(ClickTarget::Trigger(MenuId::Furniture));

    assert_eq!(
        navbar.follow(ClickTarget::Row(0)),
        Some("/furniture/living-room")
    );
    assert_eq!(navbar.state().open_submenu(), Some(0));

    assert_eq!(
        navbar.follow(ClickTarget::Row(0)),
        Some("/furniture/living-room")
    );
    assert_eq!(navbar.state().open_submenu(), None);
}

#[test]
fn test_follow_matches_click_for_leaves_and_sub_rows() {
    let mut navbar = navbar();
    navbar.click(ClickTarget::Trigger(MenuId::Kitchen));

    assert_eq!(navbar.follow(ClickTarget::Row(3)), Some("/kitchen/dinnerware"));
    assert_eq!(navbar.follow(ClickTarget::Row(1)), Some("/kitchen/storage"));
    assert_eq!(
        navbar.follow(ClickTarget::SubRow(0)),
        Some("/kitchen/storage/containers")
    );
    assert_eq!(navbar.follow(ClickTarget::Row(42)), None);
    assert_eq!(navbar.follow(ClickTarget::Trigger(MenuId::Kitchen)), None);
    assert_eq!(navbar.state(), DropdownState::Closed);
}
