// Tests for the dropdown state machine

use hometown_core::catalog::{Catalog, Menu, MenuId, MenuItem, SubMenuItem};
use hometown_core::dropdown::{ClickTarget, DropdownState};

fn catalog() -> &'static Catalog {
    Catalog::storefront()
}

fn apply(clicks: &[ClickTarget]) -> DropdownState {
    clicks
        .iter()
        .fold(DropdownState::default(), |state, click| state.click(*click, catalog()))
}

// ============================================================================
// Top-level Trigger Tests
// ============================================================================

#[test]
fn test_initial_state_is_closed() {
    let state = DropdownState::default();
    assert_eq!(state, DropdownState::Closed);
    assert_eq!(state.open_menu(), None);
    assert_eq!(state.open_submenu(), None);
}

#[test]
fn test_trigger_opens_menu() {
    let state = apply(&[ClickTarget::Trigger(MenuId::Furniture)]);
    assert_eq!(state, DropdownState::MenuOpen(MenuId::Furniture));
}

#[test]
fn test_same_trigger_closes_menu() {
    let state = apply(&[
        ClickTarget::Trigger(MenuId::Decor),
        ClickTarget::Trigger(MenuId::Decor),
    ]);
    assert_eq!(state, DropdownState::Closed);
}

#[test]
fn test_same_trigger_closes_menu_and_clears_submenu() {
    let state = apply(&[
        ClickTarget::Trigger(MenuId::Kitchen),
        ClickTarget::Row(1),
        ClickTarget::Trigger(MenuId::Kitchen),
    ]);
    assert_eq!(state, DropdownState::Closed);
    assert_eq!(state.open_submenu(), None);
}

#[test]
fn test_reopening_menu_starts_without_submenu() {
    let state = apply(&[
        ClickTarget::Trigger(MenuId::Kitchen),
        ClickTarget::Row(0),
        ClickTarget::Trigger(MenuId::Kitchen),
        ClickTarget::Trigger(MenuId::Kitchen),
    ]);
    assert_eq!(state, DropdownState::MenuOpen(MenuId::Kitchen));
}

#[test]
fn test_switching_menus_resets_submenu() {
    let state = apply(&[
        ClickTarget::Trigger(MenuId::Furniture),
        ClickTarget::Row(0),
        ClickTarget::Trigger(MenuId::Interiors),
    ]);
    assert_eq!(state, DropdownState::MenuOpen(MenuId::Interiors));
    assert_eq!(state.open_submenu(), None);
}

#[test]
fn test_at_most_one_menu_open_for_every_trigger_sequence() {
    // Every pair of triggers, followed by every third trigger
    for a in MenuId::ALL {
        for b in MenuId::ALL {
            for c in MenuId::ALL {
                let state = apply(&[
                    ClickTarget::Trigger(a),
                    ClickTarget::Row(0),
                    ClickTarget::Trigger(b),
                    ClickTarget::Trigger(c),
                ]);
                let open: Vec<MenuId> = MenuId::ALL
                    .into_iter()
                    .filter(|id| state.is_open(*id))
                    .collect();
                assert!(open.len() <= 1, "{:?} has {} menus open", state, open.len());
            }
        }
    }
}

// ============================================================================
// Row / Submenu Tests
// ============================================================================

#[test]
fn test_branch_row_opens_submenu() {
    let state = apply(&[ClickTarget::Trigger(MenuId::Furniture), ClickTarget::Row(0)]);
    assert_eq!(
        state,
        DropdownState::SubmenuOpen {
            menu: MenuId::Furniture,
            submenu: 0
        }
    );
}

#[test]
fn test_same_branch_row_twice_closes_submenu() {
    let state = apply(&[
        ClickTarget::Trigger(MenuId::Kitchen),
        ClickTarget::Row(1),
        ClickTarget::Row(1),
    ]);
    assert_eq!(state, DropdownState::MenuOpen(MenuId::Kitchen));
}

#[test]
fn test_other_branch_row_switches_submenu() {
    let state = apply(&[
        ClickTarget::Trigger(MenuId::Kitchen),
        ClickTarget::Row(0),
        ClickTarget::Row(1),
    ]);
    assert_eq!(
        state,
        DropdownState::SubmenuOpen {
            menu: MenuId::Kitchen,
            submenu: 1
        }
    );
}

#[test]
fn test_leaf_row_is_a_no_op() {
    let open = apply(&[ClickTarget::Trigger(MenuId::Furniture)]);
    for row in 1..catalog().items(MenuId::Furniture).len() {
        assert_eq!(open.click(ClickTarget::Row(row), catalog()), open);
    }
}

#[test]
fn test_leaf_row_keeps_open_submenu() {
    let state = apply(&[
        ClickTarget::Trigger(MenuId::Kitchen),
        ClickTarget::Row(0),
        ClickTarget::Row(4),
    ]);
    assert_eq!(
        state,
        DropdownState::SubmenuOpen {
            menu: MenuId::Kitchen,
            submenu: 0
        }
    );
}

#[test]
fn test_row_out_of_range_is_a_no_op() {
    let open = apply(&[ClickTarget::Trigger(MenuId::Clearance)]);
    assert_eq!(open.click(ClickTarget::Row(99), catalog()), open);
}

#[test]
fn test_rows_while_closed_are_no_ops() {
    let closed = DropdownState::Closed;
    assert_eq!(closed.click(ClickTarget::Row(0), catalog()), closed);
    assert_eq!(closed.click(ClickTarget::SubRow(0), catalog()), closed);
}

#[test]
fn test_sub_row_never_changes_state() {
    let state = apply(&[ClickTarget::Trigger(MenuId::Furniture), ClickTarget::Row(0)]);
    for row in 0..10 {
        assert_eq!(state.click(ClickTarget::SubRow(row), catalog()), state);
    }
}

#[test]
fn test_missing_menu_in_custom_catalog_has_no_rows() {
    static ONLY_DECOR: Catalog = Catalog::new(&[Menu {
        id: MenuId::Decor,
        items: &[MenuItem::Branch {
            title: "Lamps",
            href: "/decor/lamps",
            children: &[SubMenuItem {
                name: "Floor Lamps",
                href: "/decor/lamps/floor",
            }],
        }],
    }]);

    let state = DropdownState::Closed
        .click(ClickTarget::Trigger(MenuId::Furniture), &ONLY_DECOR)
        .click(ClickTarget::Row(0), &ONLY_DECOR);
    assert_eq!(state, DropdownState::MenuOpen(MenuId::Furniture));

    let state = state
        .click(ClickTarget::Trigger(MenuId::Decor), &ONLY_DECOR)
        .click(ClickTarget::Row(0), &ONLY_DECOR);
    assert_eq!(
        state,
        DropdownState::SubmenuOpen {
            menu: MenuId::Decor,
            submenu: 0
        }
    );
}

// ============================================================================
// Storefront Walkthrough
// ============================================================================

#[test]
fn test_furniture_then_living_room_then_kitchen() {
    let mut state = DropdownState::Closed;

    state = state.click(ClickTarget::Trigger(MenuId::Furniture), catalog());
    assert_eq!(state, DropdownState::MenuOpen(MenuId::Furniture));
    for other in MenuId::ALL.into_iter().filter(|id| *id != MenuId::Furniture) {
        assert!(!state.is_open(other));
    }

    state = state.click(ClickTarget::Row(0), catalog());
    assert_eq!(state.open_menu(), Some(MenuId::Furniture));
    assert_eq!(state.open_submenu(), Some(0));

    state = state.click(ClickTarget::Trigger(MenuId::Kitchen), catalog());
    assert_eq!(state, DropdownState::MenuOpen(MenuId::Kitchen));
    assert!(!state.is_open(MenuId::Furniture));
    assert_eq!(state.open_submenu(), None);
}
