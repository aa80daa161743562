// Host-side tests for the navigation bar state.

use quasar_web::core::*;

#[test]
fn toggle_flips_the_menu() {
    assert!(menu_open_after(false, MenuAction::Toggle));
    assert!(!menu_open_after(true, MenuAction::Toggle));
}

#[test]
fn following_a_link_closes_the_menu() {
    assert!(!menu_open_after(true, MenuAction::FollowLink));
    assert!(!menu_open_after(false, MenuAction::FollowLink));
}

#[test]
fn open_then_pick_a_section() {
    let mut open = false;
    for action in [MenuAction::Toggle, MenuAction::FollowLink] {
        open = menu_open_after(open, action);
    }
    assert!(!open);
}

#[test]
fn solid_style_only_past_the_offset() {
    assert!(!nav_is_scrolled(0.0));
    assert!(!nav_is_scrolled(NAV_SCROLLED_OFFSET_PX));
    assert!(nav_is_scrolled(NAV_SCROLLED_OFFSET_PX + 1.0));
}
