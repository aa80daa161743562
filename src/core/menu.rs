//! Navigation bar state: solid style after scrolling, mobile menu open/closed.

use super::constants::NAV_SCROLLED_OFFSET_PX;

/// What the user did inside the navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuAction {
    /// The menu button.
    Toggle,
    /// A section link inside the menu.
    FollowLink,
}

/// Whether the mobile menu is open after `action`.
#[inline]
pub fn menu_open_after(open: bool, action: MenuAction) -> bool {
    match action {
        MenuAction::Toggle => !open,
        MenuAction::FollowLink => false,
    }
}

#[inline]
pub fn nav_is_scrolled(page_offset: f64) -> bool {
    page_offset > NAV_SCROLLED_OFFSET_PX
}
