use crate::constants::{CLASS_MENU_OPEN, CLASS_SCROLLED, MENU_LINK_SELECTOR, MENU_TOGGLE_SELECTOR};
use crate::core::{menu_open_after, nav_is_scrolled, MenuAction, ScrollMetric};
use crate::dom;
use crate::guard::{EventListenerGuard, Teardown};
use crate::scroll::{self, ScrollHandle, Sampling};
use web_sys as web;

#[inline]
pub fn is_menu_open(nav: &web::Element) -> bool {
    nav.class_list().contains(CLASS_MENU_OPEN)
}

#[inline]
pub fn apply_menu_action(nav: &web::Element, action: MenuAction) {
    dom::set_class(nav, CLASS_MENU_OPEN, menu_open_after(is_menu_open(nav), action));
}

/// Navigation bar: solid style once the page has scrolled, plus the mobile
/// menu toggle. Following a menu link closes the menu.
pub struct NavHandle {
    scroll: Option<ScrollHandle>,
    clicks: Vec<EventListenerGuard>,
}

impl Teardown for NavHandle {
    fn teardown(&mut self) {
        if let Some(mut scroll) = self.scroll.take() {
            scroll.teardown();
        }
        for mut click in self.clicks.drain(..) {
            click.teardown();
        }
    }
}

impl Drop for NavHandle {
    fn drop(&mut self) {
        self.teardown();
    }
}

fn on_click(nav: &web::Element, selector: &str, action: MenuAction) -> Vec<EventListenerGuard> {
    dom::query_all(nav, selector)
        .into_iter()
        .filter_map(|el| {
            let nav_click = nav.clone();
            EventListenerGuard::new(&el, "click", move |_| apply_menu_action(&nav_click, action))
        })
        .collect()
}

pub fn mount_nav(nav: &web::Element) -> NavHandle {
    let nav_scroll = nav.clone();
    let scroll = scroll::mount_scroll(nav, ScrollMetric::PageOffset, Sampling::Immediate, move |y| {
        dom::set_class(&nav_scroll, CLASS_SCROLLED, nav_is_scrolled(y));
    });

    let mut clicks = on_click(nav, MENU_TOGGLE_SELECTOR, MenuAction::Toggle);
    clicks.extend(on_click(nav, MENU_LINK_SELECTOR, MenuAction::FollowLink));
    log::debug!("[nav] {} click handlers", clicks.len());

    NavHandle { scroll, clicks }
}
