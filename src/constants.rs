//! Markup contract between the static page and the wasm behaviour layer:
//! attribute names, state classes and CSS custom properties.

// Attributes and selectors
pub const FOLD_SELECTOR: &str = "[data-fold]";
pub const FOLD_ATTR: &str = "data-fold";
pub const PARALLAX_SELECTOR: &str = "[data-parallax]";
pub const PARALLAX_ATTR: &str = "data-parallax";
pub const VISUAL_SELECTOR: &str = "canvas[data-visual]";
pub const VISUAL_ATTR: &str = "data-visual";
pub const DIVIDER_SELECTOR: &str = "[data-divider]";
pub const FOLLOW_CURSOR_SELECTOR: &str = "[data-follow-cursor]";
pub const REVEAL_SELECTOR: &str = "[data-reveal]";
pub const STAGGER_INDEX_ATTR: &str = "data-stagger-index";
pub const STAGGER_BASE_ATTR: &str = "data-stagger-base";
pub const LINE_SELECTOR: &str = "[data-line]";
pub const NAV_SELECTOR: &str = "[data-nav]";
pub const MENU_TOGGLE_SELECTOR: &str = "[data-menu-toggle]";
pub const MENU_LINK_SELECTOR: &str = "[data-menu-link]";

// State classes
pub const CLASS_VISIBLE: &str = "is-visible";
pub const CLASS_REVEALED: &str = "is-revealed";
pub const CLASS_SHOWN: &str = "is-shown";
pub const CLASS_STATIC: &str = "is-static";
pub const CLASS_SCROLLED: &str = "is-scrolled";
pub const CLASS_MENU_OPEN: &str = "is-open";

// CSS custom properties
pub const VAR_PROGRESS: &str = "--progress";
pub const VAR_CHAOS: &str = "--chaos";
pub const VAR_PARALLAX_OFFSET: &str = "--parallax-offset";
pub const VAR_POINTER_X: &str = "--pointer-x";
pub const VAR_POINTER_Y: &str = "--pointer-y";
pub const VAR_CURSOR_X: &str = "--cursor-x";
pub const VAR_CURSOR_Y: &str = "--cursor-y";
pub const VAR_FADE_OPACITY: &str = "--fade-opacity";
pub const VAR_DIVIDER_OPACITY: &str = "--divider-opacity";
pub const VAR_DIVIDER_GLOW: &str = "--divider-glow";
pub const VAR_CANVAS_BLUR: &str = "--canvas-blur";
