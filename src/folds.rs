//! Mounting one fold: read its configuration from markup and wire every
//! observer, tracker and animation it asks for.
//!
//! A `MountedFold` exclusively owns everything it acquired. Teardown releases
//! the parts in reverse acquisition order.

use crate::canvas;
use crate::constants::*;
use crate::core::{
    blur_px, parse_number, parse_parallax_speed, parse_visual, stagger_delay, DividerStyle,
    FoldConfig, LineReveal, ProgressFormula, ScrollMetric, VisibilityOptions,
    DEFAULT_PARALLAX_SPEED, DEFAULT_STAGGER_BASE_SEC,
};
use crate::dom;
use crate::events::{self, PointerScope};
use crate::frame::{self, LoopControl};
use crate::guard::Teardown;
use crate::observe;
use crate::scroll::{self, Sampling};
use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct MountedFold {
    id: String,
    parts: Vec<Box<dyn Teardown>>,
}

impl MountedFold {
    fn hold(&mut self, part: impl Teardown + 'static) {
        self.parts.push(Box::new(part));
    }
}

impl Teardown for MountedFold {
    fn teardown(&mut self) {
        if self.parts.is_empty() {
            return;
        }
        while let Some(mut part) = self.parts.pop() {
            part.teardown();
        }
        log::debug!("[fold] {} torn down", self.id);
    }
}

impl Drop for MountedFold {
    fn drop(&mut self) {
        self.teardown();
    }
}

pub fn mount_fold(section: &web::Element, id: String) -> MountedFold {
    let (config, errors) = FoldConfig::parse(|name| dom::data_attr(section, name));
    for e in &errors {
        log::warn!("[fold] {id}: {e}; using default");
    }
    let mut fold = MountedFold {
        id,
        parts: Vec::new(),
    };

    let visible = Rc::new(Cell::new(false));
    let section_vis = section.clone();
    let visible_cb = visible.clone();
    let observed = match observe::mount_visibility(section, config.visibility.clone(), move |v| {
        dom::set_class(&section_vis, CLASS_VISIBLE, v);
        visible_cb.set(v);
    }) {
        Some(handle) => {
            fold.hold(handle);
            true
        }
        None => {
            dom::set_class(section, CLASS_STATIC, true);
            false
        }
    };

    mount_progress(&mut fold, section, &config);
    mount_parallax_layers(&mut fold, section);

    if let Some(policy) = config.pointer {
        let section_ptr = section.clone();
        if let Some(handle) =
            events::mount_pointer(section, PointerScope::Region, policy, move |uv| {
                dom::set_style(&section_ptr, VAR_POINTER_X, &uv.x.to_string());
                dom::set_style(&section_ptr, VAR_POINTER_Y, &uv.y.to_string());
            })
        {
            fold.hold(handle);
        }
    }

    for follower in dom::query_all(section, FOLLOW_CURSOR_SELECTOR) {
        if let Some(handle) = events::mount_cursor_follower(section, move |pos| {
            dom::set_style(&follower, VAR_CURSOR_X, &format!("{}px", pos.x));
            dom::set_style(&follower, VAR_CURSOR_Y, &format!("{}px", pos.y));
        }) {
            fold.hold(handle);
        }
    }

    if let Some(distance) = config.fade_distance {
        let section_fade = section.clone();
        if let Some(handle) = scroll::mount_scroll(
            section,
            ScrollMetric::FadeOut { distance },
            Sampling::PerFrame,
            move |opacity| dom::set_style(&section_fade, VAR_FADE_OPACITY, &opacity.to_string()),
        ) {
            fold.hold(handle);
        }
    }

    if observed {
        mount_reveals(&mut fold, section);
        mount_line_reveal(&mut fold, section, config.line_interval, visible);
    } else {
        show_static(section);
    }

    log::debug!("[fold] {} mounted with {} parts", fold.id, fold.parts.len());
    fold
}

/// Scroll progress drives the CSS variables, the divider styling and any
/// canvases in the fold. Canvases without an explicit formula use the linear
/// fraction.
fn mount_progress(fold: &mut MountedFold, section: &web::Element, config: &FoldConfig) {
    let canvases = dom::query_all(section, VISUAL_SELECTOR);
    let formula = match (config.progress, canvases.is_empty()) {
        (Some(formula), _) => formula,
        (None, false) => ProgressFormula::Linear,
        (None, true) => return,
    };

    let progress = Rc::new(Cell::new(0.0_f64));
    let progress_cb = progress.clone();
    let section_cb = section.clone();
    let dividers = dom::query_all(section, DIVIDER_SELECTOR);
    if let Some(handle) = scroll::mount_scroll(
        section,
        ScrollMetric::Progress(formula),
        Sampling::Immediate,
        move |p| {
            progress_cb.set(p);
            dom::set_style(&section_cb, VAR_PROGRESS, &p.to_string());
            dom::set_style(&section_cb, VAR_CHAOS, &(1.0 - p).to_string());
            dom::set_style(
                &section_cb,
                VAR_CANVAS_BLUR,
                &format!("{}px", blur_px(p)),
            );
            let style = DividerStyle::from_progress(p);
            for divider in &dividers {
                dom::set_style(divider, VAR_DIVIDER_OPACITY, &style.opacity.to_string());
                dom::set_style(divider, VAR_DIVIDER_GLOW, &style.box_shadow());
            }
        },
    ) {
        fold.hold(handle);
    }

    for el in canvases {
        let raw = el.get_attribute(VISUAL_ATTR).unwrap_or_default();
        let kind = match parse_visual(&raw) {
            Ok(kind) => kind,
            Err(e) => {
                log::warn!("[fold] {}: {e}", fold.id);
                continue;
            }
        };
        let Ok(canvas) = el.dyn_into::<web::HtmlCanvasElement>() else {
            continue;
        };
        match canvas::mount_visual(&canvas, kind, progress.clone()) {
            Ok(handle) => fold.hold(handle),
            Err(e) => log::error!("[fold] {}: {:?} visual failed: {:?}", fold.id, kind, e),
        }
    }
}

fn mount_parallax_layers(fold: &mut MountedFold, section: &web::Element) {
    for layer in dom::query_all(section, PARALLAX_SELECTOR) {
        let raw = layer.get_attribute(PARALLAX_ATTR).unwrap_or_default();
        let speed = match parse_parallax_speed(&raw) {
            Ok(speed) => speed,
            Err(e) => {
                log::warn!("[fold] {}: {e}; using default", fold.id);
                DEFAULT_PARALLAX_SPEED
            }
        };
        // measured through the parent: the layer's own box moves with the offset
        let anchor = layer.parent_element().unwrap_or_else(|| layer.clone());
        let layer_cb = layer.clone();
        if let Some(handle) = scroll::mount_scroll(
            &anchor,
            ScrollMetric::Parallax { speed },
            Sampling::Immediate,
            move |offset| dom::set_style(&layer_cb, VAR_PARALLAX_OFFSET, &format!("{offset}px")),
        ) {
            fold.hold(handle);
        }
    }
}

fn mount_reveals(fold: &mut MountedFold, section: &web::Element) {
    let section_base = dom::data_attr(section, "stagger-base");
    for el in dom::query_all(section, REVEAL_SELECTOR) {
        if let Some(index) = el
            .get_attribute(STAGGER_INDEX_ATTR)
            .and_then(|raw| raw.trim().parse::<usize>().ok())
        {
            let base = el
                .get_attribute(STAGGER_BASE_ATTR)
                .or_else(|| section_base.clone())
                .and_then(|raw| parse_number(&raw).ok())
                .unwrap_or(DEFAULT_STAGGER_BASE_SEC);
            dom::set_style(&el, "transition-delay", &stagger_delay(index, base));
        }

        let el_cb = el.clone();
        match observe::mount_visibility(&el, VisibilityOptions::reveal(), move |v| {
            dom::set_class(&el_cb, CLASS_REVEALED, v);
        }) {
            Some(handle) => fold.hold(handle),
            None => dom::set_class(&el, CLASS_STATIC, true),
        }
    }
}

/// Without visibility there is nothing to wait for: show every reveal target
/// and every line right away.
fn show_static(section: &web::Element) {
    for el in dom::query_all(section, REVEAL_SELECTOR) {
        dom::set_class(&el, CLASS_STATIC, true);
    }
    show_lines(&dom::query_all(section, LINE_SELECTOR));
}

fn show_lines(lines: &[web::Element]) {
    let mut reveal = LineReveal::new(lines.len(), Duration::ZERO);
    if let Some(count) = reveal.finish() {
        for line in lines.iter().take(count) {
            dom::set_class(line, CLASS_SHOWN, true);
        }
    }
}

fn mount_line_reveal(
    fold: &mut MountedFold,
    section: &web::Element,
    interval: Duration,
    visible: Rc<Cell<bool>>,
) {
    let lines = dom::query_all(section, LINE_SELECTOR);
    if lines.is_empty() {
        return;
    }
    let mut reveal = LineReveal::new(lines.len(), interval);
    let show_all = lines.clone();
    let frames = frame::start_loop(move |dt| {
        let dt = Duration::from_secs_f32(dt.max(0.0));
        if let Some(count) = reveal.advance(dt, visible.get()) {
            for line in lines.iter().take(count) {
                dom::set_class(line, CLASS_SHOWN, true);
            }
        }
        if reveal.is_complete() {
            LoopControl::Stop
        } else {
            LoopControl::Continue
        }
    });
    match frames {
        Some(frames) => fold.hold(frames),
        None => show_lines(&show_all),
    }
}
