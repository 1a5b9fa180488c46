//! Navigation bar, mobile menu and scroll bookkeeping.

use crate::dom::{self, NavElements};
use crate::events::listen;
use crate::state;
use gloo_timers::callback::Timeout;
use std::cell::RefCell;
use wasm_bindgen::JsCast;
use web_sys::{Element, MouseEvent, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

/// How long `is-scrolling` stays on the body after the last scroll event.
const SCROLL_IDLE_MS: u32 = 150;

thread_local! {
    static SCROLL_IDLE: RefCell<Option<Timeout>> = const { RefCell::new(None) };
}

fn menu_parts(els: &NavElements) -> impl Iterator<Item = &Element> {
    [&els.toggle, &els.menu, &els.overlay].into_iter().flatten()
}

pub fn menu_open(els: &NavElements) -> bool {
    els.menu.as_ref().is_some_and(|m| dom::has_class(m, "active"))
}

pub fn open_menu(els: &NavElements) {
    for el in menu_parts(els) {
        dom::add_class(el, "active");
    }
    let _ = dom::body().style().set_property("overflow", "hidden");
}

pub fn close_menu(els: &NavElements) {
    if !menu_open(els) {
        return;
    }
    for el in menu_parts(els) {
        dom::remove_class(el, "active");
    }
    let _ = dom::body().style().remove_property("overflow");
}

pub fn init(els: &NavElements) {
    if let Some(toggle) = &els.toggle {
        let nav = els.clone();
        listen(toggle, "click", move |_: MouseEvent| {
            if menu_open(&nav) {
                close_menu(&nav);
            } else {
                open_menu(&nav);
            }
        });
    }
    if let Some(overlay) = &els.overlay {
        let nav = els.clone();
        listen(overlay, "click", move |_: MouseEvent| close_menu(&nav));
    }
    for link in dom::query_all(".nav-menu a") {
        let nav = els.clone();
        listen(&link, "click", move |_: MouseEvent| close_menu(&nav));
    }
}

/// Hide the bar while scrolling down past the threshold; show it otherwise.
pub fn on_scroll(els: &NavElements, scroll_y: f64) {
    let hide = state::nav_should_hide(scroll_y);
    dom::toggle_class(&els.nav, "hidden", hide);
    if hide {
        close_menu(els);
    }
}

pub fn update_progress(scroll_y: f64, viewport_height: f64) {
    let Some(bar) = dom::query(".scroll-progress") else {
        return;
    };
    let percent = eq_motion::scroll_progress_percent(scroll_y, dom::document_height(), viewport_height);
    dom::set_style(&bar, "width", &format!("{percent}%"));
}

/// Flag the body while scrolling; the flag clears once scrolling pauses.
pub fn mark_scrolling() {
    let body = dom::body();
    dom::add_class(&body, "is-scrolling");
    let idle = Timeout::new(SCROLL_IDLE_MS, || {
        dom::remove_class(&dom::body(), "is-scrolling");
    });
    // Replacing the handle drops, and so cancels, the previous timeout.
    SCROLL_IDLE.with(|t| *t.borrow_mut() = Some(idle));
}

/// Smooth-scroll in-page anchors. Delegated from the document because hero
/// CTAs are rewritten per slide.
pub fn init_smooth_anchors() {
    listen(&dom::document(), "click", |e: MouseEvent| {
        let Some(anchor) = e
            .target()
            .and_then(|t| t.dyn_into::<Element>().ok())
            .and_then(|el| el.closest("a[href^=\"#\"]").ok().flatten())
        else {
            return;
        };
        let href = anchor.get_attribute("href").unwrap_or_default();
        let Some(target) = dom::query(&href) else {
            return;
        };
        e.prevent_default();
        let opts = ScrollIntoViewOptions::new();
        opts.set_behavior(ScrollBehavior::Smooth);
        opts.set_block(ScrollLogicalPosition::Start);
        target.scroll_into_view_with_scroll_into_view_options(&opts);
    });
}
