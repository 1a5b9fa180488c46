//! Event binding.
//!
//! Wires the page-level listeners: hero controls, keyboard, touch,
//! visibility, language switcher, wizard buttons and the shared scroll
//! handler. Closures live for the page lifetime and are `forget()`-ed.

use crate::dom::{self, Elements};
use crate::effects;
use crate::hero;
use crate::i18n;
use crate::nav;
use crate::state;
use crate::wizard;
use tracing::warn;
use wasm_bindgen::convert::FromWasmAbi;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{AddEventListenerOptions, Event, EventTarget, KeyboardEvent, MouseEvent, TouchEvent};

/// Helper: attach a sync click handler.
macro_rules! on_click {
    ($el:expr, $cb:expr) => {{
        listen($el, "click", $cb);
    }};
}

/// Attach `handler` to `event` on `target` for the lifetime of the page.
pub fn listen<E, F>(target: &EventTarget, event: &str, handler: F)
where
    E: FromWasmAbi + 'static,
    F: FnMut(E) + 'static,
{
    let cb = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    if let Err(err) = target.add_event_listener_with_callback(event, cb.as_ref().unchecked_ref()) {
        warn!("failed to bind {}: {:?}", event, err);
    }
    cb.forget();
}

/// Like [`listen`], registered as a passive listener.
pub fn listen_passive<E, F>(target: &EventTarget, event: &str, handler: F)
where
    E: FromWasmAbi + 'static,
    F: FnMut(E) + 'static,
{
    let cb = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    let opts = AddEventListenerOptions::new();
    opts.set_passive(true);
    if let Err(err) = target.add_event_listener_with_callback_and_add_event_listener_options(
        event,
        cb.as_ref().unchecked_ref(),
        &opts,
    ) {
        warn!("failed to bind {}: {:?}", event, err);
    }
    cb.forget();
}

fn in_form_field(event: &Event) -> bool {
    event
        .target()
        .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
        .is_some_and(|el| matches!(el.tag_name().as_str(), "INPUT" | "TEXTAREA" | "SELECT"))
}

fn first_touch_x(list: web_sys::TouchList) -> Option<f64> {
    list.get(0).map(|t| t.client_x() as f64)
}

/// Bind all page listeners. Call once after init.
pub fn bind_events(els: &Elements) {
    bind_hero(els);
    bind_language_switcher(els);
    bind_wizard(els);
    bind_keyboard(els);
    bind_scroll(els);
}

fn bind_hero(els: &Elements) {
    for (index, dot) in els.hero.dots.iter().enumerate() {
        on_click!(dot, move |_: MouseEvent| {
            state::with_carousel(|c| c.go_to(index));
        });
    }
    if let Some(prev) = &els.hero.prev_arrow {
        on_click!(prev, |_: MouseEvent| {
            state::with_carousel(|c| c.prev());
        });
    }
    if let Some(next) = &els.hero.next_arrow {
        on_click!(next, |_: MouseEvent| {
            state::with_carousel(|c| c.next());
        });
    }

    listen_passive(&els.hero.hero, "touchstart", |e: TouchEvent| {
        if let Some(x) = first_touch_x(e.touches()) {
            state::with_carousel(|c| c.touch_start(x));
        }
    });
    listen_passive(&els.hero.hero, "touchend", |e: TouchEvent| {
        if let Some(x) = first_touch_x(e.changed_touches()) {
            state::with_carousel(|c| c.touch_end(x));
        }
    });
    listen_passive(&els.hero.hero, "touchcancel", |_: TouchEvent| {
        state::with_carousel(|c| c.touch_cancel());
    });

    listen(&dom::document(), "visibilitychange", |_: Event| {
        let hidden = dom::document().hidden();
        state::with_carousel(|c| c.visibility_changed(hidden));
    });
}

fn bind_language_switcher(els: &Elements) {
    for button in &els.lang_buttons {
        let tag = button.get_attribute("data-lang").unwrap_or_default();
        let buttons = els.lang_buttons.clone();
        on_click!(button, move |e: MouseEvent| {
            e.prevent_default();
            i18n::switch_to(&tag, &buttons);
        });
    }
}

fn bind_wizard(els: &Elements) {
    let Some(wizard_els) = els.wizard.clone() else {
        return;
    };
    {
        let w = wizard_els.clone();
        listen(&wizard_els.form, "submit", move |e: Event| {
            e.prevent_default();
            wizard::submit_to_messaging(&w);
        });
    }
    if let Some(btn) = &wizard_els.email_btn {
        let w = wizard_els.clone();
        on_click!(btn, move |e: MouseEvent| {
            e.prevent_default();
            wizard::submit_by_email(&w);
        });
    }
}

fn bind_keyboard(els: &Elements) {
    let nav_els = els.nav.clone();
    listen(&dom::document(), "keydown", move |e: KeyboardEvent| {
        let key = e.key();
        if key == "Escape" {
            if let Some(n) = &nav_els {
                nav::close_menu(n);
            }
            return;
        }
        if in_form_field(&e) {
            return;
        }
        if state::with_carousel(|c| c.handle_key(&key)).unwrap_or(false) {
            e.prevent_default();
        }
    });
}

fn bind_scroll(els: &Elements) {
    let nav_els = els.nav.clone();
    listen_passive(&dom::window(), "scroll", move |_: Event| {
        let scroll_y = dom::scroll_y();
        let viewport_height = dom::viewport_height();

        hero::on_scroll(scroll_y, viewport_height);
        if let Some(n) = &nav_els {
            nav::on_scroll(n, scroll_y);
        }
        nav::update_progress(scroll_y, viewport_height);
        nav::mark_scrolling();
        effects::on_scroll(viewport_height);
        effects::request_parallax();
    });
}
