//! Scroll- and pointer-driven page effects.
//!
//! Each initializer looks up its own elements and returns early when the
//! page has none. Element lists read on every scroll are cached once in
//! `SCROLL_TARGETS`.

use crate::dom;
use crate::events::{listen, listen_passive};
use crate::state;
use eq_motion::{
    CounterAnimation, CounterFrame, Ripple, horizontal_scroll_offset, magnetic_offset,
    parallax_offset, parallax_speed, pointer_parallax, split_chars, sticky_background_transform,
    sticky_progress, tilt, tilt_transform, translate3d_y,
};
use std::cell::{Cell, RefCell};
use tracing::{debug, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    Element, Event, HtmlButtonElement, HtmlFormElement, HtmlImageElement, IntersectionObserver,
    IntersectionObserverEntry, IntersectionObserverInit, MouseEvent,
};

const EASE: &str = "cubic-bezier(0.75, 0, 0.27, 1)";

struct ScrollTargets {
    parallax: Vec<(Element, f64)>,
    sticky_backgrounds: Vec<(Element, Element)>,
    horizontal: Option<(Element, Element)>,
}

thread_local! {
    static SCROLL_TARGETS: RefCell<Option<ScrollTargets>> = const { RefCell::new(None) };
    static PARALLAX_PENDING: Cell<bool> = const { Cell::new(false) };
}

pub fn init() {
    init_reveals();
    init_counters();
    init_sticky_sections();
    init_lazy_images();
    duplicate_testimonials();
    wrap_split_text();
    init_tilt();
    init_magnetic();
    init_ripple();
    init_pointer_parallax();
    init_contact_form();
    fade_in_body();
    cache_scroll_targets();
}

// ── Intersection observers ──

/// Observe `elements`, calling `on_enter` each time one intersects. With
/// `once`, an element is unobserved after its first hit.
fn observe<F>(elements: Vec<Element>, threshold: f64, root_margin: Option<&str>, once: bool, mut on_enter: F)
where
    F: FnMut(&Element) + 'static,
{
    if elements.is_empty() {
        return;
    }
    let cb = Closure::wrap(Box::new(move |entries: js_sys::Array, observer: IntersectionObserver| {
        for entry in entries.iter() {
            let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                continue;
            };
            if !entry.is_intersecting() {
                continue;
            }
            let target = entry.target();
            on_enter(&target);
            if once {
                observer.unobserve(&target);
            }
        }
    }) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let opts = IntersectionObserverInit::new();
    opts.set_threshold(&JsValue::from_f64(threshold));
    if let Some(margin) = root_margin {
        opts.set_root_margin(margin);
    }
    match IntersectionObserver::new_with_options(cb.as_ref().unchecked_ref(), &opts) {
        Ok(observer) => {
            for el in &elements {
                observer.observe(el);
            }
        }
        Err(err) => warn!("IntersectionObserver unavailable: {:?}", err),
    }
    cb.forget();
}

fn init_reveals() {
    observe(
        dom::query_all(".slide-left, .slide-right"),
        0.2,
        Some("0px 0px -100px 0px"),
        false,
        |el| dom::add_class(el, "active"),
    );
    observe(
        dom::query_all("[data-scroll-reveal], [data-scroll-scale], [data-scroll-fade]"),
        0.1,
        Some("0px 0px -80px 0px"),
        false,
        |el| dom::add_class(el, "revealed"),
    );
    observe(dom::query_all("[data-scroll-reveal]"), 0.3, None, true, |el| {
        dom::add_class(el, "active")
    });
    observe(dom::query_all("[data-scroll-fade]"), 0.2, None, false, |el| {
        dom::add_class(el, "active")
    });
    observe(dom::query_all(".stat-item"), 0.3, None, false, |el| {
        dom::add_class(el, "revealed")
    });

    observe(dom::query_all("[data-scroll-scale]"), 0.2, None, true, |el| {
        dom::set_style(el, "opacity", "0");
        dom::set_style(el, "transform", "scale(0.8)");
        dom::set_style(el, "transition", &format!("all 0.8s {EASE}"));
        let el = el.clone();
        dom::after(100, move || {
            dom::set_style(&el, "opacity", "1");
            dom::set_style(&el, "transform", "scale(1)");
        });
    });

    observe(dom::query_all(".fade-in"), 0.2, None, true, |el| {
        dom::set_style(el, "opacity", "0");
        dom::set_style(el, "transform", "translateY(30px)");
        dom::set_style(el, "transition", &format!("all 1s {EASE}"));
        let el = el.clone();
        dom::next_frame(move || {
            dom::set_style(&el, "opacity", "1");
            dom::set_style(&el, "transform", "translateY(0)");
        });
    });
}

// ── Counters ──

fn init_counters() {
    observe(dom::query_all("[data-target]"), 0.5, None, true, |el| {
        let raw = el.get_attribute("data-target").unwrap_or_default();
        match CounterAnimation::from_attr(&raw) {
            Some(counter) => run_counter(el.clone(), counter),
            None => debug!("counter target {:?} is not a number", raw),
        }
    });
}

fn run_counter(el: Element, mut counter: CounterAnimation) {
    match counter.tick() {
        CounterFrame::Running(value) => {
            dom::set_text(&el, &value.to_string());
            dom::next_frame(move || run_counter(el, counter));
        }
        CounterFrame::Done(value) => dom::set_text(&el, &value.to_string()),
    }
}

// ── Sticky sections ──

fn init_sticky_sections() {
    observe(dom::query_all(".sticky-section"), 0.3, None, false, |section| {
        dom::add_class(section, "active");
        for el in dom::query_all_within(section, ".split-chars") {
            animate_split_chars(&el);
        }
    });
}

fn animate_split_chars(el: &Element) {
    if el.has_attribute("data-animated") {
        return;
    }
    let _ = el.set_attribute("data-animated", "true");

    let text = el.text_content().unwrap_or_default();
    dom::set_text(el, "");
    let mut spans = Vec::new();
    for part in split_chars(&text) {
        let Some(span) = dom::create_element("span") else {
            continue;
        };
        dom::set_text(&span, &part.glyph);
        dom::set_style(&span, "display", "inline-block");
        dom::set_style(&span, "opacity", "0");
        dom::set_style(&span, "transform", "translateY(100px) rotate(10deg)");
        dom::set_style(&span, "transition", &format!("all 0.6s {EASE} {}s", part.delay_s));
        let _ = el.append_child(&span);
        spans.push(span);
    }
    // Two frames so the initial styles are committed before the transition.
    dom::next_frame(move || {
        dom::next_frame(move || {
            for span in &spans {
                dom::set_style(span, "opacity", "1");
                dom::set_style(span, "transform", "translateY(0) rotate(0)");
            }
        })
    });
}

// ── One-shot page tweaks ──

fn init_lazy_images() {
    observe(dom::query_all("img[data-src]"), 0.0, None, true, |el| {
        let Some(src) = el.get_attribute("data-src") else {
            return;
        };
        if let Some(img) = el.dyn_ref::<HtmlImageElement>() {
            img.set_src(&src);
        }
        let _ = el.remove_attribute("data-src");
    });
}

/// Clone the testimonial track once so the marquee loops seamlessly.
fn duplicate_testimonials() {
    let Some(track) = dom::query(".testimonials-track") else {
        return;
    };
    let (Ok(clone), Some(parent)) = (track.clone_node_with_deep(true), track.parent_element()) else {
        return;
    };
    let _ = parent.append_child(&clone);
}

fn wrap_split_text() {
    for line in dom::query_all(".split-text .line") {
        let Some(span) = dom::create_element("span") else {
            continue;
        };
        dom::set_text(&span, &line.text_content().unwrap_or_default());
        dom::set_style(&span, "display", "inline-block");
        dom::set_style(&span, "opacity", "0");
        dom::set_style(&span, "transform", "translateY(100%)");
        dom::set_text(&line, "");
        let _ = line.append_child(&span);
    }
}

fn fade_in_body() {
    let body = dom::body();
    let _ = body.style().set_property("opacity", "0");
    let _ = body.style().set_property("transition", "opacity 0.5s ease");
    dom::after(100, move || {
        let _ = body.style().set_property("opacity", "1");
    });
}

// ── Pointer effects ──

fn init_tilt() {
    for card in dom::query_all(".innovation-card, .testimonial-card") {
        let target = card.clone();
        listen(&card, "mousemove", move |e: MouseEvent| {
            let (rx, ry) = tilt(&dom::rect_of(&target), e.client_x() as f64, e.client_y() as f64);
            dom::set_style(&target, "transform", &tilt_transform(rx, ry));
        });
        let target = card.clone();
        listen(&card, "mouseleave", move |_: MouseEvent| {
            dom::set_style(&target, "transform", "perspective(1000px) rotateX(0) rotateY(0)");
        });
    }
}

fn magnetize(selector: &str, strength: f64, scale: Option<f64>) {
    for button in dom::query_all(selector) {
        let target = button.clone();
        listen(&button, "mousemove", move |e: MouseEvent| {
            let (x, y) = magnetic_offset(
                &dom::rect_of(&target),
                e.client_x() as f64,
                e.client_y() as f64,
                strength,
            );
            let transform = match scale {
                Some(s) => format!("translate({x}px, {y}px) scale({s})"),
                None => format!("translate({x}px, {y}px)"),
            };
            dom::set_style(&target, "transform", &transform);
        });
        let target = button.clone();
        listen(&button, "mouseleave", move |_: MouseEvent| {
            let rest = if scale.is_some() { "translate(0, 0) scale(1)" } else { "translate(0, 0)" };
            dom::set_style(&target, "transform", rest);
        });
    }
}

fn init_magnetic() {
    magnetize(".cta-primary, .cta-secondary", 0.15, Some(1.05));
    magnetize(".submit-btn, .nav-menu a", 0.2, None);
}

fn init_ripple() {
    let selector = ".benefit-card, .product-card, .gallery-item, .testimonial-clean, .cta-primary";
    for card in dom::query_all(selector) {
        let target = card.clone();
        listen(&card, "click", move |e: MouseEvent| {
            let ripple = Ripple::at(&dom::rect_of(&target), e.client_x() as f64, e.client_y() as f64);
            let Some(span) = dom::create_element("span") else {
                return;
            };
            dom::set_style(&span, "width", &format!("{}px", ripple.size));
            dom::set_style(&span, "height", &format!("{}px", ripple.size));
            dom::set_style(&span, "left", &format!("{}px", ripple.left));
            dom::set_style(&span, "top", &format!("{}px", ripple.top));
            dom::add_class(&span, "ripple");
            let _ = target.append_child(&span);
            dom::after(600, move || span.remove());
        });
    }
}

fn init_pointer_parallax() {
    let items = dom::query_all(".feature-item, .innovation-card");
    if items.is_empty() {
        return;
    }
    listen_passive(&dom::document(), "mousemove", move |e: MouseEvent| {
        let (x, y) = pointer_parallax(
            e.client_x() as f64,
            e.client_y() as f64,
            dom::viewport_width(),
            dom::viewport_height(),
        );
        let transform = format!("translate({x}px, {y}px)");
        for el in &items {
            dom::set_style(el, "transform", &transform);
        }
    });
}

// ── Contact form ──

fn init_contact_form() {
    let Some(form) = dom::by_id_typed::<HtmlFormElement>("contactForm") else {
        return;
    };
    for field in dom::query_all_within(&form, "input, textarea, select") {
        let Some(parent) = field.parent_element() else {
            continue;
        };
        let p = parent.clone();
        listen(&field, "focus", move |_: Event| {
            dom::set_style(&p, "transform", "translateX(10px)");
        });
        listen(&field, "blur", move |_: Event| {
            dom::set_style(&parent, "transform", "translateX(0)");
        });
    }

    let target = form.clone();
    listen(&form, "submit", move |e: Event| {
        e.prevent_default();
        simulate_send(&target);
    });
}

/// Local feedback only; the contact form posts nowhere.
fn simulate_send(form: &HtmlFormElement) {
    let Some(btn) = form
        .query_selector(".submit-btn")
        .ok()
        .flatten()
        .and_then(|b| b.dyn_into::<HtmlButtonElement>().ok())
    else {
        return;
    };
    let Some(label) = btn.query_selector("span").ok().flatten() else {
        return;
    };
    let lang = state::language();
    let original = label.text_content().unwrap_or_default();

    dom::set_text(&label, eq_i18n::lookup(lang, "contact.sending").unwrap_or("..."));
    btn.set_disabled(true);
    let _ = btn.style().set_property("transform", "scale(0.95)");

    let form = form.clone();
    dom::after(2_000, move || {
        dom::set_text(&label, eq_i18n::lookup(lang, "contact.sent").unwrap_or("✓"));
        let _ = btn
            .style()
            .set_property("background", "linear-gradient(135deg, #10b981, #059669)");
        dom::after(3_000, move || {
            form.reset();
            dom::set_text(&label, &original);
            btn.set_disabled(false);
            let _ = btn.style().set_property("transform", "scale(1)");
            let _ = btn.style().remove_property("background");
        });
    });
}

// ── Scroll-driven updates ──

fn cache_scroll_targets() {
    let parallax = dom::query_all("[data-parallax]")
        .into_iter()
        .map(|el| {
            let speed = parallax_speed(el.get_attribute("data-parallax").as_deref());
            (el, speed)
        })
        .collect();
    let sticky_backgrounds = dom::query_all(".sticky-bg")
        .into_iter()
        .filter_map(|bg| {
            let section = bg.closest(".sticky-section").ok().flatten()?;
            Some((bg, section))
        })
        .collect();
    let horizontal = dom::query(".horizontal-scroll").zip(dom::query(".horizontal-content"));

    SCROLL_TARGETS.with(|t| {
        *t.borrow_mut() = Some(ScrollTargets {
            parallax,
            sticky_backgrounds,
            horizontal,
        })
    });
}

/// Sticky backgrounds and the horizontal strip follow the scroll directly.
pub fn on_scroll(viewport_height: f64) {
    SCROLL_TARGETS.with(|t| {
        let Ok(guard) = t.try_borrow() else {
            return;
        };
        let Some(targets) = guard.as_ref() else {
            return;
        };

        for (bg, section) in &targets.sticky_backgrounds {
            if let Some(progress) = sticky_progress(&dom::rect_of(section), viewport_height) {
                dom::set_style(bg, "transform", &sticky_background_transform(progress));
            }
        }

        if let Some((section, content)) = &targets.horizontal {
            let offset = horizontal_scroll_offset(
                &dom::rect_of(section),
                viewport_height,
                content.scroll_width() as f64,
                dom::viewport_width(),
            );
            if let Some(offset) = offset {
                dom::set_style(content, "transform", &format!("translateX(-{offset}px)"));
            }
        }
    });
}

/// Batch `[data-parallax]` updates into one animation frame per burst.
pub fn request_parallax() {
    if PARALLAX_PENDING.with(|p| p.replace(true)) {
        return;
    }
    dom::next_frame(|| {
        update_parallax();
        PARALLAX_PENDING.with(|p| p.set(false));
    });
}

fn update_parallax() {
    let scroll_y = dom::scroll_y();
    let viewport_height = dom::viewport_height();
    SCROLL_TARGETS.with(|t| {
        let Ok(guard) = t.try_borrow() else {
            return;
        };
        let Some(targets) = guard.as_ref() else {
            return;
        };
        for (el, speed) in &targets.parallax {
            if dom::rect_of(el).intersects_viewport(viewport_height) {
                dom::set_style(el, "transform", &translate3d_y(parallax_offset(scroll_y, *speed)));
            }
        }
    });
}
