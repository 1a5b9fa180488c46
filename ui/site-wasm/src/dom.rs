//! DOM element bindings.
//!
//! The hero markup is required and resolved once at startup; a missing piece
//! fails `Elements::bind()` with the selector in the error. Wizard and nav
//! groups are optional and bound as a whole or not at all.

use eq_types::SLIDE_COUNT;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    Document, Element, HtmlAnchorElement, HtmlElement, HtmlInputElement, HtmlSelectElement,
    HtmlTextAreaElement,
};

macro_rules! query_el {
    ($sel:expr) => {
        query($sel).ok_or_else(|| JsValue::from_str(&format!("missing element {}", $sel)))?
    };
}

macro_rules! query_typed {
    ($sel:expr, $ty:ty) => {
        query($sel)
            .and_then(|e| e.dyn_into::<$ty>().ok())
            .ok_or_else(|| JsValue::from_str(&format!("missing element {}", $sel)))?
    };
}

// ── Helpers ──

pub fn document() -> Document {
    gloo_utils::document()
}

pub fn window() -> web_sys::Window {
    gloo_utils::window()
}

pub fn body() -> HtmlElement {
    gloo_utils::body()
}

pub fn by_id(id: &str) -> Option<Element> {
    document().get_element_by_id(id)
}

pub fn by_id_typed<T: JsCast>(id: &str) -> Option<T> {
    by_id(id).and_then(|e| e.dyn_into::<T>().ok())
}

pub fn query(selector: &str) -> Option<Element> {
    document().query_selector(selector).ok()?
}

pub fn query_all(selector: &str) -> Vec<Element> {
    match document().query_selector_all(selector) {
        Ok(nl) => collect_elements(&nl),
        Err(_) => Vec::new(),
    }
}

/// Query all matching elements within a parent element.
pub fn query_all_within(parent: &Element, selector: &str) -> Vec<Element> {
    match parent.query_selector_all(selector) {
        Ok(nl) => collect_elements(&nl),
        Err(_) => Vec::new(),
    }
}

fn collect_elements(nl: &web_sys::NodeList) -> Vec<Element> {
    (0..nl.length())
        .filter_map(|i| nl.item(i))
        .filter_map(|n| n.dyn_into::<Element>().ok())
        .collect()
}

pub fn as_html(el: &Element) -> Option<HtmlElement> {
    el.clone().dyn_into::<HtmlElement>().ok()
}

pub fn set_text(el: &Element, text: &str) {
    el.set_text_content(Some(text));
}

pub fn set_style(el: &Element, prop: &str, value: &str) {
    if let Some(html) = as_html(el) {
        let _ = html.style().set_property(prop, value);
    }
}

pub fn clear_style(el: &Element, prop: &str) {
    if let Some(html) = as_html(el) {
        let _ = html.style().remove_property(prop);
    }
}

pub fn add_class(el: &Element, cls: &str) {
    let _ = el.class_list().add_1(cls);
}

pub fn remove_class(el: &Element, cls: &str) {
    let _ = el.class_list().remove_1(cls);
}

pub fn toggle_class(el: &Element, cls: &str, force: bool) {
    let _ = el.class_list().toggle_with_force(cls, force);
}

pub fn has_class(el: &Element, cls: &str) -> bool {
    el.class_list().contains(cls)
}

pub fn create_element(tag: &str) -> Option<Element> {
    document().create_element(tag).ok()
}

pub fn rect_of(el: &Element) -> eq_motion::Rect {
    let r = el.get_bounding_client_rect();
    eq_motion::Rect {
        left: r.left(),
        top: r.top(),
        width: r.width(),
        height: r.height(),
    }
}

pub fn scroll_y() -> f64 {
    window().scroll_y().unwrap_or_default()
}

pub fn viewport_height() -> f64 {
    window()
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or_default()
}

pub fn viewport_width() -> f64 {
    window()
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or_default()
}

pub fn document_height() -> f64 {
    document()
        .document_element()
        .map(|e| e.scroll_height() as f64)
        .unwrap_or_default()
}

// ── Element registries ──

/// Hero carousel markup. All fields are required.
#[derive(Clone)]
pub struct HeroElements {
    pub hero: Element,
    pub backgrounds: Vec<Element>,
    pub dots: Vec<Element>,
    pub number: HtmlElement,
    pub tag: HtmlElement,
    pub title_lines: [Element; 2],
    pub description: Element,
    pub cta_block: Element,
    pub ctas: [HtmlAnchorElement; 2],
    pub prev_arrow: Option<Element>,
    pub next_arrow: Option<Element>,
}

/// Recommendation wizard form and result panel.
#[derive(Clone)]
pub struct WizardElements {
    pub form: Element,
    pub space: HtmlSelectElement,
    pub goal: HtmlSelectElement,
    pub equipment: HtmlTextAreaElement,
    pub result: Element,
    pub kit: Element,
    pub focus: Element,
    pub note: Element,
    pub email_btn: Option<Element>,
    pub name: Option<HtmlInputElement>,
    pub email: Option<HtmlInputElement>,
}

#[derive(Clone)]
pub struct NavElements {
    pub nav: Element,
    pub toggle: Option<Element>,
    pub menu: Option<Element>,
    pub overlay: Option<Element>,
}

#[derive(Clone)]
pub struct Elements {
    pub hero: HeroElements,
    pub wizard: Option<WizardElements>,
    pub nav: Option<NavElements>,
    pub lang_buttons: Vec<Element>,
}

impl Elements {
    pub fn bind() -> Result<Elements, JsValue> {
        Ok(Elements {
            hero: HeroElements::bind()?,
            wizard: WizardElements::bind(),
            nav: NavElements::bind(),
            lang_buttons: query_all("[data-lang]"),
        })
    }
}

impl HeroElements {
    fn bind() -> Result<HeroElements, JsValue> {
        let hero = query_el!(".hero");
        let backgrounds = query_all_within(&hero, ".bg-item");
        let dots = query_all_within(&hero, ".nav-dot");
        if backgrounds.len() < SLIDE_COUNT || dots.len() < SLIDE_COUNT {
            return Err(JsValue::from_str(&format!(
                "hero needs {} .bg-item and .nav-dot elements, found {} and {}",
                SLIDE_COUNT,
                backgrounds.len(),
                dots.len()
            )));
        }

        let mut lines = query_all(".title-line").into_iter();
        let (Some(line1), Some(line2)) = (lines.next(), lines.next()) else {
            return Err(JsValue::from_str("missing element .title-line (need 2)"));
        };

        let mut anchors = query_all(".content-cta a")
            .into_iter()
            .filter_map(|e| e.dyn_into::<HtmlAnchorElement>().ok());
        let (Some(primary), Some(secondary)) = (anchors.next(), anchors.next()) else {
            return Err(JsValue::from_str("missing element .content-cta a (need 2)"));
        };

        Ok(HeroElements {
            number: query_typed!(".content-number", HtmlElement),
            tag: query_typed!(".content-tag", HtmlElement),
            title_lines: [line1, line2],
            description: query_el!(".content-description"),
            cta_block: query_el!(".content-cta"),
            ctas: [primary, secondary],
            prev_arrow: query(".hero-arrow-prev"),
            next_arrow: query(".hero-arrow-next"),
            hero,
            backgrounds,
            dots,
        })
    }
}

impl WizardElements {
    fn bind() -> Option<WizardElements> {
        Some(WizardElements {
            form: by_id("wizardForm")?,
            space: by_id_typed("wizardSpace")?,
            goal: by_id_typed("wizardGoal")?,
            equipment: by_id_typed("wizardEquipment")?,
            result: by_id("wizardResult")?,
            kit: by_id("wizardKit")?,
            focus: by_id("wizardFocus")?,
            note: by_id("wizardNote")?,
            email_btn: by_id("wizardEmailBtn"),
            name: by_id_typed("wizardName"),
            email: by_id_typed("wizardEmail"),
        })
    }
}

impl NavElements {
    fn bind() -> Option<NavElements> {
        Some(NavElements {
            nav: query(".nav")?,
            toggle: query(".nav-toggle"),
            menu: query(".nav-menu"),
            overlay: query(".menu-overlay"),
        })
    }
}

// ── Scheduling ──

/// Run `f` on the next animation frame.
pub fn next_frame<F: FnOnce() + 'static>(f: F) {
    let cb = Closure::once_into_js(f);
    let _ = window().request_animation_frame(cb.unchecked_ref());
}

/// Run `f` once after `ms` milliseconds. Not cancellable.
pub fn after<F: FnOnce() + 'static>(ms: u32, f: F) {
    let _ = gloo_timers::callback::Timeout::new(ms, f).forget();
}
