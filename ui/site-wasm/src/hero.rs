//! Hero carousel binding.
//!
//! `DomHeroSurface` renders controller output onto the hero markup and
//! `BrowserTimers` backs the controller's timer seam with `gloo-timers`.
//! Timer callbacks re-enter the controller through `state::with_carousel`.

use crate::dom::{self, HeroElements};
use crate::state;
use eq_carousel::{Carousel, CarouselConfig, HeroSurface, Job, SlidePart, TimerId, Timers};
use eq_types::{LanguageCode, SlideContent};
use gloo_timers::callback::{Interval, Timeout};
use std::collections::HashMap;
use tracing::info;
use web_sys::HtmlAnchorElement;

pub type HeroCarousel = Carousel<DomHeroSurface, BrowserTimers>;

const ACTIVE: &str = "active";
const ENTERED: &str = "motion-in";
const CTA_ENTERED: &str = "motion-in-reverse";

pub struct DomHeroSurface {
    els: HeroElements,
}

impl DomHeroSurface {
    pub fn new(els: HeroElements) -> Self {
        Self { els }
    }

    /// Background currently marked active.
    pub fn active_background(&self) -> Option<&web_sys::Element> {
        self.els.backgrounds.iter().find(|bg| dom::has_class(bg, ACTIVE))
    }
}

fn write_link(anchor: &HtmlAnchorElement, href: &str, target: eq_types::LinkTarget) {
    anchor.set_href(href);
    anchor.set_target(target.as_attr());
    match target.rel() {
        Some(rel) => anchor.set_rel(rel),
        None => {
            let _ = anchor.remove_attribute("rel");
        }
    }
}

impl HeroSurface for DomHeroSurface {
    fn set_active(&mut self, index: usize, active: bool) {
        if let Some(bg) = self.els.backgrounds.get(index) {
            dom::toggle_class(bg, ACTIVE, active);
            if !active {
                dom::clear_style(bg, "transform");
            }
        }
        if let Some(dot) = self.els.dots.get(index) {
            dom::toggle_class(dot, ACTIVE, active);
        }
    }

    fn hide_number(&mut self) {
        let style = self.els.number.style();
        let _ = style.set_property("opacity", "0");
        let _ = style.set_property("transform", "scale(0.8) rotate(-10deg)");
    }

    fn show_number(&mut self, label: &str) {
        self.els.number.set_text_content(Some(label));
        let style = self.els.number.style();
        let _ = style.set_property("opacity", "1");
        let _ = style.set_property("transform", "scale(1) rotate(0deg)");
    }

    fn clear_entered(&mut self) {
        dom::remove_class(&self.els.tag, ENTERED);
        for line in &self.els.title_lines {
            dom::remove_class(line, ENTERED);
        }
        dom::remove_class(&self.els.description, ENTERED);
        dom::remove_class(&self.els.cta_block, CTA_ENTERED);
    }

    fn flush_layout(&mut self) {
        // Reading layout forces a reflow so removed classes take effect first.
        let _ = self.els.tag.offset_width();
    }

    fn write_content(&mut self, slide: &SlideContent) {
        self.els.tag.set_text_content(Some(slide.tag));
        dom::set_text(&self.els.title_lines[0], slide.title[0]);
        dom::set_text(&self.els.title_lines[1], slide.title[1]);
        self.els.description.set_inner_html(slide.description);

        let [primary, secondary] = &self.els.ctas;
        primary.set_inner_html(&format!(
            "<span>{}</span><div class=\"btn-arrow\">→</div>",
            slide.primary.label
        ));
        write_link(primary, slide.primary.href, slide.primary.target());
        secondary.set_text_content(Some(slide.secondary.label));
        write_link(secondary, slide.secondary.href, slide.secondary.target());
    }

    fn mark_entered(&mut self, part: SlidePart) {
        match part {
            SlidePart::Tag => dom::add_class(&self.els.tag, ENTERED),
            SlidePart::TitleLine1 => dom::add_class(&self.els.title_lines[0], ENTERED),
            SlidePart::TitleLine2 => dom::add_class(&self.els.title_lines[1], ENTERED),
            SlidePart::Description => dom::add_class(&self.els.description, ENTERED),
            SlidePart::Cta => dom::add_class(&self.els.cta_block, CTA_ENTERED),
        }
    }
}

enum Handle {
    Interval(Interval),
    Timeout(Timeout),
}

impl Handle {
    fn cancel(self) {
        match self {
            Handle::Interval(interval) => drop(interval.cancel()),
            Handle::Timeout(timeout) => drop(timeout.cancel()),
        }
    }
}

/// Owns every live timer. Dropping a handle cancels it.
#[derive(Default)]
pub struct BrowserTimers {
    next_id: u64,
    live: HashMap<TimerId, Handle>,
}

impl BrowserTimers {
    fn mint(&mut self) -> TimerId {
        self.next_id += 1;
        TimerId(self.next_id)
    }

    /// Forget a one-shot timer that has already fired.
    pub fn fired(&mut self, id: TimerId) {
        if matches!(self.live.get(&id), Some(Handle::Timeout(_))) {
            self.live.remove(&id);
        }
    }
}

impl Timers for BrowserTimers {
    fn start_interval(&mut self, period_ms: u32) -> TimerId {
        let id = self.mint();
        let interval = Interval::new(period_ms, || {
            state::with_carousel(|c| c.handle(Job::AutoplayTick));
        });
        self.live.insert(id, Handle::Interval(interval));
        id
    }

    fn schedule(&mut self, delay_ms: u32, job: Job) -> TimerId {
        let id = self.mint();
        let timeout = Timeout::new(delay_ms, move || {
            state::with_carousel(|c| {
                c.timers_mut().fired(id);
                c.handle(job);
            });
        });
        self.live.insert(id, Handle::Timeout(timeout));
        id
    }

    fn cancel(&mut self, id: TimerId) {
        if let Some(handle) = self.live.remove(&id) {
            handle.cancel();
        }
    }
}

/// Build the controller, render the intro and start autoplay.
pub fn init(els: &HeroElements, lang: LanguageCode) {
    let cfg = state::config();
    let mut carousel = Carousel::new(
        DomHeroSurface::new(els.clone()),
        BrowserTimers::default(),
        CarouselConfig::from(&cfg),
        lang,
    );
    carousel.start();
    state::install_carousel(carousel);
    info!("hero carousel started ({} ms autoplay)", cfg.autoplay_interval_ms);
}

/// Scale and drift the active background while the hero is in view.
pub fn on_scroll(scroll_y: f64, viewport_height: f64) {
    let Some(transform) = eq_motion::hero_background_transform(scroll_y, viewport_height) else {
        return;
    };
    state::with_carousel(|c| {
        if let Some(bg) = c.surface().active_background() {
            dom::set_style(bg, "transform", &transform);
        }
    });
}
