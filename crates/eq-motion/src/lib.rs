//! Geometry for the scroll- and pointer-driven page effects.
//!
//! Everything here is a pure function of scroll offsets, element rectangles
//! and pointer positions; the browser crate reads those from the page and
//! writes the returned transforms back.

mod counter;

pub use counter::{CounterAnimation, CounterFrame, parse_leading_int};

/// Element bounds in viewport coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    pub fn intersects_viewport(&self, viewport_height: f64) -> bool {
        self.top < viewport_height && self.bottom() > 0.0
    }
}

pub const DEFAULT_PARALLAX_SPEED: f64 = 0.5;
pub const NAV_HIDE_AFTER_PX: f64 = 500.0;
pub const POINTER_PARALLAX_RANGE: f64 = 20.0;
pub const TILT_DAMPING: f64 = 15.0;
pub const SPLIT_CHAR_STAGGER_S: f64 = 0.03;

/// Speed from a `data-parallax` value. Unparsable or zero falls back to the
/// default, as does a missing attribute.
pub fn parallax_speed(attr: Option<&str>) -> f64 {
    attr.and_then(|raw| raw.trim().parse::<f64>().ok())
        .filter(|speed| speed.is_finite() && *speed != 0.0)
        .unwrap_or(DEFAULT_PARALLAX_SPEED)
}

pub fn parallax_offset(scroll_y: f64, speed: f64) -> f64 {
    -(scroll_y * speed * 0.5)
}

pub fn translate3d_y(y: f64) -> String {
    format!("translate3d(0, {y}px, 0)")
}

/// Transform for the active hero background while the hero is on screen.
pub fn hero_background_transform(scroll_y: f64, viewport_height: f64) -> Option<String> {
    (scroll_y < viewport_height).then(|| format!("scale(1.1) translateY({}px)", scroll_y * 0.3))
}

/// How far a sticky section has travelled through the viewport, in `[0, 1]`.
pub fn sticky_progress(section: &Rect, viewport_height: f64) -> Option<f64> {
    let progress = 1.0 - section.bottom() / (viewport_height + section.height);
    (0.0..=1.0).contains(&progress).then_some(progress)
}

pub fn sticky_background_transform(progress: f64) -> String {
    format!("scale(1.1) translateY({}px)", progress * 100.0)
}

/// Horizontal offset for a pinned horizontal-scroll section, or `None` while
/// the section is not pinned.
pub fn horizontal_scroll_offset(
    section: &Rect,
    viewport_height: f64,
    content_width: f64,
    viewport_width: f64,
) -> Option<f64> {
    if section.top >= 0.0 || section.bottom() <= viewport_height {
        return None;
    }
    let span = section.height - viewport_height;
    if span <= 0.0 {
        return None;
    }
    let progress = (-section.top / span).clamp(0.0, 1.0);
    Some(progress * (content_width - viewport_width).max(0.0))
}

pub fn scroll_progress_percent(scroll_y: f64, document_height: f64, viewport_height: f64) -> f64 {
    let scrollable = document_height - viewport_height;
    if scrollable <= 0.0 {
        return 0.0;
    }
    (scroll_y / scrollable * 100.0).clamp(0.0, 100.0)
}

/// Remembers the last scroll position to hide the nav bar while scrolling down.
#[derive(Debug, Default, Clone)]
pub struct NavAutoHide {
    last_scroll: f64,
}

impl NavAutoHide {
    /// Returns `true` when the nav should be hidden.
    pub fn update(&mut self, scroll_y: f64) -> bool {
        let hidden = scroll_y > self.last_scroll && scroll_y > NAV_HIDE_AFTER_PX;
        self.last_scroll = scroll_y;
        hidden
    }
}

/// `(rotateX, rotateY)` in degrees for a card under the pointer.
pub fn tilt(card: &Rect, client_x: f64, client_y: f64) -> (f64, f64) {
    let x = client_x - card.left;
    let y = client_y - card.top;
    let rotate_x = (y - card.height / 2.0) / TILT_DAMPING;
    let rotate_y = (card.width / 2.0 - x) / TILT_DAMPING;
    (rotate_x, rotate_y)
}

pub fn tilt_transform(rotate_x: f64, rotate_y: f64) -> String {
    format!("perspective(1000px) rotateX({rotate_x}deg) rotateY({rotate_y}deg)")
}

/// Offset pulling a button toward the pointer by `strength` of the distance
/// from its centre.
pub fn magnetic_offset(button: &Rect, client_x: f64, client_y: f64, strength: f64) -> (f64, f64) {
    let x = client_x - button.left - button.width / 2.0;
    let y = client_y - button.top - button.height / 2.0;
    (x * strength, y * strength)
}

pub fn pointer_parallax(client_x: f64, client_y: f64, viewport_width: f64, viewport_height: f64) -> (f64, f64) {
    if viewport_width <= 0.0 || viewport_height <= 0.0 {
        return (0.0, 0.0);
    }
    let mx = client_x / viewport_width - 0.5;
    let my = client_y / viewport_height - 0.5;
    (mx * POINTER_PARALLAX_RANGE, my * POINTER_PARALLAX_RANGE)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ripple {
    pub size: f64,
    pub left: f64,
    pub top: f64,
}

impl Ripple {
    /// A square ripple covering the element, centred on the click.
    pub fn at(target: &Rect, client_x: f64, client_y: f64) -> Self {
        let size = target.width.max(target.height);
        Self {
            size,
            left: client_x - target.left - size / 2.0,
            top: client_y - target.top - size / 2.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SplitChar {
    pub glyph: String,
    pub delay_s: f64,
}

/// Split text into per-character reveal units. Spaces become no-break
/// spaces so inline-block spans keep their width.
pub fn split_chars(text: &str) -> Vec<SplitChar> {
    text.chars()
        .enumerate()
        .map(|(i, c)| SplitChar {
            glyph: if c == ' ' { '\u{00A0}'.to_string() } else { c.to_string() },
            delay_s: i as f64 * SPLIT_CHAR_STAGGER_S,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(left: f64, top: f64, width: f64, height: f64) -> Rect {
        Rect {
            left,
            top,
            width,
            height,
        }
    }

    #[test]
    fn parallax_speed_falls_back() {
        assert_eq!(parallax_speed(Some("0.3")), 0.3);
        assert_eq!(parallax_speed(Some("fast")), DEFAULT_PARALLAX_SPEED);
        assert_eq!(parallax_speed(Some("0")), DEFAULT_PARALLAX_SPEED);
        assert_eq!(parallax_speed(None), DEFAULT_PARALLAX_SPEED);
        assert_eq!(parallax_offset(400.0, 0.5), -100.0);
    }

    #[test]
    fn viewport_intersection() {
        assert!(rect(0.0, 100.0, 10.0, 10.0).intersects_viewport(800.0));
        assert!(!rect(0.0, 900.0, 10.0, 10.0).intersects_viewport(800.0));
        assert!(!rect(0.0, -50.0, 10.0, 50.0).intersects_viewport(800.0));
    }

    #[test]
    fn hero_background_stops_below_the_fold() {
        assert_eq!(
            hero_background_transform(100.0, 800.0).as_deref(),
            Some("scale(1.1) translateY(30px)")
        );
        assert_eq!(hero_background_transform(800.0, 800.0), None);
    }

    #[test]
    fn sticky_progress_is_bounded() {
        let entering = rect(0.0, 800.0, 0.0, 400.0);
        assert_eq!(sticky_progress(&entering, 800.0), Some(0.0));
        let gone = rect(0.0, -500.0, 0.0, 400.0);
        assert_eq!(sticky_progress(&gone, 800.0), None);
    }

    #[test]
    fn horizontal_scroll_only_while_pinned() {
        let pinned = rect(0.0, -500.0, 0.0, 2_000.0);
        assert_eq!(horizontal_scroll_offset(&pinned, 1_000.0, 3_000.0, 1_000.0), Some(1_000.0));
        let above = rect(0.0, 10.0, 0.0, 2_000.0);
        assert_eq!(horizontal_scroll_offset(&above, 1_000.0, 3_000.0, 1_000.0), None);
    }

    #[test]
    fn progress_handles_short_documents() {
        assert_eq!(scroll_progress_percent(0.0, 500.0, 800.0), 0.0);
        assert_eq!(scroll_progress_percent(600.0, 2_000.0, 800.0), 50.0);
    }

    #[test]
    fn nav_hides_only_when_scrolling_down_past_threshold() {
        let mut nav = NavAutoHide::default();
        assert!(!nav.update(300.0));
        assert!(nav.update(600.0));
        assert!(!nav.update(550.0));
        assert!(nav.update(700.0));
    }

    #[test]
    fn tilt_is_zero_at_centre() {
        let card = rect(100.0, 100.0, 300.0, 150.0);
        assert_eq!(tilt(&card, 250.0, 175.0), (0.0, 0.0));
        assert_eq!(tilt(&card, 100.0, 100.0), (-5.0, 10.0));
    }

    #[test]
    fn magnetic_pull_scales_with_strength() {
        let button = rect(0.0, 0.0, 100.0, 40.0);
        assert_eq!(magnetic_offset(&button, 100.0, 40.0, 0.2), (10.0, 4.0));
    }

    #[test]
    fn pointer_parallax_is_centred() {
        assert_eq!(pointer_parallax(500.0, 400.0, 1_000.0, 800.0), (0.0, 0.0));
        assert_eq!(pointer_parallax(1_000.0, 0.0, 1_000.0, 800.0), (10.0, -10.0));
    }

    #[test]
    fn ripple_centres_on_click() {
        let ripple = Ripple::at(&rect(10.0, 20.0, 200.0, 100.0), 110.0, 70.0);
        assert_eq!(
            ripple,
            Ripple {
                size: 200.0,
                left: 0.0,
                top: -50.0
            }
        );
    }

    #[test]
    fn split_chars_keeps_spaces_visible() {
        let parts = split_chars("a b");
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[1].glyph, "\u{00A0}");
        assert!((parts[2].delay_s - 0.06).abs() < 1e-9);
    }
}
