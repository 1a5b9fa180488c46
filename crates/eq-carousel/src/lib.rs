//! Hero carousel controller.
//!
//! States: `Idle(index)` and `Transitioning(from → to)`, with autoplay as an
//! orthogonal on/off flag. The controller never touches the page or the
//! clock directly: it drives a [`HeroSurface`] and asks a [`Timers`]
//! implementation to call [`Carousel::handle`] back with a [`Job`].
//!
//! Every content swap mints a fresh [`TransitionToken`]. Deferred reveal
//! steps carry the token they were scheduled under and are dropped if a
//! newer swap started in the meantime.

mod swipe;

pub use swipe::{SwipeDirection, SwipeTracker, classify};

use eq_types::{LanguageCode, SLIDE_COUNT, SiteConfig, SlideContent};
use tracing::debug;

/// Delays (ms) of the reveal choreography. Only the relative order matters
/// to the page; the values match the stylesheet transitions.
pub mod timing {
    pub const SHOW_NUMBER: u32 = 300;
    pub const WRITE_CONTENT: u32 = 400;
    /// Offsets after the content write, in reveal order.
    pub const ENTER_AFTER_WRITE: [u32; 5] = [100, 200, 350, 500, 650];
    /// Offsets from page load for the first slide.
    pub const ENTER_ON_LOAD: [u32; 5] = [500, 650, 800, 950, 1100];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlidePart {
    Tag,
    TitleLine1,
    TitleLine2,
    Description,
    Cta,
}

impl SlidePart {
    /// Reveal order, first to last.
    pub const ORDER: [SlidePart; 5] = [
        SlidePart::Tag,
        SlidePart::TitleLine1,
        SlidePart::TitleLine2,
        SlidePart::Description,
        SlidePart::Cta,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealStep {
    ShowNumber,
    WriteContent,
    Enter(SlidePart),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TransitionToken(u64);

impl TransitionToken {
    fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Job {
    AutoplayTick,
    Reveal { token: TransitionToken, step: RevealStep },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId(pub u64);

pub trait Timers {
    /// Start a repeating timer that fires [`Job::AutoplayTick`].
    fn start_interval(&mut self, period_ms: u32) -> TimerId;
    /// Fire `job` once after `delay_ms`.
    fn schedule(&mut self, delay_ms: u32, job: Job) -> TimerId;
    fn cancel(&mut self, id: TimerId);
}

/// Visual side of the hero section.
pub trait HeroSurface {
    /// Toggle the "active" marker on the background and dot at `index`.
    fn set_active(&mut self, index: usize, active: bool);
    fn hide_number(&mut self);
    fn show_number(&mut self, label: &str);
    /// Remove the "entered" flag from tag, title lines, description and CTA block.
    fn clear_entered(&mut self);
    /// Force a synchronous layout so re-adding the flags restarts transitions.
    fn flush_layout(&mut self);
    fn write_content(&mut self, slide: &SlideContent);
    fn mark_entered(&mut self, part: SlidePart);
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarouselConfig {
    pub autoplay_interval_ms: u32,
    pub swipe_threshold_px: f64,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            autoplay_interval_ms: 5_000,
            swipe_threshold_px: 50.0,
        }
    }
}

impl From<&SiteConfig> for CarouselConfig {
    fn from(cfg: &SiteConfig) -> Self {
        Self {
            autoplay_interval_ms: cfg.autoplay_interval_ms,
            swipe_threshold_px: cfg.swipe_threshold_px,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle(usize),
    Transitioning { from: usize, to: usize },
}

pub struct Carousel<S, T> {
    surface: S,
    timers: T,
    config: CarouselConfig,
    lang: LanguageCode,
    current: usize,
    phase: Phase,
    autoplay: Option<TimerId>,
    token: TransitionToken,
    swipe: SwipeTracker,
}

impl<S, T> Carousel<S, T>
where
    S: HeroSurface,
    T: Timers,
{
    pub fn new(surface: S, timers: T, config: CarouselConfig, lang: LanguageCode) -> Self {
        Self {
            surface,
            timers,
            config,
            lang,
            current: 0,
            phase: Phase::Idle(0),
            autoplay: None,
            token: TransitionToken::default(),
            swipe: SwipeTracker::default(),
        }
    }

    /// Page-load entry: stagger in the first slide and begin autoplay.
    pub fn start(&mut self) {
        self.surface.set_active(self.current, true);
        for (part, delay) in SlidePart::ORDER.iter().zip(timing::ENTER_ON_LOAD) {
            self.timers.schedule(
                delay,
                Job::Reveal {
                    token: self.token,
                    step: RevealStep::Enter(*part),
                },
            );
        }
        self.start_autoplay();
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn language(&self) -> LanguageCode {
        self.lang
    }

    pub fn autoplay_running(&self) -> bool {
        self.autoplay.is_some()
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn timers_mut(&mut self) -> &mut T {
        &mut self.timers
    }

    pub fn go_to(&mut self, target: usize) {
        if target == self.current || target >= SLIDE_COUNT {
            return;
        }
        debug!("carousel {} -> {}", self.current, target);

        self.surface.set_active(self.current, false);
        self.surface.set_active(target, true);
        self.phase = Phase::Transitioning {
            from: self.current,
            to: target,
        };
        self.current = target;
        self.begin_content_swap();
        self.reset_autoplay();
    }

    pub fn next(&mut self) {
        self.go_to((self.current + 1) % SLIDE_COUNT);
    }

    pub fn prev(&mut self) {
        self.go_to((self.current + SLIDE_COUNT - 1) % SLIDE_COUNT);
    }

    pub fn start_autoplay(&mut self) {
        if self.autoplay.is_none() {
            self.autoplay = Some(self.timers.start_interval(self.config.autoplay_interval_ms));
        }
    }

    pub fn stop_autoplay(&mut self) {
        if let Some(id) = self.autoplay.take() {
            self.timers.cancel(id);
        }
    }

    fn reset_autoplay(&mut self) {
        self.stop_autoplay();
        self.start_autoplay();
    }

    /// Returns `true` when the key was consumed and its default action
    /// should be suppressed.
    pub fn handle_key(&mut self, key: &str) -> bool {
        match key {
            "ArrowLeft" => {
                self.prev();
                true
            }
            "ArrowRight" => {
                self.next();
                true
            }
            _ => false,
        }
    }

    pub fn touch_start(&mut self, x: f64) {
        self.swipe.begin(x);
        self.stop_autoplay();
    }

    /// Ignored unless a `touch_start` is pending.
    pub fn touch_end(&mut self, x: f64) {
        if !self.swipe.in_progress() {
            return;
        }
        match self.swipe.finish(x, self.config.swipe_threshold_px) {
            Some(SwipeDirection::Left) => self.next(),
            Some(SwipeDirection::Right) => self.prev(),
            None => self.start_autoplay(),
        }
    }

    /// The browser abandoned the gesture; no `touch_end` will follow.
    pub fn touch_cancel(&mut self) {
        self.swipe.cancel();
        self.start_autoplay();
    }

    pub fn visibility_changed(&mut self, hidden: bool) {
        if hidden {
            self.stop_autoplay();
        } else {
            self.start_autoplay();
        }
    }

    /// Re-render the current slide in `lang` without animation.
    pub fn set_language(&mut self, lang: LanguageCode) {
        self.lang = lang;
        let slide = self.slide();
        self.surface.show_number(slide.number);
        self.surface.write_content(slide);
    }

    pub fn handle(&mut self, job: Job) {
        match job {
            Job::AutoplayTick => {
                if self.autoplay.is_some() {
                    self.next();
                }
            }
            Job::Reveal { token, step } => {
                if token != self.token {
                    debug!("dropping stale reveal step {:?}", step);
                    return;
                }
                self.run_step(step);
            }
        }
    }

    fn slide(&self) -> &'static SlideContent {
        &eq_i18n::slides_for(self.lang)[self.current]
    }

    fn begin_content_swap(&mut self) {
        self.token = self.token.next();
        self.surface.hide_number();
        self.surface.clear_entered();
        self.surface.flush_layout();
        self.schedule_step(timing::SHOW_NUMBER, RevealStep::ShowNumber);
        self.schedule_step(timing::WRITE_CONTENT, RevealStep::WriteContent);
    }

    fn schedule_step(&mut self, delay_ms: u32, step: RevealStep) {
        self.timers.schedule(
            delay_ms,
            Job::Reveal {
                token: self.token,
                step,
            },
        );
    }

    fn run_step(&mut self, step: RevealStep) {
        match step {
            RevealStep::ShowNumber => {
                let slide = self.slide();
                self.surface.show_number(slide.number);
            }
            RevealStep::WriteContent => {
                let slide = self.slide();
                self.surface.write_content(slide);
                for (part, delay) in SlidePart::ORDER.iter().zip(timing::ENTER_AFTER_WRITE) {
                    self.schedule_step(delay, RevealStep::Enter(*part));
                }
            }
            RevealStep::Enter(part) => {
                self.surface.mark_entered(part);
                if part == SlidePart::Cta {
                    self.phase = Phase::Idle(self.current);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Active(usize, bool),
        HideNumber,
        ShowNumber(&'static str),
        ClearEntered,
        Flush,
        Write(&'static str, &'static str),
        Enter(SlidePart),
    }

    #[derive(Default)]
    struct RecordingSurface {
        calls: Vec<Call>,
    }

    impl RecordingSurface {
        fn writes(&self) -> Vec<(&'static str, &'static str)> {
            self.calls
                .iter()
                .filter_map(|c| match c {
                    Call::Write(n, t) => Some((*n, *t)),
                    _ => None,
                })
                .collect()
        }

        fn active_changes(&self) -> Vec<(usize, bool)> {
            self.calls
                .iter()
                .filter_map(|c| match c {
                    Call::Active(i, on) => Some((*i, *on)),
                    _ => None,
                })
                .collect()
        }
    }

    impl HeroSurface for RecordingSurface {
        fn set_active(&mut self, index: usize, active: bool) {
            self.calls.push(Call::Active(index, active));
        }

        fn hide_number(&mut self) {
            self.calls.push(Call::HideNumber);
        }

        fn show_number(&mut self, label: &str) {
            let label = eq_i18n::slides_for(LanguageCode::PtBr)
                .iter()
                .map(|s| s.number)
                .find(|n| *n == label)
                .unwrap();
            self.calls.push(Call::ShowNumber(label));
        }

        fn clear_entered(&mut self) {
            self.calls.push(Call::ClearEntered);
        }

        fn flush_layout(&mut self) {
            self.calls.push(Call::Flush);
        }

        fn write_content(&mut self, slide: &SlideContent) {
            self.calls.push(Call::Write(slide.number, slide.title[0]));
        }

        fn mark_entered(&mut self, part: SlidePart) {
            self.calls.push(Call::Enter(part));
        }
    }

    struct Pending {
        id: TimerId,
        due: u64,
        period: Option<u64>,
        job: Job,
    }

    /// Virtual clock; nothing fires until the test advances time.
    #[derive(Default)]
    struct ManualTimers {
        now: u64,
        next_id: u64,
        intervals_started: usize,
        pending: Vec<Pending>,
    }

    impl ManualTimers {
        fn push(&mut self, delay: u64, period: Option<u64>, job: Job) -> TimerId {
            self.next_id += 1;
            let id = TimerId(self.next_id);
            self.pending.push(Pending {
                id,
                due: self.now + delay,
                period,
                job,
            });
            id
        }

        fn live_intervals(&self) -> usize {
            self.pending.iter().filter(|p| p.period.is_some()).count()
        }

        fn pop_due(&mut self, until: u64) -> Option<Job> {
            let idx = self
                .pending
                .iter()
                .enumerate()
                .filter(|(_, p)| p.due <= until)
                .min_by_key(|(_, p)| (p.due, p.id.0))
                .map(|(i, _)| i)?;
            self.now = self.pending[idx].due;
            match self.pending[idx].period {
                Some(period) => {
                    self.pending[idx].due += period;
                    Some(self.pending[idx].job)
                }
                None => Some(self.pending.remove(idx).job),
            }
        }
    }

    impl Timers for ManualTimers {
        fn start_interval(&mut self, period_ms: u32) -> TimerId {
            self.intervals_started += 1;
            let period = u64::from(period_ms);
            self.push(period, Some(period), Job::AutoplayTick)
        }

        fn schedule(&mut self, delay_ms: u32, job: Job) -> TimerId {
            self.push(u64::from(delay_ms), None, job)
        }

        fn cancel(&mut self, id: TimerId) {
            self.pending.retain(|p| p.id != id);
        }
    }

    type TestCarousel = Carousel<RecordingSurface, ManualTimers>;

    fn carousel() -> TestCarousel {
        let mut c = Carousel::new(
            RecordingSurface::default(),
            ManualTimers::default(),
            CarouselConfig::default(),
            LanguageCode::PtBr,
        );
        c.start();
        advance(&mut c, 2_000);
        c.surface.calls.clear();
        c
    }

    fn advance(c: &mut TestCarousel, ms: u64) {
        let until = c.timers.now + ms;
        while let Some(job) = c.timers.pop_due(until) {
            c.handle(job);
        }
        c.timers.now = until;
    }

    #[test]
    fn start_reveals_first_slide_in_order() {
        let mut c = Carousel::new(
            RecordingSurface::default(),
            ManualTimers::default(),
            CarouselConfig::default(),
            LanguageCode::PtBr,
        );
        c.start();
        advance(&mut c, 1_100);
        let enters: Vec<_> = c
            .surface
            .calls
            .iter()
            .filter_map(|call| match call {
                Call::Enter(p) => Some(*p),
                _ => None,
            })
            .collect();
        assert_eq!(enters, SlidePart::ORDER);
        assert!(c.autoplay_running());
        assert_eq!(c.current(), 0);
    }

    #[test]
    fn go_to_moves_active_marker_once() {
        let mut c = carousel();
        c.go_to(2);
        assert_eq!(c.current(), 2);
        assert_eq!(c.surface.active_changes(), vec![(0, false), (2, true)]);
        assert_eq!(c.phase(), Phase::Transitioning { from: 0, to: 2 });
    }

    #[test]
    fn go_to_current_is_a_no_op() {
        let mut c = carousel();
        let started = c.timers.intervals_started;
        c.go_to(0);
        assert!(c.surface.calls.is_empty());
        assert_eq!(c.timers.intervals_started, started);
    }

    #[test]
    fn go_to_out_of_range_is_ignored() {
        let mut c = carousel();
        c.go_to(SLIDE_COUNT);
        c.go_to(99);
        assert_eq!(c.current(), 0);
        assert!(c.surface.calls.is_empty());
    }

    #[test]
    fn next_wraps_after_four_steps() {
        for start in 0..SLIDE_COUNT {
            let mut c = carousel();
            c.go_to(start);
            for _ in 0..SLIDE_COUNT {
                c.next();
            }
            assert_eq!(c.current(), start);
        }
    }

    #[test]
    fn prev_wraps_backwards() {
        let mut c = carousel();
        c.prev();
        assert_eq!(c.current(), 3);
    }

    #[test]
    fn content_swap_runs_in_reveal_order() {
        let mut c = carousel();
        c.go_to(1);
        advance(&mut c, 1_200);
        assert_eq!(
            c.surface.calls,
            vec![
                Call::Active(0, false),
                Call::Active(1, true),
                Call::HideNumber,
                Call::ClearEntered,
                Call::Flush,
                Call::ShowNumber("02"),
                Call::Write("02", "QUALIDADE"),
                Call::Enter(SlidePart::Tag),
                Call::Enter(SlidePart::TitleLine1),
                Call::Enter(SlidePart::TitleLine2),
                Call::Enter(SlidePart::Description),
                Call::Enter(SlidePart::Cta),
            ]
        );
        assert_eq!(c.phase(), Phase::Idle(1));
    }

    #[test]
    fn autoplay_advances_on_cadence() {
        let mut c = carousel();
        // `carousel()` already spent 2s of the first interval.
        advance(&mut c, 3_000);
        assert_eq!(c.current(), 1);
        advance(&mut c, 5_000);
        assert_eq!(c.current(), 2);
        advance(&mut c, 4_999);
        assert_eq!(c.current(), 2);
        advance(&mut c, 1);
        assert_eq!(c.current(), 3);
    }

    #[test]
    fn stopped_autoplay_never_fires() {
        let mut c = carousel();
        c.stop_autoplay();
        c.stop_autoplay();
        advance(&mut c, 60_000);
        assert_eq!(c.current(), 0);
        assert!(!c.autoplay_running());

        c.start_autoplay();
        advance(&mut c, 5_000);
        assert_eq!(c.current(), 1);
    }

    #[test]
    fn at_most_one_interval_alive() {
        let mut c = carousel();
        c.start_autoplay();
        c.start_autoplay();
        assert_eq!(c.timers.live_intervals(), 1);
        for target in [1, 3, 2, 0, 1] {
            c.go_to(target);
            assert_eq!(c.timers.live_intervals(), 1);
        }
        c.visibility_changed(false);
        assert_eq!(c.timers.live_intervals(), 1);
    }

    #[test]
    fn manual_navigation_restarts_the_interval() {
        let mut c = carousel();
        advance(&mut c, 2_500);
        c.next();
        advance(&mut c, 4_999);
        assert_eq!(c.current(), 1);
        advance(&mut c, 1);
        assert_eq!(c.current(), 2);
    }

    #[test]
    fn stale_reveal_steps_are_dropped() {
        let mut c = carousel();
        c.go_to(1);
        advance(&mut c, 100);
        c.go_to(2);
        advance(&mut c, 2_000);
        assert_eq!(c.surface.writes(), vec![("03", "CONFIANÇA")]);
        let shown: Vec<_> = c
            .surface
            .calls
            .iter()
            .filter(|call| matches!(call, Call::ShowNumber(_)))
            .collect();
        assert_eq!(shown, vec![&Call::ShowNumber("03")]);
    }

    #[test]
    fn long_swipe_left_goes_next_once() {
        let mut c = carousel();
        c.touch_start(200.0);
        assert!(!c.autoplay_running());
        c.touch_end(149.0);
        assert_eq!(c.current(), 1);
        assert_eq!(c.surface.active_changes(), vec![(0, false), (1, true)]);
        assert!(c.autoplay_running());
    }

    #[test]
    fn long_swipe_right_goes_prev() {
        let mut c = carousel();
        c.touch_start(100.0);
        c.touch_end(200.0);
        assert_eq!(c.current(), 3);
    }

    #[test]
    fn short_swipe_only_resumes_autoplay() {
        let mut c = carousel();
        c.touch_start(200.0);
        c.touch_end(151.0);
        assert_eq!(c.current(), 0);
        assert!(c.surface.calls.is_empty());
        assert!(c.autoplay_running());
        assert_eq!(c.timers.live_intervals(), 1);
    }

    #[test]
    fn cancelled_touch_resumes_autoplay() {
        let mut c = carousel();
        c.touch_start(200.0);
        c.touch_cancel();
        assert!(c.autoplay_running());
        assert_eq!(c.timers.live_intervals(), 1);
        advance(&mut c, 5_000);
        assert_eq!(c.current(), 1);

        // A stray end after the cancel is not a swipe.
        c.touch_end(0.0);
        assert_eq!(c.current(), 1);
    }

    #[test]
    fn touch_end_without_start_is_ignored() {
        let mut c = carousel();
        c.touch_end(0.0);
        assert_eq!(c.current(), 0);
        assert!(c.surface.calls.is_empty());
        assert_eq!(c.timers.live_intervals(), 1);
    }

    #[test]
    fn hidden_tab_pauses_autoplay() {
        let mut c = carousel();
        c.visibility_changed(true);
        advance(&mut c, 30_000);
        assert_eq!(c.current(), 0);
        c.visibility_changed(false);
        advance(&mut c, 5_000);
        assert_eq!(c.current(), 1);
    }

    #[test]
    fn arrow_keys_navigate_and_other_keys_pass_through() {
        let mut c = carousel();
        assert!(c.handle_key("ArrowRight"));
        assert_eq!(c.current(), 1);
        assert!(c.handle_key("ArrowLeft"));
        assert_eq!(c.current(), 0);
        assert!(!c.handle_key("Enter"));
        assert_eq!(c.current(), 0);
    }

    #[test]
    fn language_switch_rerenders_in_place() {
        let mut c = carousel();
        c.go_to(2);
        advance(&mut c, 1_200);
        c.surface.calls.clear();
        let started = c.timers.intervals_started;

        c.set_language(LanguageCode::En);

        assert_eq!(c.current(), 2);
        assert_eq!(c.language(), LanguageCode::En);
        assert_eq!(c.surface.writes(), vec![("03", "PROVEN")]);
        assert_eq!(c.timers.intervals_started, started);
    }

    #[test]
    fn in_flight_swap_writes_new_language() {
        let mut c = carousel();
        c.go_to(1);
        c.set_language(LanguageCode::De);
        advance(&mut c, 500);
        assert_eq!(c.surface.writes().last(), Some(&("02", "HÖCHSTE")));
    }
}
