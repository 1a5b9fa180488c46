#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    /// Finger moved right-to-left.
    Left,
    /// Finger moved left-to-right.
    Right,
}

/// Tracks a single horizontal touch gesture.
#[derive(Debug, Default, Clone)]
pub struct SwipeTracker {
    start_x: Option<f64>,
}

impl SwipeTracker {
    pub fn begin(&mut self, x: f64) {
        self.start_x = Some(x);
    }

    pub fn in_progress(&self) -> bool {
        self.start_x.is_some()
    }

    pub fn cancel(&mut self) {
        self.start_x = None;
    }

    /// Close the gesture. Drags whose length does not exceed `threshold`
    /// classify as `None`.
    pub fn finish(&mut self, x: f64, threshold: f64) -> Option<SwipeDirection> {
        let start = self.start_x.take()?;
        classify(start - x, threshold)
    }
}

pub fn classify(delta: f64, threshold: f64) -> Option<SwipeDirection> {
    if delta.abs() <= threshold {
        None
    } else if delta > 0.0 {
        Some(SwipeDirection::Left)
    } else {
        Some(SwipeDirection::Right)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_is_exclusive() {
        assert_eq!(classify(50.0, 50.0), None);
        assert_eq!(classify(50.5, 50.0), Some(SwipeDirection::Left));
        assert_eq!(classify(-51.0, 50.0), Some(SwipeDirection::Right));
    }

    #[test]
    fn finish_without_begin_is_not_a_swipe() {
        let mut tracker = SwipeTracker::default();
        assert_eq!(tracker.finish(10.0, 50.0), None);
    }

    #[test]
    fn gesture_resets_after_finish() {
        let mut tracker = SwipeTracker::default();
        tracker.begin(300.0);
        assert!(tracker.in_progress());
        assert_eq!(tracker.finish(200.0, 50.0), Some(SwipeDirection::Left));
        assert!(!tracker.in_progress());
    }

    #[test]
    fn cancel_drops_the_gesture() {
        let mut tracker = SwipeTracker::default();
        tracker.begin(300.0);
        tracker.cancel();
        assert!(!tracker.in_progress());
        assert_eq!(tracker.finish(0.0, 50.0), None);
    }
}
