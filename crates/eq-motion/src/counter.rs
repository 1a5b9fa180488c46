pub const COUNTER_DURATION_MS: f64 = 2_000.0;
pub const FRAME_MS: f64 = 16.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterFrame {
    Running(i64),
    Done(i64),
}

/// Counts from zero up to a target over roughly two seconds of frames.
#[derive(Debug, Clone)]
pub struct CounterAnimation {
    target: i64,
    step: f64,
    current: f64,
}

impl CounterAnimation {
    /// Build from a `data-target` value. Values without a leading integer
    /// produce no animation.
    pub fn from_attr(raw: &str) -> Option<Self> {
        parse_leading_int(raw).map(Self::new)
    }

    pub fn new(target: i64) -> Self {
        Self {
            target,
            step: target as f64 / (COUNTER_DURATION_MS / FRAME_MS),
            current: 0.0,
        }
    }

    pub fn target(&self) -> i64 {
        self.target
    }

    pub fn tick(&mut self) -> CounterFrame {
        self.current += self.step;
        if self.current < self.target as f64 {
            CounterFrame::Running(self.current.floor() as i64)
        } else {
            CounterFrame::Done(self.target)
        }
    }
}

/// Integer prefix of `raw` (`"2500+"` → 2500), ignoring leading whitespace.
pub fn parse_leading_int(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (sign, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let end = digits
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit())
        .map_or(digits.len(), |(i, _)| i);
    digits[..end].parse::<i64>().ok().map(|v| v * sign)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_integer_prefixes() {
        assert_eq!(parse_leading_int("2500"), Some(2500));
        assert_eq!(parse_leading_int(" 20+ anos"), Some(20));
        assert_eq!(parse_leading_int("-3"), Some(-3));
        assert_eq!(parse_leading_int("abc"), None);
        assert_eq!(parse_leading_int(""), None);
    }

    #[test]
    fn malformed_target_does_nothing() {
        assert!(CounterAnimation::from_attr("many").is_none());
    }

    #[test]
    fn counts_up_monotonically_and_lands_on_target() {
        let mut counter = CounterAnimation::from_attr("2500").unwrap();
        let mut last = 0;
        let mut frames = 0;
        loop {
            frames += 1;
            match counter.tick() {
                CounterFrame::Running(v) => {
                    assert!(v >= last && v < 2500);
                    last = v;
                }
                CounterFrame::Done(v) => {
                    assert_eq!(v, 2500);
                    break;
                }
            }
            assert!(frames < 1_000);
        }
        assert!((120..=130).contains(&frames));
    }

    #[test]
    fn zero_target_finishes_immediately() {
        assert_eq!(CounterAnimation::new(0).tick(), CounterFrame::Done(0));
    }
}
