//! Count-up driver for the stat strip
//!
//! Takes (start, target, duration, frame rate) and yields one display value
//! per animation frame. The driver owns no clock and no DOM; the caller
//! advances it from whatever frame source it has.

use crate::consts::{COUNTER_DURATION_MS, COUNTER_FPS};

/// Parsed `data-value` attribute of a stat display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatValue {
    /// Integer target, animated from zero
    Count(u64),
    /// Opaque label ("4K", "1M+"), shown verbatim with no animation
    Text(String),
}

impl StatValue {
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        match trimmed.parse::<u64>() {
            Ok(n) => StatValue::Count(n),
            Err(_) => StatValue::Text(trimmed.to_string()),
        }
    }
}

/// Finite count-up from `start` to `target`.
///
/// Intermediate values are rounded toward the target so the display never
/// stalls on its first frames; the final frame is pinned to the exact
/// target, so rounding drift can never leave the counter short.
#[derive(Debug, Clone)]
pub struct CountUp {
    start: u64,
    target: u64,
    frame: u32,
    frames: u32,
}

impl CountUp {
    pub fn new(start: u64, target: u64, duration_ms: f64, fps: f64) -> Self {
        let frames = ((duration_ms / 1000.0) * fps).round().max(1.0) as u32;
        Self {
            start,
            target,
            frame: 0,
            frames,
        }
    }

    /// Driver with the page defaults: 1.5s at a nominal 60 fps.
    pub fn for_target(target: u64) -> Self {
        Self::new(0, target, COUNTER_DURATION_MS, COUNTER_FPS)
    }

    /// Total frames this driver yields
    pub fn frames(&self) -> u32 {
        self.frames
    }
}

impl Iterator for CountUp {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        if self.frame >= self.frames {
            return None;
        }
        self.frame += 1;
        if self.frame == self.frames {
            return Some(self.target);
        }

        let t = f64::from(self.frame) / f64::from(self.frames);
        let stepped = (self.target.abs_diff(self.start) as f64 * t).ceil() as u64;
        let value = if self.target >= self.start {
            (self.start + stepped).min(self.target)
        } else {
            self.start.saturating_sub(stepped).max(self.target)
        };
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = (self.frames - self.frame) as usize;
        (left, Some(left))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_parse_integer() {
        assert_eq!(StatValue::parse("250"), StatValue::Count(250));
        assert_eq!(StatValue::parse(" 1000 "), StatValue::Count(1000));
    }

    #[test]
    fn test_parse_label_stays_verbatim() {
        assert_eq!(StatValue::parse("4K"), StatValue::Text("4K".into()));
        assert_eq!(StatValue::parse("1M+"), StatValue::Text("1M+".into()));
        assert_eq!(StatValue::parse("12.5"), StatValue::Text("12.5".into()));
        assert_eq!(StatValue::parse(""), StatValue::Text(String::new()));
    }

    #[test]
    fn test_default_run_lands_on_target() {
        let frames: Vec<u64> = CountUp::for_target(1000).collect();
        assert_eq!(frames.len(), 90); // 1.5s at 60 fps
        assert_eq!(frames.last(), Some(&1000));
    }

    #[test]
    fn test_values_never_stall_or_overshoot() {
        let frames: Vec<u64> = CountUp::for_target(7).collect();
        assert!(frames.windows(2).all(|w| w[0] <= w[1]));
        assert!(frames.iter().all(|&v| v <= 7));
        assert!(frames[0] >= 1); // ceil keeps the very first frame moving
    }

    #[test]
    fn test_zero_target() {
        let frames: Vec<u64> = CountUp::for_target(0).collect();
        assert!(frames.iter().all(|&v| v == 0));
        assert_eq!(frames.len(), 90);
    }

    #[test]
    fn test_exhausted_driver_stays_done() {
        let mut driver = CountUp::new(0, 10, 100.0, 30.0);
        while driver.next().is_some() {}
        assert_eq!(driver.next(), None);
        assert_eq!(driver.next(), None);
    }

    #[test]
    fn test_descending_run() {
        let frames: Vec<u64> = CountUp::new(100, 20, 100.0, 30.0).collect();
        assert!(frames.windows(2).all(|w| w[0] >= w[1]));
        assert_eq!(frames.last(), Some(&20));
    }

    #[test]
    fn test_degenerate_duration_still_yields_target() {
        let frames: Vec<u64> = CountUp::new(0, 42, 0.0, 60.0).collect();
        assert_eq!(frames, vec![42]);
    }

    proptest! {
        #[test]
        fn prop_final_frame_is_exact(
            target in 0u64..10_000_000,
            duration_ms in 100.0f64..5000.0,
            fps in 12.0f64..120.0,
        ) {
            let driver = CountUp::new(0, target, duration_ms, fps);
            prop_assert_eq!(driver.last(), Some(target));
        }

        #[test]
        fn prop_monotone_and_bounded(target in 0u64..1_000_000) {
            let frames: Vec<u64> = CountUp::for_target(target).collect();
            prop_assert!(frames.windows(2).all(|w| w[0] <= w[1]));
            prop_assert!(frames.iter().all(|&v| v <= target));
        }

        #[test]
        fn prop_frame_count_matches(duration_ms in 1.0f64..10_000.0, fps in 1.0f64..240.0) {
            let driver = CountUp::new(0, 100, duration_ms, fps);
            let expected = driver.frames() as usize;
            prop_assert_eq!(driver.count(), expected);
        }
    }
}
