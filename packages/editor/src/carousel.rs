//! Testimonial carousel timing.
//!
//! Time only moves through [`Carousel::tick`], so callers decide where the
//! clock comes from (browser interval, test loop).

use std::time::Duration;

const NANOS_PER_SEC: u128 = 1_000_000_000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Carousel {
    index: usize,
    len: usize,
    interval: Duration,
    elapsed: Duration,
}

impl Carousel {
    pub fn new(len: usize, interval: Duration) -> Self {
        Self {
            index: 0,
            len,
            interval,
            elapsed: Duration::ZERO,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Advance the clock; returns true if the slide changed
    pub fn tick(&mut self, dt: Duration) -> bool {
        if self.len == 0 || self.interval.is_zero() {
            return false;
        }

        // u128 nanos cannot overflow for any pair of Durations
        let total = self.elapsed.as_nanos() + dt.as_nanos();
        let interval = self.interval.as_nanos();
        let steps = total / interval;
        let rest = total % interval;

        let before = self.index;
        self.index = (self.index + (steps % self.len as u128) as usize) % self.len;
        self.elapsed = Duration::new((rest / NANOS_PER_SEC) as u64, (rest % NANOS_PER_SEC) as u32);
        self.index != before
    }

    /// Jump to slide `i` and restart the auto-advance timer
    pub fn select(&mut self, i: usize) -> bool {
        if i >= self.len || i == self.index {
            return false;
        }
        self.index = i;
        self.elapsed = Duration::ZERO;
        true
    }

    /// Content changed; keep the position if it is still valid
    pub fn set_len(&mut self, len: usize) {
        self.len = len;
        if self.index >= len {
            self.index = 0;
            self.elapsed = Duration::ZERO;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEVEN: Duration = Duration::from_millis(7000);

    #[test]
    fn test_advances_and_wraps() {
        let mut carousel = Carousel::new(3, SEVEN);
        assert!(!carousel.tick(Duration::from_millis(6999)));
        assert!(carousel.tick(Duration::from_millis(1)));
        assert_eq!(carousel.index(), 1);

        carousel.tick(SEVEN * 2);
        assert_eq!(carousel.index(), 0);
    }

    #[test]
    fn test_select_resets_timer() {
        let mut carousel = Carousel::new(5, SEVEN);
        carousel.tick(Duration::from_millis(6000));
        assert!(carousel.select(3));

        assert!(!carousel.tick(Duration::from_millis(6000)));
        assert_eq!(carousel.index(), 3);
        assert!(carousel.tick(Duration::from_millis(1000)));
        assert_eq!(carousel.index(), 4);
    }

    #[test]
    fn test_select_same_slide_is_noop() {
        let mut carousel = Carousel::new(2, SEVEN);
        carousel.tick(Duration::from_millis(5000));
        assert!(!carousel.select(0));
        assert!(carousel.tick(Duration::from_millis(2000)));
    }

    #[test]
    fn test_empty_never_advances() {
        let mut carousel = Carousel::new(0, SEVEN);
        assert!(!carousel.tick(SEVEN * 10));
        assert_eq!(carousel.index(), 0);
    }

    #[test]
    fn test_huge_tick_keeps_remainder() {
        let ms = u64::MAX;
        let mut carousel = Carousel::new(5, SEVEN);
        carousel.tick(Duration::from_millis(ms));
        assert_eq!(carousel.index(), ((ms / 7000) % 5) as usize);

        let before = carousel.index();
        assert!(carousel.tick(Duration::from_millis(7000 - ms % 7000)));
        assert_eq!(carousel.index(), (before + 1) % 5);

        carousel.tick(Duration::MAX);
        assert!(carousel.index() < 5);
    }
}
