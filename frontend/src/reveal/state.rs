/// Smallest gap between two staggered children, in seconds.
pub const MIN_STAGGER: f64 = 0.01;

// IntersectionObserver ratios land a hair under the configured threshold.
const RATIO_TOLERANCE: f64 = 1e-3;

/// Visibility of one observed element.
///
/// With `once` set, the first time the element counts as visible it latches
/// and ignores everything that follows. Without it the element follows the
/// viewport in both directions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealState {
    visible: bool,
    once: bool,
    threshold: f64,
}

impl RevealState {
    pub fn new(once: bool, threshold: f64) -> Self {
        Self {
            visible: false,
            once,
            threshold: threshold.clamp(0.0, 1.0),
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Whether a latched element can stop listening for notifications.
    pub fn is_settled(&self) -> bool {
        self.once && self.visible
    }

    /// Feeds one intersection notification. Returns the new visibility when it
    /// changed, `None` when the notification was a no-op.
    pub fn observe(&mut self, intersecting: bool, ratio: f64) -> Option<bool> {
        if self.is_settled() {
            return None;
        }
        let now_visible = intersecting && ratio + RATIO_TOLERANCE >= self.threshold;
        if now_visible == self.visible {
            return None;
        }
        self.visible = now_visible;
        Some(now_visible)
    }
}

/// Delay for each of `count` children, in declared order, starting at `base`.
pub fn stagger_delays(count: usize, base: f64, step: f64) -> Vec<f64> {
    let step = step.max(MIN_STAGGER);
    (0..count).map(|i| base + step * i as f64).collect()
}

/// Ease-out cubic interpolation between `from` and `to`, `progress` in 0..=1.
pub fn counter_value(from: f64, to: f64, progress: f64) -> f64 {
    let t = progress.clamp(0.0, 1.0);
    let eased = 1.0 - (1.0 - t).powi(3);
    from + (to - from) * eased
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn once_never_returns_to_hidden() {
        let mut state = RevealState::new(true, 0.2);
        assert_eq!(state.observe(true, 0.5), Some(true));

        for (intersecting, ratio) in [(false, 0.0), (true, 0.1), (false, 0.0), (true, 0.9)] {
            assert_eq!(state.observe(intersecting, ratio), None);
            assert!(state.is_visible());
        }
        assert!(state.is_settled());
    }

    #[test]
    fn repeat_mode_follows_the_viewport() {
        let mut state = RevealState::new(false, 0.2);
        assert_eq!(state.observe(true, 0.3), Some(true));
        assert_eq!(state.observe(false, 0.0), Some(false));
        assert_eq!(state.observe(true, 1.0), Some(true));
        assert!(!state.is_settled());
    }

    #[test]
    fn repeated_notifications_are_no_ops() {
        let mut state = RevealState::new(false, 0.2);
        assert_eq!(state.observe(false, 0.0), None);
        assert_eq!(state.observe(true, 0.5), Some(true));
        assert_eq!(state.observe(true, 0.6), None);
    }

    #[test]
    fn below_threshold_stays_hidden() {
        let mut state = RevealState::new(true, 0.5);
        assert_eq!(state.observe(true, 0.2), None);
        assert!(!state.is_visible());
        assert_eq!(state.observe(true, 0.4995), Some(true));
    }

    #[test]
    fn threshold_is_clamped() {
        assert_eq!(RevealState::new(true, 3.0).threshold(), 1.0);
        assert_eq!(RevealState::new(true, -1.0).threshold(), 0.0);
    }

    #[test]
    fn stagger_delays_strictly_increase_in_order() {
        let delays = stagger_delays(6, 0.0, 0.12);
        assert_eq!(delays.len(), 6);
        assert_eq!(delays[0], 0.0);
        assert!(delays.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn zero_or_negative_stagger_still_increases() {
        for step in [0.0, -0.5] {
            let delays = stagger_delays(4, 0.3, step);
            assert_eq!(delays[0], 0.3);
            assert!(delays.windows(2).all(|w| w[0] < w[1]));
        }
    }

    #[test]
    fn counter_hits_both_ends() {
        assert_eq!(counter_value(0.0, 100.0, 0.0), 0.0);
        assert_eq!(counter_value(0.0, 100.0, 1.0), 100.0);
        assert_eq!(counter_value(0.0, 100.0, 7.0), 100.0);
        assert!(counter_value(0.0, 100.0, 0.5) > 50.0);
    }
}
