//! Per-round countdown
//!
//! The timer never schedules anything itself. The shell calls [`RoundTimer::tick`] once per
//! elapsed second; a stopped or disabled timer ignores ticks.

/// Cooperative, cancelable countdown in whole seconds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundTimer {
    limit: Option<u32>,
    remaining: u32,
    running: bool,
}

impl RoundTimer {
    /// A timer counting down from `limit` seconds, or a disabled timer for `None`
    #[must_use]
    pub const fn new(limit: Option<u32>) -> Self {
        let remaining = match limit {
            Some(seconds) => seconds,
            None => 0,
        };
        Self {
            limit,
            remaining,
            running: limit.is_some(),
        }
    }

    /// Reset to the full limit and start counting
    pub const fn restart(&mut self) {
        *self = Self::new(self.limit);
    }

    pub const fn stop(&mut self) {
        self.running = false;
    }

    /// Seconds left, `None` when the timer is disabled
    #[must_use]
    pub const fn remaining(&self) -> Option<u32> {
        match self.limit {
            Some(_) => Some(self.remaining),
            None => None,
        }
    }

    /// Advance one second
    ///
    /// Returns true exactly once: on the tick that reaches zero. The timer stops itself there.
    pub const fn tick(&mut self) -> bool {
        if !self.running {
            return false;
        }
        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            self.running = false;
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_timer_ignores_ticks() {
        let mut timer = RoundTimer::new(None);
        assert!(!timer.tick());
        assert_eq!(timer.remaining(), None);
    }

    #[test]
    fn expires_once() {
        let mut timer = RoundTimer::new(Some(3));
        assert!(!timer.tick());
        assert!(!timer.tick());
        assert!(timer.tick());
        assert_eq!(timer.remaining(), Some(0));
        assert!(!timer.tick());
        assert_eq!(timer.remaining(), Some(0));
    }

    #[test]
    fn stopped_timer_is_frozen() {
        let mut timer = RoundTimer::new(Some(60));
        timer.tick();
        timer.stop();
        for _ in 0..100 {
            assert!(!timer.tick());
        }
        assert_eq!(timer.remaining(), Some(59));
    }

    #[test]
    fn restart_resets_to_limit() {
        let mut timer = RoundTimer::new(Some(60));
        for _ in 0..60 {
            timer.tick();
        }
        assert_eq!(timer.remaining(), Some(0));
        timer.restart();
        assert_eq!(timer.remaining(), Some(60));
        assert!(!timer.tick());
        assert_eq!(timer.remaining(), Some(59));
    }
}
