//! The countdown registers of the chip.
//!
//! Both timers are decremented once per executed step, the host decides how
//! often a step happens.

#[cfg_attr(test, mockall::automock)]
/// Gets notified when a timer runs out, that is, on the
/// single step where it moves from `1` to `0`.
pub trait TimerCallback {
    /// Will be run on the edge.
    fn handle(&mut self);
}

/// A callback that does nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoCallback;

impl TimerCallback for NoCallback {
    fn handle(&mut self) {}
}

/// Represents a timer inside of the chip
/// infrastruture, it will count down to
/// zero from what ever number given.
#[derive(Debug)]
pub struct Timer<C: TimerCallback> {
    /// will store the value of the timer
    value: u8,
    /// how often the timer ran out since the last reset
    elapsed: usize,
    callback: C,
}

impl<C: TimerCallback + Default> Default for Timer<C> {
    fn default() -> Self {
        Self::with_callback(C::default())
    }
}

impl<C: TimerCallback> Timer<C> {
    /// Will create a new stopped timer notifying `callback`.
    pub fn with_callback(callback: C) -> Self {
        Self {
            value: 0,
            elapsed: 0,
            callback,
        }
    }

    /// Will set the value from which the timer shall count down from.
    pub fn set_value(&mut self, value: u8) {
        self.value = value;
    }

    /// Will get the value that the counter is currently at.
    pub fn get_value(&self) -> u8 {
        self.value
    }

    /// Is the timer still counting.
    pub fn is_active(&self) -> bool {
        self.value > 0
    }

    /// The amount of `1 -> 0` edges since the last reset.
    pub fn elapsed(&self) -> usize {
        self.elapsed
    }

    /// Stops the timer and forgets the edge count, the callback is kept.
    pub fn reset(&mut self) {
        self.value = 0;
        self.elapsed = 0;
    }

    /// Will count down by one, and fire the callback on the edge.
    pub fn tick(&mut self) {
        match self.value {
            0 => {}
            1 => {
                self.value = 0;
                self.elapsed += 1;
                log::trace!("timer ran out");
                self.callback.handle();
            }
            _ => self.value -= 1,
        }
    }

    pub fn callback(&self) -> &C {
        &self.callback
    }

    pub fn callback_mut(&mut self) -> &mut C {
        &mut self.callback
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timer_counts_down_to_zero() {
        let mut timer: Timer<NoCallback> = Timer::default();
        timer.set_value(3);
        assert!(timer.is_active());

        for expected in [2, 1, 0, 0] {
            timer.tick();
            assert_eq!(timer.get_value(), expected);
        }
        assert!(!timer.is_active());
        assert_eq!(timer.elapsed(), 1);
    }

    #[test]
    fn test_callback_fires_once_on_edge() {
        let mut callback = MockTimerCallback::new();
        callback.expect_handle().times(1).return_const(());

        let mut timer = Timer::with_callback(callback);
        timer.set_value(2);

        timer.tick();
        timer.tick();
        timer.tick();

        assert_eq!(timer.get_value(), 0);
    }

    #[test]
    fn test_stopped_timer_never_fires() {
        let mut callback = MockTimerCallback::new();
        callback.expect_handle().never();

        let mut timer = Timer::with_callback(callback);
        for _ in 0..10 {
            timer.tick();
        }
        assert_eq!(timer.elapsed(), 0);
    }

    #[test]
    fn test_reset() {
        let mut timer: Timer<NoCallback> = Timer::default();
        timer.set_value(1);
        timer.tick();
        timer.set_value(9);
        timer.reset();

        assert_eq!(timer.get_value(), 0);
        assert_eq!(timer.elapsed(), 0);
    }
}
