use allinone_core::Timers;
use web_time::Duration;

/// Sleep through every pending timer, firing each as it comes due, so
/// time-driven screens move on without waiting for input. Returns how many
/// tasks fired.
pub fn run_pending(timers: &Timers, mut sleep: impl FnMut(Duration)) -> usize {
    let mut fired = 0;
    while let Some(wait) = timers.time_until_next() {
        if !wait.is_zero() {
            log::debug!("idle for {wait:?}");
            sleep(wait);
        }
        fired += timers.run_due();
    }
    fired
}

#[cfg(test)]
mod tests {
    use super::*;
    use allinone_core::TestClock;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_sleeps_until_each_deadline() {
        let clock = TestClock::default();
        let timers = Timers::new(Rc::new(clock.clone()));
        let order = Rc::new(RefCell::new(Vec::new()));
        for (ms, tag) in [(30, "late"), (10, "early")] {
            let o = order.clone();
            timers.schedule(Duration::from_millis(ms), move || o.borrow_mut().push(tag));
        }

        let mut slept = Vec::new();
        let fired = run_pending(&timers, |d| {
            slept.push(d);
            clock.advance(d);
        });

        assert_eq!(fired, 2);
        assert_eq!(*order.borrow(), vec!["early", "late"]);
        assert_eq!(
            slept,
            vec![Duration::from_millis(10), Duration::from_millis(20)]
        );
        assert_eq!(timers.pending(), 0);
    }

    #[test]
    fn test_nothing_pending_does_not_sleep() {
        let timers = Timers::new(Rc::new(TestClock::default()));
        let fired = run_pending(&timers, |_| panic!("slept with nothing pending"));
        assert_eq!(fired, 0);
    }
}
