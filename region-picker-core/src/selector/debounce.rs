//! 输入防抖
//!
//! 纯状态机：时间由调用方传入，不持有定时器。

use std::time::{Duration, Instant};

/// Delays a value until input has been quiet for `delay`.
///
/// A `push` before the deadline replaces the pending value, so an earlier value
/// is never emitted late. A settled value equal to the last emitted one is
/// swallowed: one emission per distinct settled value.
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    delay: Duration,
    pending: Option<(T, Instant)>,
    last_emitted: Option<T>,
}

impl<T: Clone + PartialEq> Debouncer<T> {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
            last_emitted: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Record `value` and restart the quiet period from `now`.
    pub fn push(&mut self, value: T, now: Instant) {
        self.pending = Some((value, now + self.delay));
    }

    /// Record `value` to be emitted on the next poll, bypassing the delay.
    pub fn push_now(&mut self, value: T, now: Instant) {
        self.pending = Some((value, now));
    }

    /// Take the pending value if its deadline has passed.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        let (_, deadline) = self.pending.as_ref()?;
        if now < *deadline {
            return None;
        }
        let (value, _) = self.pending.take()?;
        if self.last_emitted.as_ref() == Some(&value) {
            return None;
        }
        self.last_emitted = Some(value.clone());
        Some(value)
    }

    /// Drop the pending value without emitting it.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    /// Forget the last emitted value so the same value can be emitted again.
    pub fn forget(&mut self) {
        self.last_emitted = None;
    }

    /// `cancel` + `forget`.
    pub fn reset(&mut self) {
        self.cancel();
        self.forget();
    }

    /// Deadline of the pending value, if any.
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|(_, deadline)| *deadline)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELAY: Duration = Duration::from_millis(500);

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn emits_after_quiet_period() {
        let t0 = Instant::now();
        let mut d = Debouncer::new(DELAY);
        d.push("ja", t0);
        assert_eq!(d.poll(t0 + ms(499)), None);
        assert_eq!(d.poll(t0 + ms(500)), Some("ja"));
        assert_eq!(d.poll(t0 + ms(2000)), None, "emitted twice");
    }

    #[test]
    fn burst_yields_single_latest_value() {
        let t0 = Instant::now();
        let mut d = Debouncer::new(DELAY);
        d.push("j", t0);
        d.push("ja", t0 + ms(100));
        d.push("jak", t0 + ms(200));

        // 第一个值的截止时间已过，但被后续输入覆盖
        assert_eq!(d.poll(t0 + ms(600)), None);
        assert_eq!(d.deadline(), Some(t0 + ms(700)));
        assert_eq!(d.poll(t0 + ms(700)), Some("jak"));
        assert!(!d.is_pending());
    }

    #[test]
    fn duplicate_settled_value_is_swallowed() {
        let t0 = Instant::now();
        let mut d = Debouncer::new(DELAY);
        d.push("ja", t0);
        assert_eq!(d.poll(t0 + ms(500)), Some("ja"));

        d.push("jak", t0 + ms(600));
        d.push("ja", t0 + ms(700));
        assert_eq!(d.poll(t0 + ms(1200)), None);
    }

    #[test]
    fn forget_allows_re_emission() {
        let t0 = Instant::now();
        let mut d = Debouncer::new(DELAY);
        d.push("ja", t0);
        assert_eq!(d.poll(t0 + ms(500)), Some("ja"));

        d.forget();
        d.push("ja", t0 + ms(600));
        assert_eq!(d.poll(t0 + ms(1100)), Some("ja"));
    }

    #[test]
    fn cancel_drops_pending() {
        let t0 = Instant::now();
        let mut d = Debouncer::new(DELAY);
        d.push("ja", t0);
        d.cancel();
        assert_eq!(d.deadline(), None);
        assert_eq!(d.poll(t0 + ms(1000)), None);
    }

    #[test]
    fn push_now_is_ready_immediately() {
        let t0 = Instant::now();
        let mut d = Debouncer::new(DELAY);
        d.push_now("bali", t0);
        assert_eq!(d.poll(t0), Some("bali"));
    }
}
