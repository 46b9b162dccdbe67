use std::time::{Duration, Instant};

/// Repeating fixed-interval timer driven by polling.
///
/// The ticker never spawns threads or callbacks: the event loop asks it whether a
/// tick is due and sleeps until [`Ticker::deadline`] in between. Missed intervals
/// (long stalls, debugger pauses) are coalesced into a single tick and the next
/// deadline is realigned to the interval grid.
#[derive(Debug, Clone)]
pub struct Ticker {
    interval: Duration,
    next: Option<Instant>,
}

impl Ticker {
    /// Creates a stopped ticker.
    pub fn new(interval: Duration) -> Self {
        debug_assert!(!interval.is_zero(), "ticker interval must be non-zero");
        Self {
            interval: interval.max(Duration::from_micros(1)),
            next: None,
        }
    }

    /// Starts (or restarts) the ticker; the first tick is due one interval after `now`.
    pub fn start(&mut self, now: Instant) {
        self.next = Some(now + self.interval);
    }

    /// Stops the ticker. A cancelled ticker never fires again until restarted.
    pub fn cancel(&mut self) {
        self.next = None;
    }

    pub fn is_running(&self) -> bool {
        self.next.is_some()
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Instant at which the next tick is due, or `None` if stopped.
    pub fn deadline(&self) -> Option<Instant> {
        self.next
    }

    /// Returns `true` if a tick is due at `now` and schedules the following one.
    pub fn poll(&mut self, now: Instant) -> bool {
        let Some(next) = self.next else {
            return false;
        };

        if now < next {
            return false;
        }

        // Realign to the grid past `now` so a stall of any length yields one tick.
        let behind = now.saturating_duration_since(next);
        let into = behind.as_nanos() % self.interval.as_nanos();
        let into = Duration::new((into / 1_000_000_000) as u64, (into % 1_000_000_000) as u32);
        self.next = Some(now + (self.interval - into));

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS_16: Duration = Duration::from_millis(16);

    fn started(now: Instant) -> Ticker {
        let mut t = Ticker::new(MS_16);
        t.start(now);
        t
    }

    // ── lifecycle ─────────────────────────────────────────────────────────

    #[test]
    fn new_ticker_is_stopped() {
        let mut t = Ticker::new(MS_16);
        assert!(!t.is_running());
        assert_eq!(t.deadline(), None);
        assert!(!t.poll(Instant::now() + Duration::from_secs(1)));
    }

    #[test]
    fn start_schedules_one_interval_ahead() {
        let now = Instant::now();
        let t = started(now);
        assert!(t.is_running());
        assert_eq!(t.deadline(), Some(now + MS_16));
    }

    #[test]
    fn cancelled_ticker_never_fires() {
        let now = Instant::now();
        let mut t = started(now);
        t.cancel();
        assert!(!t.is_running());
        assert_eq!(t.deadline(), None);
        assert!(!t.poll(now + MS_16 * 10));
    }

    // ── poll ──────────────────────────────────────────────────────────────

    #[test]
    fn not_due_before_interval() {
        let now = Instant::now();
        let mut t = started(now);
        assert!(!t.poll(now + Duration::from_millis(15)));
        assert_eq!(t.deadline(), Some(now + MS_16));
    }

    #[test]
    fn due_exactly_at_deadline() {
        let now = Instant::now();
        let mut t = started(now);
        assert!(t.poll(now + MS_16));
        assert_eq!(t.deadline(), Some(now + MS_16 * 2));
    }

    #[test]
    fn fires_once_per_interval() {
        let now = Instant::now();
        let mut t = started(now);
        let fired = (1..=10).filter(|i| t.poll(now + MS_16 * *i)).count();
        assert_eq!(fired, 10);
    }

    #[test]
    fn stall_coalesces_into_single_tick() {
        let now = Instant::now();
        let mut t = started(now);

        // Five and a half intervals late.
        let late = now + MS_16 * 5 + Duration::from_millis(8);
        assert!(t.poll(late));
        assert!(!t.poll(late));

        // Next deadline stays on the grid and lies in the future.
        assert_eq!(t.deadline(), Some(now + MS_16 * 6));
    }

    #[test]
    fn long_stall_on_short_interval_fires_once() {
        let now = Instant::now();
        let interval = Duration::from_micros(1);
        let mut t = Ticker::new(interval);
        t.start(now);

        // Far more missed intervals than fit in a u32.
        let late = now + Duration::from_secs(3 * 60 * 60) + Duration::from_nanos(300);
        assert!(t.poll(late));
        assert!(!t.poll(late));

        let next = t.deadline().unwrap();
        assert!(next > late);
        assert!(next <= late + interval);
    }
}
