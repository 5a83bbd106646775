//! Debounce window state.

use std::time::{Duration, Instant};

use tracing::trace;

/// A query released from the window and ready to be sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dispatch {
    pub generation: u64,
    pub query: String,
}

#[derive(Debug, Clone)]
struct Pending {
    generation: u64,
    query: String,
    armed_at: Instant,
}

/// Coalesces bursts of queries into a single dispatch.
///
/// Every `arm` starts a new generation and replaces whatever was pending, so a
/// superseded query is never released. A dispatched query is only accepted back
/// if no newer query was armed while it was in flight.
///
/// The window holds no timer. Hosts either poll it from a periodic tick or
/// release a specific generation once their own timer fires.
#[derive(Debug, Clone)]
pub struct DebounceWindow {
    quiet: Duration,
    generation: u64,
    pending: Option<Pending>,
    in_flight: Option<u64>,
}

impl DebounceWindow {
    pub fn new(quiet: Duration) -> Self {
        Self {
            quiet,
            generation: 0,
            pending: None,
            in_flight: None,
        }
    }

    #[inline]
    pub fn quiet(&self) -> Duration {
        self.quiet
    }

    /// Generation of the most recently armed query.
    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[inline]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Generation of the query currently awaiting its result.
    #[inline]
    pub fn in_flight(&self) -> Option<u64> {
        self.in_flight
    }

    /// Arm the window with a new query, discarding any pending one.
    pub fn arm(&mut self, query: impl Into<String>, now: Instant) -> u64 {
        self.generation += 1;
        let replaced = self.pending.replace(Pending {
            generation: self.generation,
            query: query.into(),
            armed_at: now,
        });
        if let Some(old) = replaced {
            trace!(generation = old.generation, query = %old.query, "debounced query superseded");
        }
        self.generation
    }

    /// Release the pending query if the quiet interval has elapsed at `now`.
    pub fn poll(&mut self, now: Instant) -> Option<Dispatch> {
        let due = self
            .pending
            .as_ref()
            .is_some_and(|p| now.saturating_duration_since(p.armed_at) >= self.quiet);
        if !due {
            return None;
        }
        self.pending.take().map(|p| self.start(p))
    }

    /// Release the pending query only if it still belongs to `generation`.
    pub fn take_if_current(&mut self, generation: u64) -> Option<Dispatch> {
        match self.pending.take() {
            Some(p) if p.generation == generation => Some(self.start(p)),
            other => {
                self.pending = other;
                None
            }
        }
    }

    /// Whether a result for `generation` may still be delivered.
    #[inline]
    pub fn accepts(&self, generation: u64) -> bool {
        generation == self.generation
    }

    /// Mark the dispatch for `generation` complete. Returns whether its result
    /// should be delivered.
    pub fn settle(&mut self, generation: u64) -> bool {
        if self.in_flight == Some(generation) {
            self.in_flight = None;
        }
        self.accepts(generation)
    }

    /// Drop any pending query and invalidate the one in flight.
    pub fn cancel(&mut self) {
        self.generation += 1;
        self.pending = None;
        self.in_flight = None;
    }

    fn start(&mut self, pending: Pending) -> Dispatch {
        self.in_flight = Some(pending.generation);
        Dispatch {
            generation: pending.generation,
            query: pending.query,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const QUIET: Duration = Duration::from_millis(500);

    #[test]
    fn test_new_window_is_idle() {
        let mut window = DebounceWindow::new(QUIET);
        assert!(!window.is_pending());
        assert_eq!(window.poll(Instant::now() + QUIET), None);
    }

    #[test]
    fn test_burst_releases_only_last_query() {
        let start = Instant::now();
        let mut window = DebounceWindow::new(QUIET);

        window.arm("b", start);
        window.arm("bs", start + Duration::from_millis(100));
        let last = window.arm("bsb", start + Duration::from_millis(200));

        // Quiet interval measured from the last keystroke
        assert_eq!(window.poll(start + Duration::from_millis(600)), None);

        let dispatch = window.poll(start + Duration::from_millis(700)).unwrap();
        assert_eq!(dispatch.query, "bsb");
        assert_eq!(dispatch.generation, last);
        assert_eq!(window.in_flight(), Some(last));

        // Released exactly once
        assert_eq!(window.poll(start + Duration::from_secs(5)), None);
        assert!(window.settle(last));
        assert_eq!(window.in_flight(), None);
    }

    #[test]
    fn test_take_if_current_rejects_superseded_generation() {
        let now = Instant::now();
        let mut window = DebounceWindow::new(QUIET);
        let first = window.arm("tae", now);
        let second = window.arm("tae4", now);

        assert_eq!(window.take_if_current(first), None);
        assert!(window.is_pending());

        let dispatch = window.take_if_current(second).unwrap();
        assert_eq!(dispatch.query, "tae4");
    }

    #[test]
    fn test_result_superseded_while_in_flight() {
        let now = Instant::now();
        let mut window = DebounceWindow::new(QUIET);
        let first = window.arm("cert", now);
        window.take_if_current(first).unwrap();

        window.arm("certificate", now);
        assert!(!window.settle(first));
    }

    #[test]
    fn test_cancel_invalidates_everything() {
        let now = Instant::now();
        let mut window = DebounceWindow::new(QUIET);
        let first = window.arm("x", now);
        window.cancel();
        assert!(!window.is_pending());
        assert!(!window.accepts(first));
    }
}
