use std::thread;
use std::time::Duration;

use tracing::debug;

use crate::engine::analyzer::MealAnalyzer;
use crate::engine::constants::ANALYSIS_DELAY;
use crate::models::ComparisonResult;

/// Wraps an analyzer with a fixed pause before each analysis.
///
/// The pause is presentation only; the wrapped result is returned unchanged.
#[derive(Debug, Clone)]
pub struct Delayed<A> {
    inner: A,
    delay: Duration,
}

impl<A: MealAnalyzer> Delayed<A> {
    pub fn new(inner: A, delay: Duration) -> Self {
        Self { inner, delay }
    }

    /// Wrap with the standard analysis delay.
    pub fn standard(inner: A) -> Self {
        Self::new(inner, ANALYSIS_DELAY)
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn into_inner(self) -> A {
        self.inner
    }
}

impl<A: MealAnalyzer> MealAnalyzer for Delayed<A> {
    fn analyze(&self, query: &str) -> ComparisonResult {
        if !self.delay.is_zero() {
            debug!(delay_ms = self.delay.as_millis() as u64, "pausing before analysis");
            thread::sleep(self.delay);
        }
        self.inner.analyze(query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::analyzer::{analyze, LookupEngine};
    use std::cell::Cell;
    use std::time::Instant;

    struct Counting<'a> {
        calls: &'a Cell<u32>,
    }

    impl MealAnalyzer for Counting<'_> {
        fn analyze(&self, query: &str) -> ComparisonResult {
            self.calls.set(self.calls.get() + 1);
            analyze(query)
        }
    }

    #[test]
    fn test_delegates_once_per_call() {
        let calls = Cell::new(0);
        let delayed = Delayed::new(Counting { calls: &calls }, Duration::ZERO);

        delayed.analyze("pizza");
        delayed.analyze("burger");
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn test_result_is_unchanged() {
        let delayed = Delayed::new(LookupEngine, Duration::from_millis(5));
        assert_eq!(delayed.analyze("fried rice"), analyze("fried rice"));
    }

    #[test]
    fn test_waits_at_least_the_delay() {
        let delay = Duration::from_millis(20);
        let delayed = Delayed::new(LookupEngine, delay);

        let start = Instant::now();
        delayed.analyze("samosa");
        assert!(start.elapsed() >= delay);
    }

    #[test]
    fn test_standard_delay() {
        assert_eq!(Delayed::standard(LookupEngine).delay(), ANALYSIS_DELAY);
    }
}
