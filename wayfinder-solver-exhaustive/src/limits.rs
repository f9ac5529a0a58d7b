//! Deadline and cancellation hooks for long searches.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use wayfinder_core::PlanError;

/// Bounds applied to a single search.
///
/// The defaults impose no limit. A search that hits either bound stops with
/// [`PlanError::Interrupted`] rather than returning a partial answer.
///
/// # Examples
/// ```
/// use std::sync::Arc;
/// use std::sync::atomic::AtomicBool;
/// use std::time::Duration;
/// use wayfinder_solver_exhaustive::SearchLimits;
///
/// let cancel = Arc::new(AtomicBool::new(false));
/// let limits = SearchLimits::default()
///     .with_time_limit(Duration::from_millis(250))
///     .with_cancel_flag(Arc::clone(&cancel));
/// assert_eq!(limits.time_limit(), Some(Duration::from_millis(250)));
/// ```
#[derive(Debug, Clone, Default)]
pub struct SearchLimits {
    time_limit: Option<Duration>,
    cancel: Option<Arc<AtomicBool>>,
}

impl SearchLimits {
    /// Stop searching once `limit` has elapsed.
    #[must_use]
    pub const fn with_time_limit(mut self, limit: Duration) -> Self {
        self.time_limit = Some(limit);
        self
    }

    /// Stop searching once `flag` is set.
    #[must_use]
    pub fn with_cancel_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.cancel = Some(flag);
        self
    }

    /// The configured time limit, if any.
    #[must_use]
    pub const fn time_limit(&self) -> Option<Duration> {
        self.time_limit
    }

    pub(crate) fn start(&self) -> LimitGuard {
        let started = Instant::now();
        LimitGuard {
            started,
            deadline: self
                .time_limit
                .and_then(|limit| started.checked_add(limit)),
            cancel: self.cancel.clone(),
        }
    }
}

/// Running clock for one search.
#[derive(Debug)]
pub(crate) struct LimitGuard {
    started: Instant,
    deadline: Option<Instant>,
    cancel: Option<Arc<AtomicBool>>,
}

impl LimitGuard {
    pub(crate) fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    pub(crate) fn check(&self) -> Result<(), PlanError> {
        let cancelled = self
            .cancel
            .as_ref()
            .is_some_and(|flag| flag.load(Ordering::Relaxed));
        let expired = self
            .deadline
            .is_some_and(|deadline| Instant::now() >= deadline);
        if cancelled || expired {
            return Err(PlanError::Interrupted {
                elapsed: self.elapsed(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn unlimited_search_never_interrupts() {
        let guard = SearchLimits::default().start();
        assert!(guard.check().is_ok());
    }

    #[rstest]
    fn raised_flag_interrupts() {
        let flag = Arc::new(AtomicBool::new(false));
        let guard = SearchLimits::default()
            .with_cancel_flag(Arc::clone(&flag))
            .start();
        assert!(guard.check().is_ok());
        flag.store(true, Ordering::Relaxed);
        assert!(matches!(guard.check(), Err(PlanError::Interrupted { .. })));
    }

    #[rstest]
    fn zero_time_limit_interrupts_immediately() {
        let guard = SearchLimits::default()
            .with_time_limit(Duration::ZERO)
            .start();
        assert!(matches!(guard.check(), Err(PlanError::Interrupted { .. })));
    }
}
