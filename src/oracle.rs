//! Oracle-call accounting.
//!
//! Every evaluation of a submodular function (an objective, a marginal gain, or
//! an insertion) costs one oracle call. Calls are counted on an
//! [`OracleCounter`], which is shared between every function instance and
//! thread taking part in an experiment.
//!
//! The raw evaluation methods of [`SubmodularFunction`] all demand an
//! [`OracleCall`], and the only way to get one is [`OracleCounter::charge`],
//! which is private to this crate. So code outside the crate can only evaluate
//! a function through the counted wrappers of [`Oracle`], and nothing goes
//! uncounted.
//!
//! [`SubmodularFunction`]: crate::SubmodularFunction
//! [`Oracle`]: crate::Oracle

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Shared, monotonically increasing count of oracle calls.
///
/// Cloning the counter hands out another handle on the same count.
#[derive(Debug, Clone, Default)]
pub struct OracleCounter {
    calls: Arc<AtomicU64>,
}

/// Proof that exactly one oracle call was charged to an [`OracleCounter`].
///
/// Cannot be constructed outside this crate. Functions that wrap another
/// function may forward the token they were handed.
#[derive(Debug)]
pub struct OracleCall {
    _private: (),
}

impl OracleCounter {
    /// A fresh counter at zero calls.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of oracle calls charged since creation or the last [`reset`].
    ///
    /// [`reset`]: OracleCounter::reset
    pub fn calls(&self) -> u64 {
        self.calls.load(Ordering::Relaxed)
    }

    /// Zeroes the count. Only the experiment driver should do this, between
    /// independent runs.
    pub fn reset(&self) {
        self.calls.store(0, Ordering::Relaxed);
    }

    // fetch_add is atomic under any ordering; only the total is ever read.
    pub(crate) fn charge(&self) -> OracleCall {
        self.calls.fetch_add(1, Ordering::Relaxed);
        OracleCall { _private: () }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rayon::iter::{IntoParallelIterator, ParallelIterator};

    #[test]
    fn test_charge_increments_once() {
        let counter = OracleCounter::new();
        assert_eq!(counter.calls(), 0);
        let _call = counter.charge();
        assert_eq!(counter.calls(), 1);
        let _call = counter.charge();
        assert_eq!(counter.calls(), 2);
    }

    #[test]
    fn test_clones_share_count() {
        let counter = OracleCounter::new();
        let other = counter.clone();
        other.charge();
        counter.charge();
        assert_eq!(counter.calls(), 2);
        assert_eq!(other.calls(), 2);

        other.reset();
        assert_eq!(counter.calls(), 0);
    }

    #[test]
    fn test_concurrent_charges_are_not_lost() {
        let counter = OracleCounter::new();
        (0..64usize).into_par_iter().for_each(|_| {
            let counter = counter.clone();
            for _ in 0..1000 {
                counter.charge();
            }
        });
        assert_eq!(counter.calls(), 64_000);
    }
}
