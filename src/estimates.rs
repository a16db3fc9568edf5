//! Guess ladders for the optimum of a cardinality-constrained problem.
//!
//! With `m` the largest singleton value, a monotone submodular optimum under
//! cardinality `k` lies in `[m, k * m]`. A ladder of guesses spaced by a factor
//! of `1 + epsilon` over that range always has one rung within `1 + epsilon` of
//! the optimum, which is what threshold greedy algorithms need.

use crate::error::{Error, Result};

/// Parameters of the guess ladder.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EstimateConfig {
    epsilon: f64,
}

impl EstimateConfig {
    pub const DEFAULT_EPSILON: f64 = 0.1;
    /// Smaller growth rates give ladders of millions of rungs, and below
    /// `f64::EPSILON` the rungs stop growing at all.
    pub const MIN_EPSILON: f64 = 1e-6;

    /// Fails unless `epsilon` is finite and at least [`MIN_EPSILON`].
    ///
    /// [`MIN_EPSILON`]: EstimateConfig::MIN_EPSILON
    pub fn new(epsilon: f64) -> Result<Self> {
        if !(epsilon.is_finite() && epsilon >= Self::MIN_EPSILON) {
            return Err(Error::InvalidEpsilon(epsilon));
        }
        Ok(Self { epsilon })
    }

    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }
}

impl Default for EstimateConfig {
    fn default() -> Self {
        Self {
            epsilon: Self::DEFAULT_EPSILON,
        }
    }
}

/// Returns `m, m(1+eps), m(1+eps)^2, ...` up to and including the first rung
/// that reaches `k * m`.
///
/// Degenerate inputs (`k == 0`, or `m` not positive) give the single guess 0
/// so that consumers always have something to run with. Rungs saturate at
/// `f64::MAX`, so every guess is finite.
pub fn ladder(max_singleton: f64, cardinality_k: usize, config: &EstimateConfig) -> Vec<f64> {
    assert!(
        !max_singleton.is_nan(),
        "singleton gain must not be NaN"
    );
    if cardinality_k == 0 || !(max_singleton > 0.0) {
        return vec![0.0];
    }

    let upper = (max_singleton * cardinality_k as f64).min(f64::MAX);
    let growth = 1.0 + config.epsilon;
    let mut guesses = Vec::new();
    let mut guess = max_singleton.min(f64::MAX);
    while guess < upper {
        guesses.push(guess);
        guess = (guess * growth).min(f64::MAX);
    }
    guesses.push(guess);
    guesses
}
