//! Submodular function contract and oracle-counted access to it.

use log::debug;
use ordered_float::NotNan;

use crate::element::Element;
use crate::error::Result;
use crate::estimates::{self, EstimateConfig};
use crate::oracle::{OracleCall, OracleCounter};

/// A submodular set function over a fixed universe of colored elements,
/// together with a "working solution" S it keeps as state.
///
/// For all `A <= B` and `e` not in `B`:
///
/// f(A + e) - f(A) >= f(B + e) - f(B) [submodularity]
///
/// Implementors provide the raw evaluations (`add`, `delta`, `objective`).
/// Those demand an [`OracleCall`] so that callers outside this crate can only
/// reach them through [`Oracle`], which charges every evaluation to an
/// [`OracleCounter`].
///
/// Misuse (elements outside the universe, evaluation before [`init`]) must
/// panic rather than return a plausible number.
///
/// [`init`]: SubmodularFunction::init
pub trait SubmodularFunction: Send {
    /// Sets S to the empty set.
    fn reset(&mut self);

    /// Builds the universe and whatever is needed to evaluate the function
    /// for the named experiment, clearing S. The empty name selects a
    /// default configuration. Returns the universe.
    fn init(&mut self, experiment_name: &str) -> Result<Vec<Element>>;

    /// The universe, in a stable order. Empty before `init`.
    fn universe(&self) -> &[Element];

    fn name(&self) -> String;

    /// An independent copy: mutating either instance never affects the other.
    fn clone_box(&self) -> Box<dyn SubmodularFunction>;

    /// S := S + `element`.
    fn add(&mut self, element: Element, call: &OracleCall);

    /// f(S + `element`) - f(S), leaving S untouched.
    fn delta(&self, element: Element, call: &OracleCall) -> f64;

    /// f(`elements`) for an arbitrary set, independent of S.
    fn objective(&self, elements: &[Element], call: &OracleCall) -> f64;
}

impl Clone for Box<dyn SubmodularFunction> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

/// Counted access to a [`SubmodularFunction`].
///
/// Implemented for every submodular function and not implementable
/// elsewhere, so the accounting is identical for all of them. Each method
/// charges exactly one oracle call to `counter`.
pub trait Oracle: SubmodularFunction {
    fn objective_and_increase_oracle_call(
        &self,
        counter: &OracleCounter,
        elements: &[Element],
    ) -> f64;

    fn add_and_increase_oracle_call(&mut self, counter: &OracleCounter, element: Element);

    fn delta_and_increase_oracle_call(&self, counter: &OracleCounter, element: Element) -> f64;

    /// Adds `element` iff its marginal gain is at least `threshold`. Returns
    /// the gain either way.
    fn add_if_gain_at_least_and_increase_oracle_call(
        &mut self,
        counter: &OracleCounter,
        element: Element,
        threshold: f64,
    ) -> f64;

    /// Guess ladder for the optimum of `max f(S)` s.t. `|S| <= cardinality_k`,
    /// spanning the largest singleton value `m` up to `cardinality_k * m`.
    ///
    /// Measures `m` with one counted delta query per universe element from the
    /// empty set. Leaves S empty.
    fn get_opt_estimates(
        &mut self,
        counter: &OracleCounter,
        cardinality_k: usize,
        config: &EstimateConfig,
    ) -> Vec<f64>;
}

impl<F: SubmodularFunction + ?Sized> Oracle for F {
    fn objective_and_increase_oracle_call(
        &self,
        counter: &OracleCounter,
        elements: &[Element],
    ) -> f64 {
        let call = counter.charge();
        self.objective(elements, &call)
    }

    fn add_and_increase_oracle_call(&mut self, counter: &OracleCounter, element: Element) {
        let call = counter.charge();
        self.add(element, &call)
    }

    fn delta_and_increase_oracle_call(&self, counter: &OracleCounter, element: Element) -> f64 {
        let call = counter.charge();
        self.delta(element, &call)
    }

    fn add_if_gain_at_least_and_increase_oracle_call(
        &mut self,
        counter: &OracleCounter,
        element: Element,
        threshold: f64,
    ) -> f64 {
        let call = counter.charge();
        let gain = self.delta(element, &call);
        if gain >= threshold {
            self.add(element, &call);
        }
        gain
    }

    fn get_opt_estimates(
        &mut self,
        counter: &OracleCounter,
        cardinality_k: usize,
        config: &EstimateConfig,
    ) -> Vec<f64> {
        self.reset();
        let max_singleton = self
            .universe()
            .iter()
            .map(|&e| {
                let gain = self.delta_and_increase_oracle_call(counter, e);
                NotNan::new(gain)
                    .unwrap_or_else(|_| panic!("{}: NaN marginal gain for {}", self.name(), e))
            })
            .max()
            .map_or(0.0, NotNan::into_inner);
        self.reset();

        let guesses = estimates::ladder(max_singleton, cardinality_k, config);
        debug!(
            "{}: {} guesses from max singleton {} for k {}",
            self.name(),
            guesses.len(),
            max_singleton,
            cardinality_k
        );
        guesses
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::functions::Modular;

    fn toy() -> Modular {
        let mut f = Modular::new(vec![
            Element::new(1, 0),
            Element::new(2, 0),
            Element::new(3, 1),
        ])
        .unwrap();
        f.init("").unwrap();
        f
    }

    #[test]
    fn test_conditional_add_rejects_below_threshold() {
        let counter = OracleCounter::new();
        let mut f = toy();
        let gain = f.add_if_gain_at_least_and_increase_oracle_call(
            &counter,
            Element::new(3, 1),
            5.0,
        );
        assert_eq!(gain, 3.0);
        assert_eq!(counter.calls(), 1);
        let call = counter.charge();
        assert_eq!(f.delta(Element::new(3, 1), &call), 3.0);
    }

    #[test]
    fn test_conditional_add_accepts_at_threshold() {
        let counter = OracleCounter::new();
        let mut f = toy();
        let gain = f.add_if_gain_at_least_and_increase_oracle_call(
            &counter,
            Element::new(3, 1),
            3.0,
        );
        assert_eq!(gain, 3.0);
        assert_eq!(counter.calls(), 1);
        let call = counter.charge();
        assert_eq!(f.delta(Element::new(3, 1), &call), 0.0);
    }

    #[test]
    fn test_opt_estimates_charge_one_call_per_element() {
        let counter = OracleCounter::new();
        let mut f = toy();
        f.add_and_increase_oracle_call(&counter, Element::new(3, 1));
        counter.reset();

        let guesses = f.get_opt_estimates(&counter, 2, &EstimateConfig::default());
        assert_eq!(counter.calls(), 3);
        assert_eq!(guesses[0], 3.0);
        assert!(*guesses.last().unwrap() >= 6.0);

        // S was cleared, so the largest element counts in full again
        let call = counter.charge();
        assert_eq!(f.delta(Element::new(3, 1), &call), 3.0);
    }

    #[test]
    fn test_boxed_clone_is_independent() {
        let counter = OracleCounter::new();
        let original: Box<dyn SubmodularFunction> = Box::new(toy());
        let mut copy = original.clone();
        copy.add_and_increase_oracle_call(&counter, Element::new(2, 0));

        assert_eq!(
            original.delta_and_increase_oracle_call(&counter, Element::new(2, 0)),
            2.0
        );
        assert_eq!(
            copy.delta_and_increase_oracle_call(&counter, Element::new(2, 0)),
            0.0
        );
        assert_eq!(counter.calls(), 3);
    }
}
