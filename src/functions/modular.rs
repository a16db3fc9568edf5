//! The additive function f(S) = sum of ids in S.
//!
//! Modular functions are trivially submodular (with equality), which makes
//! this the reference point for checking the accounting of the oracle layer.

use hashbrown::HashSet;
use itertools::Itertools;

use crate::element::{self, Element};
use crate::error::{Error, Result};
use crate::experiment::ExperimentConfig;
use crate::oracle::OracleCall;
use crate::submodular::SubmodularFunction;

#[derive(Debug, Clone)]
pub struct Modular {
    elements: Vec<Element>,
    // empty until init
    universe: Vec<Element>,
    members: HashSet<Element>,
    present: HashSet<u32>,
    initialized: bool,
}

impl Modular {
    /// A function over `universe`, which becomes visible once initialized.
    pub fn new(universe: Vec<Element>) -> Result<Self> {
        element::check_distinct_ids(&universe)?;
        Ok(Self {
            elements: universe,
            universe: Vec::new(),
            members: HashSet::new(),
            present: HashSet::new(),
            initialized: false,
        })
    }

    fn weight(e: Element) -> f64 {
        e.id as f64
    }

    fn check(&self, e: Element) {
        assert!(self.initialized, "{} used before init", self.name());
        assert!(
            self.members.contains(&e),
            "{}: element {} is not in the universe",
            self.name(),
            e
        );
    }
}

impl SubmodularFunction for Modular {
    fn reset(&mut self) {
        self.present.clear();
    }

    fn init(&mut self, experiment_name: &str) -> Result<Vec<Element>> {
        if !(experiment_name.is_empty() || experiment_name == ExperimentConfig::DEFAULT) {
            return Err(Error::UnknownExperiment(experiment_name.to_owned()));
        }
        self.universe = self.elements.clone();
        self.members = self.universe.iter().copied().collect();
        self.initialized = true;
        self.reset();
        Ok(self.universe.clone())
    }

    fn universe(&self) -> &[Element] {
        &self.universe
    }

    fn name(&self) -> String {
        "modular".to_owned()
    }

    fn clone_box(&self) -> Box<dyn SubmodularFunction> {
        Box::new(self.clone())
    }

    fn add(&mut self, element: Element, _call: &OracleCall) {
        self.check(element);
        self.present.insert(element.id);
    }

    fn delta(&self, element: Element, _call: &OracleCall) -> f64 {
        self.check(element);
        if self.present.contains(&element.id) {
            0.0
        } else {
            Self::weight(element)
        }
    }

    fn objective(&self, elements: &[Element], _call: &OracleCall) -> f64 {
        elements
            .iter()
            .copied()
            .inspect(|&e| self.check(e))
            .unique()
            .map(Self::weight)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oracle::OracleCounter;

    fn universe() -> Vec<Element> {
        vec![Element::new(1, 0), Element::new(2, 0), Element::new(3, 1)]
    }

    #[test]
    fn test_init() {
        let mut f = Modular::new(universe()).unwrap();
        assert!(f.universe().is_empty());
        assert_eq!(f.init("").unwrap(), universe());
        assert_eq!(f.universe(), &universe()[..]);
        assert_eq!(f.init("default").unwrap(), universe());
        assert!(matches!(
            f.init("pokec"),
            Err(Error::UnknownExperiment(_))
        ));
    }

    #[test]
    fn test_duplicate_universe() {
        let dup = vec![Element::new(1, 0), Element::new(1, 1)];
        assert!(matches!(
            Modular::new(dup),
            Err(Error::DuplicateElement(1))
        ));
    }

    #[test]
    fn test_add_is_idempotent() {
        let counter = OracleCounter::new();
        let call = counter.charge();
        let mut f = Modular::new(universe()).unwrap();
        f.init("").unwrap();

        f.add(Element::new(2, 0), &call);
        f.add(Element::new(2, 0), &call);
        assert_eq!(f.delta(Element::new(2, 0), &call), 0.0);
        assert_eq!(f.delta(Element::new(3, 1), &call), 3.0);
        assert_eq!(
            f.objective(&[Element::new(2, 0), Element::new(2, 0)], &call),
            2.0
        );

        f.reset();
        assert_eq!(f.delta(Element::new(2, 0), &call), 2.0);
    }

    #[test]
    #[should_panic(expected = "before init")]
    fn test_delta_before_init() {
        let counter = OracleCounter::new();
        let f = Modular::new(universe()).unwrap();
        f.delta(Element::new(1, 0), &counter.charge());
    }

    #[test]
    #[should_panic(expected = "not in the universe")]
    fn test_foreign_element() {
        let counter = OracleCounter::new();
        let mut f = Modular::new(universe()).unwrap();
        f.init("").unwrap();
        // right id, wrong color
        f.add(Element::new(3, 0), &counter.charge());
    }
}
