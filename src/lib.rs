//! `fairsub` is the oracle layer for (fair) submodular maximization
//! experiments.
//!
//! A [`SubmodularFunction`] is a set function over a universe of colored
//! [`Element`]s that also keeps a working solution S, so algorithms can ask for
//! marginal gains `f(S + e) - f(S)` incrementally. Algorithms never evaluate a
//! function directly: they go through [`Oracle`], which charges each
//! evaluation to a shared [`OracleCounter`]. The number of oracle calls is the
//! cost measure that experiments report, so it has to be exact.
//!
//! [`Oracle::get_opt_estimates`] produces the ladder of optimum guesses that
//! threshold greedy algorithms under a cardinality constraint run against.
//!
//! ```
//! use fairsub::{Element, EstimateConfig, Modular, Oracle, OracleCounter, SubmodularFunction};
//!
//! let counter = OracleCounter::new();
//! let mut f = Modular::new(vec![Element::new(1, 0), Element::new(2, 0), Element::new(3, 1)])?;
//! f.init("")?;
//!
//! f.add_and_increase_oracle_call(&counter, Element::new(1, 0));
//! assert_eq!(f.delta_and_increase_oracle_call(&counter, Element::new(2, 0)), 2.0);
//! assert_eq!(counter.calls(), 2);
//!
//! let guesses = f.get_opt_estimates(&counter, 2, &EstimateConfig::default());
//! assert_eq!(guesses[0], 3.0);
//! # Ok::<(), fairsub::Error>(())
//! ```

mod element;
mod error;
mod estimates;
pub mod experiment;
pub mod functions;
mod graph;
mod oracle;
mod reader;
mod submodular;

pub use element::{color_counts, ncolors, Element};
pub use error::{Error, Result};
pub use estimates::{ladder, EstimateConfig};
pub use functions::{GraphUtility, Modular};
pub use graph::Graph;
pub use oracle::{OracleCall, OracleCounter};
pub use submodular::{Oracle, SubmodularFunction};
