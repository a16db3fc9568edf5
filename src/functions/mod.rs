//! Concrete submodular functions.

mod graph_utility;
mod modular;

pub use graph_utility::GraphUtility;
pub use modular::Modular;
