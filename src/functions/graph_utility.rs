//! Neighborhood coverage over a colored graph.
//!
//! For a set of vertices S, f(S) is the number of distinct vertices adjacent
//! to some member of S:
//!
//! f(S) = |N(v1) + N(v2) + ... | for v in S
//!
//! A coverage function, so monotone and submodular. The working solution keeps
//! a covered bitmap which makes `delta` O(deg(v)) rather than O(|S| deg).

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

use hashbrown::HashMap;
use itertools::Itertools;
use log::info;

use crate::element::{self, Element};
use crate::error::Result;
use crate::experiment::ExperimentConfig;
use crate::graph::{Graph, Vertex};
use crate::oracle::OracleCall;
use crate::submodular::SubmodularFunction;

/// Cloning shares the (immutable) graph and copies the working solution.
#[derive(Debug, Clone)]
pub struct GraphUtility {
    data_dir: PathBuf,
    experiment: Option<String>,
    universe: Vec<Element>,
    graph: Option<Arc<Graph>>,
    vertices: Arc<HashMap<Element, Vertex>>,
    // working solution S
    present: Vec<bool>,
    covered: Vec<bool>,
    ncovered: usize,
}

impl GraphUtility {
    /// File-based experiments are looked up in `data_dir`.
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        Self {
            data_dir: data_dir.as_ref().to_owned(),
            experiment: None,
            universe: Vec::new(),
            graph: None,
            vertices: Arc::new(HashMap::new()),
            present: Vec::new(),
            covered: Vec::new(),
            ncovered: 0,
        }
    }

    /// f(S) for the working solution.
    pub fn value(&self) -> usize {
        self.ncovered
    }

    fn graph(&self) -> &Graph {
        match self.graph.as_deref() {
            Some(graph) => graph,
            None => panic!("{} used before init", self.name()),
        }
    }

    fn vertex(&self, e: Element) -> Vertex {
        self.graph();
        match self.vertices.get(&e) {
            Some(&v) => v,
            None => panic!("{}: element {} is not in the universe", self.name(), e),
        }
    }
}

impl Default for GraphUtility {
    fn default() -> Self {
        Self::new(".")
    }
}

impl SubmodularFunction for GraphUtility {
    fn reset(&mut self) {
        for x in self.present.iter_mut().chain(self.covered.iter_mut()) {
            *x = false;
        }
        self.ncovered = 0;
    }

    fn init(&mut self, experiment_name: &str) -> Result<Vec<Element>> {
        let config = ExperimentConfig::resolve(experiment_name, &self.data_dir)?;
        let data = config.load()?;
        element::check_distinct_ids(&data.universe)?;

        let start = Instant::now();
        let nvertices = data.graph.nvertices();
        assert!(data.universe.len() == nvertices);
        let vertices: HashMap<Element, Vertex> = data
            .universe
            .iter()
            .enumerate()
            .map(|(v, &e)| (e, v as Vertex))
            .collect();
        let color_counts = element::color_counts(&data.universe);

        self.experiment = Some(config.name);
        self.universe = data.universe;
        self.graph = Some(Arc::new(data.graph));
        self.vertices = Arc::new(vertices);
        self.present = vec![false; nvertices];
        self.covered = vec![false; nvertices];
        self.ncovered = 0;

        info!(
            "{} init {:.0?}",
            self.name(),
            Instant::now().duration_since(start)
        );
        info!(
            "universe size {} in {} colors ({})",
            self.universe.len(),
            color_counts.len(),
            color_counts
                .iter()
                .map(|(c, n)| format!("{}: {}", c, n))
                .join(", ")
        );
        Ok(self.universe.clone())
    }

    fn universe(&self) -> &[Element] {
        &self.universe
    }

    fn name(&self) -> String {
        match &self.experiment {
            Some(experiment) => format!("graph-utility({})", experiment),
            None => "graph-utility".to_owned(),
        }
    }

    fn clone_box(&self) -> Box<dyn SubmodularFunction> {
        Box::new(self.clone())
    }

    fn add(&mut self, element: Element, _call: &OracleCall) {
        let v = self.vertex(element);
        if self.present[v as usize] {
            return;
        }
        self.present[v as usize] = true;

        let graph = self.graph.as_deref().expect("vertex lookup checks init");
        for &n in graph.neighbors(v) {
            let covered = &mut self.covered[n as usize];
            if !*covered {
                *covered = true;
                self.ncovered += 1;
            }
        }
    }

    fn delta(&self, element: Element, _call: &OracleCall) -> f64 {
        let v = self.vertex(element);
        self.graph()
            .neighbors(v)
            .iter()
            .filter(|&&n| !self.covered[n as usize])
            .count() as f64
    }

    fn objective(&self, elements: &[Element], _call: &OracleCall) -> f64 {
        let vertices = elements.iter().map(|&e| self.vertex(e));
        self.graph().neighborhood_size(vertices) as f64
    }
}
