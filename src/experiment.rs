//! Named experiment configurations.
//!
//! An experiment name resolves to a source for a colored graph: either one of
//! the built-in seeded random graphs, or a pair of data files
//! `<data_dir>/<name>.edges` and (optionally) `<data_dir>/<name>.colors` in the
//! `u v` / `id color` line format.

use std::iter;
use std::path::{Path, PathBuf};
use std::time::Instant;

use hashbrown::HashMap;
use itertools::Itertools;
use log::{debug, info};
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::element::Element;
use crate::error::{Error, Result};
use crate::graph::{Graph, Vertex};
use crate::reader;

#[derive(Debug, Clone, PartialEq)]
pub enum GraphSource {
    /// Every vertex samples `degree` neighbors uniformly (self-loops and
    /// repeats are discarded) and a uniform color in `[0, ncolors)`.
    Random {
        nvertices: usize,
        degree: usize,
        ncolors: u32,
        seed: u64,
    },
    /// Edge list plus optional color assignment. Ids missing from the color
    /// file get color 0; if an id is listed twice the last color wins.
    Files {
        edges: PathBuf,
        colors: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExperimentConfig {
    pub name: String,
    pub source: GraphSource,
}

/// A loaded experiment. `universe[i]` is the element for vertex `i`.
pub struct ExperimentData {
    pub universe: Vec<Element>,
    pub graph: Graph,
}

impl ExperimentConfig {
    pub const DEFAULT: &'static str = "default";

    /// Resolves `name` against the built-in configurations, then against data
    /// files in `data_dir`. The empty name is an alias for `"default"`.
    pub fn resolve(name: &str, data_dir: &Path) -> Result<Self> {
        let name = if name.is_empty() { Self::DEFAULT } else { name };
        let source = match name {
            Self::DEFAULT => GraphSource::Random {
                nvertices: 1000,
                degree: 8,
                ncolors: 4,
                seed: 1234,
            },
            "small" => GraphSource::Random {
                nvertices: 100,
                degree: 4,
                ncolors: 2,
                seed: 1234,
            },
            _ => {
                let edges = data_dir.join(format!("{}.edges", name));
                if !edges.is_file() {
                    return Err(Error::UnknownExperiment(name.to_owned()));
                }
                let colors = Some(data_dir.join(format!("{}.colors", name)))
                    .filter(|path| path.is_file());
                GraphSource::Files { edges, colors }
            }
        };
        Ok(Self {
            name: name.to_owned(),
            source,
        })
    }

    pub fn load(&self) -> Result<ExperimentData> {
        let start = Instant::now();
        let data = match &self.source {
            GraphSource::Random {
                nvertices,
                degree,
                ncolors,
                seed,
            } => random_graph(*nvertices, *degree, *ncolors, *seed),
            GraphSource::Files { edges, colors } => {
                let edges = reader::read_pairs(edges)?;
                let colors = match colors {
                    Some(path) => reader::read_pairs(path)?,
                    None => Vec::new(),
                };
                remap_ids(&edges, &colors)
            }
        };
        if data.universe.is_empty() {
            return Err(Error::EmptyExperiment(self.name.clone()));
        }
        info!(
            "load experiment {} {:.0?}",
            self.name,
            Instant::now().duration_since(start)
        );
        info!(
            "num vertices {} num edges {} max degree {}",
            data.graph.nvertices(),
            data.graph.nedges(),
            data.graph.max_degree()
        );
        Ok(data)
    }
}

fn random_graph(nvertices: usize, degree: usize, ncolors: u32, seed: u64) -> ExperimentData {
    let mut rng = StdRng::seed_from_u64(seed);
    let nv = nvertices as Vertex;
    let mut edges = Vec::with_capacity(nvertices * degree);
    for v in 0..nv {
        for _ in 0..degree {
            edges.push((v, rng.gen_range(0, nv)));
        }
    }
    let universe = (0..nv)
        .map(|v| Element::new(v, rng.gen_range(0, ncolors.max(1))))
        .collect();
    ExperimentData {
        universe,
        graph: Graph::from_edges(nvertices, &edges),
    }
}

/// Ids in data files can be arbitrary, so they're densely renumbered in
/// increasing id order to become vertices.
fn remap_ids(edges: &[(u32, u32)], colors: &[(u32, u32)]) -> ExperimentData {
    let ids: Vec<u32> = edges
        .iter()
        .flat_map(|&(u, v)| iter::once(u).chain(iter::once(v)))
        .chain(colors.iter().map(|&(id, _)| id))
        .sorted()
        .dedup()
        .collect();
    let vertex: HashMap<u32, Vertex> = ids
        .iter()
        .enumerate()
        .map(|(v, &id)| (id, v as Vertex))
        .collect();
    let color: HashMap<u32, u32> = colors.iter().copied().collect();
    debug!(
        "remapped {} ids, {} with explicit colors",
        ids.len(),
        color.len()
    );

    let edges: Vec<(Vertex, Vertex)> = edges
        .iter()
        .map(|(u, v)| (vertex[u], vertex[v]))
        .collect();
    let universe = ids
        .iter()
        .map(|&id| Element::new(id, color.get(&id).copied().unwrap_or(0)))
        .collect();
    ExperimentData {
        universe,
        graph: Graph::from_edges(ids.len(), &edges),
    }
}
