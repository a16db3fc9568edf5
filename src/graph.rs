//! Compact graph data structure.

use std::convert::TryInto;
use std::iter;

use itertools::Itertools;
use rayon::slice::ParallelSliceMut;

pub(crate) type Vertex = u32;

/// A compact adjacency list intended for sparse undirected graphs.
///
/// The space of vertices is a contiguous range of u32 ints
/// from [0, nvertices).
#[derive(Debug)]
pub struct Graph {
    offsets: Vec<usize>,
    neighbors: Vec<Vertex>,
}

impl Graph {
    /// Builds the graph from an unordered list of undirected edges. Self-loops
    /// are dropped and repeated edges (in either direction) are merged.
    pub(crate) fn from_edges(nvertices: usize, edges: &[(Vertex, Vertex)]) -> Self {
        assert!(nvertices < (1 << 32));
        assert!(
            edges
                .iter()
                .all(|&(u, v)| (u as usize) < nvertices && (v as usize) < nvertices),
            "edge endpoint out of range for {} vertices",
            nvertices
        );

        let mut arcs: Vec<(Vertex, Vertex)> = edges
            .iter()
            .copied()
            .filter(|(u, v)| u != v)
            .flat_map(|(u, v)| iter::once((u, v)).chain(iter::once((v, u))))
            .collect();
        arcs.par_sort_unstable();
        arcs.dedup();

        let mut offsets = vec![0usize; nvertices + 1];
        for &(u, _) in &arcs {
            offsets[u as usize + 1] += 1;
        }
        cumsum_inplace(&mut offsets);
        let neighbors = arcs.into_iter().map(|(_, v)| v).collect();

        Self::new(offsets, neighbors)
    }

    /// `offsets.len()` should be one greater than the number of vertices
    /// with `neighbors[offsets[i]..offsets[i+1]]` being the edges incident
    /// from `i`, which should be necessarily sorted and bidirectional.
    fn new(offsets: Vec<usize>, neighbors: Vec<Vertex>) -> Self {
        debug_assert!(offsets.windows(2).enumerate().all(|(i, s)| {
            s[0] <= s[1]
                && neighbors[s[0]..s[1]].windows(2).all(|ss| ss[0] < ss[1])
                && neighbors[s[0]..s[1]].iter().copied().all(|j| {
                    let i: Vertex = i.try_into().unwrap();
                    neighbors[offsets[j as usize]..offsets[1 + j as usize]]
                        .binary_search(&i)
                        .is_ok()
                })
        }));
        Self { offsets, neighbors }
    }

    pub(crate) fn neighbors(&self, v: Vertex) -> &[Vertex] {
        let v = v as usize;
        let lo = self.offsets[v];
        let hi = self.offsets[v + 1];
        &self.neighbors[lo..hi]
    }

    pub(crate) fn degree(&self, v: Vertex) -> usize {
        let v = v as usize;
        self.offsets[v + 1] - self.offsets[v]
    }

    pub fn nvertices(&self) -> usize {
        self.offsets.len() - 1
    }

    /// Number of undirected edges.
    pub fn nedges(&self) -> usize {
        self.neighbors.len() / 2
    }

    pub fn max_degree(&self) -> usize {
        (0..self.nvertices())
            .map(|v| self.degree(v as Vertex))
            .max()
            .unwrap_or(0)
    }

    /// Number of distinct vertices adjacent to at least one of `vertices`.
    pub(crate) fn neighborhood_size(&self, vertices: impl Iterator<Item = Vertex>) -> usize {
        vertices
            .flat_map(|v| self.neighbors(v).iter().copied())
            .unique()
            .count()
    }
}

fn cumsum_inplace(x: &mut [usize]) {
    let mut cumsum = 0;
    for v in x.iter_mut() {
        cumsum += *v;
        *v = cumsum;
    }
}
