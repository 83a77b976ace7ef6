// Graph bisection using the Kernighan-Lin heuristic:
// https://doi.org/10.1002/j.1538-7305.1970.tb01770.x

mod error;
mod gain;
mod kernighan_lin;
mod netlist;
mod partition_util;
mod pass;
mod selection;

pub use error::{PartitionError, PartitionResult};
pub use gain::GainVector;
pub use kernighan_lin::{Bisection, DriverState, KernighanLin, KernighanLinConfig};
pub use netlist::Netlist;
pub use partition_util::{InitialPartitioningMethod, Partition};
pub use pass::{run_generation, CandidateQueue};
pub use selection::{
    CandidatePair, ExhaustiveSelector, GreedySelector, PairSelector, SelectionPolicy,
};

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct GraphEdge {
    pub dst: u32,
    pub weight: u32,
}

#[derive(Clone, Debug, Default)]
pub struct GraphVertex {
    /// Sorted by `dst`, never contains zero weights.
    pub edges: Vec<GraphEdge>,
}

/// Symmetric cost model over `n` vertices. The weight of a pair is the number of
/// times it was seen in the input; pairs that were never seen have weight 0.
#[derive(Clone, Debug)]
pub struct Graph {
    vertices: Vec<GraphVertex>,
}

impl Graph {
    pub fn new(vertex_count: usize) -> Self {
        Self {
            vertices: vec![GraphVertex::default(); vertex_count],
        }
    }

    /// Builds a graph from 0-based vertex pairs. Repeated pairs accumulate weight.
    pub fn from_edges(vertex_count: usize, edges: &[(u32, u32)]) -> Self {
        let mut graph = Self::new(vertex_count);
        for &(a, b) in edges {
            graph.increment_weight(a, b);
        }
        graph
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of distinct vertex pairs with a nonzero weight.
    pub fn edge_count(&self) -> usize {
        self.vertices.iter().map(|v| v.edges.len()).sum::<usize>() / 2
    }

    /// Sum of all pair weights, each pair counted once.
    pub fn total_weight(&self) -> u64 {
        let mut total = 0u64;
        for v in self.vertices.iter() {
            for e in v.edges.iter() {
                total += e.weight as u64;
            }
        }
        total / 2
    }

    pub fn neighbours(&self, vx: u32) -> &[GraphEdge] {
        &self.vertices[vx as usize].edges
    }

    pub fn weight(&self, va: u32, vb: u32) -> u32 {
        let edges = &self.vertices[va as usize].edges;
        match edges.binary_search_by_key(&vb, |e| e.dst) {
            Ok(pos) => edges[pos].weight,
            Err(_) => 0,
        }
    }

    /// Adds one to the weight between `va` and `vb` in both directions.
    /// Self-loops never cross a cut and are ignored.
    pub fn increment_weight(&mut self, va: u32, vb: u32) {
        if va == vb {
            return;
        }
        self.bump(va, vb);
        self.bump(vb, va);
    }

    fn bump(&mut self, src: u32, dst: u32) {
        let edges = &mut self.vertices[src as usize].edges;
        match edges.binary_search_by_key(&dst, |e| e.dst) {
            Ok(pos) => edges[pos].weight += 1,
            Err(pos) => edges.insert(pos, GraphEdge { dst, weight: 1 }),
        }
    }

    /// Returns the total weight of the pairs whose endpoints lie on different sides.
    pub fn calculate_cutset(&self, partition: &Partition) -> u64 {
        let mut cutset = 0u64;
        for (vx, v) in self.vertices.iter().enumerate() {
            let side = partition.side(vx as u32);
            for e in v.edges.iter() {
                if partition.side(e.dst) != side {
                    cutset += e.weight as u64;
                }
            }
        }
        // Every crossing pair was seen from both ends.
        cutset / 2
    }
}
