use crate::{CandidatePair, Graph, Partition};

/// D-values: for every vertex, the weight towards the other side minus the
/// weight towards its own side.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GainVector {
    gains: Vec<i64>,
}

impl GainVector {
    pub fn initialize(graph: &Graph, partition: &Partition) -> Self {
        let gains = (0..graph.vertex_count() as u32)
            .map(|vx| {
                let side = partition.side(vx);
                graph.neighbours(vx).iter().fold(0i64, |d, e| {
                    if partition.side(e.dst) == side {
                        d - e.weight as i64
                    } else {
                        d + e.weight as i64
                    }
                })
            })
            .collect();
        Self { gains }
    }

    #[inline]
    pub fn get(&self, vx: u32) -> i64 {
        self.gains[vx as usize]
    }

    pub fn as_slice(&self) -> &[i64] {
        &self.gains
    }

    /// Updates the unlocked vertices as if both vertices of `pair` had already
    /// changed sides. Must run after every lock, before the next selection.
    pub fn recalculate(
        &mut self,
        graph: &Graph,
        partition: &Partition,
        locks: &[bool],
        pair: &CandidatePair,
    ) {
        // Only neighbours of the pair change. An edge to a vertex on the same
        // side turns external (+2w), one to the other side turns internal (-2w).
        for moved in [pair.a, pair.b] {
            let moved_side = partition.side(moved);
            for e in graph.neighbours(moved) {
                if locks[e.dst as usize] {
                    continue;
                }
                let delta = 2 * e.weight as i64;
                if partition.side(e.dst) == moved_side {
                    self.gains[e.dst as usize] += delta;
                } else {
                    self.gains[e.dst as usize] -= delta;
                }
            }
        }
    }
}
