use crate::{GainVector, Graph, Partition};

/// A tentative swap: `a` comes from set A, `b` from set B.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct CandidatePair {
    pub a: u32,
    pub b: u32,
    /// How much the cutset shrinks if the two vertices trade sides.
    pub gain: i64,
}

impl CandidatePair {
    fn scored(graph: &Graph, partition: &Partition, gains: &GainVector, x: u32, y: u32) -> Self {
        let gain = gains.get(x) + gains.get(y) - 2 * graph.weight(x, y) as i64;
        let (a, b) = if partition.side(x) { (y, x) } else { (x, y) };
        Self { a, b, gain }
    }
}

/// Picks the next pair of unlocked vertices to lock within a generation.
pub trait PairSelector {
    /// Returns `None` if one of the sides has no unlocked vertex left.
    fn select(
        &self,
        graph: &Graph,
        partition: &Partition,
        gains: &GainVector,
        locks: &[bool],
    ) -> Option<CandidatePair>;
}

/// Scores every unlocked cross pair. O(n²) per round.
#[derive(Copy, Clone, Debug, Default)]
pub struct ExhaustiveSelector;

impl PairSelector for ExhaustiveSelector {
    fn select(
        &self,
        graph: &Graph,
        partition: &Partition,
        gains: &GainVector,
        locks: &[bool],
    ) -> Option<CandidatePair> {
        let n = graph.vertex_count() as u32;
        let mut best: Option<CandidatePair> = None;

        for i in 0..n {
            if locks[i as usize] {
                continue;
            }
            let side = partition.side(i);
            for j in i + 1..n {
                if locks[j as usize] || partition.side(j) == side {
                    continue;
                }
                let candidate = CandidatePair::scored(graph, partition, gains, i, j);
                // Strictly greater keeps the first pair in index order on ties.
                if best.map_or(true, |b| candidate.gain > b.gain) {
                    best = Some(candidate);
                }
            }
        }
        best
    }
}

/// Pairs the highest-gain unlocked vertex of each side. O(n) per round, but may
/// miss a better pair whose vertices share a heavy edge.
#[derive(Copy, Clone, Debug, Default)]
pub struct GreedySelector;

impl PairSelector for GreedySelector {
    fn select(
        &self,
        graph: &Graph,
        partition: &Partition,
        gains: &GainVector,
        locks: &[bool],
    ) -> Option<CandidatePair> {
        let mut best_a: Option<u32> = None;
        let mut best_b: Option<u32> = None;

        for vx in 0..graph.vertex_count() as u32 {
            if locks[vx as usize] {
                continue;
            }
            let best = if partition.side(vx) { &mut best_b } else { &mut best_a };
            if best.map_or(true, |cur| gains.get(vx) > gains.get(cur)) {
                *best = Some(vx);
            }
        }

        let (a, b) = (best_a?, best_b?);
        Some(CandidatePair::scored(graph, partition, gains, a, b))
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum SelectionPolicy {
    /// Search all unlocked cross pairs for the best combined gain.
    Exhaustive,
    /// Combine the best vertex of each side.
    Greedy,
}

impl SelectionPolicy {
    pub fn selector(self) -> &'static dyn PairSelector {
        match self {
            SelectionPolicy::Exhaustive => &ExhaustiveSelector,
            SelectionPolicy::Greedy => &GreedySelector,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dense_pairs() -> (Graph, Partition) {
        let graph = Graph::from_edges(4, &[(0, 1), (0, 1), (2, 3), (2, 3), (0, 2)]);
        let partition = Partition::from_sides(vec![false, true, false, true]);
        (graph, partition)
    }

    #[test]
    fn exhaustive_finds_the_best_pair() {
        let (graph, partition) = dense_pairs();
        let gains = GainVector::initialize(&graph, &partition);
        let pair = ExhaustiveSelector
            .select(&graph, &partition, &gains, &[false; 4])
            .unwrap();
        // (0, 3) and (1, 2) both score 3; index order prefers (0, 3).
        assert_eq!(pair, CandidatePair { a: 0, b: 3, gain: 3 });
    }

    #[test]
    fn greedy_pays_for_the_shared_edge() {
        let (graph, partition) = dense_pairs();
        let gains = GainVector::initialize(&graph, &partition);
        let pair = GreedySelector
            .select(&graph, &partition, &gains, &[false; 4])
            .unwrap();
        // Best of A is 0 (gain 1), best of B is 1 (gain 2), joined by weight 2.
        assert_eq!(pair, CandidatePair { a: 0, b: 1, gain: -1 });
    }

    #[test]
    fn pairs_are_normalized_to_side_a_first() {
        let graph = Graph::from_edges(2, &[(0, 1)]);
        let partition = Partition::from_sides(vec![true, false]);
        let gains = GainVector::initialize(&graph, &partition);
        for policy in [SelectionPolicy::Exhaustive, SelectionPolicy::Greedy] {
            let pair = policy
                .selector()
                .select(&graph, &partition, &gains, &[false; 2])
                .unwrap();
            assert_eq!(pair, CandidatePair { a: 1, b: 0, gain: 0 });
        }
    }

    #[test]
    fn locked_vertices_are_never_selected() {
        let (graph, partition) = dense_pairs();
        let gains = GainVector::initialize(&graph, &partition);
        let locks = [true, false, false, true];
        for policy in [SelectionPolicy::Exhaustive, SelectionPolicy::Greedy] {
            let pair = policy
                .selector()
                .select(&graph, &partition, &gains, &locks)
                .unwrap();
            assert_eq!((pair.a, pair.b), (2, 1));
        }
    }

    #[test]
    fn nothing_to_select_when_a_side_is_exhausted() {
        let (graph, partition) = dense_pairs();
        let gains = GainVector::initialize(&graph, &partition);
        let locks = [true, false, true, false];
        for policy in [SelectionPolicy::Exhaustive, SelectionPolicy::Greedy] {
            assert!(policy
                .selector()
                .select(&graph, &partition, &gains, &locks)
                .is_none());
        }
    }
}
