use crate::{CandidatePair, GainVector, Graph, PairSelector, Partition};

/// The pairs locked during one generation, in order, together with the best
/// prefix of them.
#[derive(Clone, Debug, Default)]
pub struct CandidateQueue {
    candidates: Vec<CandidatePair>,
    total_gain: i64,
    best_gain: i64,
    best_prefix: Option<usize>,
}

impl CandidateQueue {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            candidates: Vec::with_capacity(capacity),
            ..Default::default()
        }
    }

    pub fn push(&mut self, pair: CandidatePair) {
        self.candidates.push(pair);
        self.total_gain += pair.gain;
        if self.best_prefix.is_none() || self.total_gain > self.best_gain {
            self.best_gain = self.total_gain;
            self.best_prefix = Some(self.candidates.len() - 1);
        }
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    pub fn candidates(&self) -> &[CandidatePair] {
        &self.candidates
    }

    /// The maximum prefix sum of the pair gains, 0 for an empty queue.
    pub fn best_gain(&self) -> i64 {
        self.best_gain
    }

    /// Index of the last pair of the best prefix.
    pub fn best_prefix(&self) -> Option<usize> {
        self.best_prefix
    }

    /// The pairs that have to be swapped to realize `best_gain`.
    pub fn committed(&self) -> &[CandidatePair] {
        match self.best_prefix {
            Some(k) => &self.candidates[..=k],
            None => &[],
        }
    }
}

/// Runs one Kernighan-Lin pass over `partition` without modifying it: locks all
/// vertices in n/2 pairs and records the gain of each pair.
pub fn run_generation(
    graph: &Graph,
    partition: &Partition,
    selector: &dyn PairSelector,
) -> CandidateQueue {
    let n = graph.vertex_count();
    let rounds = n / 2;

    let mut gains = GainVector::initialize(graph, partition);
    let mut locks = vec![false; n];
    let mut queue = CandidateQueue::with_capacity(rounds);

    for round in 0..rounds {
        let Some(pair) = selector.select(graph, partition, &gains, &locks) else {
            log::warn!("no unlocked pair left after {round} of {rounds} rounds");
            break;
        };
        locks[pair.a as usize] = true;
        locks[pair.b as usize] = true;
        queue.push(pair);
        log::trace!(
            "round: {round}, pair: ({}, {}), gain: {}",
            pair.a,
            pair.b,
            pair.gain
        );

        if round + 1 < rounds {
            gains.recalculate(graph, partition, &locks, &pair);
        }
    }
    queue
}
