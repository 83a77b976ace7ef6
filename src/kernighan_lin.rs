use crate::{
    run_generation, Graph, InitialPartitioningMethod, PairSelector, Partition, PartitionError,
    PartitionResult, SelectionPolicy,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::{self, Write};

pub struct KernighanLinConfig {
    /// The seed for the random number generator.
    pub rng_seed: u64,
    /// What initial partitioning method to use.
    pub initial_partitioning: InitialPartitioningMethod,
    /// How the next pair of vertices is chosen within a generation.
    pub selection: SelectionPolicy,
    /// If this is set to Some(n), the algorithm stops after n committed generations even if it could still improve.
    pub max_generations: Option<u32>,
    /// Recompute the cutset from scratch after every committed generation and fail if it disagrees with the tracked value.
    pub verify_cutset: bool,
}

impl Default for KernighanLinConfig {
    fn default() -> Self {
        Self {
            rng_seed: 1234,
            initial_partitioning: InitialPartitioningMethod::Random,
            selection: SelectionPolicy::Exhaustive,
            max_generations: None,
            verify_cutset: false,
        }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum DriverState {
    Running,
    Converged,
}

/// The outcome of a finished run.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Bisection {
    pub partition: Partition,
    pub cutset: u64,
    /// Number of generations whose swaps were committed.
    pub generations: u32,
    /// The cutset before the first generation and after every committed one.
    pub history: Vec<u64>,
}

impl Bisection {
    /// Writes the cutset followed by the vertices of set A and of set B, one line each.
    pub fn write_report<W: Write>(&self, w: &mut W) -> io::Result<()> {
        writeln!(w, "{}", self.cutset)?;
        writeln!(w, "{}", join_indices(&self.partition.side_a()))?;
        writeln!(w, "{}", join_indices(&self.partition.side_b()))?;
        Ok(())
    }
}

fn join_indices(indices: &[u32]) -> String {
    indices
        .iter()
        .map(|vx| vx.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Repeats Kernighan-Lin generations on a partition until no generation can
/// lower the cutset any more.
pub struct KernighanLin<'g> {
    graph: &'g Graph,
    selector: &'static dyn PairSelector,
    partition: Partition,
    cutset: u64,
    generation: u32,
    state: DriverState,
    history: Vec<u64>,
    max_generations: Option<u32>,
    verify_cutset: bool,
}

impl<'g> KernighanLin<'g> {
    pub fn new(graph: &'g Graph, config: &KernighanLinConfig) -> PartitionResult<Self> {
        check_vertex_count(graph.vertex_count())?;
        let mut rng = StdRng::seed_from_u64(config.rng_seed);
        let partition = graph.partition_initial(config.initial_partitioning, &mut rng);
        Self::with_partition(graph, partition, config)
    }

    /// Starts from the given partition instead of building one. The initial
    /// partitioning method and seed of `config` are ignored.
    pub fn with_partition(
        graph: &'g Graph,
        partition: Partition,
        config: &KernighanLinConfig,
    ) -> PartitionResult<Self> {
        check_vertex_count(graph.vertex_count())?;
        if partition.len() != graph.vertex_count() {
            return Err(PartitionError::InvalidPartition(format!(
                "{} sides for {} vertices",
                partition.len(),
                graph.vertex_count()
            )));
        }
        if !partition.is_balanced() {
            return Err(PartitionError::InvalidPartition(format!(
                "{} vertices in set B, expected {}",
                partition.side_b_count(),
                partition.len() / 2
            )));
        }

        let cutset = graph.calculate_cutset(&partition);
        log::info!("initial cutset: {cutset}");

        Ok(Self {
            graph,
            selector: config.selection.selector(),
            partition,
            cutset,
            generation: 0,
            state: DriverState::Running,
            history: vec![cutset],
            max_generations: config.max_generations,
            verify_cutset: config.verify_cutset,
        })
    }

    pub fn state(&self) -> DriverState {
        self.state
    }

    pub fn partition(&self) -> &Partition {
        &self.partition
    }

    /// The cutset of the current partition, maintained from the committed gains.
    pub fn cutset(&self) -> u64 {
        self.cutset
    }

    /// Number of committed generations so far.
    pub fn generation(&self) -> u32 {
        self.generation
    }

    pub fn history(&self) -> &[u64] {
        &self.history
    }

    /// Runs one generation and commits its best prefix if that lowers the cutset.
    pub fn step(&mut self) -> PartitionResult<DriverState> {
        if self.state == DriverState::Converged {
            return Ok(self.state);
        }
        if self.max_generations.is_some_and(|max| self.generation >= max) {
            log::info!("stopping at the generation limit of {}", self.generation);
            self.state = DriverState::Converged;
            return Ok(self.state);
        }

        let queue = run_generation(self.graph, &self.partition, self.selector);
        let best_gain = queue.best_gain();
        log::info!("best generation gain: {best_gain}");

        if best_gain <= 0 {
            log::info!(
                "converged after {} generations, final cutset: {}",
                self.generation,
                self.cutset
            );
            self.state = DriverState::Converged;
            return Ok(self.state);
        }

        for pair in queue.committed() {
            self.partition.flip(pair.a);
            self.partition.flip(pair.b);
            self.cutset = self.cutset.saturating_add_signed(-pair.gain);
            log::trace!("iteration cutset: {}", self.cutset);
        }
        self.generation += 1;
        self.history.push(self.cutset);
        log::info!("generation: {}, cutset: {}", self.generation, self.cutset);

        debug_assert_eq!(self.cutset, self.graph.calculate_cutset(&self.partition));
        if self.verify_cutset {
            let actual = self.graph.calculate_cutset(&self.partition);
            if actual != self.cutset {
                return Err(PartitionError::CutsetMismatch {
                    expected: self.cutset,
                    actual,
                });
            }
        }
        Ok(self.state)
    }

    pub fn run(mut self) -> PartitionResult<Bisection> {
        while self.step()? == DriverState::Running {}
        Ok(Bisection {
            partition: self.partition,
            cutset: self.cutset,
            generations: self.generation,
            history: self.history,
        })
    }
}

fn check_vertex_count(n: usize) -> PartitionResult<()> {
    if n == 0 {
        return Err(PartitionError::EmptyGraph);
    }
    if n % 2 != 0 {
        return Err(PartitionError::OddVertexCount(n));
    }
    Ok(())
}

impl Graph {
    /// Splits the graph into two equally sized parts while minimizing the cutset,
    /// using the [Kernighan-Lin](https://doi.org/10.1002/j.1538-7305.1970.tb01770.x) heuristic.
    pub fn partition_kernighan_lin(&self, config: &KernighanLinConfig) -> PartitionResult<Bisection> {
        KernighanLin::new(self, config)?.run()
    }
}
