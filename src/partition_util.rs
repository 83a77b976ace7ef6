use crate::Graph;
use rand::rngs::StdRng;
use std::collections::VecDeque;

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum InitialPartitioningMethod {
    /// Vertices alternate between the sides based on their index (odd indices go to set B).
    Modulo,
    /// Exactly half of the vertices, drawn uniformly without replacement, go to set B.
    Random,
    /// Set A is grown from the lowest unassigned vertex using breadth first search until it holds half of the graph.
    Bfs,
}

/// Side assignment of every vertex. `false` is set A, `true` is set B.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Partition {
    sides: Vec<bool>,
}

impl Partition {
    pub fn from_sides(sides: Vec<bool>) -> Self {
        Self { sides }
    }

    pub fn len(&self) -> usize {
        self.sides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sides.is_empty()
    }

    #[inline]
    pub fn side(&self, vx: u32) -> bool {
        self.sides[vx as usize]
    }

    pub fn flip(&mut self, vx: u32) {
        self.sides[vx as usize] = !self.sides[vx as usize];
    }

    pub fn as_slice(&self) -> &[bool] {
        &self.sides
    }

    pub fn side_b_count(&self) -> usize {
        self.sides.iter().filter(|&&s| s).count()
    }

    /// True if both sides hold exactly half of the vertices.
    pub fn is_balanced(&self) -> bool {
        self.len() % 2 == 0 && self.side_b_count() * 2 == self.len()
    }

    /// Vertices of set A in ascending order.
    pub fn side_a(&self) -> Vec<u32> {
        self.members(false)
    }

    /// Vertices of set B in ascending order.
    pub fn side_b(&self) -> Vec<u32> {
        self.members(true)
    }

    fn members(&self, side: bool) -> Vec<u32> {
        self.sides
            .iter()
            .enumerate()
            .filter(|(_, s)| **s == side)
            .map(|(vx, _)| vx as u32)
            .collect()
    }
}

impl Graph {
    /// Creates a balanced starting partition. The vertex count must be even.
    pub fn partition_initial(&self, method: InitialPartitioningMethod, rng: &mut StdRng) -> Partition {
        let n = self.vertex_count();
        match method {
            InitialPartitioningMethod::Modulo => {
                Partition::from_sides((0..n).map(|i| i % 2 == 1).collect())
            }
            InitialPartitioningMethod::Random => {
                let mut sides = vec![false; n];
                for i in rand::seq::index::sample(rng, n, n / 2) {
                    sides[i] = true;
                }
                Partition::from_sides(sides)
            }
            InitialPartitioningMethod::Bfs => {
                let target_size = n / 2;
                let mut visited = vec![false; n];
                let mut assigned = 0;
                let mut queue = VecDeque::new();

                while assigned < target_size {
                    let Some(start) = visited.iter().position(|&v| !v) else {
                        break;
                    };
                    queue.clear();
                    queue.push_back(start as u32);

                    while let Some(vx) = queue.pop_front() {
                        if visited[vx as usize] {
                            continue;
                        }
                        visited[vx as usize] = true;
                        assigned += 1;
                        if assigned >= target_size {
                            break;
                        }

                        for e in self.neighbours(vx) {
                            if !visited[e.dst as usize] {
                                queue.push_back(e.dst);
                            }
                        }
                    }
                }
                log::trace!("bfs grew set A to {assigned} vertices");

                // Everything the search did not reach goes to set B.
                Partition::from_sides(visited.into_iter().map(|v| !v).collect())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn ring(n: u32) -> Graph {
        let edges: Vec<(u32, u32)> = (0..n).map(|i| (i, (i + 1) % n)).collect();
        Graph::from_edges(n as usize, &edges)
    }

    #[test]
    fn every_method_is_balanced() {
        let graph = ring(10);
        for method in [
            InitialPartitioningMethod::Modulo,
            InitialPartitioningMethod::Random,
            InitialPartitioningMethod::Bfs,
        ] {
            let mut rng = StdRng::seed_from_u64(7);
            let partition = graph.partition_initial(method, &mut rng);
            assert_eq!(partition.len(), 10);
            assert!(partition.is_balanced(), "{method:?} is unbalanced");
        }
    }

    #[test]
    fn random_is_reproducible_for_a_seed() {
        let graph = Graph::new(20);
        let first = graph.partition_initial(
            InitialPartitioningMethod::Random,
            &mut StdRng::seed_from_u64(1234),
        );
        let second = graph.partition_initial(
            InitialPartitioningMethod::Random,
            &mut StdRng::seed_from_u64(1234),
        );
        assert_eq!(first, second);
    }

    #[test]
    fn bfs_keeps_components_together() {
        // Two disjoint triangles plus an isolated pair.
        let graph = Graph::from_edges(
            8,
            &[(0, 1), (1, 2), (2, 0), (3, 4), (4, 5), (5, 3), (6, 7)],
        );
        let partition =
            graph.partition_initial(InitialPartitioningMethod::Bfs, &mut StdRng::seed_from_u64(0));
        assert_eq!(partition.side_a(), vec![0, 1, 2, 3]);
        assert_eq!(partition.side_b(), vec![4, 5, 6, 7]);
    }

    #[test]
    fn flip_moves_a_vertex() {
        let mut partition = Partition::from_sides(vec![false, true]);
        partition.flip(0);
        partition.flip(1);
        assert_eq!(partition.as_slice(), &[true, false]);
        assert!(partition.is_balanced());
    }
}
