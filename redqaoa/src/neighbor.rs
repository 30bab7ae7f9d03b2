// Red-QAOA - degree-preserving graph reduction for QAOA
// Copyright (C) The Red-QAOA contributors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//    http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Single node-swap moves between induced subgraphs.

use rand::seq::IndexedRandom;
use rand::Rng;

use crate::error::{ReduceError, Result};
use crate::graph::GraphLike;
use crate::hash_graph::Graph;

/// Returns a copy of `subgraph` with one random vertex swapped for a random
/// vertex of `graph` that is not in it.
///
/// The new vertex is joined to each of its neighbors in `graph` that is
/// still present, so the result is again an induced subgraph of the same
/// size. The subgraph must be a non-empty proper subset of `graph`.
pub fn generate_neighbor<G, R>(
    subgraph: &Graph<G::Node>,
    graph: &G,
    rng: &mut R,
) -> Result<Graph<G::Node>>
where
    G: GraphLike,
    R: Rng + ?Sized,
{
    let size = subgraph.num_vertices();
    let total = graph.num_vertices();
    let invalid = || ReduceError::InvalidSubgraph { size, total };

    let outside: Vec<G::Node> = graph.vertices().filter(|v| !subgraph.contains(v)).collect();
    // a vertex of the subgraph that graph doesn't know about shows up as a
    // size mismatch here
    if size == 0 || outside.is_empty() || size + outside.len() != total {
        return Err(invalid());
    }
    let inside: Vec<G::Node> = subgraph.vertices().collect();

    let to_remove = inside.choose(rng).ok_or_else(invalid)?;
    let to_add = outside.choose(rng).ok_or_else(invalid)?;

    let mut neighbor = subgraph.clone();
    neighbor.remove_vertex(to_remove);
    neighbor.add_vertex(to_add.clone());
    for n in graph.neighbors(to_add) {
        if neighbor.contains(&n) {
            neighbor.add_edge(to_add.clone(), n);
        }
    }
    Ok(neighbor)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::vec_graph;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use rstest::{fixture, rstest};

    /// A 6-cycle with one chord.
    #[fixture]
    fn ring() -> Graph<usize> {
        Graph::from_edges([(0, 1), (1, 2), (2, 3), (3, 4), (4, 5), (5, 0), (0, 3)])
    }

    #[rstest]
    fn preserves_size_and_stays_induced(ring: Graph<usize>) {
        let mut rng = StdRng::seed_from_u64(7);
        let mut sub = Graph::induced(&ring, [0, 1, 2]);
        for _ in 0..200 {
            let next = generate_neighbor(&sub, &ring, &mut rng).unwrap();
            assert_eq!(next.num_vertices(), sub.num_vertices());
            let expected = Graph::induced(&ring, next.vertices());
            assert_eq!(next, expected);
            sub = next;
        }
    }

    #[rstest]
    fn swaps_exactly_one_vertex(ring: Graph<usize>) {
        let mut rng = StdRng::seed_from_u64(11);
        let sub = Graph::induced(&ring, [0, 1, 2, 3]);
        let next = generate_neighbor(&sub, &ring, &mut rng).unwrap();
        let kept = next.vertices().filter(|v| sub.contains(v)).count();
        assert_eq!(kept, 3);
    }

    #[rstest]
    fn does_not_mutate_inputs(ring: Graph<usize>) {
        let mut rng = StdRng::seed_from_u64(3);
        let sub = Graph::induced(&ring, [4, 5]);
        let before = (sub.clone(), ring.clone());
        let _ = generate_neighbor(&sub, &ring, &mut rng).unwrap();
        assert_eq!((sub, ring), before);
    }

    #[rstest]
    #[case(vec![], 0)]
    #[case(vec![0, 1, 2, 3, 4, 5], 6)]
    fn rejects_empty_and_full(ring: Graph<usize>, #[case] nodes: Vec<usize>, #[case] size: usize) {
        let mut rng = StdRng::seed_from_u64(0);
        let sub = Graph::induced(&ring, nodes);
        assert_eq!(
            generate_neighbor(&sub, &ring, &mut rng),
            Err(ReduceError::InvalidSubgraph { size, total: 6 })
        );
    }

    #[rstest]
    fn rejects_foreign_vertices(ring: Graph<usize>) {
        let mut rng = StdRng::seed_from_u64(0);
        let mut sub = Graph::induced(&ring, [0, 1]);
        sub.add_vertex(42);
        assert!(generate_neighbor(&sub, &ring, &mut rng).is_err());
    }

    #[test]
    fn works_on_contiguous_graphs() {
        let mut rng = StdRng::seed_from_u64(5);
        let g = vec_graph::Graph::complete(5);
        let sub = Graph::induced(&g, [0, 1]);
        let next = generate_neighbor(&sub, &g, &mut rng).unwrap();
        assert_eq!(next.num_vertices(), 2);
        assert_eq!(next.num_edges(), 1);
    }
}
